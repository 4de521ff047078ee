use hub_core::{PostAuthor, UserProfile};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    /// Display string of `FounderRole`.
    pub role: Option<String>,
    /// Display string of `UserType`.
    pub user_type: Option<String>,
    pub location: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub skills: Json,
    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub profile_picture: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Model {
    pub fn to_profile(&self) -> Result<UserProfile, serde_json::Error> {
        Ok(UserProfile {
            id: self.id,
            full_name: self.full_name.clone(),
            username: self.username.clone(),
            role: parse_stored(self.role.as_deref()),
            user_type: parse_stored(self.user_type.as_deref()),
            location: self.location.clone(),
            skills: serde_json::from_value(self.skills.clone())?,
            bio: self.bio.clone(),
            created_at: self.created_at.into(),
            profile_picture: self.profile_picture.clone(),
        })
    }

    /// The summary embedded in hackathon posts.
    pub fn to_author(&self) -> PostAuthor {
        PostAuthor {
            id: self.id,
            full_name: self.full_name.clone(),
            username: self.username.clone(),
            profile_picture: self.profile_picture.clone(),
            role: parse_stored(self.role.as_deref()),
        }
    }
}

/// Unknown stored values read back as unset rather than failing the row.
fn parse_stored<T: std::str::FromStr>(raw: Option<&str>) -> Option<T> {
    let raw = raw?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(value = raw, "Ignoring unknown enum value in users row");
            None
        }
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        #[cfg(feature = "no_db_triggers")]
        {
            use sea_orm::ActiveValue::Set;

            if !_insert {
                self.updated_at = Set(chrono::Utc::now().into());
            }
        }

        Ok(self)
    }
}
