use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::text::{collation_key, contains_folded, needle};
use super::{selected, QueryParamError};
use crate::entities::{FounderRole, UserProfile, UserType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FounderSort {
    #[default]
    Recent,
    NameAz,
    NameZa,
}

impl FromStr for FounderSort {
    type Err = QueryParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "recent" => Ok(FounderSort::Recent),
            "nameaz" => Ok(FounderSort::NameAz),
            "nameza" => Ok(FounderSort::NameZa),
            _ => Err(QueryParamError::InvalidValue {
                param: "sort",
                value: s.to_string(),
            }),
        }
    }
}

/// Search, filter and sort state of the founder directory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FounderQuery {
    pub search: String,
    pub role: Option<FounderRole>,
    pub user_type: Option<UserType>,
    pub sort: FounderSort,
}

impl FounderQuery {
    pub fn apply(&self, users: &[UserProfile]) -> Vec<UserProfile> {
        let needle = needle(&self.search);

        let mut visible: Vec<UserProfile> = users
            .iter()
            .filter(|user| needle.as_deref().map_or(true, |n| matches_text(user, n)))
            .filter(|user| self.role.map_or(true, |role| user.role == Some(role)))
            .filter(|user| self.user_type.map_or(true, |t| user.user_type == Some(t)))
            .cloned()
            .collect();

        match self.sort {
            FounderSort::Recent => visible.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            FounderSort::NameAz => visible.sort_by(|a, b| compare_names(a, b)),
            FounderSort::NameZa => visible.sort_by(|a, b| compare_names(b, a)),
        }

        visible
    }
}

fn matches_text(user: &UserProfile, needle: &str) -> bool {
    contains_folded(&user.full_name, needle)
        || contains_folded(&user.username, needle)
        || user
            .role
            .is_some_and(|role| contains_folded(role.as_str(), needle))
        || user
            .bio
            .as_deref()
            .is_some_and(|bio| contains_folded(bio, needle))
}

fn compare_names(a: &UserProfile, b: &UserProfile) -> std::cmp::Ordering {
    let (a, b) = (a.display_name(), b.display_name());
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FounderParams {
    pub search: Option<String>,
    pub role: Option<String>,
    pub user_type: Option<String>,
    pub sort: Option<String>,
}

impl TryFrom<FounderParams> for FounderQuery {
    type Error = QueryParamError;

    fn try_from(params: FounderParams) -> Result<Self, Self::Error> {
        let role = selected(params.role.as_deref())
            .map(|r| {
                r.parse::<FounderRole>()
                    .map_err(|_| QueryParamError::InvalidValue {
                        param: "role",
                        value: r.to_string(),
                    })
            })
            .transpose()?;
        let user_type = selected(params.user_type.as_deref())
            .map(|t| {
                t.parse::<UserType>()
                    .map_err(|_| QueryParamError::InvalidValue {
                        param: "userType",
                        value: t.to_string(),
                    })
            })
            .transpose()?;

        Ok(FounderQuery {
            search: params.search.unwrap_or_default(),
            role,
            user_type,
            sort: params.sort.as_deref().unwrap_or_default().parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn user(full_name: &str, username: &str, day: u32) -> UserProfile {
        UserProfile {
            id: Uuid::new_v4(),
            full_name: full_name.to_string(),
            username: username.to_string(),
            role: Some(FounderRole::Founder),
            user_type: Some(UserType::Student),
            location: None,
            skills: vec![],
            bio: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap(),
            profile_picture: None,
        }
    }

    fn usernames(users: &[UserProfile]) -> Vec<&str> {
        users.iter().map(|u| u.username.as_str()).collect()
    }

    #[test]
    fn recent_is_the_default_order() {
        let users = vec![user("A", "a", 1), user("B", "b", 3), user("C", "c", 2)];

        let out = FounderQuery::default().apply(&users);

        assert_eq!(usernames(&out), vec!["b", "c", "a"]);
    }

    #[test]
    fn name_sorts_fold_case_and_fall_back_to_username() {
        let users = vec![
            user("zoe", "z", 1),
            user("", "mallory", 2),
            user("Alice", "al", 3),
        ];

        let az = FounderQuery {
            sort: FounderSort::NameAz,
            ..Default::default()
        }
        .apply(&users);
        let za = FounderQuery {
            sort: FounderSort::NameZa,
            ..Default::default()
        }
        .apply(&users);

        assert_eq!(usernames(&az), vec!["al", "mallory", "z"]);
        assert_eq!(usernames(&za), vec!["z", "mallory", "al"]);
    }

    #[test]
    fn search_covers_name_username_role_and_bio() {
        let mut by_bio = user("Bob", "bob", 1);
        by_bio.bio = Some("Building a fintech startup".to_string());
        let mut hustler = user("Carol", "carol", 2);
        hustler.role = Some(FounderRole::Hustler);
        let plain = user("Dan", "dan", 3);

        let fintech = FounderQuery {
            search: "FINTECH".to_string(),
            ..Default::default()
        }
        .apply(&[by_bio.clone(), hustler.clone(), plain.clone()]);
        let hustlers = FounderQuery {
            search: "hustl".to_string(),
            ..Default::default()
        }
        .apply(&[by_bio, hustler, plain]);

        assert_eq!(usernames(&fintech), vec!["bob"]);
        assert_eq!(usernames(&hustlers), vec!["carol"]);
    }

    #[test]
    fn role_and_user_type_filters_are_conjunctive() {
        let mut pro_cofounder = user("P", "p", 1);
        pro_cofounder.role = Some(FounderRole::CoFounder);
        pro_cofounder.user_type = Some(UserType::WorkingProfessional);
        let mut student_cofounder = user("S", "s", 2);
        student_cofounder.role = Some(FounderRole::CoFounder);
        let mut unset = user("U", "u", 3);
        unset.role = None;

        let query = FounderQuery {
            role: Some(FounderRole::CoFounder),
            user_type: Some(UserType::WorkingProfessional),
            ..Default::default()
        };

        assert_eq!(
            usernames(&query.apply(&[pro_cofounder, student_cofounder, unset])),
            vec!["p"]
        );
    }

    #[test]
    fn params_convert_to_query() {
        let params = FounderParams {
            search: Some("ai".to_string()),
            role: Some("Co-Founder".to_string()),
            user_type: Some("all".to_string()),
            sort: Some("nameza".to_string()),
        };

        let query = FounderQuery::try_from(params).unwrap();

        assert_eq!(query.role, Some(FounderRole::CoFounder));
        assert_eq!(query.user_type, None);
        assert_eq!(query.sort, FounderSort::NameZa);
    }
}
