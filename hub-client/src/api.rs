use async_trait::async_trait;
use hub_core::jobs::{JobListResponse, JobQuery};
use hub_core::query::{FounderParams, HackathonPostParams};
use hub_core::requests::{
    HackathonPostInput, JobInput, LoginInput, LoginOutput, MentorApplicationInput, ProfileInput,
    PromotionInput, RegisterInput,
};
use hub_core::{HackathonPost, Job, MentorApplication, PromotionPost, Reaction, UserProfile};
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::error::ClientError;

/// Every backend endpoint the client consumes. Calls that need a signed-in
/// user take the bearer token explicitly.
#[async_trait]
pub trait BackendApi: Send + Sync {
    async fn register(&self, input: &RegisterInput) -> Result<UserProfile, ClientError>;
    async fn login(&self, input: &LoginInput) -> Result<LoginOutput, ClientError>;
    async fn me(&self, token: &str) -> Result<UserProfile, ClientError>;
    async fn update_profile(
        &self,
        token: &str,
        input: &ProfileInput,
    ) -> Result<UserProfile, ClientError>;
    async fn list_users(&self, params: &FounderParams) -> Result<Vec<UserProfile>, ClientError>;

    async fn list_hackathon_posts(
        &self,
        params: &HackathonPostParams,
    ) -> Result<Vec<HackathonPost>, ClientError>;
    async fn create_hackathon_post(
        &self,
        token: &str,
        input: &HackathonPostInput,
    ) -> Result<HackathonPost, ClientError>;
    async fn update_hackathon_post(
        &self,
        token: &str,
        id: Uuid,
        input: &HackathonPostInput,
    ) -> Result<HackathonPost, ClientError>;
    async fn delete_hackathon_post(&self, token: &str, id: Uuid) -> Result<(), ClientError>;

    async fn list_promotions(&self) -> Result<Vec<PromotionPost>, ClientError>;
    async fn my_promotions(&self, token: &str) -> Result<Vec<PromotionPost>, ClientError>;
    async fn create_promotion(
        &self,
        token: &str,
        input: &PromotionInput,
    ) -> Result<PromotionPost, ClientError>;
    async fn update_promotion(
        &self,
        token: &str,
        id: Uuid,
        input: &PromotionInput,
    ) -> Result<PromotionPost, ClientError>;
    async fn delete_promotion(&self, token: &str, id: Uuid) -> Result<(), ClientError>;
    async fn react(
        &self,
        token: &str,
        id: Uuid,
        reaction: Reaction,
    ) -> Result<PromotionPost, ClientError>;

    async fn list_jobs(&self, query: &JobQuery) -> Result<JobListResponse, ClientError>;
    async fn create_job(&self, token: &str, input: &JobInput) -> Result<Job, ClientError>;
    async fn apply_to_job(&self, token: &str, id: Uuid) -> Result<Job, ClientError>;

    async fn apply_as_mentor(
        &self,
        token: &str,
        input: &MentorApplicationInput,
    ) -> Result<MentorApplication, ClientError>;
    async fn list_mentors(&self) -> Result<Vec<MentorApplication>, ClientError>;
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    #[allow(dead_code)]
    success: bool,
    data: Option<T>,
}

/// Extracts the user-facing message from an error body. Accepts
/// `{error:{message}}`, `{error:"..."}` and `{message:"..."}`.
pub(crate) fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .pointer("/error/message")
        .and_then(Value::as_str)
        .or_else(|| value.get("error").and_then(Value::as_str))
        .or_else(|| value.get("message").and_then(Value::as_str))
        .map(str::to_string)
}

/// Appends every set field of `params` as a query pair.
pub(crate) fn append_query<T: Serialize>(url: &mut Url, params: &T) -> Result<(), ClientError> {
    let value = serde_json::to_value(params).map_err(|e| ClientError::Decode(e.to_string()))?;
    let Value::Object(fields) = value else {
        return Ok(());
    };

    let mut pairs = url.query_pairs_mut();
    for (key, value) in fields {
        match value {
            Value::String(s) if !s.trim().is_empty() => {
                pairs.append_pair(&key, &s);
            }
            Value::Number(n) => {
                pairs.append_pair(&key, &n.to_string());
            }
            _ => {}
        }
    }
    drop(pairs);

    if url.query() == Some("") {
        url.set_query(None);
    }
    Ok(())
}

pub struct HttpBackend {
    client: Client,
    base: Url,
}

impl HttpBackend {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: &ClientConfig) -> Result<Self, ClientError> {
        let base = Url::parse(&format!("{}/backend/", config.api_url))
            .map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        Ok(Self { client, base })
    }

    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base
            .join(path)
            .map_err(|e| ClientError::InvalidUrl(format!("{path}: {e}")))
    }

    async fn execute(&self, request: RequestBuilder) -> Result<String, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(status = status.as_u16(), "backend responded");

        if status.is_success() {
            return Ok(body);
        }

        let message = server_message(&body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        });
        warn!(status = status.as_u16(), %message, "backend request failed");
        Err(ClientError::Server {
            status: status.as_u16(),
            message,
        })
    }

    async fn data<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let body = self.execute(request).await?;
        let envelope: Envelope<T> =
            serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))?;
        envelope
            .data
            .ok_or_else(|| ClientError::Decode("response carries no data".to_string()))
    }

    async fn unit(&self, request: RequestBuilder) -> Result<(), ClientError> {
        self.execute(request).await.map(|_| ())
    }
}

#[async_trait]
impl BackendApi for HttpBackend {
    async fn register(&self, input: &RegisterInput) -> Result<UserProfile, ClientError> {
        let url = self.endpoint("auth/register")?;
        self.data(self.client.post(url).json(input)).await
    }

    async fn login(&self, input: &LoginInput) -> Result<LoginOutput, ClientError> {
        let url = self.endpoint("auth/login")?;
        self.data(self.client.post(url).json(input)).await
    }

    async fn me(&self, token: &str) -> Result<UserProfile, ClientError> {
        let url = self.endpoint("auth/me")?;
        self.data(self.client.get(url).bearer_auth(token)).await
    }

    async fn update_profile(
        &self,
        token: &str,
        input: &ProfileInput,
    ) -> Result<UserProfile, ClientError> {
        let url = self.endpoint("auth/profile")?;
        self.data(self.client.put(url).bearer_auth(token).json(input))
            .await
    }

    async fn list_users(&self, params: &FounderParams) -> Result<Vec<UserProfile>, ClientError> {
        let mut url = self.endpoint("auth/users")?;
        append_query(&mut url, params)?;
        self.data(self.client.get(url)).await
    }

    async fn list_hackathon_posts(
        &self,
        params: &HackathonPostParams,
    ) -> Result<Vec<HackathonPost>, ClientError> {
        let mut url = self.endpoint("hackathon-posts")?;
        append_query(&mut url, params)?;
        self.data(self.client.get(url)).await
    }

    async fn create_hackathon_post(
        &self,
        token: &str,
        input: &HackathonPostInput,
    ) -> Result<HackathonPost, ClientError> {
        let url = self.endpoint("hackathon-posts")?;
        self.data(self.client.post(url).bearer_auth(token).json(input))
            .await
    }

    async fn update_hackathon_post(
        &self,
        token: &str,
        id: Uuid,
        input: &HackathonPostInput,
    ) -> Result<HackathonPost, ClientError> {
        let url = self.endpoint(&format!("hackathon-posts/{id}"))?;
        self.data(self.client.put(url).bearer_auth(token).json(input))
            .await
    }

    async fn delete_hackathon_post(&self, token: &str, id: Uuid) -> Result<(), ClientError> {
        let url = self.endpoint(&format!("hackathon-posts/{id}"))?;
        self.unit(self.client.delete(url).bearer_auth(token)).await
    }

    async fn list_promotions(&self) -> Result<Vec<PromotionPost>, ClientError> {
        let url = self.endpoint("promote/getAllPromotions")?;
        self.data(self.client.get(url)).await
    }

    async fn my_promotions(&self, token: &str) -> Result<Vec<PromotionPost>, ClientError> {
        let url = self.endpoint("promote/mine")?;
        self.data(self.client.get(url).bearer_auth(token)).await
    }

    async fn create_promotion(
        &self,
        token: &str,
        input: &PromotionInput,
    ) -> Result<PromotionPost, ClientError> {
        let url = self.endpoint("promote/promote")?;
        self.data(self.client.post(url).bearer_auth(token).json(input))
            .await
    }

    async fn update_promotion(
        &self,
        token: &str,
        id: Uuid,
        input: &PromotionInput,
    ) -> Result<PromotionPost, ClientError> {
        let url = self.endpoint(&format!("promote/{id}"))?;
        self.data(self.client.put(url).bearer_auth(token).json(input))
            .await
    }

    async fn delete_promotion(&self, token: &str, id: Uuid) -> Result<(), ClientError> {
        let url = self.endpoint(&format!("promote/{id}"))?;
        self.unit(self.client.delete(url).bearer_auth(token)).await
    }

    async fn react(
        &self,
        token: &str,
        id: Uuid,
        reaction: Reaction,
    ) -> Result<PromotionPost, ClientError> {
        let url = self.endpoint(&format!("promote/{id}/{}", reaction.as_str()))?;
        self.data(self.client.post(url).bearer_auth(token)).await
    }

    async fn list_jobs(&self, query: &JobQuery) -> Result<JobListResponse, ClientError> {
        let mut url = self.endpoint("jobs")?;
        url.query_pairs_mut().extend_pairs(query.to_query_pairs());
        let body = self.execute(self.client.get(url)).await?;
        serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn create_job(&self, token: &str, input: &JobInput) -> Result<Job, ClientError> {
        let url = self.endpoint("jobs")?;
        self.data(self.client.post(url).bearer_auth(token).json(input))
            .await
    }

    async fn apply_to_job(&self, token: &str, id: Uuid) -> Result<Job, ClientError> {
        let url = self.endpoint(&format!("jobs/{id}/apply"))?;
        self.data(self.client.post(url).bearer_auth(token)).await
    }

    async fn apply_as_mentor(
        &self,
        token: &str,
        input: &MentorApplicationInput,
    ) -> Result<MentorApplication, ClientError> {
        let url = self.endpoint("mentor/apply")?;
        self.data(self.client.post(url).bearer_auth(token).json(input))
            .await
    }

    async fn list_mentors(&self) -> Result<Vec<MentorApplication>, ClientError> {
        let url = self.endpoint("mentor")?;
        self.data(self.client.get(url)).await
    }
}
