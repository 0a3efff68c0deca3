//! Trait abstraction for the API client to enable mocking in tests

use super::http::{ApiClient, ClientError};
use crate::contract::{CurrentUser, HealthResponse, ProfileSaved, ProfileSubmission};
use crate::form::Choice;
use async_trait::async_trait;

/// Operations the UI performs against the server
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApiClientTrait: Send + Sync {
    /// Probe the server
    async fn health(&self) -> Result<HealthResponse, ClientError>;

    /// Fetch the sample user record
    async fn current_user(&self) -> Result<CurrentUser, ClientError>;

    /// Establish a session
    async fn login(&self, username: &str, password: &str) -> Result<CurrentUser, ClientError>;

    /// Clear the session
    async fn logout(&self) -> Result<(), ClientError>;

    /// Search options for the combobox
    async fn search_options(&self, query: &str) -> Result<Vec<Choice>, ClientError>;

    /// Submit a profile
    async fn submit_profile(
        &self,
        submission: &ProfileSubmission,
    ) -> Result<ProfileSaved, ClientError>;
}

#[async_trait]
impl ApiClientTrait for ApiClient {
    async fn health(&self) -> Result<HealthResponse, ClientError> {
        ApiClient::health(self).await
    }

    async fn current_user(&self) -> Result<CurrentUser, ClientError> {
        ApiClient::current_user(self).await
    }

    async fn login(&self, username: &str, password: &str) -> Result<CurrentUser, ClientError> {
        ApiClient::login(self, username, password).await
    }

    async fn logout(&self) -> Result<(), ClientError> {
        ApiClient::logout(self).await
    }

    async fn search_options(&self, query: &str) -> Result<Vec<Choice>, ClientError> {
        ApiClient::search_options(self, query).await
    }

    async fn submit_profile(
        &self,
        submission: &ProfileSubmission,
    ) -> Result<ProfileSaved, ClientError> {
        ApiClient::submit_profile(self, submission).await
    }
}
