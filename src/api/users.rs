//! User Requests

use gloo_net::http::Request;
use storefront_core::{Created, NewUser, User, UserId};

use super::{delete, get_json, send_json, ApiClient, ApiError};

impl ApiClient {
    /// Public user list, used for the login lookup
    pub async fn fetch_users(self) -> Result<Vec<User>, ApiError> {
        get_json(&self.endpoints.users()).await
    }

    pub async fn fetch_user(self, id: UserId) -> Result<User, ApiError> {
        get_json(&self.endpoints.user(id)).await
    }

    pub async fn create_user(self, user: &NewUser) -> Result<UserId, ApiError> {
        let url = self.endpoints.users();
        let created: Created<UserId> = send_json(Request::post(&url), &url, user).await?;
        Ok(created.id)
    }

    pub async fn update_user(self, id: UserId, user: &NewUser) -> Result<(), ApiError> {
        let url = self.endpoints.user(id);
        let _: serde_json::Value = send_json(Request::put(&url), &url, user).await?;
        Ok(())
    }

    pub async fn delete_user(self, id: UserId) -> Result<(), ApiError> {
        delete(&self.endpoints.user(id)).await
    }
}
