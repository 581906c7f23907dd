//! Current-user operations.
//!
//! Authentication itself is handled by the hosting platform; this client
//! only ever acts as the signed-in user behind its API key.

use reqwest::Method;

use campusmind_core::models::user_profile::{ProfileUpdate, UserProfile};

use crate::client::BackendClient;
use crate::error::BackendError;

const ME_PATH: &str = "/api/users/me";

/// Fetch the signed-in user's profile.
pub async fn me(client: &BackendClient) -> Result<UserProfile, BackendError> {
    let req = client.request(Method::GET, ME_PATH);
    client.send_json(req, ME_PATH).await
}

/// Apply a partial update to the signed-in user's profile. Returns the
/// profile as the platform now sees it.
pub async fn update_me(
    client: &BackendClient,
    update: &ProfileUpdate,
) -> Result<UserProfile, BackendError> {
    let req = client.request(Method::PATCH, ME_PATH).json(update);
    client.send_json(req, ME_PATH).await
}
