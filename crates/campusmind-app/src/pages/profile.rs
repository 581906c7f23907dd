//! Profile page: alias, bot name, hobbies, and privacy opt-ins.

use campusmind_backend::client::BackendClient;
use campusmind_backend::error::BackendError;
use campusmind_backend::users;
use campusmind_core::models::user_profile::{ProfileUpdate, UserProfile};

pub async fn load(client: &BackendClient) -> Result<UserProfile, BackendError> {
    users::me(client).await
}

/// Apply the profile form. Unset fields are left untouched.
pub async fn save(
    client: &BackendClient,
    update: &ProfileUpdate,
) -> Result<UserProfile, BackendError> {
    users::update_me(client, update).await
}

/// Split the hobbies form field on commas, trimming and dropping blanks.
pub fn parse_hobbies(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .map(str::to_string)
        .collect()
}
