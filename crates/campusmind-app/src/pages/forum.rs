//! Forum page: the anonymous peer board.

use campusmind_backend::client::BackendClient;
use campusmind_backend::error::BackendError;
use campusmind_backend::{entities, users};
use campusmind_core::collections;
use campusmind_core::models::forum_post::ForumPost;
use campusmind_core::models::user_profile::UserProfile;

/// Everything the forum page needs on load: the viewer's profile (for
/// the composer's alias) and the board, newest first.
pub struct ForumView {
    pub profile: UserProfile,
    pub posts: Vec<ForumPost>,
}

pub async fn load(client: &BackendClient) -> Result<ForumView, BackendError> {
    let profile = users::me(client).await?;
    let posts = entities::list(client, collections::FORUM_POSTS, Some("-created_at")).await?;
    Ok(ForumView { profile, posts })
}

/// Publish a post under the user's alias. Posting requires a set alias
/// and a non-blank title and body; otherwise nothing is sent.
pub async fn publish(
    client: &BackendClient,
    user: &UserProfile,
    title: &str,
    body: &str,
) -> Result<Option<ForumPost>, BackendError> {
    let Some(alias) = user.alias.as_deref() else {
        return Ok(None);
    };
    if title.trim().is_empty() || body.trim().is_empty() {
        return Ok(None);
    }
    let post = ForumPost::new(alias, title.trim(), body.trim());
    let posted = entities::create(client, collections::FORUM_POSTS, &post).await?;
    Ok(Some(posted))
}
