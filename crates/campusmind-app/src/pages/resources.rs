//! Resources page: the relaxation library.

use campusmind_backend::client::BackendClient;
use campusmind_backend::entities;
use campusmind_backend::error::BackendError;
use campusmind_core::collections;
use campusmind_core::models::resource::{Resource, ResourceCategory};

/// Fetch the whole catalogue; tab filtering happens client-side.
pub async fn load(client: &BackendClient) -> Result<Vec<Resource>, BackendError> {
    entities::list(client, collections::RESOURCES, None).await
}

/// Filter for one library tab; `None` is the "all" tab.
pub fn in_category(
    resources: &[Resource],
    category: Option<ResourceCategory>,
) -> Vec<&Resource> {
    resources
        .iter()
        .filter(|r| category.is_none_or(|c| r.category == c))
        .collect()
}
