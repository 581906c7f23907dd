//! Generic CRUD over platform collections.
//!
//! Every CampusMind entity lives in a named platform collection (see
//! `campusmind_core::collections`); these functions are the typed layer
//! over the platform's generic entity endpoints.

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;

use crate::client::BackendClient;
use crate::error::BackendError;

/// Create a record in a collection. Returns the persisted form, with the
/// platform-assigned id and creation timestamp filled in.
pub async fn create<T>(
    client: &BackendClient,
    collection: &str,
    record: &T,
) -> Result<T, BackendError>
where
    T: Serialize + DeserializeOwned,
{
    debug!(collection, "creating record");
    let path = format!("/api/entities/{collection}");
    let req = client.request(Method::POST, &path).json(record);
    client.send_json(req, &path).await
}

/// List every record in a collection, optionally ordered by a platform
/// sort token (field name, `-` prefix for descending).
pub async fn list<T>(
    client: &BackendClient,
    collection: &str,
    order_by: Option<&str>,
) -> Result<Vec<T>, BackendError>
where
    T: DeserializeOwned,
{
    let path = format!("/api/entities/{collection}");
    let mut req = client.request(Method::GET, &path);
    if let Some(order) = order_by {
        req = req.query(&[("order_by", order)]);
    }
    client.send_json(req, &path).await
}

/// Filter a collection by field equality, optionally ordered by a
/// platform sort token.
pub async fn query<T>(
    client: &BackendClient,
    collection: &str,
    criteria: serde_json::Value,
    order_by: Option<&str>,
) -> Result<Vec<T>, BackendError>
where
    T: DeserializeOwned,
{
    debug!(collection, "querying records");
    let path = format!("/api/entities/{collection}/query");
    let body = json!({
        "where": criteria,
        "order_by": order_by,
    });
    let req = client.request(Method::POST, &path).json(&body);
    client.send_json(req, &path).await
}
