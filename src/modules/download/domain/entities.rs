use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted CV-download request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadRequest {
    pub id: Uuid,
    pub email: String,
    pub purpose: String,
    pub timestamp: DateTime<Utc>,
}
