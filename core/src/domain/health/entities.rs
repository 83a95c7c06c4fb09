use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DatabaseHealthStatus {
    pub database: String,
    pub response_time_ms: u64,
}

impl DatabaseHealthStatus {
    pub fn connected(response_time_ms: u64) -> Self {
        Self {
            database: "connected".to_string(),
            response_time_ms,
        }
    }
}
