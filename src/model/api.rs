use serde::{Deserialize, Serialize};

/// Error body returned for every failed request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDto {
    pub detail: String,
}
