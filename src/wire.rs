//! Request/response shapes for embedding the engine behind an HTTP
//! router. The router itself lives in the host application; this
//! module fixes the JSON contract and the status-code mapping so
//! every embedding agrees on them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::engine::{EngineError, ListFilter};

/// HTTP status for an engine failure.
pub fn status_code(err: &EngineError) -> u16 {
    match err {
        EngineError::Validation(_) => 400,
        EngineError::NotFound(_) => 404,
        EngineError::Conflict { .. } => 409,
        EngineError::Storage(_) => 500,
    }
}

/// Error envelope: `{"error": "..."}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl From<&EngineError> for ErrorBody {
    fn from(err: &EngineError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

/// Body of a successful delete: `{"success": true}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
}

impl DeleteResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Query-string parameters of the booking list endpoint.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListQuery {
    pub date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl ListQuery {
    /// A complete range wins over a single date; anything else means all.
    pub fn filter(&self) -> ListFilter {
        match (self.start_date, self.end_date, self.date) {
            (Some(start), Some(end), _) => ListFilter::Between(start, end),
            (_, _, Some(day)) => ListFilter::On(day),
            _ => ListFilter::All,
        }
    }
}
