//! Network messages - communication between App and Network layers

use crate::error::FetchError;
use crate::models::ApiResponse;

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Fetch the latest inventory snapshot
    FetchLatest { id: u64 },
    /// Shutdown the network actor, aborting anything in flight
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    Loaded {
        id: u64,
        data: ApiResponse,
        time_ms: u64,
    },
    Failed {
        id: u64,
        error: FetchError,
        time_ms: u64,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Loaded { id, .. } => *id,
            NetworkResponse::Failed { id, .. } => *id,
        }
    }
}
