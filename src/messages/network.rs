//! Network messages - communication between App and Network layers

use crate::models::EndpointDescriptor;

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Fetch the OpenAPI document and flatten it into descriptors
    FetchDocument { id: u64, url: String },
    /// Invoke one endpoint with an already-resolved path
    Invoke {
        id: u64,
        method: String,
        path: String,
        base_url: String,
        api_key: String,
    },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// Document fetched and parsed
    DocumentLoaded {
        id: u64,
        endpoints: Vec<EndpointDescriptor>,
    },
    /// Document could not be obtained or parsed (one coarse message)
    DocumentFailed { id: u64, message: String },
    /// A response was received - any status code, 4xx/5xx included
    Completed {
        id: u64,
        status: u16,
        body: String,
        time_ms: u64,
    },
    /// No usable response: transport failure, or the body was unreadable.
    /// `status` is present only when a response arrived before the failure.
    Failed {
        id: u64,
        status: Option<u16>,
        body: String,
        time_ms: u64,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::DocumentLoaded { id, .. } => *id,
            NetworkResponse::DocumentFailed { id, .. } => *id,
            NetworkResponse::Completed { id, .. } => *id,
            NetworkResponse::Failed { id, .. } => *id,
        }
    }
}
