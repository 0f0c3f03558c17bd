/// Lifecycle events the networking client reports to its plugins
use crate::networking::NetworkingStatus;

/// One step of a request attempt.
///
/// The client produces exactly one event per lifecycle step and hands it to
/// every registered plugin by reference. The request itself is passed
/// alongside the event as a [`NetworkingService`](crate::networking::NetworkingService).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NetworkingPluginEvent {
    /// The request was built and is about to be sent.
    DataRequested,
    /// The request could not be built from the service description.
    UnableToParseRequest,
    /// The server answered with a failure status.
    ResponseError {
        data: Vec<u8>,
        status: NetworkingStatus,
    },
    /// The server answered with a success status.
    Success {
        data: Vec<u8>,
        status: NetworkingStatus,
    },
}

impl NetworkingPluginEvent {
    pub fn response_error(data: impl Into<Vec<u8>>, status: impl Into<NetworkingStatus>) -> Self {
        NetworkingPluginEvent::ResponseError {
            data: data.into(),
            status: status.into(),
        }
    }

    pub fn success(data: impl Into<Vec<u8>>, status: impl Into<NetworkingStatus>) -> Self {
        NetworkingPluginEvent::Success {
            data: data.into(),
            status: status.into(),
        }
    }

    /// Status code of the response, if the event carries one.
    pub fn status(&self) -> Option<NetworkingStatus> {
        match self {
            NetworkingPluginEvent::DataRequested | NetworkingPluginEvent::UnableToParseRequest => {
                None
            }
            NetworkingPluginEvent::ResponseError { status, .. }
            | NetworkingPluginEvent::Success { status, .. } => Some(*status),
        }
    }
}
