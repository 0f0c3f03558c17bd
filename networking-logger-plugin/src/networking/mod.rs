//! Contract of the networking client the logger plugs into.
//!
//! The client owns request execution, retries and body coding. It describes
//! each request through a [`NetworkingService`] and reports every lifecycle
//! step as a [`NetworkingPluginEvent`] to its registered
//! [`NetworkingPlugin`](crate::plugin::NetworkingPlugin)s.

mod coding;
mod event;
mod http_method;
mod networking_status;
mod service;

pub use coding::{CodingError, Decoder, Encoder, JsonDecoder, JsonEncoder};
pub use event::NetworkingPluginEvent;
pub use http_method::HttpMethod;
pub use networking_status::NetworkingStatus;
pub use service::NetworkingService;
