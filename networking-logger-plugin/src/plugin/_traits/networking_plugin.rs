use crate::networking::{Decoder, Encoder, NetworkingPluginEvent, NetworkingService};

/// Hook the networking client calls for every request lifecycle event.
///
/// Implementations must not fail the request: `body` returns nothing and is
/// expected to complete before control goes back to the client.
pub trait NetworkingPlugin: Send + Sync {
    fn body<S, E, D>(&self, service: &S, event: &NetworkingPluginEvent, encoder: &E, decoder: &D)
    where
        S: NetworkingService + ?Sized,
        E: Encoder,
        D: Decoder;
}
