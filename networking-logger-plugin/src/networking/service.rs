/// Description of a single request the networking client can perform
use crate::networking::HttpMethod;
use serde::Serialize;
use std::collections::BTreeMap;

/// A request description as the networking client sees it.
///
/// Plugins only ever read from a service; they never drive the request.
///
/// # Example
///
/// ```
/// use networking_logger_plugin::networking::{HttpMethod, NetworkingService};
/// use std::collections::BTreeMap;
///
/// struct Health;
///
/// impl NetworkingService for Health {
///     type Input = ();
///
///     fn url(&self) -> String {
///         "https://api.example.com/health".to_string()
///     }
///
///     fn method(&self) -> HttpMethod {
///         HttpMethod::Get
///     }
/// }
///
/// assert_eq!(Health.headers(), None);
/// assert!(Health.input().is_none());
/// ```
pub trait NetworkingService {
    /// Body type sent with the request.
    type Input: Serialize + ?Sized;

    /// Fully resolved request URL.
    fn url(&self) -> String;

    fn method(&self) -> HttpMethod;

    /// Headers declared by the service, if any.
    fn headers(&self) -> Option<BTreeMap<String, String>> {
        None
    }

    /// Body to encode and send, if any.
    fn input(&self) -> Option<&Self::Input> {
        None
    }
}

impl<S: NetworkingService + ?Sized> NetworkingService for &S {
    type Input = S::Input;

    fn url(&self) -> String {
        (**self).url()
    }

    fn method(&self) -> HttpMethod {
        (**self).method()
    }

    fn headers(&self) -> Option<BTreeMap<String, String>> {
        (**self).headers()
    }

    fn input(&self) -> Option<&Self::Input> {
        (**self).input()
    }
}
