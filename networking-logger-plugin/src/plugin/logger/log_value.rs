/// Per-event render policy of every log field
use crate::networking::{Encoder, HttpMethod, NetworkingPluginEvent, NetworkingService};
use crate::plugin::logger::log_field::LogField;
use chrono::Utc;
use std::collections::BTreeMap;

pub(crate) const LIBRARY_NAME: &str = "Networking";
pub(crate) const SUCCESS_EMOJI: &str = "🟢";
pub(crate) const FAILURE_EMOJI: &str = "🔴";
pub(crate) const ICON: &str = "🌎";
pub(crate) const EMPTY_JSON: &str = "{}";
pub(crate) const EMPTY_HEADERS: &str = "[:]";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

impl LogField {
    /// Renders this field for `event`.
    ///
    /// Returns `None` when the field has nothing to say about the event and
    /// must be left out of the line. `Some("")` is a present but empty value.
    pub fn log_value<S, E>(
        &self,
        service: &S,
        event: &NetworkingPluginEvent,
        encoder: &E,
    ) -> Option<String>
    where
        S: NetworkingService + ?Sized,
        E: Encoder,
    {
        match event {
            NetworkingPluginEvent::DataRequested => {
                self.data_requested_log_value(service, encoder)
            }
            NetworkingPluginEvent::UnableToParseRequest => {
                self.unable_to_parse_request_log_value(service)
            }
            NetworkingPluginEvent::ResponseError { data, status } => {
                self.response_error_log_value(service, data, &status.to_string())
            }
            NetworkingPluginEvent::Success { data, status } => {
                self.success_log_value(service, data, &status.to_string())
            }
        }
    }

    fn data_requested_log_value<S, E>(&self, service: &S, encoder: &E) -> Option<String>
    where
        S: NetworkingService + ?Sized,
        E: Encoder,
    {
        match self {
            LogField::Timestamp => Some(timestamp_log()),
            LogField::Icon => Some(ICON.to_string()),
            LogField::LibraryName => Some(LIBRARY_NAME.to_string()),
            LogField::StatusEmoji => Some(SUCCESS_EMOJI.to_string()),
            // no response yet
            LogField::HttpStatus => None,
            LogField::HttpMethod => Some(service.method().to_string()),
            LogField::Url => Some(service.url()),
            LogField::Headers => Some(headers_log(service.headers())),
            LogField::BodyData => {
                if service.method() == HttpMethod::Get {
                    return None;
                }
                Some(request_body_log(service, encoder))
            }
        }
    }

    fn unable_to_parse_request_log_value<S>(&self, service: &S) -> Option<String>
    where
        S: NetworkingService + ?Sized,
    {
        match self {
            LogField::Timestamp => Some(timestamp_log()),
            LogField::Icon => Some(ICON.to_string()),
            LogField::LibraryName => Some(LIBRARY_NAME.to_string()),
            LogField::StatusEmoji => Some(FAILURE_EMOJI.to_string()),
            // keeps the status column in place on failed requests
            LogField::HttpStatus => Some(String::new()),
            LogField::HttpMethod => Some(service.method().to_string()),
            LogField::Url => Some(service.url()),
            LogField::Headers => Some(headers_log(service.headers())),
            LogField::BodyData => None,
        }
    }

    fn response_error_log_value<S>(&self, service: &S, data: &[u8], status: &str) -> Option<String>
    where
        S: NetworkingService + ?Sized,
    {
        match self {
            LogField::Timestamp => Some(timestamp_log()),
            LogField::Icon => Some(ICON.to_string()),
            LogField::LibraryName => Some(LIBRARY_NAME.to_string()),
            LogField::StatusEmoji => Some(FAILURE_EMOJI.to_string()),
            LogField::HttpStatus => Some(status.to_string()),
            LogField::HttpMethod => Some(service.method().to_string()),
            LogField::Url => None,
            LogField::Headers => None,
            LogField::BodyData => Some(data_log(Some(data))),
        }
    }

    fn success_log_value<S>(&self, service: &S, data: &[u8], status: &str) -> Option<String>
    where
        S: NetworkingService + ?Sized,
    {
        match self {
            LogField::Timestamp => Some(timestamp_log()),
            LogField::Icon => Some(ICON.to_string()),
            LogField::LibraryName => Some(LIBRARY_NAME.to_string()),
            LogField::StatusEmoji => Some(SUCCESS_EMOJI.to_string()),
            LogField::HttpStatus => Some(status.to_string()),
            LogField::HttpMethod => Some(service.method().to_string()),
            LogField::Url => None,
            LogField::Headers => None,
            LogField::BodyData => Some(data_log(Some(data))),
        }
    }
}

fn timestamp_log() -> String {
    Utc::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Renders headers like `["Accept": "text/plain"]`, sorted by name.
fn headers_log(headers: Option<BTreeMap<String, String>>) -> String {
    let Some(headers) = headers.filter(|h| !h.is_empty()) else {
        return EMPTY_HEADERS.to_string();
    };

    let entries: Vec<String> = headers
        .iter()
        .map(|(name, value)| format!("{name:?}: {value:?}"))
        .collect();
    format!("[{}]", entries.join(", "))
}

fn request_body_log<S, E>(service: &S, encoder: &E) -> String
where
    S: NetworkingService + ?Sized,
    E: Encoder,
{
    let encoded = service.input().and_then(|input| match encoder.encode(input) {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            log::debug!("Request body for {} not logged: {e}", service.url());
            None
        }
    });
    data_log(encoded.as_deref())
}

fn data_log(data: Option<&[u8]>) -> String {
    match data.map(std::str::from_utf8) {
        Some(Ok(text)) if !text.is_empty() => text.to_string(),
        _ => EMPTY_JSON.to_string(),
    }
}
