//! Request lifecycle logging for the networking client.
//!
//! [`NetworkingLoggerPlugin`] prints one line per
//! [`NetworkingPluginEvent`](crate::networking::NetworkingPluginEvent). The line
//! is made of the configured [`LogField`]s, rendered for the event at hand and
//! joined with `" - "`. Fields that do not apply to an event are left out.
//!
//! # Example
//!
//! ```
//! use networking_logger_plugin::networking::{
//!     HttpMethod, JsonDecoder, JsonEncoder, NetworkingPluginEvent, NetworkingService,
//!     NetworkingStatus,
//! };
//! use networking_logger_plugin::plugin::{
//!     LogField, LoggerConfiguration, NetworkingLoggerPlugin, NetworkingPlugin,
//! };
//!
//! struct Profile;
//!
//! impl NetworkingService for Profile {
//!     type Input = ();
//!
//!     fn url(&self) -> String {
//!         "https://api.example.com/me".to_string()
//!     }
//!
//!     fn method(&self) -> HttpMethod {
//!         HttpMethod::Get
//!     }
//! }
//!
//! let plugin = NetworkingLoggerPlugin::from_configuration(
//!     LoggerConfiguration::new([LogField::StatusEmoji, LogField::HttpStatus, LogField::Url])
//!         .with_logging_enabled(true),
//! );
//!
//! let event = NetworkingPluginEvent::ResponseError {
//!     data: Vec::new(),
//!     status: NetworkingStatus::new(401),
//! };
//! assert_eq!(plugin.format_line(&Profile, &event, &JsonEncoder::new()), "🔴 - 401");
//!
//! // Prints "🟢 - https://api.example.com/me"
//! plugin.body(
//!     &Profile,
//!     &NetworkingPluginEvent::DataRequested,
//!     &JsonEncoder::new(),
//!     &JsonDecoder::new(),
//! );
//! ```
//!
//! # Line layout
//!
//! | Field | Data requested | Unable to parse | Response error | Success |
//! |---|---|---|---|---|
//! | `timestamp` | now | now | now | now |
//! | `icon` | 🌎 | 🌎 | 🌎 | 🌎 |
//! | `library_name` | Networking | Networking | Networking | Networking |
//! | `status_emoji` | 🟢 | 🔴 | 🔴 | 🟢 |
//! | `http_status` | - | empty | code | code |
//! | `http_method` | method | method | method | method |
//! | `url` | url | url | - | - |
//! | `headers` | headers | headers | - | - |
//! | `body_data` | request body, not for GET | - | response body | response body |

pub(crate) mod log_field;
pub(crate) mod log_sink;
pub(crate) mod log_value;
pub(crate) mod logger_configuration;
pub(crate) mod logger_plugin;

pub use log_field::LogField;
pub use log_sink::{LogSink, StdoutSink, WriterSink};
pub use logger_configuration::{ConfigurationError, LoggerConfiguration, ENABLED_ENV, FIELDS_ENV};
pub use logger_plugin::{NetworkingLoggerPlugin, SEPARATOR};
