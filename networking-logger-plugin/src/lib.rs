#![forbid(unsafe_code)]

pub mod networking;
pub mod plugin;

///
/// Expose everything needed to plug the logger into a networking client
///
/// ```
/// use networking_logger_plugin::prelude::*;
/// ```
pub mod prelude {
    pub use crate::networking::{
        Decoder, Encoder, HttpMethod, JsonDecoder, JsonEncoder, NetworkingPluginEvent,
        NetworkingService, NetworkingStatus,
    };
    pub use crate::plugin::{
        LogField, LogSink, LoggerConfiguration, NetworkingLoggerPlugin, NetworkingPlugin,
        StdoutSink, WriterSink,
    };
}
