mod _traits;
mod logger;

pub use _traits::networking_plugin::NetworkingPlugin;

pub use logger::{
    ConfigurationError, LogField, LogSink, LoggerConfiguration, NetworkingLoggerPlugin,
    StdoutSink, WriterSink, ENABLED_ENV, FIELDS_ENV, SEPARATOR,
};
