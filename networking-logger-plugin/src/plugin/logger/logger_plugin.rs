/// Plugin that logs information about service requests being made
use crate::networking::{Decoder, Encoder, NetworkingPluginEvent, NetworkingService};
use crate::plugin::logger::log_field::LogField;
use crate::plugin::logger::log_sink::{LogSink, StdoutSink};
use crate::plugin::logger::logger_configuration::LoggerConfiguration;
use crate::plugin::NetworkingPlugin;

/// Separator placed between rendered fields.
pub const SEPARATOR: &str = " - ";

/// Prints one line per request lifecycle event.
///
/// The fields on the line and their order come from the
/// [`LoggerConfiguration`] given at construction. Nothing is rendered unless
/// logging is enabled, which by default is the case in debug builds only.
pub struct NetworkingLoggerPlugin {
    configuration: LoggerConfiguration,
    sink: Box<dyn LogSink>,
}

impl Default for NetworkingLoggerPlugin {
    fn default() -> Self {
        Self::from_configuration(LoggerConfiguration::default())
    }
}

impl NetworkingLoggerPlugin {
    /// Logs `fields` in the given order. Order and duplicates matter.
    pub fn new(fields: impl Into<Vec<LogField>>) -> Self {
        Self::from_configuration(LoggerConfiguration::new(fields))
    }

    pub fn from_configuration(configuration: LoggerConfiguration) -> Self {
        Self {
            configuration,
            sink: Box::new(StdoutSink),
        }
    }

    /// Replaces the standard output sink.
    pub fn with_sink(mut self, sink: impl LogSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    pub fn fields(&self) -> &[LogField] {
        self.configuration.fields()
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.configuration.is_logging_enabled()
    }

    /// Builds the line for `event` without writing it anywhere.
    pub fn format_line<S, E>(
        &self,
        service: &S,
        event: &NetworkingPluginEvent,
        encoder: &E,
    ) -> String
    where
        S: NetworkingService + ?Sized,
        E: Encoder,
    {
        self.configuration
            .fields()
            .iter()
            .filter_map(|field| field.log_value(service, event, encoder))
            .collect::<Vec<_>>()
            .join(SEPARATOR)
    }
}

impl NetworkingPlugin for NetworkingLoggerPlugin {
    fn body<S, E, D>(&self, service: &S, event: &NetworkingPluginEvent, encoder: &E, _decoder: &D)
    where
        S: NetworkingService + ?Sized,
        E: Encoder,
        D: Decoder,
    {
        if !self.configuration.is_logging_enabled() {
            return;
        }

        let line = self.format_line(service, event, encoder);
        log::trace!("{} {}: {line}", service.method(), service.url());

        if let Err(e) = self.sink.write_line(&line) {
            log::warn!("Failed to write networking log line: {e}");
        }
    }
}
