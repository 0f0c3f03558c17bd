/// Fields the networking logger can put on a log line
use strum_macros::{Display, EnumIter, EnumString, VariantNames};

/// A single piece of information the logger can print for an event.
///
/// Which events a field shows up for is decided by
/// [`LogField::log_value`]; fields that have nothing to say about an event
/// are left out of the line entirely.
#[derive(Clone, Copy, Debug, Display, EnumString, EnumIter, VariantNames, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum LogField {
    /// Time the event was logged. Example "2020-10-02 17:44:37 +0000".
    Timestamp,
    /// Emoji used as icon.
    Icon,
    /// Name of the networking library. Handy for filtering console output.
    LibraryName,
    /// Emoji telling failure from success.
    StatusEmoji,
    /// HTTP status code of the response.
    HttpStatus,
    /// HTTP method declared by the service.
    HttpMethod,
    /// URL of the request. Only logged before a response exists.
    Url,
    /// Headers declared by the service. Only logged before a response exists.
    Headers,
    /// Request body for outgoing requests, response body for responses.
    BodyData,
}

impl LogField {
    /// Fields logged when no explicit list is given.
    pub const DEFAULT_ORDER: [LogField; 8] = [
        LogField::Timestamp,
        LogField::LibraryName,
        LogField::StatusEmoji,
        LogField::HttpStatus,
        LogField::HttpMethod,
        LogField::Url,
        LogField::Headers,
        LogField::BodyData,
    ];
}
