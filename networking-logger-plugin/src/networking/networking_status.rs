/// HTTP status code reported with a finished request
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NetworkingStatus(u16);

impl NetworkingStatus {
    pub const OK: NetworkingStatus = NetworkingStatus(200);
    pub const NOT_FOUND: NetworkingStatus = NetworkingStatus(404);
    pub const INTERNAL_SERVER_ERROR: NetworkingStatus = NetworkingStatus(500);

    pub fn new(code: u16) -> Self {
        Self(code)
    }

    pub fn code(&self) -> u16 {
        self.0
    }

    /// Whether the code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.0)
    }
}

impl From<u16> for NetworkingStatus {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

impl fmt::Display for NetworkingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_is_numeric() {
        assert_eq!(NetworkingStatus::new(201).to_string(), "201");
        assert_eq!(NetworkingStatus::NOT_FOUND.to_string(), "404");
    }

    #[test]
    fn test_status_is_success() {
        assert!(NetworkingStatus::OK.is_success());
        assert!(NetworkingStatus::from(204).is_success());
        assert!(!NetworkingStatus::from(302).is_success());
        assert!(!NetworkingStatus::INTERNAL_SERVER_ERROR.is_success());
    }
}
