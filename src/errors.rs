use std::fmt;

/// Error type for roster operations, including specific error codes.
///
/// Every variant maps to a unique code so that a failed command can be traced
/// back to its cause in the logs, even though the command output itself only
/// ever says `unsuccessful`.
#[derive(Debug)]
pub enum Error {
    /// I/O-related error (reading a script, writing output).
    /// Error code: 1000
    Io(std::io::Error),
    /// Insert of an identifier that is already stored.
    /// Error code: 2000
    DuplicateKey(String),
    /// Removal or lookup of an identifier or rank that is not stored.
    /// Error code: 3000
    NotFound(String),
    /// Error acquiring the tree lock.
    /// Error code: 4000
    LockTree(String),
    /// Name or identifier failed validation.
    /// Error code: 5000
    Validation(String),
    /// Malformed command line.
    /// Error code: 6000
    Syntax(String),
}

impl Error {
    /// Returns the error code associated with this error variant.
    ///
    /// # Examples
    /// ```
    /// let err = Error::NotFound("00000001".to_string());
    /// assert_eq!(err.code(), 3000);
    /// ```
    pub fn code(&self) -> u32 {
        match self {
            Error::Io(_) => 1000,
            Error::DuplicateKey(_) => 2000,
            Error::NotFound(_) => 3000,
            Error::LockTree(_) => 4000,
            Error::Validation(_) => 5000,
            Error::Syntax(_) => 6000,
        }
    }

    /// Returns a human-readable error category for this error variant.
    pub fn category(&self) -> &'static str {
        match self {
            Error::Io(_) => "I/O",
            Error::DuplicateKey(_) => "Duplicate Key",
            Error::NotFound(_) => "Not Found",
            Error::LockTree(_) => "Tree Lock",
            Error::Validation(_) => "Validation",
            Error::Syntax(_) => "Syntax",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "[{}] I/O Error: {}", self.code(), e),
            Error::DuplicateKey(msg) => write!(f, "[{}] Duplicate Key: {}", self.code(), msg),
            Error::NotFound(msg) => write!(f, "[{}] Not Found: {}", self.code(), msg),
            Error::LockTree(msg) => write!(f, "[{}] Lock Tree Error: {}", self.code(), msg),
            Error::Validation(msg) => write!(f, "[{}] Validation Error: {}", self.code(), msg),
            Error::Syntax(msg) => write!(f, "[{}] Syntax Error: {}", self.code(), msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<std::num::ParseIntError> for Error {
    fn from(err: std::num::ParseIntError) -> Self {
        Error::Syntax(format!("Integer parsing error: {}", err))
    }
}

/// Convenience macro to create an `Error` with a formatted message.
///
/// # Examples
/// ```
/// let err = err!(NotFound, "No record with id {}", "00000001");
/// assert_eq!(err.code(), 3000);
/// assert_eq!(err.to_string(), "[3000] Not Found: No record with id 00000001");
/// ```
#[macro_export]
macro_rules! err {
    ($variant:ident, $msg:expr) => {
        $crate::errors::Error::$variant($msg.to_string())
    };
    ($variant:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::errors::Error::$variant(format!($fmt, $($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_and_display() {
        let err = Error::Syntax("Invalid token".to_string());
        assert_eq!(err.code(), 6000);
        assert_eq!(err.to_string(), "[6000] Syntax Error: Invalid token");
        assert_eq!(err.category(), "Syntax");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err = Error::from(io_err);
        assert_eq!(err.code(), 1000);
        assert_eq!(err.to_string(), "[1000] I/O Error: File not found");
    }

    #[test]
    fn test_error_from_parse_int() {
        let parse_err = "x1".parse::<usize>().unwrap_err();
        let err = Error::from(parse_err);
        assert_eq!(err.code(), 6000);
        assert!(err.to_string().starts_with("[6000] Syntax Error: Integer parsing error"));
    }

    #[test]
    fn test_error_macro() {
        let err = err!(DuplicateKey, "Identifier already stored");
        assert_eq!(err.code(), 2000);
        assert_eq!(err.to_string(), "[2000] Duplicate Key: Identifier already stored");

        let err = err!(NotFound, "No record at rank {}", 7);
        assert_eq!(err.code(), 3000);
        assert_eq!(err.category(), "Not Found");
        assert_eq!(err.to_string(), "[3000] Not Found: No record at rank 7");
    }
}
