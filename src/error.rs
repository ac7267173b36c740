use thiserror::Error;

use crate::value::Type;

/// A defect in the test code rather than in the code under test.
///
/// Usage errors are never reported as assertion failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UsageError {
    #[error("<{value}> is not a func()")]
    NotCallable { value: String, ty: Type },

    #[error("<{value}({ty})> is not a slice")]
    NotASlice { value: String, ty: Type },

    #[error("type mismatch: <{left}> and <{right}>")]
    SliceTypeMismatch { left: Type, right: Type },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Usage error: {0}")]
    Usage(#[from] UsageError),

    #[error("Config error: {0}")]
    Config(String),
}

pub type AssertResult<T> = Result<T, Error>;

impl Error {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config(message.into())
    }

    pub fn is_usage(&self) -> bool {
        matches!(self, Error::Usage(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_error_messages() {
        let err = UsageError::NotCallable {
            value: "1".to_string(),
            ty: Type::I32,
        };
        assert_eq!(err.to_string(), "<1> is not a func()");

        let err = UsageError::NotASlice {
            value: "1".to_string(),
            ty: Type::I32,
        };
        assert_eq!(err.to_string(), "<1(i32)> is not a slice");

        let err = UsageError::SliceTypeMismatch {
            left: Type::Slice(Box::new(Type::I32)),
            right: Type::Slice(Box::new(Type::I64)),
        };
        assert_eq!(err.to_string(), "type mismatch: <[i32]> and <[i64]>");
    }

    #[test]
    fn test_from_usage_error() {
        let err: Error = UsageError::NotCallable {
            value: "x".to_string(),
            ty: Type::String,
        }
        .into();
        assert!(err.is_usage());
        assert!(err.to_string().starts_with("Usage error: "));
    }

    #[test]
    fn test_config_error_is_not_usage() {
        let err = Error::config("bad json");
        assert!(!err.is_usage());
        assert_eq!(err.to_string(), "Config error: bad json");
    }
}
