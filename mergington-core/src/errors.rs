use thiserror::Error;

pub type DirectoryResult<T> = Result<T, DirectoryError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Activity not found")]
    ActivityNotFound(String),

    #[error("{email} already signed up")]
    AlreadySignedUp { activity: String, email: String },

    #[error("{email} not signed up")]
    NotSignedUp { activity: String, email: String },

    #[error("Email is required")]
    InvalidEmail { activity: String },
}

/// Coarse classification used by transports to pick a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
}

impl DirectoryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DirectoryError::ActivityNotFound(_) => ErrorKind::NotFound,
            DirectoryError::AlreadySignedUp { .. }
            | DirectoryError::NotSignedUp { .. }
            | DirectoryError::InvalidEmail { .. } => ErrorKind::Conflict,
        }
    }

    pub fn activity(&self) -> &str {
        match self {
            DirectoryError::ActivityNotFound(activity)
            | DirectoryError::AlreadySignedUp { activity, .. }
            | DirectoryError::NotSignedUp { activity, .. }
            | DirectoryError::InvalidEmail { activity } => activity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DirectoryError::ActivityNotFound("Fencing".to_string());
        assert_eq!(err.to_string(), "Activity not found");
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.activity(), "Fencing");

        let err = DirectoryError::AlreadySignedUp {
            activity: "Chess Club".to_string(),
            email: "michael@mergington.edu".to_string(),
        };
        assert_eq!(err.to_string(), "michael@mergington.edu already signed up");
        assert_eq!(err.kind(), ErrorKind::Conflict);

        let err = DirectoryError::NotSignedUp {
            activity: "Chess Club".to_string(),
            email: "nobody@mergington.edu".to_string(),
        };
        assert_eq!(err.to_string(), "nobody@mergington.edu not signed up");
        assert_eq!(err.kind(), ErrorKind::Conflict);

        let err = DirectoryError::InvalidEmail {
            activity: "Soccer".to_string(),
        };
        assert_eq!(err.to_string(), "Email is required");
        assert_eq!(err.kind(), ErrorKind::Conflict);
    }
}
