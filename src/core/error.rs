//! Error types for loading and editing the registry

use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by the loader and the registry operations
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The source file could not be opened or read
    #[error("Error opening file! ({path}: {source})")]
    SourceUnavailable {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// A source line did not split into exactly three `;`-separated fields
    #[error("Error in file! Line {line} has {fields} fields, expected 3")]
    MalformedRecord {
        /// 1-based line number in the source
        line: usize,
        /// Number of fields found on that line
        fields: usize,
    },

    /// A credits value was not an integer
    #[error("Invalid credits: '{value}'{}", .line.map(|l| format!(" on line {l}")).unwrap_or_default())]
    InvalidCredits {
        /// Offending text
        value: String,
        /// 1-based source line when raised by the loader
        line: Option<usize>,
    },

    /// The department key is not in the registry
    #[error("Department {department} not found!")]
    DepartmentNotFound {
        /// Requested department key
        department: String,
    },

    /// The department has no course with the given name
    #[error("Course {course} from {department} not found!")]
    CourseNotFound {
        /// Department that was searched
        department: String,
        /// Requested course name
        course: String,
    },
}

/// Result alias for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_messages() {
        let err = RegistryError::DepartmentNotFound {
            department: "CS".to_string(),
        };
        assert_eq!(err.to_string(), "Department CS not found!");

        let err = RegistryError::CourseNotFound {
            department: "CS".to_string(),
            course: "Compilers".to_string(),
        };
        assert_eq!(err.to_string(), "Course Compilers from CS not found!");
    }

    #[test]
    fn test_invalid_credits_message() {
        let err = RegistryError::InvalidCredits {
            value: "five".to_string(),
            line: None,
        };
        assert_eq!(err.to_string(), "Invalid credits: 'five'");

        let err = RegistryError::InvalidCredits {
            value: "five".to_string(),
            line: Some(3),
        };
        assert_eq!(err.to_string(), "Invalid credits: 'five' on line 3");
    }
}
