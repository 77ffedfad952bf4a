// qenmlrs/src/error.rs

//! Error types for namelist variable resolution, coercion, and assembly.

use std::fmt;

use crate::schema::GroupName;

/// Result type alias for qenmlrs operations.
pub type Result<T> = std::result::Result<T, QenmlError>;

/// Errors that can occur while resolving, coercing, or assembling namelist
/// variables.
///
/// Every failure is immediate and synchronous; there is no internal recovery
/// or partially constructed value observable after an error.
#[derive(Debug, Clone, PartialEq)]
pub enum QenmlError {
    /// Index-suffix syntax was present in a variable name but malformed
    InvalidIndex { name: String, message: String },

    /// Normalized name is not declared in any namelist known to the registry
    UnknownName { name: String },

    /// Name is declared in multiple namelists and no valid disambiguating
    /// hint was supplied
    AmbiguousName {
        name: String,
        candidates: Vec<GroupName>,
    },

    /// The registry declares the name in a namelist but carries no type for it
    UnknownType { group: GroupName, name: String },

    /// Raw value cannot be coerced to the schema-declared type
    Coercion {
        name: String,
        value: String,
        expected: String,
    },

    /// Namelist construction was attempted over no variables
    EmptyNamelist,

    /// A member variable resolved to a different namelist than the rest
    GroupMismatch {
        name: String,
        expected: GroupName,
        found: GroupName,
    },

    /// Serialization/deserialization error
    #[cfg(feature = "json")]
    Json(String),

    /// YAML serialization/deserialization error
    #[cfg(feature = "yaml")]
    Yaml(String),
}

impl fmt::Display for QenmlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QenmlError::InvalidIndex { name, message } => {
                write!(f, "Invalid index in name '{}': {}", name, message)
            }

            QenmlError::UnknownName { name } => {
                write!(f, "Name '{}' is not a recognized namelist parameter", name)
            }

            QenmlError::AmbiguousName { name, candidates } => {
                let groups: Vec<String> = candidates.iter().map(|g| g.to_string()).collect();
                write!(
                    f,
                    "Name '{}' appears in multiple namelists ({}); specify one explicitly",
                    name,
                    groups.join(", ")
                )
            }

            QenmlError::UnknownType { group, name } => {
                write!(f, "No declared type for '{}' in namelist {}", name, group)
            }

            QenmlError::Coercion {
                name,
                value,
                expected,
            } => {
                write!(
                    f,
                    "Cannot coerce value '{}' of variable '{}' to {}",
                    value, name, expected
                )
            }

            QenmlError::EmptyNamelist => {
                write!(f, "A namelist must contain at least one variable")
            }

            QenmlError::GroupMismatch {
                name,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Variable '{}' belongs to namelist {}, expected {}",
                    name, found, expected
                )
            }

            #[cfg(feature = "json")]
            QenmlError::Json(msg) => write!(f, "JSON error: {}", msg),

            #[cfg(feature = "yaml")]
            QenmlError::Yaml(msg) => write!(f, "YAML error: {}", msg),
        }
    }
}

impl std::error::Error for QenmlError {}

#[cfg(feature = "json")]
impl From<serde_json::Error> for QenmlError {
    fn from(err: serde_json::Error) -> Self {
        QenmlError::Json(err.to_string())
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for QenmlError {
    fn from(err: serde_yaml::Error) -> Self {
        QenmlError::Yaml(err.to_string())
    }
}

impl QenmlError {
    /// Create a new invalid index error.
    pub fn invalid_index<S: Into<String>>(name: S, message: S) -> Self {
        QenmlError::InvalidIndex {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a new unknown name error.
    pub fn unknown_name<S: Into<String>>(name: S) -> Self {
        QenmlError::UnknownName { name: name.into() }
    }

    /// Create a new ambiguous name error.
    pub fn ambiguous_name<S: Into<String>>(name: S, candidates: Vec<GroupName>) -> Self {
        QenmlError::AmbiguousName {
            name: name.into(),
            candidates,
        }
    }

    /// Create a new coercion error.
    pub fn coercion<S: Into<String>>(name: S, value: S, expected: S) -> Self {
        QenmlError::Coercion {
            name: name.into(),
            value: value.into(),
            expected: expected.into(),
        }
    }

    /// Get the error category for logging/metrics purposes.
    pub fn category(&self) -> &'static str {
        match self {
            QenmlError::InvalidIndex { .. } => "index",
            QenmlError::UnknownName { .. } => "unknown_name",
            QenmlError::AmbiguousName { .. } => "ambiguous_name",
            QenmlError::UnknownType { .. } => "unknown_type",
            QenmlError::Coercion { .. } => "coercion",
            QenmlError::EmptyNamelist => "empty_namelist",
            QenmlError::GroupMismatch { .. } => "group_mismatch",
            #[cfg(feature = "json")]
            QenmlError::Json(_) => "json",
            #[cfg(feature = "yaml")]
            QenmlError::Yaml(_) => "yaml",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QenmlError::unknown_name("foo");
        assert_eq!(
            err.to_string(),
            "Name 'foo' is not a recognized namelist parameter"
        );

        let err = QenmlError::invalid_index("celldm(x)", "index is not an integer");
        assert_eq!(
            err.to_string(),
            "Invalid index in name 'celldm(x)': index is not an integer"
        );

        let err = QenmlError::ambiguous_name(
            "verbosity",
            vec![GroupName::Control, GroupName::Inputph],
        );
        assert_eq!(
            err.to_string(),
            "Name 'verbosity' appears in multiple namelists (CONTROL, INPUTPH); \
             specify one explicitly"
        );

        let err = QenmlError::GroupMismatch {
            name: "ibrav".to_string(),
            expected: GroupName::Control,
            found: GroupName::System,
        };
        assert_eq!(
            err.to_string(),
            "Variable 'ibrav' belongs to namelist SYSTEM, expected CONTROL"
        );
    }

    #[test]
    fn test_error_constructors() {
        let err = QenmlError::coercion("dt", "fast", "real");
        match err {
            QenmlError::Coercion {
                name,
                value,
                expected,
            } => {
                assert_eq!(name, "dt");
                assert_eq!(value, "fast");
                assert_eq!(expected, "real");
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(QenmlError::unknown_name("x").category(), "unknown_name");
        assert_eq!(QenmlError::EmptyNamelist.category(), "empty_namelist");
        assert_eq!(
            QenmlError::coercion("x", "y", "integer").category(),
            "coercion"
        );
    }
}
