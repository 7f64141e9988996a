use std::path::PathBuf;
use thiserror::Error;

/// XSD skeleton error
///
/// Enum which manages errors in the xsdskeleton crate
#[derive(Debug, Error)]
pub enum SkeletonError {
    /// The generation settings are out of range
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
    /// The input schema file could not be read
    #[error("Could not read schema file {}: {source}", path.display())]
    InputError {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Error parsing the input XSD file contents
    #[error("XSD parser error: {0}")]
    XSDParserError(String),
    /// A type, element or group reference could not be resolved
    #[error("Data type error: {0}")]
    DataTypeError(String),
    /// Synthesis descended deeper than the configured limit
    #[error("Recursion limit of {limit} exceeded at element '{element}'")]
    RecursionLimitExceeded { element: String, limit: usize },
    /// The schema declares no top-level elements
    #[error("Schema declares no top-level elements")]
    NoRootElement,
    /// Error generating the output XML structure
    #[error("XML builder error: {0}")]
    XMLBuilderError(String),
    /// The output file could not be written
    #[error("Could not write output file {}: {source}", path.display())]
    OutputError {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl SkeletonError {
    /// Process exit code reported by the command-line tool for this error.
    ///
    /// | code | error                                  |
    /// |------|----------------------------------------|
    /// | 2    | invalid configuration                  |
    /// | 3    | input unreadable                       |
    /// | 4    | schema malformed or unresolved type    |
    /// | 5    | recursion limit exceeded               |
    /// | 6    | no root element                        |
    /// | 7    | output could not be generated or saved |
    /// Short label naming the kind of failure, for callers that report errors
    /// as a single message type.
    pub fn kind(&self) -> &'static str {
        match self {
            SkeletonError::ConfigError(_) => "Invalid configuration",
            SkeletonError::InputError { .. } => "Schema file unreadable",
            SkeletonError::XSDParserError(_) => "XSD Parser encountered an error",
            SkeletonError::DataTypeError(_) => "Input not in valid format",
            SkeletonError::RecursionLimitExceeded { .. } => "Recursion limit exceeded",
            SkeletonError::NoRootElement => "No root element",
            SkeletonError::XMLBuilderError(_) => "XMLBuilder encountered an error",
            SkeletonError::OutputError { .. } => "Output not written",
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            SkeletonError::ConfigError(_) => 2,
            SkeletonError::InputError { .. } => 3,
            SkeletonError::XSDParserError(_) => 4,
            SkeletonError::DataTypeError(_) => 4,
            SkeletonError::RecursionLimitExceeded { .. } => 5,
            SkeletonError::NoRootElement => 6,
            SkeletonError::XMLBuilderError(_) => 7,
            SkeletonError::OutputError { .. } => 7,
        }
    }
}

pub type Result<T> = std::result::Result<T, SkeletonError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::io;

    fn every_kind() -> Vec<SkeletonError> {
        vec![
            SkeletonError::ConfigError("max depth".into()),
            SkeletonError::InputError {
                path: "in.xsd".into(),
                source: io::Error::new(io::ErrorKind::NotFound, "missing"),
            },
            SkeletonError::XSDParserError("bad".into()),
            SkeletonError::DataTypeError("Cannot find data type: T".into()),
            SkeletonError::RecursionLimitExceeded {
                element: "Node".into(),
                limit: 4,
            },
            SkeletonError::NoRootElement,
            SkeletonError::XMLBuilderError("bad".into()),
            SkeletonError::OutputError {
                path: "out.xml".into(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
            },
        ]
    }

    #[test]
    fn test_kinds_are_distinct() {
        let errors = every_kind();
        let kinds: HashSet<&str> = errors.iter().map(SkeletonError::kind).collect();
        assert_eq!(kinds.len(), errors.len());
    }

    #[test]
    fn test_exit_codes() {
        let codes: Vec<u8> = every_kind().iter().map(SkeletonError::exit_code).collect();
        assert_eq!(codes, vec![2, 3, 4, 4, 5, 6, 7, 7]);
    }
}
