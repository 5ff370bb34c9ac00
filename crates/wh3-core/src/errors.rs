use thiserror::Error;

/// Result type alias using Wh3Error
pub type Result<T> = std::result::Result<T, Wh3Error>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and structured log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Lookup/Validation
    InvalidInput,
    NotFound,

    // Data quality
    /// Two catalog rows normalized to the same display name
    DataDrift,

    // Integration/IO
    Io,
    Serialization,
    /// The OS clipboard (or another platform service) refused the request
    ExternalService,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::DataDrift => "ERR_DATA_DRIFT",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::ExternalService => "ERR_EXTERNAL_SERVICE",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind plus optional context (operation, entity,
/// file path) for debugging and structured logging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    path: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            path: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context (lord name, art set id, race code)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add file path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the file path context, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for wh3 operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Wh3Error {
    // ===== Lookup Errors =====
    /// No catalog entry matches the requested display name
    #[error("Lord '{name}' not found")]
    LordNotFound { name: String },

    /// No character matches the requested art set id
    #[error("Character '{art_set_id}' not found")]
    CharacterNotFound { art_set_id: String },

    /// A race code outside the closed set was parsed strictly
    #[error("Unknown race code: {code}")]
    UnknownRace { code: String },

    // ===== Integration Errors =====
    /// A required input could not be opened or read
    #[error("Cannot read {path}: {message}")]
    Io { path: String, message: String },

    /// Serialization failure outside of tolerant record decoding
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// The clipboard adapter refused the write
    #[error("Clipboard unavailable: {message}")]
    Clipboard { message: String },

    // ===== Internal Errors =====
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl Wh3Error {
    /// Whether the error comes from a failed catalog lookup
    pub fn is_lord_lookup(&self) -> bool {
        matches!(self, Wh3Error::LordNotFound { .. })
    }
}

/// Conversion from Wh3Error to the structured ExError
impl From<Wh3Error> for ExError {
    fn from(err: Wh3Error) -> Self {
        match err {
            Wh3Error::LordNotFound { name } => ExError::new(ExErrorKind::NotFound)
                .with_op("lookup_lord")
                .with_entity_id(name)
                .with_message("Lord not found"),

            Wh3Error::CharacterNotFound { art_set_id } => ExError::new(ExErrorKind::NotFound)
                .with_op("lookup_character")
                .with_entity_id(art_set_id)
                .with_message("Character not found"),

            Wh3Error::UnknownRace { code } => ExError::new(ExErrorKind::InvalidInput)
                .with_entity_id(code)
                .with_message("Unknown race code"),

            Wh3Error::Io { path, message } => ExError::new(ExErrorKind::Io)
                .with_path(path)
                .with_message(message),

            Wh3Error::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            Wh3Error::Clipboard { message } => ExError::new(ExErrorKind::ExternalService)
                .with_op("clipboard_copy")
                .with_message(message),

            Wh3Error::Internal { message } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to Wh3Error
impl From<serde_json::Error> for Wh3Error {
    fn from(err: serde_json::Error) -> Self {
        Wh3Error::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes_are_unique() {
        let kinds = [
            ExErrorKind::InvalidInput,
            ExErrorKind::NotFound,
            ExErrorKind::DataDrift,
            ExErrorKind::Io,
            ExErrorKind::Serialization,
            ExErrorKind::ExternalService,
            ExErrorKind::Internal,
        ];
        let mut codes: Vec<_> = kinds.iter().map(|k| k.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), kinds.len());
    }

    #[test]
    fn test_lord_not_found_message() {
        let err = Wh3Error::LordNotFound {
            name: "nonexistent_lord".to_string(),
        };
        assert_eq!(err.to_string(), "Lord 'nonexistent_lord' not found");
        assert!(err.is_lord_lookup());
    }

    #[test]
    fn test_ex_error_display_includes_path() {
        let err = ExError::new(ExErrorKind::Io)
            .with_op("read_ndjson")
            .with_path("data/agents.ndjson")
            .with_message("No such file or directory");
        let rendered = err.to_string();
        assert!(rendered.starts_with("[ERR_IO]"));
        assert!(rendered.contains("read_ndjson"));
        assert!(rendered.contains("data/agents.ndjson"));
    }
}
