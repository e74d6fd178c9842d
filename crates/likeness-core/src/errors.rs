use thiserror::Error;

/// Result type alias using LikenessError
pub type Result<T> = std::result::Result<T, LikenessError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Comparisons themselves never fail; these kinds classify the two
/// things that can (path parsing and rendering) so that callers and log
/// events carry a stable code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// A policy path string could not be parsed
    InvalidPath,
    /// A value could not be rendered for diagnostics
    Render,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidPath => "ERR_INVALID_PATH",
            ExErrorKind::Render => "ERR_RENDER",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification plus the operation and path context that
/// produced it. Built from a [`LikenessError`] at logging boundaries.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add property path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

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
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for likeness operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LikenessError {
    /// Path string is empty
    #[error("Property path is empty")]
    EmptyPath,

    /// Two separators with nothing between them, or a trailing separator
    #[error("Empty segment at position {position} in path '{path}'")]
    EmptySegment { path: String, position: usize },

    /// `[` without a matching `]`
    #[error("Unclosed index in path '{path}'")]
    UnclosedIndex { path: String },

    /// Index brackets contain something other than digits
    #[error("Invalid index '{index}' in path '{path}'")]
    InvalidIndex { path: String, index: String },

    /// A character that cannot appear at this point of the path
    #[error("Unexpected '{found}' at position {position} in path '{path}'")]
    UnexpectedCharacter {
        path: String,
        found: char,
        position: usize,
    },

    /// Rendering nested deeper than the renderer allows
    #[error("Value nesting exceeds render depth {max_depth}")]
    RenderDepthExceeded { max_depth: usize },

    /// A scalar refused to serialize
    #[error("Serialization failed: {message}")]
    Serialization { message: String },
}

impl LikenessError {
    /// The offending path, for path errors
    pub fn path(&self) -> Option<&str> {
        match self {
            LikenessError::EmptySegment { path, .. }
            | LikenessError::UnclosedIndex { path }
            | LikenessError::InvalidIndex { path, .. }
            | LikenessError::UnexpectedCharacter { path, .. } => Some(path),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for LikenessError {
    fn from(err: serde_json::Error) -> Self {
        LikenessError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<LikenessError> for ExError {
    fn from(err: LikenessError) -> Self {
        let kind = match &err {
            LikenessError::EmptyPath
            | LikenessError::EmptySegment { .. }
            | LikenessError::UnclosedIndex { .. }
            | LikenessError::InvalidIndex { .. }
            | LikenessError::UnexpectedCharacter { .. } => ExErrorKind::InvalidPath,
            LikenessError::RenderDepthExceeded { .. } | LikenessError::Serialization { .. } => {
                ExErrorKind::Render
            }
        };
        let mut ex = ExError::new(kind).with_message(err.to_string());
        if let Some(path) = err.path() {
            ex = ex.with_path(path);
        }
        ex
    }
}
