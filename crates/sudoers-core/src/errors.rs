use sudoers_core_types::RecordKind;
use thiserror::Error;

/// Result type alias using SudoersError
pub type Result<T> = std::result::Result<T, SudoersError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and CLI exit reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Parsing
    /// A line matches no recognized grammar
    MalformedLine,
    /// A user specification has no hosts token before its `=`
    MissingHosts,
    /// A comma-separated list contains an empty entry
    EmptyListItem,

    // Validation
    MissingField,
    InvalidAliasName,
    InvalidScope,
    ReservedName,
    UnknownKeyword,
    InvalidInput,

    // Reconciliation
    NotFound,

    // Integration/IO
    Io,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::MalformedLine => "ERR_MALFORMED_LINE",
            ExErrorKind::MissingHosts => "ERR_MISSING_HOSTS",
            ExErrorKind::EmptyListItem => "ERR_EMPTY_LIST_ITEM",
            ExErrorKind::MissingField => "ERR_MISSING_FIELD",
            ExErrorKind::InvalidAliasName => "ERR_INVALID_ALIAS_NAME",
            ExErrorKind::InvalidScope => "ERR_INVALID_SCOPE",
            ExErrorKind::ReservedName => "ERR_RESERVED_NAME",
            ExErrorKind::UnknownKeyword => "ERR_UNKNOWN_KEYWORD",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// Whether this kind belongs to the parse family
    ///
    /// Parse failures abort a whole-file read.
    pub fn is_parse(&self) -> bool {
        matches!(
            self,
            ExErrorKind::MalformedLine | ExErrorKind::MissingHosts | ExErrorKind::EmptyListItem
        )
    }
}

/// Canonical structured error type
///
/// Carries the classification plus the context needed to point a user at the
/// offending target file, record and line.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    target: Option<String>,
    record_name: Option<String>,
    line_no: Option<usize>,
    line: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            target: None,
            record_name: None,
            line_no: None,
            line: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add target file context
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Add record name context
    pub fn with_record_name(mut self, name: impl Into<String>) -> Self {
        self.record_name = Some(name.into());
        self
    }

    /// Add 1-based line number context
    pub fn with_line_no(mut self, line_no: usize) -> Self {
        self.line_no = Some(line_no);
        self
    }

    /// Add raw line text context
    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.line = Some(line.into());
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

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn record_name(&self) -> Option<&str> {
        self.record_name.as_deref()
    }

    pub fn line_no(&self) -> Option<usize> {
        self.line_no
    }

    pub fn line(&self) -> Option<&str> {
        self.line.as_deref()
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
        if let Some(target) = &self.target {
            write!(f, " (target: {})", target)?;
        }
        if let Some(line_no) = self.line_no {
            write!(f, " (line: {})", line_no)?;
        }
        if let Some(name) = &self.record_name {
            write!(f, " (record: {})", name)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

fn at_line(line_no: &Option<usize>) -> String {
    match line_no {
        Some(n) => format!(" at line {}", n),
        None => String::new(),
    }
}

/// Error taxonomy for parsing, validating and reconciling sudoers records
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SudoersError {
    // ===== Parse Errors =====
    /// The line matches none of the comment, default, alias or user spec grammars
    #[error("Malformed sudoers line{}: {line}", at_line(.line_no))]
    MalformedLine { line_no: Option<usize>, line: String },

    /// A user spec needs distinct users and hosts tokens before its `=`
    #[error("User specification requires users and hosts before '='{}: {line}", at_line(.line_no))]
    MissingHosts { line_no: Option<usize>, line: String },

    /// A comma-separated list has an empty entry
    #[error("Empty entry in {field} list{}: {line}", at_line(.line_no))]
    EmptyListItem {
        line_no: Option<usize>,
        line: String,
        field: &'static str,
    },

    // ===== Validation Errors =====
    #[error("missing attribute {attribute} for type {kind}")]
    MissingAttribute {
        attribute: &'static str,
        kind: RecordKind,
    },

    #[error("alias names {name} does not match [A-Z]([A-Z][0-9]_)*")]
    InvalidAliasName { name: String },

    #[error("invalid Defaults scope {name}: expected Defaults, Defaults@host, Defaults:users or Defaults>runas")]
    InvalidDefaultsScope { name: String },

    #[error("Cannot specify user named Defaults in sudoers")]
    ReservedUser,

    #[error("cannot use reserved namevar {name}")]
    ReservedName { name: String },

    #[error("Invalid value \"{value}\": expected one of Cmnd, Host, User, Runas (optionally suffixed with _Alias)")]
    UnknownAliasKind { value: String },

    #[error("unexpected sudoers type {value}")]
    UnknownRecordType { value: String },

    #[error("comment text cannot be a NAMEVAR marker: {text}")]
    MarkerInComment { text: String },

    #[error("{attribute} cannot span multiple lines")]
    MultiLineValue { attribute: &'static str },

    /// The written line would not parse back into the same record
    #[error("{kind} record does not read back as written: {line}")]
    UnreadableLine { kind: RecordKind, line: String },

    // ===== Reconciliation Errors =====
    #[error("No record named {name}")]
    RecordNotFound { name: String },

    // ===== Generic Errors =====
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl SudoersError {
    /// Attach a 1-based line number to a parse error
    ///
    /// Non-parse errors are returned unchanged.
    pub fn at_line(self, n: usize) -> Self {
        match self {
            SudoersError::MalformedLine { line, .. } => SudoersError::MalformedLine {
                line_no: Some(n),
                line,
            },
            SudoersError::MissingHosts { line, .. } => SudoersError::MissingHosts {
                line_no: Some(n),
                line,
            },
            SudoersError::EmptyListItem { line, field, .. } => SudoersError::EmptyListItem {
                line_no: Some(n),
                line,
                field,
            },
            other => other,
        }
    }

    /// Whether this is a parse error
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            SudoersError::MalformedLine { .. }
                | SudoersError::MissingHosts { .. }
                | SudoersError::EmptyListItem { .. }
        )
    }
}

/// Conversion from SudoersError to ExError
impl From<SudoersError> for ExError {
    fn from(err: SudoersError) -> Self {
        let message = err.to_string();
        match err {
            SudoersError::MalformedLine { line_no, line } => {
                with_position(ExError::new(ExErrorKind::MalformedLine), line_no, line)
                    .with_op("parse_line")
                    .with_message(message)
            }
            SudoersError::MissingHosts { line_no, line } => {
                with_position(ExError::new(ExErrorKind::MissingHosts), line_no, line)
                    .with_op("parse_line")
                    .with_message(message)
            }
            SudoersError::EmptyListItem { line_no, line, .. } => {
                with_position(ExError::new(ExErrorKind::EmptyListItem), line_no, line)
                    .with_op("parse_line")
                    .with_message(message)
            }
            SudoersError::MissingAttribute { .. } => ExError::new(ExErrorKind::MissingField)
                .with_op("validate")
                .with_message(message),
            SudoersError::InvalidAliasName { name } => {
                ExError::new(ExErrorKind::InvalidAliasName)
                    .with_op("validate")
                    .with_record_name(name)
                    .with_message(message)
            }
            SudoersError::InvalidDefaultsScope { name } => {
                ExError::new(ExErrorKind::InvalidScope)
                    .with_op("validate")
                    .with_record_name(name)
                    .with_message(message)
            }
            SudoersError::ReservedUser => ExError::new(ExErrorKind::ReservedName)
                .with_op("validate")
                .with_message(message),
            SudoersError::ReservedName { name } => ExError::new(ExErrorKind::ReservedName)
                .with_op("validate")
                .with_record_name(name)
                .with_message(message),
            SudoersError::UnknownAliasKind { .. } | SudoersError::UnknownRecordType { .. } => {
                ExError::new(ExErrorKind::UnknownKeyword)
                    .with_op("validate")
                    .with_message(message)
            }
            SudoersError::MarkerInComment { .. }
            | SudoersError::MultiLineValue { .. }
            | SudoersError::UnreadableLine { .. } => {
                ExError::new(ExErrorKind::InvalidInput)
                    .with_op("validate")
                    .with_message(message)
            }
            SudoersError::RecordNotFound { name } => ExError::new(ExErrorKind::NotFound)
                .with_op("apply")
                .with_record_name(name)
                .with_message(message),
            SudoersError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
            SudoersError::Internal { .. } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}

fn with_position(err: ExError, line_no: Option<usize>, line: String) -> ExError {
    let err = err.with_line(line);
    match line_no {
        Some(n) => err.with_line_no(n),
        None => err,
    }
}

/// Conversion from serde_json::Error to SudoersError
impl From<serde_json::Error> for SudoersError {
    fn from(err: serde_json::Error) -> Self {
        SudoersError::Serialization {
            message: err.to_string(),
        }
    }
}
