//! Configuration validation issues.
//!
//! Config loaders report problems as a list of [`ConfigIssue`]s rather than
//! failing outright, so the caller can log warnings and keep running with
//! fallback values.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A required text field is empty.
    EmptyField { field: String },
    /// An animation or delay interval is zero.
    ZeroInterval { field: String },
    /// The placeholder used for answer redaction is empty.
    EmptyPlaceholder,
    /// A string field holds a value outside its known set.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn empty_field(field: impl Into<String>) -> Self {
        let field = field.into();
        Self {
            severity: Severity::Error,
            message: format!("{}: must not be empty", field),
            code: ConfigIssueCode::EmptyField { field },
        }
    }

    pub fn zero_interval(field: impl Into<String>) -> Self {
        let field = field.into();
        Self {
            severity: Severity::Warning,
            message: format!("{}: interval is zero, animation will not be visible", field),
            code: ConfigIssueCode::ZeroInterval { field },
        }
    }

    pub fn invalid_value(
        field: impl Into<String>,
        value: impl Into<String>,
        valid: &[&str],
    ) -> Self {
        let field = field.into();
        let value = value.into();
        Self {
            severity: Severity::Warning,
            message: format!(
                "{}: unknown value '{}' (expected one of: {})",
                field,
                value,
                valid.join(", ")
            ),
            code: ConfigIssueCode::InvalidEnumValue {
                field,
                value,
                valid_values: valid.iter().map(|v| v.to_string()).collect(),
            },
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}
