// ⚠️ Validation Errors
// The one error type every widget reports back to its form

use serde::Serialize;

// ============================================================================
// FIELDS
// ============================================================================

/// One of the three triangle side inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Side {
    A,
    B,
    C,
}

impl Side {
    pub fn name(&self) -> &str {
        match self {
            Side::A => "A",
            Side::B => "B",
            Side::C => "C",
        }
    }
}

/// Which input field failed to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "field", content = "side", rename_all = "snake_case")]
pub enum Field {
    Score,
    Age,
    Side(Side),
}

// ============================================================================
// ERROR
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum WidgetError {
    /// Unparseable, or non-positive where a positive value is required
    InvalidInput { field: Field },
    /// Score outside [0, 100]
    OutOfRange { value: f64 },
    NegativeAge { age: i64 },
    /// Sides violate the triangle inequality
    DegenerateTriangle,
}

impl WidgetError {
    /// Stable machine-readable kind, used by the JSON API
    pub fn kind(&self) -> &'static str {
        match self {
            WidgetError::InvalidInput { .. } => "invalid_input",
            WidgetError::OutOfRange { .. } => "out_of_range",
            WidgetError::NegativeAge { .. } => "negative_age",
            WidgetError::DegenerateTriangle => "degenerate_triangle",
        }
    }
}

impl std::fmt::Display for WidgetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WidgetError::InvalidInput { field: Field::Score } => {
                write!(f, "Invalid input. Please enter a valid number.")
            }
            WidgetError::InvalidInput { field: Field::Age } => {
                write!(f, "Invalid input. Please enter a valid age.")
            }
            WidgetError::InvalidInput { field: Field::Side(side) } => {
                write!(f, "Invalid input for side {}. Must be a positive number.", side.name())
            }
            WidgetError::OutOfRange { .. } => write!(f, "Grade must be between 0 and 100."),
            WidgetError::NegativeAge { .. } => write!(f, "Age cannot be negative."),
            WidgetError::DegenerateTriangle => {
                write!(f, "These sides do not form a valid triangle.")
            }
        }
    }
}

impl std::error::Error for WidgetError {}

/// Serializable view of a `WidgetError` for JSON output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    pub kind: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<Field>,
}

impl From<&WidgetError> for ErrorBody {
    fn from(err: &WidgetError) -> Self {
        let field = match err {
            WidgetError::InvalidInput { field } => Some(*field),
            _ => None,
        };
        ErrorBody {
            kind: err.kind(),
            message: err.to_string(),
            field,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
