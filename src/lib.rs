// Widget Calculators - Core Library
// Exposes the classifiers and form model for the TUI, the CLI, the API server, and tests

pub mod error;
pub mod parse;
pub mod grade;    // Grade Classifier
pub mod ticket;   // Ticket Price Classifier
pub mod triangle; // Triangle Type Classifier
pub mod widget;   // Form Model
pub mod config;   // Server Configuration
pub mod logging;

// Re-export commonly used types
pub use error::{ErrorBody, Field, Side, WidgetError};
pub use grade::{classify_grade, grade, GradeInput, GradeOutput, LetterGrade};
pub use ticket::{classify_ticket, ticket_price, TicketCategory, TicketInput, TicketOutput};
pub use triangle::{classify_triangle, triangle_type, TriangleInput, TriangleKind, TriangleOutput};
pub use widget::{Banner, Form, Outcome, WidgetKind};
pub use config::{CorsMode, ServerConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
