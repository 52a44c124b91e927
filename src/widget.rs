// 🧾 Form Model
// Raw field text + one banner per widget; shared by the TUI, the CLI and
// the HTTP server so all three shells render the same outcome.

use crate::error::WidgetError;
use crate::grade::{classify_grade, GradeOutput};
use crate::ticket::{classify_ticket, pricing_table, TicketOutput};
use crate::triangle::{classify_triangle, type_legend, TriangleOutput};
use serde::Serialize;

// ============================================================================
// WIDGET KIND
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    Grade,
    Ticket,
    Triangle,
}

impl WidgetKind {
    pub const ALL: [WidgetKind; 3] = [WidgetKind::Grade, WidgetKind::Ticket, WidgetKind::Triangle];

    pub fn next(&self) -> Self {
        match self {
            WidgetKind::Grade => WidgetKind::Ticket,
            WidgetKind::Ticket => WidgetKind::Triangle,
            WidgetKind::Triangle => WidgetKind::Grade,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            WidgetKind::Grade => WidgetKind::Triangle,
            WidgetKind::Ticket => WidgetKind::Grade,
            WidgetKind::Triangle => WidgetKind::Ticket,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            WidgetKind::Grade => "Grade Calculator",
            WidgetKind::Ticket => "Ticket Price Calculator",
            WidgetKind::Triangle => "Triangle Type Identifier",
        }
    }

    pub fn instructions(&self) -> &str {
        match self {
            WidgetKind::Grade => {
                "Enter a numerical grade (0-100) to get the corresponding letter grade"
            }
            WidgetKind::Ticket => "Enter your age to determine your ticket price",
            WidgetKind::Triangle => {
                "Enter the lengths of the three sides to identify the triangle type"
            }
        }
    }

    pub fn field_labels(&self) -> &'static [&'static str] {
        match self {
            WidgetKind::Grade => &["Numerical Grade"],
            WidgetKind::Ticket => &["Your Age"],
            WidgetKind::Triangle => &["Side A", "Side B", "Side C"],
        }
    }

    pub fn submit_label(&self) -> &str {
        match self {
            WidgetKind::Grade => "Calculate Letter Grade",
            WidgetKind::Ticket => "Calculate Ticket Price",
            WidgetKind::Triangle => "Identify Triangle Type",
        }
    }

    /// Heading and rows of the reference panel, if the widget has one
    pub fn info_panel(&self) -> Option<(&str, Vec<String>)> {
        match self {
            WidgetKind::Grade => None,
            WidgetKind::Ticket => Some(("Pricing Structure:", pricing_table())),
            WidgetKind::Triangle => Some((
                "Triangle Types:",
                type_legend()
                    .into_iter()
                    .map(|(name, text)| format!("{}: {}", name, text))
                    .collect(),
            )),
        }
    }

    /// Run this widget's classifier over raw field text.
    /// Missing fields read as empty text.
    pub fn evaluate(&self, fields: &[String]) -> Result<Outcome, WidgetError> {
        let field = |i: usize| fields.get(i).map(String::as_str).unwrap_or("");

        match self {
            WidgetKind::Grade => classify_grade(field(0)).map(Outcome::Grade),
            WidgetKind::Ticket => classify_ticket(field(0)).map(Outcome::Ticket),
            WidgetKind::Triangle => {
                classify_triangle(field(0), field(1), field(2)).map(Outcome::Triangle)
            }
        }
    }
}

// ============================================================================
// OUTCOME
// ============================================================================

/// A successful classification from any widget
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "widget", rename_all = "snake_case")]
pub enum Outcome {
    Grade(GradeOutput),
    Ticket(TicketOutput),
    Triangle(TriangleOutput),
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Grade(out) => write!(f, "{}", out),
            Outcome::Ticket(out) => write!(f, "{}", out),
            Outcome::Triangle(out) => write!(f, "{}", out),
        }
    }
}

// ============================================================================
// FORM
// ============================================================================

/// What a form shows after a submit: exactly one of result or error
#[derive(Debug, Clone, PartialEq)]
pub enum Banner {
    Result(Outcome),
    Error(WidgetError),
}

impl Banner {
    pub fn message(&self) -> String {
        match self {
            Banner::Result(outcome) => outcome.to_string(),
            Banner::Error(err) => err.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Form {
    pub kind: WidgetKind,
    pub fields: Vec<String>,
    pub focused: usize,
    pub banner: Option<Banner>,
}

impl Form {
    pub fn new(kind: WidgetKind) -> Self {
        Self {
            kind,
            fields: vec![String::new(); kind.field_labels().len()],
            focused: 0,
            banner: None,
        }
    }

    pub fn with_fields(kind: WidgetKind, values: &[&str]) -> Self {
        let mut form = Self::new(kind);
        for (slot, value) in form.fields.iter_mut().zip(values) {
            *slot = value.to_string();
        }
        form
    }

    /// Clear the previous banner, then classify the current field text
    pub fn submit(&mut self) -> &Banner {
        self.banner = None;

        let banner = match self.kind.evaluate(&self.fields) {
            Ok(outcome) => Banner::Result(outcome),
            Err(err) => Banner::Error(err),
        };

        self.banner.insert(banner)
    }

    pub fn result(&self) -> Option<&Outcome> {
        match &self.banner {
            Some(Banner::Result(outcome)) => Some(outcome),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&WidgetError> {
        match &self.banner {
            Some(Banner::Error(err)) => Some(err),
            _ => None,
        }
    }

    pub fn focused_field(&self) -> &str {
        &self.fields[self.focused]
    }

    pub fn insert_char(&mut self, c: char) {
        self.fields[self.focused].push(c);
    }

    pub fn backspace(&mut self) {
        self.fields[self.focused].pop();
    }

    pub fn clear_field(&mut self) {
        self.fields[self.focused].clear();
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.fields.len();
    }

    pub fn focus_previous(&mut self) {
        let len = self.fields.len();
        self.focused = (self.focused + len - 1) % len;
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Field, Side};
    use crate::grade::LetterGrade;

    #[test]
    fn test_new_form_has_one_field_per_label() {
        assert_eq!(Form::new(WidgetKind::Grade).fields.len(), 1);
        assert_eq!(Form::new(WidgetKind::Ticket).fields.len(), 1);
        assert_eq!(Form::new(WidgetKind::Triangle).fields.len(), 3);
    }

    #[test]
    fn test_submit_sets_result() {
        let mut form = Form::with_fields(WidgetKind::Grade, &["90"]);
        let banner = form.submit().clone();

        assert_eq!(banner.message(), "A - Excellent");
        assert!(form.error().is_none());
        match form.result() {
            Some(Outcome::Grade(out)) => assert_eq!(out.letter, LetterGrade::A),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_submit_replaces_previous_banner() {
        let mut form = Form::with_fields(WidgetKind::Ticket, &["30"]);
        form.submit();
        assert!(form.result().is_some());

        form.clear_field();
        form.insert_char('-');
        form.insert_char('4');
        form.submit();

        assert!(form.result().is_none());
        assert_eq!(form.error(), Some(&WidgetError::NegativeAge { age: -4 }));

        form.backspace();
        form.backspace();
        form.insert_char('3');
        form.insert_char('7');
        form.submit();
        assert!(form.error().is_none());
        assert_eq!(form.banner.as_ref().unwrap().message(), "GHC 10.00 (Adult Ticket)");
    }

    #[test]
    fn test_triangle_focus_cycles() {
        let mut form = Form::new(WidgetKind::Triangle);
        form.insert_char('3');
        form.focus_next();
        form.insert_char('4');
        form.focus_next();
        form.insert_char('5');
        form.focus_next();
        assert_eq!(form.focused, 0);
        form.focus_previous();
        assert_eq!(form.focused, 2);
        assert_eq!(form.focused_field(), "5");

        assert_eq!(form.submit().message(), "Scalene Triangle - All three sides are different");
    }

    #[test]
    fn test_empty_triangle_reports_side_a() {
        let mut form = Form::new(WidgetKind::Triangle);
        form.submit();
        assert_eq!(
            form.error(),
            Some(&WidgetError::InvalidInput { field: Field::Side(Side::A) })
        );
    }

    #[test]
    fn test_evaluate_tolerates_missing_fields() {
        let result = WidgetKind::Triangle.evaluate(&["3".to_string(), "3".to_string()]);
        assert_eq!(
            result,
            Err(WidgetError::InvalidInput { field: Field::Side(Side::C) })
        );
    }

    #[test]
    fn test_kind_cycle() {
        let mut kind = WidgetKind::Grade;
        for _ in 0..3 {
            kind = kind.next();
        }
        assert_eq!(kind, WidgetKind::Grade);
        assert_eq!(WidgetKind::Grade.previous(), WidgetKind::Triangle);
    }

    #[test]
    fn test_info_panels() {
        assert!(WidgetKind::Grade.info_panel().is_none());
        let (heading, rows) = WidgetKind::Triangle.info_panel().unwrap();
        assert_eq!(heading, "Triangle Types:");
        assert_eq!(rows[0], "Equilateral: All sides equal");
    }

    #[test]
    fn test_outcome_serializes_with_widget_tag() {
        let outcome = WidgetKind::Ticket.evaluate(&["12".to_string()]).unwrap();
        let json = serde_json::to_value(outcome).unwrap();
        assert_eq!(json["widget"], "ticket");
        assert_eq!(json["category"], "Child");
        assert_eq!(json["price"], 7.0);
    }
}
