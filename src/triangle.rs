// 🔺 Triangle Type Classifier
// Three side lengths → equilateral / isosceles / scalene

use crate::error::{Field, Side, WidgetError};
use crate::parse::parse_decimal;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TriangleKind {
    Equilateral,
    Isosceles,
    Scalene,
}

impl TriangleKind {
    pub fn name(&self) -> &str {
        match self {
            TriangleKind::Equilateral => "Equilateral",
            TriangleKind::Isosceles => "Isosceles",
            TriangleKind::Scalene => "Scalene",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TriangleKind::Equilateral => "All three sides are equal",
            TriangleKind::Isosceles => "Two sides are equal",
            TriangleKind::Scalene => "All three sides are different",
        }
    }
}

/// Legend shown next to the form
pub fn type_legend() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Equilateral", "All sides equal"),
        ("Isosceles", "Two sides equal"),
        ("Scalene", "All sides different"),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleInput {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl TriangleInput {
    /// Validate the three side fields in order A, B, C; the first bad side
    /// is the one reported.
    pub fn parse(a: &str, b: &str, c: &str) -> Result<Self, WidgetError> {
        Ok(TriangleInput {
            a: parse_side(a, Side::A)?,
            b: parse_side(b, Side::B)?,
            c: parse_side(c, Side::C)?,
        })
    }

    /// Non-strict: a side equal to the sum of the other two is degenerate
    pub fn is_degenerate(&self) -> bool {
        let TriangleInput { a, b, c } = *self;
        a + b <= c || a + c <= b || b + c <= a
    }
}

fn parse_side(raw: &str, side: Side) -> Result<f64, WidgetError> {
    match parse_decimal(raw) {
        Some(value) if value > 0.0 => Ok(value),
        _ => Err(WidgetError::InvalidInput { field: Field::Side(side) }),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TriangleOutput {
    pub kind: TriangleKind,
    pub description: &'static str,
}

impl std::fmt::Display for TriangleOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} Triangle - {}", self.kind.name(), self.description)
    }
}

/// Classify by exact side equality. No tolerance is applied, so sides that
/// differ only by rounding error count as different.
pub fn triangle_type(input: TriangleInput) -> Result<TriangleOutput, WidgetError> {
    if input.is_degenerate() {
        return Err(WidgetError::DegenerateTriangle);
    }

    let TriangleInput { a, b, c } = input;
    let kind = if a == b && b == c {
        TriangleKind::Equilateral
    } else if a == b || b == c || a == c {
        TriangleKind::Isosceles
    } else {
        TriangleKind::Scalene
    };

    Ok(TriangleOutput {
        kind,
        description: kind.description(),
    })
}

pub fn classify_triangle(a: &str, b: &str, c: &str) -> Result<TriangleOutput, WidgetError> {
    triangle_type(TriangleInput::parse(a, b, c)?)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(a: &str, b: &str, c: &str) -> TriangleKind {
        classify_triangle(a, b, c).unwrap().kind
    }

    fn invalid(side: Side) -> Result<TriangleOutput, WidgetError> {
        Err(WidgetError::InvalidInput { field: Field::Side(side) })
    }

    #[test]
    fn test_classification() {
        assert_eq!(kind("3", "3", "3"), TriangleKind::Equilateral);
        assert_eq!(kind("3", "3", "4"), TriangleKind::Isosceles);
        assert_eq!(kind("4", "3", "3"), TriangleKind::Isosceles);
        assert_eq!(kind("3", "4", "3"), TriangleKind::Isosceles);
        assert_eq!(kind("3", "4", "5"), TriangleKind::Scalene);
    }

    #[test]
    fn test_degenerate() {
        assert_eq!(classify_triangle("1", "1", "3"), Err(WidgetError::DegenerateTriangle));
        // Flat triangle: one side equals the sum of the other two
        assert_eq!(classify_triangle("1", "2", "3"), Err(WidgetError::DegenerateTriangle));
        assert_eq!(classify_triangle("5", "2", "3"), Err(WidgetError::DegenerateTriangle));
    }

    #[test]
    fn test_non_positive_sides() {
        assert_eq!(classify_triangle("0", "1", "1"), invalid(Side::A));
        assert_eq!(classify_triangle("1", "-2", "1"), invalid(Side::B));
        assert_eq!(classify_triangle("1", "1", "x"), invalid(Side::C));
    }

    #[test]
    fn test_first_failing_side_reported() {
        assert_eq!(classify_triangle("1", "", "0"), invalid(Side::B));
        assert_eq!(classify_triangle("abc", "0", "0"), invalid(Side::A));
    }

    #[test]
    fn test_exact_equality_without_tolerance() {
        // 0.1 + 0.2 in binary; intended equal to 0.3 but classified apart
        assert_eq!(kind("0.3", "0.30000000000000004", "0.5"), TriangleKind::Scalene);
        assert_eq!(kind("0.3", "0.3", "0.5"), TriangleKind::Isosceles);
    }

    #[test]
    fn test_infinite_side_is_degenerate() {
        assert_eq!(
            classify_triangle("Infinity", "1", "1"),
            Err(WidgetError::DegenerateTriangle)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            classify_triangle("2", "2", "2").unwrap().to_string(),
            "Equilateral Triangle - All three sides are equal"
        );
        assert_eq!(
            classify_triangle("2", "3", "4").unwrap().to_string(),
            "Scalene Triangle - All three sides are different"
        );
    }

    #[test]
    fn test_idempotent() {
        let first = classify_triangle("5", "5", "8");
        for _ in 0..10 {
            assert_eq!(classify_triangle("5", "5", "8"), first);
        }
    }
}
