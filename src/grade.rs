// 🎓 Grade Classifier
// Percentage score → letter grade

use crate::error::{Field, WidgetError};
use crate::parse::parse_decimal;
use serde::Serialize;

/// Lowest passing bound for each letter, highest first
const THRESHOLDS: [(f64, LetterGrade); 4] = [
    (90.0, LetterGrade::A),
    (80.0, LetterGrade::B),
    (70.0, LetterGrade::C),
    (60.0, LetterGrade::D),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    F,
}

impl LetterGrade {
    pub fn letter(&self) -> &str {
        match self {
            LetterGrade::A => "A",
            LetterGrade::B => "B",
            LetterGrade::C => "C",
            LetterGrade::D => "D",
            LetterGrade::F => "F",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LetterGrade::A => "Excellent",
            LetterGrade::B => "Good",
            LetterGrade::C => "Satisfactory",
            LetterGrade::D => "Needs Improvement",
            LetterGrade::F => "Failing",
        }
    }

    /// Map a score already known to be in [0, 100]
    pub fn from_score(score: f64) -> Self {
        THRESHOLDS
            .iter()
            .find(|(bound, _)| score >= *bound)
            .map(|(_, grade)| *grade)
            .unwrap_or(LetterGrade::F)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeInput {
    pub score: f64,
}

impl GradeInput {
    /// Validate raw field text into a score in [0, 100]
    pub fn parse(raw: &str) -> Result<Self, WidgetError> {
        let score = parse_decimal(raw).ok_or(WidgetError::InvalidInput { field: Field::Score })?;

        if !(0.0..=100.0).contains(&score) {
            return Err(WidgetError::OutOfRange { value: score });
        }

        Ok(GradeInput { score })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradeOutput {
    pub letter: LetterGrade,
    pub label: &'static str,
}

impl std::fmt::Display for GradeOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.letter.letter(), self.label)
    }
}

pub fn grade(input: GradeInput) -> GradeOutput {
    let letter = LetterGrade::from_score(input.score);
    GradeOutput {
        letter,
        label: letter.label(),
    }
}

/// Parse, validate and classify in one step
pub fn classify_grade(raw: &str) -> Result<GradeOutput, WidgetError> {
    GradeInput::parse(raw).map(grade)
}

// ============================================================================
// TESTS
// ============================================================================
