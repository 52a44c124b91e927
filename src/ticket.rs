// 🎟️ Ticket Price Classifier
// Age → ticket category and price

use crate::error::{Field, WidgetError};
use crate::parse::parse_integer;
use serde::Serialize;

pub const CURRENCY: &str = "GHC";

/// Children and seniors pay the concession price
pub const CONCESSION_PRICE: f64 = 7.00;
pub const ADULT_PRICE: f64 = 10.00;

pub const CHILD_MAX_AGE: i64 = 12;
pub const SENIOR_MIN_AGE: i64 = 65;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TicketCategory {
    Child,
    Adult,
    Senior,
}

impl TicketCategory {
    pub fn name(&self) -> &str {
        match self {
            TicketCategory::Child => "Child",
            TicketCategory::Adult => "Adult",
            TicketCategory::Senior => "Senior",
        }
    }

    pub fn price(&self) -> f64 {
        match self {
            TicketCategory::Child | TicketCategory::Senior => CONCESSION_PRICE,
            TicketCategory::Adult => ADULT_PRICE,
        }
    }

    pub fn for_age(age: i64) -> Self {
        if age <= CHILD_MAX_AGE {
            TicketCategory::Child
        } else if age >= SENIOR_MIN_AGE {
            TicketCategory::Senior
        } else {
            TicketCategory::Adult
        }
    }
}

/// Rows of the pricing table shown next to the form
pub fn pricing_table() -> Vec<String> {
    vec![
        format!("Children ({} & under): {} {:.2}", CHILD_MAX_AGE, CURRENCY, CONCESSION_PRICE),
        format!("Adults ({}-{}): {} {:.2}", CHILD_MAX_AGE + 1, SENIOR_MIN_AGE - 1, CURRENCY, ADULT_PRICE),
        format!("Seniors ({}+): {} {:.2}", SENIOR_MIN_AGE, CURRENCY, CONCESSION_PRICE),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketInput {
    pub age: i64,
}

impl TicketInput {
    pub fn parse(raw: &str) -> Result<Self, WidgetError> {
        let age = parse_integer(raw).ok_or(WidgetError::InvalidInput { field: Field::Age })?;

        if age < 0 {
            return Err(WidgetError::NegativeAge { age });
        }

        Ok(TicketInput { age })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TicketOutput {
    pub price: f64,
    pub category: TicketCategory,
}

impl std::fmt::Display for TicketOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:.2} ({} Ticket)", CURRENCY, self.price, self.category.name())
    }
}

pub fn ticket_price(input: TicketInput) -> TicketOutput {
    let category = TicketCategory::for_age(input.age);
    TicketOutput {
        price: category.price(),
        category,
    }
}

pub fn classify_ticket(raw: &str) -> Result<TicketOutput, WidgetError> {
    TicketInput::parse(raw).map(ticket_price)
}

// ============================================================================
// TESTS
// ============================================================================
