//! Relay response interpretation.
//!
//! DESIGN
//! ======
//! The relay hands back whatever the upstream QA API produced. Its shape is
//! assumed, never enforced, so this module is the one place that inspects
//! the raw JSON. `AskReply::from_body` picks exactly one variant and the rest
//! of the client matches on it instead of probing fields again.
//!
//! Card fields are read leniently: numbers may arrive as numeric strings and
//! placeholder text such as `"N/A"` counts as absent.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Highest price tier rendered; larger values are clamped.
pub const MAX_PRICE_TIER: u32 = 5;

const PLACEHOLDERS: [&str; 2] = ["N/A", "Unknown"];

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub state: String,
}

/// One restaurant as shown to the user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RestaurantCard {
    pub name: String,
    pub location: Location,
    pub price: Option<u32>,
    pub rating: Option<f64>,
    pub review_count: Option<u64>,
    pub website: Option<String>,
    pub endorsement: Option<String>,
}

impl RestaurantCard {
    /// Read a card out of one `results` entry. Non-objects yield `None`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let location = obj.get("location").unwrap_or(&Value::Null);

        let price = number_field(obj.get("price"))
            .filter(|p| *p >= 1.0)
            .map(|p| clamp_price(p.round()));

        Some(Self {
            name: text_field(obj.get("name")).unwrap_or_else(|| "Unknown restaurant".to_owned()),
            location: Location {
                city: text_field(location.get("city")).unwrap_or_default(),
                state: text_field(location.get("state")).unwrap_or_default(),
            },
            price,
            rating: number_field(obj.get("rating")).filter(|r| *r > 0.0),
            review_count: number_field(obj.get("review_count"))
                .filter(|c| *c >= 0.0)
                .map(|c| c.round() as u64),
            website: text_field(obj.get("website")),
            endorsement: text_field(obj.get("endorsement")),
        })
    }

    /// `"City, ST"`, or whichever half is known.
    #[must_use]
    pub fn location_line(&self) -> String {
        match (self.location.city.is_empty(), self.location.state.is_empty()) {
            (false, false) => format!("{}, {}", self.location.city, self.location.state),
            (false, true) => self.location.city.clone(),
            (true, false) => self.location.state.clone(),
            (true, true) => String::new(),
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_price(p: f64) -> u32 {
    (p.min(f64::from(MAX_PRICE_TIER))) as u32
}

fn text_field(value: Option<&Value>) -> Option<String> {
    let text = match value? {
        Value::String(s) => s.trim().to_owned(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    if text.is_empty() || PLACEHOLDERS.contains(&text.as_str()) {
        return None;
    }
    Some(text)
}

fn number_field(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite())
}

// =============================================================================
// REPLY
// =============================================================================

/// Why a reply carried nothing to show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmptyReply {
    /// The body itself was empty or falsy.
    NoResults,
    /// A body arrived but held neither `results` nor `answer`.
    NoAnswer,
}

/// A relay response body, classified once.
#[derive(Clone, Debug, PartialEq)]
pub enum AskReply {
    CardList(Vec<RestaurantCard>),
    TextAnswer(String),
    Empty(EmptyReply),
}

impl AskReply {
    /// Classify a relay body. First match wins:
    /// falsy body, non-empty `results`, present `answer`, otherwise no answer.
    #[must_use]
    pub fn from_body(body: &Value) -> Self {
        if is_falsy(body) {
            return Self::Empty(EmptyReply::NoResults);
        }

        if let Some(results) = body.get("results").and_then(Value::as_array) {
            let cards: Vec<RestaurantCard> = results.iter().filter_map(RestaurantCard::from_value).collect();
            if !cards.is_empty() {
                return Self::CardList(cards);
            }
        }

        match body.get("answer") {
            Some(Value::String(answer)) if !answer.is_empty() => Self::TextAnswer(answer.clone()),
            Some(other) if !is_falsy(other) => Self::TextAnswer(other.to_string()),
            _ => Self::Empty(EmptyReply::NoAnswer),
        }
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_none_or(|f| f == 0.0 || f.is_nan()),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
