//! Plain-text rendering of the transcript.
//!
//! All functions here take shared references and build fresh strings, so
//! rendering the same state twice yields identical output.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt::Write;

use crate::hint::{LOADING_TEXT, draft_hint};
use crate::net::types::RestaurantCard;
use crate::state::chat::{ChatMessage, ChatState, MessageBody};

pub const TITLE: &str = "Zeal AI";
pub const TAGLINE: &str = "Ask me about restaurants!";

const PRICE_GLYPH: &str = "💲";

#[must_use]
pub fn price_glyphs(price: u32) -> String {
    PRICE_GLYPH.repeat(price as usize)
}

/// One card as display lines, optional parts omitted.
#[must_use]
pub fn card_lines(card: &RestaurantCard) -> Vec<String> {
    let mut lines = Vec::with_capacity(5);

    let mut heading = format!("🍽️ {}", card.name);
    if let Some(price) = card.price {
        let _ = write!(heading, " {}", price_glyphs(price));
    }
    lines.push(heading);

    let location = card.location_line();
    if !location.is_empty() {
        lines.push(format!("📍 {location}"));
    }

    if let Some(rating) = card.rating {
        match card.review_count {
            Some(count) => lines.push(format!("⭐ {rating} ({count} reviews)")),
            None => lines.push(format!("⭐ {rating}")),
        }
    }

    if let Some(website) = &card.website {
        lines.push(format!("🔗 {website}"));
    }

    if let Some(endorsement) = &card.endorsement {
        lines.push(format!("📝 {endorsement}"));
    }

    lines
}

/// A card list, one blank line between cards.
#[must_use]
pub fn render_cards(cards: &[RestaurantCard]) -> String {
    cards
        .iter()
        .map(|card| card_lines(card).join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// One message prefixed with its author, continuation lines indented.
#[must_use]
pub fn render_message(message: &ChatMessage) -> String {
    let body = match &message.body {
        MessageBody::Text(text) => text.clone(),
        MessageBody::Cards(cards) => render_cards(cards),
    };

    let label = message.author.label();
    let indent = " ".repeat(label.len() + 2);
    let mut out = String::new();
    for (i, line) in body.lines().enumerate() {
        if i == 0 {
            let _ = write!(out, "{label}: {line}");
        } else if line.is_empty() {
            out.push('\n');
        } else {
            let _ = write!(out, "\n{indent}{line}");
        }
    }
    if out.is_empty() {
        let _ = write!(out, "{label}:");
    }
    out
}

/// The status line under the transcript, if any.
#[must_use]
pub fn status_line(state: &ChatState) -> Option<&'static str> {
    if state.loading() {
        Some(LOADING_TEXT)
    } else if !state.draft.is_empty() {
        Some(draft_hint(&state.draft))
    } else {
        None
    }
}

/// The whole screen: header, transcript, status line.
#[must_use]
pub fn render_transcript(state: &ChatState) -> String {
    let mut out = String::from(TITLE);
    if !state.show_transcript() {
        let _ = write!(out, "\n{TAGLINE}");
        return out;
    }

    for message in state.messages() {
        let _ = write!(out, "\n\n{}", render_message(message));
    }
    if let Some(status) = status_line(state) {
        let _ = write!(out, "\n\n{status}");
    }
    out
}
