use super::*;
use crate::net::types::{AskReply, Location};
use crate::state::chat::{AskOutcome, ChatMessage};

fn card(name: &str) -> RestaurantCard {
    RestaurantCard {
        name: name.into(),
        location: Location { city: "Austin".into(), state: "TX".into() },
        price: None,
        rating: None,
        review_count: None,
        website: None,
        endorsement: None,
    }
}

fn full_card() -> RestaurantCard {
    RestaurantCard {
        price: Some(3),
        rating: Some(4.5),
        review_count: Some(120),
        website: Some("https://taco.example".into()),
        endorsement: Some("Locals line up at noon".into()),
        ..card("Taco Place")
    }
}

// =============================================================
// cards
// =============================================================

#[test]
fn price_glyphs_repeat() {
    assert_eq!(price_glyphs(0), "");
    assert_eq!(price_glyphs(2), "💲💲");
}

#[test]
fn minimal_card_has_name_and_location_only() {
    assert_eq!(card_lines(&card("Taco Place")), vec!["🍽️ Taco Place", "📍 Austin, TX"]);
}

#[test]
fn full_card_renders_every_part_in_order() {
    assert_eq!(
        card_lines(&full_card()),
        vec![
            "🍽️ Taco Place 💲💲💲",
            "📍 Austin, TX",
            "⭐ 4.5 (120 reviews)",
            "🔗 https://taco.example",
            "📝 Locals line up at noon",
        ]
    );
}

#[test]
fn rating_without_count_omits_reviews() {
    let c = RestaurantCard { rating: Some(4.0), ..card("Plain") };
    assert!(card_lines(&c).contains(&"⭐ 4".to_owned()));
}

#[test]
fn cards_are_separated_by_blank_line() {
    let out = render_cards(&[card("A"), card("B")]);
    assert_eq!(out, "🍽️ A\n📍 Austin, TX\n\n🍽️ B\n📍 Austin, TX");
}

// =============================================================
// messages
// =============================================================

#[test]
fn user_message_is_labelled() {
    assert_eq!(render_message(&ChatMessage::user("best tacos")), "You: best tacos");
}

#[test]
fn card_message_indents_continuation_lines() {
    let msg = ChatMessage::bot(MessageBody::Cards(vec![card("A"), card("B")]));
    assert_eq!(render_message(&msg), "Bot: 🍽️ A\n     📍 Austin, TX\n\n     🍽️ B\n     📍 Austin, TX");
}

#[test]
fn empty_text_message_still_shows_label() {
    assert_eq!(render_message(&ChatMessage::bot(MessageBody::Text(String::new()))), "Bot:");
}

// =============================================================
// transcript
// =============================================================

#[test]
fn idle_transcript_shows_tagline_only() {
    let mut state = ChatState::new();
    state.set_draft("best tacos");
    assert_eq!(render_transcript(&state), "Zeal AI\nAsk me about restaurants!");
}

#[test]
fn loading_line_shown_while_awaiting() {
    let mut state = ChatState::new();
    state.set_draft("best tacos");
    state.begin_submit().unwrap();
    assert_eq!(status_line(&state), Some(LOADING_TEXT));
    assert!(render_transcript(&state).ends_with(LOADING_TEXT));
}

#[test]
fn draft_hint_shown_when_ready() {
    let mut state = ChatState::new();
    state.set_draft("tacos");
    state.begin_submit().unwrap();
    state.finish(AskOutcome::Reply(AskReply::TextAnswer("Try Taco Place".into())));
    assert_eq!(status_line(&state), None);

    state.set_draft("cheap eats");
    assert_eq!(status_line(&state), Some("💰 Looking for budget-friendly options..."));
}

#[test]
fn transcript_lists_messages_in_order() {
    let mut state = ChatState::new();
    state.set_draft("best tacos");
    state.begin_submit().unwrap();
    state.finish(AskOutcome::Reply(AskReply::CardList(vec![card("Taco Place")])));

    assert_eq!(render_transcript(&state), "Zeal AI\n\nYou: best tacos\n\nBot: 🍽️ Taco Place\n     📍 Austin, TX");
}

#[test]
fn rendering_twice_is_identical() {
    let mut state = ChatState::new();
    state.set_draft("best tacos");
    state.begin_submit().unwrap();
    state.finish(AskOutcome::Reply(AskReply::CardList(vec![full_card(), card("Other")])));
    state.set_draft("cheap");

    let before = state.clone();
    let first = render_transcript(&state);
    let second = render_transcript(&state);
    assert_eq!(first, second);
    assert_eq!(state.messages(), before.messages());
    assert_eq!(state.draft, before.draft);
}
