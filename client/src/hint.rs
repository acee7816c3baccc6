//! Cosmetic status lines shown under the transcript.

#[cfg(test)]
#[path = "hint_test.rs"]
mod hint_test;

pub const LOADING_TEXT: &str = "⏳ Searching for the best match...";

const TOP_RATED_HINT: &str = "🔍 Finding top-rated restaurants...";
const BUDGET_HINT: &str = "💰 Looking for budget-friendly options...";
const GENERIC_HINT: &str = "🍽️ Searching for delicious restaurants...";

/// Keyword guess at what a typed-but-unsent draft is after.
#[must_use]
pub fn draft_hint(draft: &str) -> &'static str {
    if draft.contains("best") {
        TOP_RATED_HINT
    } else if draft.contains("cheap") {
        BUDGET_HINT
    } else {
        GENERIC_HINT
    }
}
