//! Approximate token budgeting
//!
//! Tokens are approximated as whitespace-separated words. This is not a
//! real subword tokenizer and undercounts for most languages, but the
//! upstream budget was sized against this measure and it must stay as is.

use std::borrow::Cow;

/// Context window of the deployed model
pub const MAX_TOKENS: usize = 4096;

/// Tokens reserved for the model's reply; also sent as `max_tokens`
pub const RESERVED_OUTPUT_TOKENS: usize = 800;

/// Largest query, in words, forwarded unmodified
pub const MAX_INPUT_TOKENS: usize = MAX_TOKENS - RESERVED_OUTPUT_TOKENS;

/// Count tokens as whitespace-separated words
pub fn count_tokens(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Trim `query` to its first `budget` words
///
/// Queries within budget are returned untouched, whitespace included.
/// Trimmed queries are re-joined with single spaces.
pub fn trim_to_budget(query: &str, budget: usize) -> Cow<'_, str> {
    if count_tokens(query) <= budget {
        return Cow::Borrowed(query);
    }

    let words: Vec<&str> = query.split_whitespace().take(budget).collect();
    Cow::Owned(words.join(" "))
}
