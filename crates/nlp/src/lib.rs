//! # Mercabot NLP
//!
//! Keyword extraction for chatbot messages.
//!
//! This crate owns the tokenizer and the Spanish stopword corpus:
//! - Lowercase word tokenization, splitting on punctuation runs
//! - Stopword filtering
//!
//! **No catalog or HTTP concerns**: intent dispatch and product lookups belong in
//! `mercabot-core` and `mercabot-catalog`.

pub mod stopwords;

pub use stopwords::is_stopword;

/// Extracts the keyword list from a raw user message.
///
/// The message is lowercased and split on every run of non-alphanumeric
/// characters, so punctuation attached to a word ("pollo," / "pollo-brasa")
/// yields the words themselves. Tokens are then filtered against the Spanish
/// stopword set. Order is preserved and duplicates are retained, so downstream
/// dispatch sees the message exactly as typed.
///
/// # Returns
/// A `Vec<String>` of keywords. Empty input, or input with no alphanumeric
/// content, yields an empty vec.
pub fn keywords(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty() && !is_stopword(token))
        .map(str::to_string)
        .collect()
}
