//! Intent classification.
//!
//! A message's keywords are matched against a fixed list of rules in priority
//! order; the first rule whose condition holds decides the intent. This is a
//! plain rule-based classifier, not a state machine: nothing is retained
//! between calls.

/// The chatbot's recognised intents, in dispatch priority order.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Exactly two purely numeric keywords, taken as an inclusive price range.
    PriceRange { min: f64, max: f64 },
    /// The keyword "categoria" plus a category name (already lowercased).
    Category(String),
    /// "estado" / "activo": active-or-inactive status per product.
    ActiveStatus,
    /// "stock" / "inventario": stock per product.
    Stock,
    /// "descripcion" / "detalle": description per product.
    Description,
    /// "disponibilidad": availability description per product.
    Availability,
    /// "imagen" / "foto": image URL per product.
    Image,
    /// Fallback: match keywords as substrings of product name/description.
    Lookup(Vec<String>),
    /// No keywords survived tokenization; nothing to match against.
    Unknown,
}

impl Intent {
    /// Classifies a keyword list (plus the raw message, needed for category
    /// extraction) into an [`Intent`].
    ///
    /// Rules are evaluated in fixed priority order and the first match wins,
    /// so the branches are mutually exclusive by construction.
    pub fn classify(keywords: &[String], raw: &str) -> Self {
        // A digit-only token always parses as f64 (overflow rounds toward
        // infinity), so the numeric count matches the digit-token count.
        let numeric: Vec<f64> = keywords
            .iter()
            .filter(|k| !k.is_empty() && k.chars().all(|c| c.is_ascii_digit()))
            .filter_map(|k| k.parse().ok())
            .collect();
        if numeric.len() == 2 {
            let (min, max) = if numeric[0] <= numeric[1] {
                (numeric[0], numeric[1])
            } else {
                (numeric[1], numeric[0])
            };
            return Intent::PriceRange { min, max };
        }

        let has = |word: &str| keywords.iter().any(|k| k == word);

        if has("categoria") {
            return Intent::Category(category_name(raw));
        }
        if has("estado") || has("activo") {
            return Intent::ActiveStatus;
        }
        if has("stock") || has("inventario") {
            return Intent::Stock;
        }
        if has("descripcion") || has("detalle") {
            return Intent::Description;
        }
        if has("disponibilidad") {
            return Intent::Availability;
        }
        if has("imagen") || has("foto") {
            return Intent::Image;
        }
        if !keywords.is_empty() {
            return Intent::Lookup(keywords.to_vec());
        }

        Intent::Unknown
    }
}

/// Strips the trigger word "categoria" from the raw message and treats the
/// remainder as the category name, lowercased for case-insensitive matching.
fn category_name(raw: &str) -> String {
    raw.to_lowercase()
        .split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|word| !word.is_empty() && *word != "categoria")
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn two_numbers_classify_as_price_range_sorted() {
        let keywords = kw(&["productos", "10", "20"]);
        assert_eq!(
            Intent::classify(&keywords, "productos 10 20"),
            Intent::PriceRange { min: 10.0, max: 20.0 }
        );

        // Reversed input order yields the same range.
        let keywords = kw(&["productos", "20", "10"]);
        assert_eq!(
            Intent::classify(&keywords, "productos 20 10"),
            Intent::PriceRange { min: 10.0, max: 20.0 }
        );
    }

    #[test]
    fn huge_numeric_keywords_still_form_a_price_range() {
        let keywords = kw(&["10", "99999999999999999999999"]);
        match Intent::classify(&keywords, "10 99999999999999999999999") {
            Intent::PriceRange { min, max } => {
                assert_eq!(min, 10.0);
                assert!(max > 1e22);
            }
            other => panic!("expected price range, got {other:?}"),
        }
    }

    #[test]
    fn one_or_three_numbers_are_not_a_price_range() {
        let keywords = kw(&["pollo", "10"]);
        assert!(matches!(
            Intent::classify(&keywords, "pollo 10"),
            Intent::Lookup(_)
        ));

        let keywords = kw(&["5", "10", "20"]);
        assert!(matches!(
            Intent::classify(&keywords, "5 10 20"),
            Intent::Lookup(_)
        ));
    }

    #[test]
    fn price_range_outranks_category() {
        let keywords = kw(&["categoria", "10", "20"]);
        assert_eq!(
            Intent::classify(&keywords, "categoria 10 20"),
            Intent::PriceRange { min: 10.0, max: 20.0 }
        );
    }

    #[test]
    fn category_extracts_remainder_of_message() {
        let keywords = kw(&["categoria", "bebidas"]);
        assert_eq!(
            Intent::classify(&keywords, "categoria Bebidas"),
            Intent::Category("bebidas".into())
        );
    }

    #[test]
    fn trigger_words_map_to_their_branches() {
        for (words, expected) in [
            (vec!["estado"], Intent::ActiveStatus),
            (vec!["activo"], Intent::ActiveStatus),
            (vec!["stock"], Intent::Stock),
            (vec!["inventario"], Intent::Stock),
            (vec!["descripcion"], Intent::Description),
            (vec!["detalle"], Intent::Description),
            (vec!["disponibilidad"], Intent::Availability),
            (vec!["imagen"], Intent::Image),
            (vec!["foto"], Intent::Image),
        ] {
            let keywords = kw(&words);
            assert_eq!(Intent::classify(&keywords, &words.join(" ")), expected);
        }
    }

    #[test]
    fn status_outranks_stock_when_both_present() {
        let keywords = kw(&["estado", "stock"]);
        assert_eq!(Intent::classify(&keywords, "estado stock"), Intent::ActiveStatus);
    }

    #[test]
    fn plain_keywords_fall_back_to_lookup() {
        let keywords = kw(&["pollo", "brasa"]);
        assert_eq!(
            Intent::classify(&keywords, "pollo brasa"),
            Intent::Lookup(kw(&["pollo", "brasa"]))
        );
    }

    #[test]
    fn empty_keywords_are_unknown() {
        assert_eq!(Intent::classify(&[], "¿?"), Intent::Unknown);
    }
}
