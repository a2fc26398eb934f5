//!
//! Remove the mask from a formatted value and
//! check a value for completeness without applying the mask.
//!

use crate::compile::compile;
use crate::mask_token::Token;
use crate::translation::TranslationTable;

/// Remove the mask literals from the value.
///
/// Without a mask everything but ascii letters, digits and '_'
/// is removed.
///
/// ```
/// use rat_mask::unmask;
///
/// assert_eq!(unmask("(11) 98765-4321", Some("(00) 00000-0000")), "11987654321");
/// assert_eq!(unmask("123.456.789-09", None), "12345678909");
/// ```
pub fn unmask(value: &str, mask: Option<&str>) -> String {
    match mask {
        Some(mask) => unmask_with(value, mask, TranslationTable::default_table()),
        None => value
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
            .collect(),
    }
}

/// Remove the mask literals from the value. The literals are
/// found with the given translations.
///
/// Every occurrence of a literal is removed, wherever it is found.
pub fn unmask_with(value: &str, mask: &str, table: &TranslationTable) -> String {
    let mask = compile(mask, table);

    let mut literals = Vec::<&str>::new();
    for t in mask.tokens() {
        if let Token::Literal(s) = t {
            let s: &str = s;
            if !literals.contains(&s) {
                literals.push(s);
            }
        }
    }

    let mut clean = value.to_string();
    for lit in literals {
        if clean.contains(lit) {
            clean = clean.replace(lit, "");
        }
    }
    clean
}

/// Does the value have at least as many data chars as
/// the mask has required positions?
///
/// This only compares counts after removing the literals,
/// it doesn't check the positions. For live input use the
/// `complete` flag of [apply](crate::apply::apply) instead.
///
/// A given table extends the default translations.
/// An empty value or mask is never complete.
pub fn is_complete(value: &str, mask: &str, table: Option<&TranslationTable>) -> bool {
    if value.is_empty() || mask.is_empty() {
        return false;
    }
    match table {
        Some(table) => count_complete(value, mask, &TranslationTable::default().extend(table)),
        None => count_complete(value, mask, TranslationTable::default_table()),
    }
}

fn count_complete(value: &str, mask: &str, table: &TranslationTable) -> bool {
    let required = compile(mask, table).required_count();
    let filled = unmask_with(value, mask, table).chars().count();
    filled >= required
}
