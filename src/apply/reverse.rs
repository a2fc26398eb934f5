use crate::MaskResult;
use crate::mask_token::{CompiledMask, Token};
use log::{debug, warn};

const DECIMAL_SEP: char = ',';
const GROUPING_SEP: char = '.';

/// Fill the mask right to left.
///
/// If the mask contains a ',' it is a currency mask. The fraction
/// after the first ',' is filled from the end of the input and
/// padded with '0'. The rest of the input becomes the integer part,
/// without leading zeros and regrouped in runs of 3 with '.'.
///
/// Otherwise the mask is walked backwards. A '.' in the mask is
/// only written after 3 digits. A required pattern that doesn't
/// get a char stops the walk.
///
/// The result is complete if the required count of the mask is
/// reached and all input has been used.
pub fn apply_reverse(normalized: &str, mask: &CompiledMask) -> MaskResult {
    let value = normalized.chars().collect::<Vec<_>>();
    if value.is_empty() {
        return MaskResult::empty();
    }

    let required = mask.required_count();

    let (out, cursor, filled) = if let Some(dec_idx) = mask.decimal_separator() {
        if mask.decimal_separator_count() > 1 {
            warn!(
                "apply_reverse: {} decimal separators in {}, using the first",
                mask.decimal_separator_count(),
                mask
            );
        }
        fill_currency(&value, mask.tokens(), dec_idx)
    } else {
        fill_grouped(&value, mask.tokens())
    };

    let formatted = match out.strip_prefix(GROUPING_SEP) {
        Some(v) => v.to_string(),
        None => out,
    };

    MaskResult::new(formatted, filled >= required && cursor < 0)
}

#[inline]
fn char_at(value: &[char], cursor: isize) -> Option<char> {
    if cursor >= 0 {
        value.get(cursor as usize).copied()
    } else {
        None
    }
}

/// Currency. Returns (formatted, cursor, filled).
fn fill_currency(value: &[char], tokens: &[Token], dec_idx: usize) -> (String, isize, usize) {
    let mut cursor = value.len() as isize - 1;
    let mut filled = 0;

    // fraction
    let frac_len = tokens.len() - 1 - dec_idx;
    let mut frac = Vec::with_capacity(frac_len);
    for _ in 0..frac_len {
        let Some(c) = char_at(value, cursor) else {
            break;
        };
        if c.is_ascii_digit() {
            frac.push(c);
            cursor -= 1;
            filled += 1;
        }
    }
    while frac.len() < frac_len {
        frac.push('0');
    }

    // integer
    let mut int = Vec::new();
    for tok in tokens[..dec_idx].iter().rev() {
        match tok {
            Token::Literal(_) => {
                // separators are regenerated.
            }
            Token::Pattern {
                class, recursive, ..
            } => {
                if *recursive {
                    while let Some(c) = char_at(value, cursor) {
                        if !class.is_match(c) {
                            break;
                        }
                        int.push(c);
                        cursor -= 1;
                        filled += 1;
                    }
                } else if let Some(c) = char_at(value, cursor) {
                    if class.is_match(c) {
                        int.push(c);
                        cursor -= 1;
                        filled += 1;
                    }
                }
            }
        }
    }
    // collected backwards
    int.reverse();
    let int = strip_leading_zeros(&int);

    let mut out = group_thousands(int);
    out.push(DECIMAL_SEP);
    out.extend(frac.iter().rev());

    debug!("fill_currency {:?} -> {:?}", value, out);

    (out, cursor, filled)
}

fn strip_leading_zeros(int: &[char]) -> &[char] {
    match int.iter().position(|c| *c != '0') {
        Some(pos) => &int[pos..],
        None if int.is_empty() => &['0'],
        None => &int[int.len() - 1..],
    }
}

/// Insert a grouping separator every 3 digits, counted from the right.
fn group_thousands(int: &[char]) -> String {
    let mut out = String::new();
    for (i, c) in int.iter().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            out.push(GROUPING_SEP);
        }
        out.push(*c);
    }
    out
}

/// Generic right to left. Returns (formatted, cursor, filled).
///
/// A recursive pattern has no separators of its own in the mask,
/// it gets a '.' every 3 digits.
fn fill_grouped(value: &[char], tokens: &[Token]) -> (String, isize, usize) {
    let mut cursor = value.len() as isize - 1;
    let mut filled = 0;
    let mut digit_count = 0;

    // built backwards
    let mut rev = String::new();

    for tok in tokens.iter().rev() {
        match tok {
            Token::Literal(s) => {
                if s.as_ref() == "." {
                    if digit_count > 0 && digit_count % 3 == 0 {
                        rev.push(GROUPING_SEP);
                        digit_count = 0;
                    }
                } else {
                    rev.extend(s.chars().rev());
                }
            }
            Token::Pattern {
                class,
                optional,
                recursive,
                ..
            } => {
                if *recursive {
                    while let Some(c) = char_at(value, cursor) {
                        if !class.is_match(c) {
                            break;
                        }
                        if digit_count > 0 && digit_count % 3 == 0 {
                            rev.push(GROUPING_SEP);
                        }
                        rev.push(c);
                        digit_count += 1;
                        cursor -= 1;
                        filled += 1;
                    }
                } else if let Some(c) = char_at(value, cursor) {
                    if class.is_match(c) {
                        rev.push(c);
                        digit_count += 1;
                        cursor -= 1;
                        filled += 1;
                    } else if !*optional {
                        debug!("fill_grouped: stop at {:?}", tok);
                        break;
                    }
                } else if !*optional {
                    break;
                }
            }
        }
    }

    (rev.chars().rev().collect(), cursor, filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::compile_default;

    fn rev(v: &str, m: &str) -> MaskResult {
        apply_reverse(v, &compile_default(m))
    }

    #[test]
    fn test_currency() {
        let r = rev("123456", "#.##0,00");
        assert_eq!(r.formatted, "1.234,56");
        assert!(r.complete);

        let r = rev("75", "#.##0,00");
        assert_eq!(r.formatted, "0,75");
        assert!(!r.complete);

        let r = rev("5", "#.##0,00");
        assert_eq!(r.formatted, "0,05");

        let r = rev("100000000", "#.##0,00");
        assert_eq!(r.formatted, "1.000.000,00");
        assert!(r.complete);

        let r = rev("1000000", "#.##0,00");
        assert_eq!(r.formatted, "10.000,00");
    }

    #[test]
    fn test_leading_zeros() {
        let r = rev("000123", "#.##0,00");
        assert_eq!(r.formatted, "1,23");
        let r = rev("00000", "#.##0,00");
        assert_eq!(r.formatted, "0,00");
    }

    #[test]
    fn test_group() {
        assert_eq!(group_thousands(&['1']), "1");
        assert_eq!(group_thousands(&['1', '2', '3']), "123");
        assert_eq!(group_thousands(&['1', '2', '3', '4']), "1.234");
        assert_eq!(
            group_thousands(&['1', '2', '3', '4', '5', '6', '7']),
            "1.234.567"
        );
    }

    #[test]
    fn test_generic() {
        let r = rev("12345", "#.##0");
        assert_eq!(r.formatted, "12.345");
        assert!(r.complete);

        let r = rev("123", "#.##0");
        assert_eq!(r.formatted, "123");
        assert!(r.complete);

        let r = rev("1234", "#.##0");
        assert_eq!(r.formatted, "1.234");
    }

    #[test]
    fn test_generic_literals() {
        let r = rev("1234", "00-00");
        assert_eq!(r.formatted, "12-34");
        assert!(r.complete);

        // stops at the first required slot without input.
        let r = rev("12", "00-00");
        assert_eq!(r.formatted, "-12");
        assert!(!r.complete);

        let r = rev("123456", "00-00");
        assert_eq!(r.formatted, "34-56");
        assert!(!r.complete);
    }

    #[test]
    fn test_generic_optional() {
        // optional slot without input is skipped.
        let r = rev("123", "90-00");
        assert_eq!(r.formatted, "1-23");
        assert!(r.complete);

        let r = rev("1234", "90-00");
        assert_eq!(r.formatted, "12-34");
        assert!(r.complete);

        // the required slot before it stops the walk.
        let r = rev("12", "90-00");
        assert_eq!(r.formatted, "-12");
        assert!(!r.complete);

        // optional slot with a char of the wrong class is skipped,
        // the char goes to the next slot.
        let r = rev("a12", "S900");
        assert_eq!(r.formatted, "a12");
        assert!(r.complete);
    }
}
