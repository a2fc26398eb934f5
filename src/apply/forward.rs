use crate::MaskResult;
use crate::mask_token::{CompiledMask, Token};
use log::debug;

/// Fill the mask left to right.
///
/// Literals are always written. Each pattern takes the next
/// input char if it matches, a recursive pattern takes as many
/// as match. If a required pattern doesn't get a char the
/// rest of the mask is dropped.
///
/// The result is complete if every required pattern that was
/// reached got its char and all input has been used.
pub fn apply_forward(normalized: &str, mask: &CompiledMask) -> MaskResult {
    let value = normalized.chars().collect::<Vec<_>>();

    let mut out = String::new();
    let mut cursor = 0;
    let mut required = 0;
    let mut filled = 0;

    for (idx, tok) in mask.tokens().iter().enumerate() {
        match tok {
            Token::Literal(s) => {
                out.push_str(s);
            }
            Token::Pattern {
                class,
                optional,
                recursive,
                ..
            } => {
                if !*optional {
                    required += 1;
                }

                if *recursive {
                    while cursor < value.len() && class.is_match(value[cursor]) {
                        out.push(value[cursor]);
                        cursor += 1;
                        filled += 1;
                    }
                } else if cursor < value.len() && class.is_match(value[cursor]) {
                    out.push(value[cursor]);
                    cursor += 1;
                    filled += 1;
                } else if !*optional {
                    debug!("apply_forward: stop at {} {:?}", idx, tok);
                    break;
                }
            }
        }
    }

    MaskResult::new(out, filled >= required && cursor >= value.len())
}
