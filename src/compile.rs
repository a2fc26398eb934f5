//!
//! Compiles a mask string into tokens.
//!
//! * A mask char found in the [TranslationTable] becomes a pattern.
//! * `\` escapes the following character. It is always a literal.
//! * Everything else is a literal.
//!
//! Compiling never fails. A trailing `\` is dropped.
//!

use crate::mask_token::{CompiledMask, Token};
use crate::translation::TranslationTable;
use log::debug;
use unicode_segmentation::UnicodeSegmentation;

/// Compile the mask with the given translations.
pub fn compile(mask: &str, table: &TranslationTable) -> CompiledMask {
    let mut out = Vec::<Token>::new();

    let mut esc = false;
    for m in mask.graphemes(true) {
        let tok = if esc {
            esc = false;
            Token::Literal(Box::from(m))
        } else if m == "\\" {
            esc = true;
            continue;
        } else if let Some((c, tr)) = single_char(m).and_then(|c| table.get(c).map(|tr| (c, tr))) {
            Token::pattern(c, tr)
        } else {
            Token::Literal(Box::from(m))
        };
        out.push(tok);
    }

    debug!("compile {:?} -> {} tokens", mask, out.len());

    CompiledMask {
        tokens: out,
        keys: CompiledMask::keys_of(table, mask),
    }
}

/// Compile with the default translations.
pub fn compile_default(mask: &str) -> CompiledMask {
    compile(mask, TranslationTable::default_table())
}

fn single_char(s: &str) -> Option<char> {
    let mut it = s.chars();
    match (it.next(), it.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
