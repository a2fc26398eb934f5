//!
//! Apply a mask to a raw value.
//!
//! ```
//! use rat_mask::{apply, EditDirection, TranslationTable};
//!
//! let tr = TranslationTable::default_table();
//!
//! let r = apply("11987654321", "(00) 00000-0000", EditDirection::Ltor, tr);
//! assert_eq!(r.formatted, "(11) 98765-4321");
//! assert!(r.complete);
//!
//! let r = apply("123456", "#.##0,00", EditDirection::Rtol, tr);
//! assert_eq!(r.formatted, "1.234,56");
//! ```
//!

use crate::MaskResult;
use crate::compile::compile;
use crate::mask_token::{CompiledMask, EditDirection};
use crate::normalize::normalize;
use crate::translation::TranslationTable;

mod forward;
mod reverse;

pub use forward::apply_forward;
pub use reverse::apply_reverse;

/// Apply the mask to the raw value.
///
/// The mask is compiled for each call, use [apply_compiled]
/// to reuse a compiled mask.
///
/// An empty mask or an empty value give an empty, incomplete result.
pub fn apply(
    raw: &str,
    mask: &str,
    direction: EditDirection,
    table: &TranslationTable,
) -> MaskResult {
    if mask.is_empty() || raw.is_empty() {
        return MaskResult::empty();
    }
    let mask = compile(mask, table);
    apply_compiled(raw, &mask, direction)
}

/// Apply a compiled mask to the raw value.
pub fn apply_compiled(raw: &str, mask: &CompiledMask, direction: EditDirection) -> MaskResult {
    if mask.is_empty() || raw.is_empty() {
        return MaskResult::empty();
    }
    let normalized = normalize(raw, mask);
    if direction.is_rtol() {
        apply_reverse(&normalized, mask)
    } else {
        apply_forward(&normalized, mask)
    }
}

/// Format the value with the default translations, left to right.
pub fn format(raw: &str, mask: &str) -> String {
    apply(
        raw,
        mask,
        EditDirection::Ltor,
        TranslationTable::default_table(),
    )
    .formatted
}
