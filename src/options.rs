use crate::_private::NonExhaustive;
use crate::mask_token::EditDirection;
use crate::translation::{Translation, TranslationTable};

/// Configuration for a masked value.
///
/// ```
/// use rat_mask::{MaskOptions, Translation};
///
/// let opt = MaskOptions::new("AAA-0000")
///     .translation('A', Translation::from_pattern("[A-Z]").expect("regex"))
///     .clear_if_not_match(true);
/// assert!(!opt.reverse);
/// ```
#[derive(Debug, Clone)]
pub struct MaskOptions {
    /// The mask.
    pub mask: String,
    /// Fill the mask right to left.
    pub reverse: bool,
    /// Translations. Starts with the defaults.
    pub translation: TranslationTable,
    /// Report values that don't fill the mask via `on_invalid`.
    pub clear_if_not_match: bool,
    /// Select all text when the input gains focus.
    pub select_on_focus: bool,
    /// Placeholder text for an empty input.
    pub placeholder: Option<String>,

    pub non_exhaustive: NonExhaustive,
}

impl Default for MaskOptions {
    fn default() -> Self {
        Self {
            mask: Default::default(),
            reverse: false,
            translation: Default::default(),
            clear_if_not_match: false,
            select_on_focus: false,
            placeholder: None,
            non_exhaustive: NonExhaustive,
        }
    }
}

impl MaskOptions {
    pub fn new(mask: impl Into<String>) -> Self {
        Self {
            mask: mask.into(),
            ..Default::default()
        }
    }

    /// Fill the mask right to left.
    pub fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// Add or replace one translation.
    pub fn translation(mut self, key: char, translation: Translation) -> Self {
        self.translation.insert(key, translation);
        self
    }

    /// Replace the translation table.
    pub fn translations(mut self, table: TranslationTable) -> Self {
        self.translation = table;
        self
    }

    pub fn clear_if_not_match(mut self, clear: bool) -> Self {
        self.clear_if_not_match = clear;
        self
    }

    pub fn select_on_focus(mut self, select: bool) -> Self {
        self.select_on_focus = select;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Fill direction.
    pub fn direction(&self) -> EditDirection {
        EditDirection::from_reverse(self.reverse)
    }
}
