//!
//! State for an input field with a mask.
//!
//! Doesn't render anything. Feed it the raw text of the input
//! after each change and write [MaskedInputState::value] back.
//!
//! * `on_change` is called with the formatted value after each change.
//! * `on_complete` is called when the value fills the mask.
//! * `on_invalid` is called when `clear_if_not_match` is set and the
//!   value doesn't fill the mask.
//!
//! ```
//! use rat_mask::MaskOptions;
//! use rat_mask::MaskedInputState;
//! use rat_mask::event::MaskOutcome;
//!
//! let mut state = MaskedInputState::new(MaskOptions::new("00000-000"));
//! assert_eq!(state.handle_change("0131"), MaskOutcome::Changed);
//! assert_eq!(state.value(), "0131");
//! assert_eq!(state.handle_change("01310100"), MaskOutcome::Completed);
//! assert_eq!(state.value(), "01310-100");
//! ```
//!

use crate::FocusGained;
use crate::apply::apply_compiled;
use crate::compile::compile;
use crate::event::MaskOutcome;
use crate::mask_token::CompiledMask;
use crate::options::MaskOptions;
use crate::unmask::unmask_with;
use log::debug;
use std::fmt;
use std::fmt::{Debug, Formatter};

/// Callback with the formatted value.
pub type MaskCallback = Box<dyn FnMut(&str) + 'static>;

/// State & callbacks.
pub struct MaskedInputState {
    options: MaskOptions,
    // compiled with options.translation
    compiled: CompiledMask,

    /// Current formatted value.
    /// __read only__ use set_value() or handle_change().
    value: String,
    /// Value fills the mask.
    /// __read only__
    complete: bool,

    on_change: Option<MaskCallback>,
    on_complete: Option<MaskCallback>,
    on_invalid: Option<MaskCallback>,
}

impl Debug for MaskedInputState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaskedInputState")
            .field("options", &self.options)
            .field("compiled", &self.compiled)
            .field("value", &self.value)
            .field("complete", &self.complete)
            .field("on_change", &self.on_change.is_some())
            .field("on_complete", &self.on_complete.is_some())
            .field("on_invalid", &self.on_invalid.is_some())
            .finish()
    }
}

impl Default for MaskedInputState {
    fn default() -> Self {
        Self::new(MaskOptions::default())
    }
}

impl MaskedInputState {
    pub fn new(options: MaskOptions) -> Self {
        let compiled = compile(&options.mask, &options.translation);
        Self {
            options,
            compiled,
            value: Default::default(),
            complete: false,
            on_change: None,
            on_complete: None,
            on_invalid: None,
        }
    }

    /// Called with the formatted value after each change.
    pub fn on_change(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Called when the value fills the mask.
    pub fn on_complete(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_complete = Some(Box::new(f));
        self
    }

    /// Called for a value that doesn't fill the mask,
    /// if `clear_if_not_match` is set.
    pub fn on_invalid(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_invalid = Some(Box::new(f));
        self
    }

    pub fn options(&self) -> &MaskOptions {
        &self.options
    }

    /// Change the options.
    ///
    /// The mask is only compiled again if the mask or the translations
    /// changed. The current value is formatted with the new options.
    pub fn set_options(&mut self, options: MaskOptions) {
        if options.mask != self.options.mask || options.translation != self.options.translation
        {
            self.compiled = compile(&options.mask, &options.translation);
        }
        self.options = options;

        let value = std::mem::take(&mut self.value);
        self.set_value(value);
    }

    /// The compiled mask.
    pub fn compiled(&self) -> &CompiledMask {
        &self.compiled
    }

    /// Mask as string.
    pub fn mask(&self) -> String {
        self.compiled.to_string()
    }

    /// Set a value. Formats with the mask but doesn't
    /// call any callbacks.
    pub fn set_value(&mut self, raw: impl AsRef<str>) {
        let r = apply_compiled(raw.as_ref(), &self.compiled, self.options.direction());
        self.value = r.formatted;
        self.complete = r.complete;
    }

    /// Formatted value.
    pub fn value(&self) -> &str {
        self.value.as_str()
    }

    /// Value without the mask literals.
    pub fn unmasked(&self) -> String {
        unmask_with(&self.value, &self.options.mask, &self.options.translation)
    }

    /// Value fills the mask.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Placeholder for an empty value.
    pub fn placeholder(&self) -> Option<&str> {
        self.options.placeholder.as_deref()
    }

    /// Reset to an empty value.
    pub fn clear(&mut self) -> bool {
        if self.value.is_empty() {
            false
        } else {
            self.value.clear();
            self.complete = false;
            true
        }
    }

    /// What should happen when the input gains focus.
    pub fn focus_gained(&self) -> FocusGained {
        if self.options.select_on_focus {
            FocusGained::SelectAll
        } else {
            FocusGained::None
        }
    }

    /// The raw text of the input changed.
    ///
    /// Formats the new text and calls the callbacks:
    /// `on_invalid` first, then `on_change` and `on_complete` last.
    pub fn handle_change(&mut self, raw: &str) -> MaskOutcome {
        let r = apply_compiled(raw, &self.compiled, self.options.direction());
        let changed = r.formatted != self.value;
        self.value = r.formatted;
        self.complete = r.complete;

        if self.options.clear_if_not_match && !self.complete && !raw.is_empty() {
            debug!("masked_input: invalid {:?}", self.value);
            if let Some(on_invalid) = self.on_invalid.as_mut() {
                on_invalid(&self.value);
            }
        }
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(&self.value);
        }
        if self.complete {
            debug!("masked_input: complete {:?}", self.value);
            if let Some(on_complete) = self.on_complete.as_mut() {
                on_complete(&self.value);
            }
        }

        if !changed {
            MaskOutcome::Unchanged
        } else if self.complete {
            MaskOutcome::Completed
        } else {
            MaskOutcome::Changed
        }
    }
}
