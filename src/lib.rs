#![doc = include_str!("../readme.md")]
#![allow(clippy::uninlined_format_args)]
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod apply;
pub mod compile;
pub mod mask_token;
pub mod masked_input;
pub mod normalize;
pub mod options;
pub mod translation;
pub mod unmask;

pub use apply::{apply, apply_compiled, format};
pub use compile::compile;
pub use mask_token::{CompiledMask, EditDirection, Token};
pub use masked_input::MaskedInputState;
pub use normalize::normalize;
pub use options::MaskOptions;
pub use translation::{CharClass, Translation, TranslationTable};
pub use unmask::{is_complete, unmask, unmask_with};

pub mod event {
    //!
    //! Outcome of feeding a new raw value into a [MaskedInputState](crate::MaskedInputState).
    //!

    /// Result of handling a changed value.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    pub enum MaskOutcome {
        /// The formatted value is the same as before.
        Unchanged,
        /// The formatted value changed, but doesn't fill the mask yet.
        Changed,
        /// The formatted value changed and all required
        /// positions of the mask are filled.
        Completed,
    }

    impl MaskOutcome {
        /// Anything happened to the value.
        pub fn is_changed(&self) -> bool {
            *self != MaskOutcome::Unchanged
        }
    }
}

/// This flag tells the widget what to do when
/// it gains focus.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FocusGained {
    /// None
    #[default]
    None,
    /// Select all text on focus gain.
    SelectAll,
}

/// Result of applying a mask to some value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MaskResult {
    /// Formatted value.
    pub formatted: String,
    /// All required positions of the mask have been filled
    /// and no input was left over.
    pub complete: bool,
}

impl MaskResult {
    pub fn new(formatted: impl Into<String>, complete: bool) -> Self {
        Self {
            formatted: formatted.into(),
            complete,
        }
    }

    /// Empty and incomplete.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Errors for user-supplied patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskError {
    /// A user-supplied character pattern is not a valid regex.
    InvalidPattern(String),
}

impl Display for MaskError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for MaskError {}

mod _private {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct NonExhaustive;
}
