//!
//! Translation of mask characters to acceptance rules.
//!
//! The default table knows these mask characters:
//!
//! * `0`: must enter a digit.
//! * `9`: can enter a digit.
//! * `#`: can enter any number of digits.
//! * `A`: must enter a letter or digit.
//! * `S`: must enter a letter.
//! * `X`: can enter a letter or digit.
//!
//! Every other character of a mask is a literal.
//!
//! ```
//! use rat_mask::{CharClass, Translation, TranslationTable};
//!
//! let table = TranslationTable::default()
//!     .with('U', Translation::new(CharClass::regex("[A-Z]").expect("regex")));
//! assert!(table.get('U').is_some());
//! assert!(table.get('0').is_some());
//! ```
//!

use crate::MaskError;
use log::debug;
use regex::Regex;
use rustc_hash::FxHashMap;
use std::fmt;
use std::fmt::{Debug, Formatter};
use std::sync::{Arc, LazyLock};

/// Test for a single input character.
#[allow(variant_size_differences)]
#[derive(Clone)]
pub enum CharClass {
    /// 0-9
    Digit,
    /// a-z, A-Z
    Letter,
    /// a-z, A-Z, 0-9
    LetterOrDigit,
    /// User supplied regex. Is always anchored to match exactly one char.
    Regex(Regex),
    /// User supplied predicate.
    Func(Arc<dyn Fn(char) -> bool + Send + Sync>),
}

impl CharClass {
    /// Character class from a regex pattern like `[A-Z]`.
    ///
    /// The pattern is matched against exactly one character.
    pub fn regex(pattern: &str) -> Result<CharClass, MaskError> {
        let anchored = format!("^(?:{})$", pattern);
        match Regex::new(&anchored) {
            Ok(re) => Ok(CharClass::Regex(re)),
            Err(e) => Err(MaskError::InvalidPattern(format!("{}: {}", pattern, e))),
        }
    }

    /// Character class from a predicate.
    pub fn func(f: impl Fn(char) -> bool + Send + Sync + 'static) -> CharClass {
        CharClass::Func(Arc::new(f))
    }

    /// Is the char accepted.
    #[inline]
    pub fn is_match(&self, c: char) -> bool {
        match self {
            CharClass::Digit => c.is_ascii_digit(),
            CharClass::Letter => c.is_ascii_alphabetic(),
            CharClass::LetterOrDigit => c.is_ascii_alphanumeric(),
            CharClass::Regex(re) => {
                let mut buf = [0u8; 4];
                re.is_match(c.encode_utf8(&mut buf))
            }
            CharClass::Func(f) => f(c),
        }
    }
}

impl PartialEq for CharClass {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CharClass::Digit, CharClass::Digit) => true,
            (CharClass::Letter, CharClass::Letter) => true,
            (CharClass::LetterOrDigit, CharClass::LetterOrDigit) => true,
            (CharClass::Regex(a), CharClass::Regex(b)) => a.as_str() == b.as_str(),
            (CharClass::Func(a), CharClass::Func(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for CharClass {}

impl Debug for CharClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CharClass::Digit => write!(f, "digit"),
            CharClass::Letter => write!(f, "letter"),
            CharClass::LetterOrDigit => write!(f, "letter|digit"),
            CharClass::Regex(re) => write!(f, "/{}/", re.as_str()),
            CharClass::Func(_) => write!(f, "fn(char)"),
        }
    }
}

/// Acceptance rule for one mask character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// Accepted characters.
    pub class: CharClass,
    /// Can be left empty.
    pub optional: bool,
    /// Takes any number of characters.
    pub recursive: bool,
    /// Replacement character. Informational, it is not
    /// used when applying a mask.
    pub fallback: Option<char>,
}

impl Translation {
    /// Required, single character.
    pub fn new(class: CharClass) -> Self {
        Self {
            class,
            optional: false,
            recursive: false,
            fallback: None,
        }
    }

    /// Required single character from a regex pattern.
    pub fn from_pattern(pattern: &str) -> Result<Self, MaskError> {
        Ok(Self::new(CharClass::regex(pattern)?))
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn fallback(mut self, fallback: char) -> Self {
        self.fallback = Some(fallback);
        self
    }
}

static DEFAULT_TRANSLATION: LazyLock<TranslationTable> = LazyLock::new(|| {
    let mut table = FxHashMap::default();
    table.insert('0', Translation::new(CharClass::Digit));
    table.insert('9', Translation::new(CharClass::Digit).optional(true));
    table.insert(
        '#',
        Translation::new(CharClass::Digit)
            .optional(true)
            .recursive(true),
    );
    table.insert('A', Translation::new(CharClass::LetterOrDigit));
    table.insert('S', Translation::new(CharClass::Letter));
    table.insert(
        'X',
        Translation::new(CharClass::LetterOrDigit).optional(true),
    );
    TranslationTable { table }
});

/// Maps mask characters to their acceptance rules.
#[derive(Clone, PartialEq, Eq)]
pub struct TranslationTable {
    table: FxHashMap<char, Translation>,
}

impl Default for TranslationTable {
    /// A copy of the default table.
    fn default() -> Self {
        DEFAULT_TRANSLATION.clone()
    }
}

impl Debug for TranslationTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut keys = self.table.keys().copied().collect::<Vec<_>>();
        keys.sort_unstable();
        let mut m = f.debug_map();
        for k in keys {
            m.entry(&k, &self.table[&k]);
        }
        m.finish()
    }
}

impl TranslationTable {
    /// The shared default table.
    pub fn default_table() -> &'static TranslationTable {
        &DEFAULT_TRANSLATION
    }

    /// Table without any entries. Every mask char
    /// will be a literal.
    pub fn empty() -> Self {
        Self {
            table: FxHashMap::default(),
        }
    }

    /// Add or replace the rule for a mask char.
    pub fn with(mut self, key: char, translation: Translation) -> Self {
        self.insert(key, translation);
        self
    }

    /// Add or replace the rule for a mask char.
    /// A replaced rule is dropped completely.
    pub fn insert(&mut self, key: char, translation: Translation) -> Option<Translation> {
        debug!("translation {:?} -> {:?}", key, translation);
        self.table.insert(key, translation)
    }

    /// Remove a rule. The char becomes a literal.
    pub fn remove(&mut self, key: char) -> Option<Translation> {
        self.table.remove(&key)
    }

    /// Add/replace all rules of the other table.
    pub fn extend(mut self, other: &TranslationTable) -> Self {
        for (k, v) in other.table.iter() {
            self.table.insert(*k, v.clone());
        }
        self
    }

    /// Rule for the mask char.
    #[inline]
    pub fn get(&self, key: char) -> Option<&Translation> {
        self.table.get(&key)
    }

    #[inline]
    pub fn contains(&self, key: char) -> bool {
        self.table.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
