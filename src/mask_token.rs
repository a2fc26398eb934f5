use crate::translation::{CharClass, Translation, TranslationTable};
use std::fmt;
use std::fmt::{Debug, Display, Formatter};

/// Fill direction for a mask.
///
/// Ltor fills the mask from the start, Rtol from the end.
/// Rtol is used for currency values where the input grows
/// towards the left.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum EditDirection {
    #[default]
    Ltor,
    Rtol,
}

impl Debug for EditDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                EditDirection::Ltor => ">",
                EditDirection::Rtol => "<",
            }
        )
    }
}

impl EditDirection {
    /// Direction from the reverse flag.
    pub fn from_reverse(reverse: bool) -> Self {
        if reverse {
            EditDirection::Rtol
        } else {
            EditDirection::Ltor
        }
    }

    #[inline]
    pub fn is_ltor(&self) -> bool {
        *self == EditDirection::Ltor
    }

    #[inline]
    pub fn is_rtol(&self) -> bool {
        *self == EditDirection::Rtol
    }
}

/// One token of a compiled mask.
#[allow(variant_size_differences)]
#[derive(Clone, PartialEq, Eq)]
pub enum Token {
    /// Output as is.
    Literal(Box<str>),
    /// Placeholder for input.
    Pattern {
        /// mask char
        key: char,
        class: CharClass,
        optional: bool,
        recursive: bool,
    },
}

impl Token {
    pub(crate) fn pattern(key: char, tr: &Translation) -> Self {
        Token::Pattern {
            key,
            class: tr.class.clone(),
            optional: tr.optional,
            recursive: tr.recursive,
        }
    }

    #[inline]
    pub fn is_literal(&self) -> bool {
        matches!(self, Token::Literal(_))
    }

    /// Is a literal with exactly this text.
    #[inline]
    pub fn is_literal_str(&self, s: &str) -> bool {
        match self {
            Token::Literal(l) => l.as_ref() == s,
            Token::Pattern { .. } => false,
        }
    }

    #[inline]
    pub fn is_pattern(&self) -> bool {
        matches!(self, Token::Pattern { .. })
    }

    /// Can be left empty. Recursive patterns are always optional.
    #[inline]
    pub fn is_optional(&self) -> bool {
        match self {
            Token::Literal(_) => true,
            Token::Pattern {
                optional,
                recursive,
                ..
            } => *optional || *recursive,
        }
    }

    /// Counts as a required slot.
    #[inline]
    pub fn is_required(&self) -> bool {
        match self {
            Token::Literal(_) => false,
            Token::Pattern { optional, .. } => !*optional,
        }
    }

    #[inline]
    pub fn is_recursive(&self) -> bool {
        match self {
            Token::Literal(_) => false,
            Token::Pattern { recursive, .. } => *recursive,
        }
    }

    /// Acceptance test. None for literals.
    #[inline]
    pub fn class(&self) -> Option<&CharClass> {
        match self {
            Token::Literal(_) => None,
            Token::Pattern { class, .. } => Some(class),
        }
    }

    /// Test a char against this token. Literals never match.
    #[inline]
    pub fn accepts(&self, c: char) -> bool {
        match self {
            Token::Literal(_) => false,
            Token::Pattern { class, .. } => class.is_match(c),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(s) => write!(f, "{}", s),
            Token::Pattern { key, .. } => write!(f, "{}", key),
        }
    }
}

impl Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(s) => write!(f, "'{}'", s),
            Token::Pattern {
                key,
                class,
                optional,
                recursive,
            } => {
                write!(f, "{}:{:?}", key, class)?;
                if *optional {
                    write!(f, "?")?;
                }
                if *recursive {
                    write!(f, "*")?;
                }
                Ok(())
            }
        }
    }
}

/// A compiled mask.
///
/// Create with [compile](crate::compile::compile).
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CompiledMask {
    pub(crate) tokens: Vec<Token>,
    // keys that need an escape when writing the mask back.
    pub(crate) keys: Vec<char>,
}

impl CompiledMask {
    /// The tokens.
    #[inline]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Mask has any input positions.
    pub fn has_pattern(&self) -> bool {
        self.tokens.iter().any(|v| v.is_pattern())
    }

    /// Number of required input positions.
    pub fn required_count(&self) -> usize {
        self.tokens.iter().filter(|v| v.is_required()).count()
    }

    /// Index of the first ',' literal.
    pub fn decimal_separator(&self) -> Option<usize> {
        self.tokens.iter().position(|v| v.is_literal_str(","))
    }

    /// Number of ',' literals.
    pub fn decimal_separator_count(&self) -> usize {
        self.tokens.iter().filter(|v| v.is_literal_str(",")).count()
    }

    /// Distinct acceptance tests in order of appearance.
    pub fn classes(&self) -> Vec<&CharClass> {
        let mut classes = Vec::<&CharClass>::new();
        for t in &self.tokens {
            if let Some(class) = t.class() {
                if !classes.contains(&class) {
                    classes.push(class);
                }
            }
        }
        classes
    }

    /// Tokens as debug string.
    pub fn debug_mask(&self) -> String {
        use std::fmt::Write;

        let mut buf = String::new();
        for t in self.tokens.iter() {
            _ = write!(buf, "{:?} ", t);
        }
        buf.truncate(buf.trim_end().len());
        buf
    }

    pub(crate) fn needs_escape(&self, lit: &str) -> bool {
        if lit == "\\" {
            return true;
        }
        let mut it = lit.chars();
        match (it.next(), it.next()) {
            (Some(c), None) => self.keys.contains(&c),
            _ => false,
        }
    }

    pub(crate) fn keys_of(table: &TranslationTable, mask: &str) -> Vec<char> {
        let mut keys = mask
            .chars()
            .filter(|c| table.contains(*c))
            .collect::<Vec<_>>();
        keys.sort_unstable();
        keys.dedup();
        keys
    }
}

impl Display for CompiledMask {
    /// Writes the mask. Literals that would be read as
    /// a pattern are escaped.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for t in &self.tokens {
            match t {
                Token::Literal(s) if self.needs_escape(s) => write!(f, "\\{}", s)?,
                t => write!(f, "{}", t)?,
            }
        }
        Ok(())
    }
}

impl Debug for CompiledMask {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "CompiledMask {}", self.debug_mask())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::compile;

    #[test]
    fn test_token() {
        let t = Token::Literal(",".into());
        assert!(t.is_literal_str(","));
        assert!(!t.is_required());
        assert!(t.class().is_none());
        assert!(!t.accepts(','));

        let tr = TranslationTable::default_table();
        let t = Token::pattern('#', tr.get('#').expect("#"));
        assert!(t.is_recursive());
        assert!(t.is_optional());
        assert!(!t.is_required());
        assert!(t.accepts('7'));
        assert_eq!(format!("{:?}", t), "#:digit?*");
    }

    #[test]
    fn test_direction() {
        assert_eq!(EditDirection::from_reverse(true), EditDirection::Rtol);
        assert_eq!(EditDirection::default(), EditDirection::Ltor);
        assert_eq!(format!("{:?}", EditDirection::Rtol), "<");
        assert!(EditDirection::Rtol.is_rtol());
        assert!(!EditDirection::Rtol.is_ltor());
        assert!(EditDirection::from_reverse(false).is_ltor());
        assert!(!EditDirection::Ltor.is_rtol());
    }

    #[test]
    fn test_compiled() {
        let m = compile("#.##0,00", TranslationTable::default_table());
        assert_eq!(m.len(), 8);
        assert_eq!(m.required_count(), 3);
        assert_eq!(m.decimal_separator(), Some(5));
        assert_eq!(m.decimal_separator_count(), 1);
        assert_eq!(m.classes().len(), 1);

        let m = compile("(00) 00000-0000", TranslationTable::default_table());
        assert_eq!(m.required_count(), 11);
        assert_eq!(m.decimal_separator(), None);
    }
}
