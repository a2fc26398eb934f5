use crate::mask_token::CompiledMask;

/// Extract all chars from the raw value that could be
/// accepted by any pattern of the mask.
///
/// This doesn't care for positions in the mask, it only
/// filters out everything that can never be used.
/// A mask without patterns accepts nothing.
pub fn normalize(raw: &str, mask: &CompiledMask) -> String {
    let classes = mask.classes();
    if classes.is_empty() {
        return String::new();
    }
    raw.chars()
        .filter(|c| classes.iter().any(|class| class.is_match(*c)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::compile_default;

    #[test]
    fn test_normalize() {
        let m = compile_default("(00) 00000-0000");
        assert_eq!(normalize("(11) 98765-4321", &m), "11987654321");
        assert_eq!(normalize("abc", &m), "");

        let m = compile_default("SSS-0000");
        assert_eq!(normalize("abc-1234!", &m), "abc1234");
    }

    #[test]
    fn test_literals_only() {
        let m = compile_default("--/--");
        assert_eq!(normalize("12345", &m), "");
    }

    #[test]
    fn test_not_positional() {
        // letters are kept even if they come where digits are expected.
        let m = compile_default("0S");
        assert_eq!(normalize("ab12", &m), "ab12");
    }
}
