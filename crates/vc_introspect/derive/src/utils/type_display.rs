use quote::ToTokens;
use syn::Type;

/// Words after which a `(` keeps its leading space, e.g. `&mut (u8, u8)`.
const SPACED_KEYWORDS: &[&str] = &["mut", "const", "dyn", "impl", "as"];

/// The display string of a declared field type.
///
/// Keeps the source spelling and only normalizes the spacing the token
/// printer inserts: `Vec < u8 >` becomes `Vec<u8>`, `std :: string :: String`
/// becomes `std::string::String` and `[u8 ; 4]` becomes `[u8; 4]`.
pub(crate) fn type_display(ty: &Type) -> String {
    normalize(&ty.to_token_stream().to_string())
}

fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == ' ' && drop_space(&out, chars.peek().copied()) {
            continue;
        }
        out.push(ch);
    }

    out
}

fn drop_space(before: &str, next: Option<char>) -> bool {
    let (Some(prev), Some(next)) = (before.chars().next_back(), next) else {
        return true;
    };

    if matches!(prev, '<' | ':' | '&' | '*' | '(' | '[') {
        return true;
    }

    match next {
        '<' | '>' | ':' | ',' | ';' | ')' | ']' => true,
        // `Fn (u8)` -> `Fn(u8)`, but not `-> (u8, u8)` or `&mut (u8, u8)`.
        '(' => {
            let word = before
                .rsplit(|c: char| !(c.is_alphanumeric() || c == '_'))
                .next()
                .unwrap_or_default();
            !word.is_empty() && !SPACED_KEYWORDS.contains(&word)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize, type_display};

    fn display(src: &str) -> String {
        type_display(&syn::parse_str(src).unwrap())
    }

    #[test]
    fn plain_paths() {
        assert_eq!(display("i32"), "i32");
        assert_eq!(display("String"), "String");
        assert_eq!(display("std::string::String"), "std::string::String");
        assert_eq!(display("::core::num::NonZeroU8"), "::core::num::NonZeroU8");
    }

    #[test]
    fn generics_and_arrays() {
        assert_eq!(display("Vec<i32>"), "Vec<i32>");
        assert_eq!(display("Vec<Vec<u8>>"), "Vec<Vec<u8>>");
        assert_eq!(display("Option<Vec<(u8, String)>>"), "Option<Vec<(u8, String)>>");
        assert_eq!(display("[u8; 4]"), "[u8; 4]");
        assert_eq!(display("<u8 as Tr>::Out"), "<u8 as Tr>::Out");
    }

    #[test]
    fn references_and_functions() {
        assert_eq!(display("&'static str"), "&'static str");
        assert_eq!(display("&mut (u8, u8)"), "&mut (u8, u8)");
        assert_eq!(display("*const u8"), "*const u8");
        assert_eq!(display("Box<dyn Fn(u8) -> u8>"), "Box<dyn Fn(u8) -> u8>");
        assert_eq!(display("fn(u8) -> (u8, u8)"), "fn(u8) -> (u8, u8)");
    }

    #[test]
    fn already_compact() {
        assert_eq!(normalize("Vec<i32>"), "Vec<i32>");
        assert_eq!(normalize(" u8 "), "u8");
    }
}
