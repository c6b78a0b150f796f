// Compile-time error taxonomy
use crate::*;

fn kind(pattern: &str) -> SyntaxErrorKind {
    Regex::new(pattern).unwrap_err().kind
}

#[test]
fn test_unclosed_class() {
    let err = Regex::new("[abc").unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::UnclosedClass);
    assert_eq!(err.offset, 0);
    assert_eq!(
        err.to_string(),
        "unclosed character class (missing ']') at offset 0"
    );
}

#[test]
fn test_dangling_quantifier() {
    assert_eq!(kind("*"), SyntaxErrorKind::DanglingQuantifier('*'));
    assert_eq!(kind("+abc"), SyntaxErrorKind::DanglingQuantifier('+'));
    assert_eq!(kind("a*?"), SyntaxErrorKind::DanglingQuantifier('?'));
    let err = Regex::new("ab++").unwrap_err();
    assert_eq!(err.offset, 3);
    assert_eq!(err.to_string(), "quantifier '+' has nothing to repeat at offset 3");
}

#[test]
fn test_invalid_range() {
    let err = Regex::new("[a-zZ-A]").unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::InvalidRange('Z', 'A'));
    assert_eq!(err.offset, 4);
}

#[test]
fn test_bad_escapes() {
    assert_eq!(kind("\\"), SyntaxErrorKind::TrailingBackslash);
    assert_eq!(kind(r"\b"), SyntaxErrorKind::UnknownEscape('b'));
    assert_eq!(kind(r"[a\"), SyntaxErrorKind::TrailingBackslash);
}

#[test]
fn test_error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(Regex::new("[x").unwrap_err());
    assert!(err.to_string().contains("unclosed"));
    assert!("[x".parse::<Regex>().is_err());
}

#[test]
fn test_from_ast_rejects_reversed_range() {
    let root = Node::Concat(vec![Node::Class(CharClass::new(
        vec![ClassItem::Range('z', 'a')],
        false,
    ))]);
    let err = Regex::from_ast(root).unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::InvalidRange('z', 'a'));
}

#[test]
fn test_from_ast_rejects_empty_class() {
    // `[]` and `[^]` do not parse, so the tree cannot be accepted either
    for negated in [false, true] {
        let root = Node::Concat(vec![Node::Class(CharClass::new(vec![], negated))]);
        let err = Regex::from_ast(root).unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::EmptyClass);
        assert_eq!(err.to_string(), "empty character class at offset 0");
    }
}

#[test]
fn test_cache_does_not_keep_failures() {
    let mut cache = PatternCache::new(4);
    assert!(cache.get_or_compile("[oops").is_err());
    assert!(cache.is_empty());
}
