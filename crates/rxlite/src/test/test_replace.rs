// Substitution built on the scan
use crate::*;

#[test]
fn test_replace_all_plain() {
    let re = Regex::new("[Tt]he").unwrap();
    assert_eq!(
        re.replace_all("The car parked in the garage.", "a"),
        "a car parked in a garage."
    );
}

#[test]
fn test_replace_all_template() {
    let re = Regex::new("[a-z]+").unwrap();
    assert_eq!(re.replace_all("ab 12 cd", "<$0>"), "<ab> 12 <cd>");
    assert_eq!(re.replace_all("ab", "$&$&"), "abab");
    assert_eq!(re.replace_all("ab", "$$1 $x"), "$1 $x");
}

#[test]
fn test_replace_empty_matches() {
    let re = Regex::new("x*").unwrap();
    assert_eq!(re.replace_all("abc", "-"), "-a-b-c-");
    assert_eq!(re.replace_all("axb", "-"), "-a--b-");
}

#[test]
fn test_replacen() {
    let re = Regex::new("o").unwrap();
    assert_eq!(re.replacen("foo boo", 1, "0"), "f0o boo");
    assert_eq!(re.replacen("foo boo", 3, "0"), "f00 b0o");
    assert_eq!(re.replacen("foo boo", 0, "0"), "f00 b00");
}

#[test]
fn test_replace_all_with() {
    let re = Regex::new(r"\w+").unwrap();
    let out = re.replace_all_with("fat cat", |m| m.as_str().to_uppercase());
    assert_eq!(out, "FAT CAT");
}

#[test]
fn test_replace_without_match_copies_text() {
    let re = Regex::new("zzz").unwrap();
    assert_eq!(re.replace_all("héllo", "x"), "héllo");
}
