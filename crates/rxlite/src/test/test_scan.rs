// findAll behaviour: ordering, empty matches, advancing rules
use crate::*;

const CAR: &str = "The car parked in the garage.";

fn texts(re: &Regex, text: &str) -> Vec<String> {
    re.find_iter(text).map(|m| m.as_str().to_string()).collect()
}

#[test]
fn test_full_stop() {
    let re = Regex::new(".ar").unwrap();
    let found = re.find_all(CAR);
    assert_eq!(found.len(), 3);
    assert_eq!(found[0].as_str(), "car");
    assert_eq!(found[1].as_str(), "par");
    assert_eq!(found[2].as_str(), "gar");
    let starts: Vec<usize> = found.iter().map(|m| m.start).collect();
    assert_eq!(starts, vec![4, 8, 22]);
}

#[test]
fn test_star_emits_empty_matches() {
    let text = "The car parked in the garage";
    let re = Regex::new("[a-z]*").unwrap();
    let all = re.find_all(text);
    assert_eq!(all.len(), 13);

    let empty_starts: Vec<usize> = all.iter().filter(|m| m.is_empty()).map(|m| m.start).collect();
    assert_eq!(empty_starts, vec![0, 3, 7, 14, 17, 21, 28]);

    // the caller decides what to drop
    let words: Vec<&str> = all
        .iter()
        .map(|m| m.as_str())
        .filter(|s| !s.trim().is_empty())
        .collect();
    assert_eq!(words, vec!["he", "car", "parked", "in", "the", "garage"]);
}

#[test]
fn test_scan_invariants() {
    let cases = [
        ("the", "The fat cat sat on the mat"),
        (".ar", CAR),
        ("[a-z]*", CAR),
        (r"\s*", "a  b   c"),
        ("", "héllo"),
        ("[^ ]+", "naïve café au lait"),
        ("x?", "xxyx"),
    ];
    for (pattern, text) in cases {
        let re = Regex::new(pattern).unwrap();
        let all = re.find_all(text);
        for m in &all {
            assert!(m.start <= m.end && m.end <= text.len(), "{}", pattern);
            assert_eq!(&text[m.start..m.end], m.text, "{}", pattern);
        }
        for pair in all.windows(2) {
            assert!(pair[0].start < pair[1].start, "{}", pattern);
            assert!(pair[0].end <= pair[1].start, "{}", pattern);
        }
        // a second scan is identical
        assert_eq!(re.find_all(text), all, "{}", pattern);
    }
}

#[test]
fn test_empty_pattern_matches_every_position() {
    let re = Regex::new("").unwrap();
    let starts: Vec<usize> = re.find_iter("ab").map(|m| m.start).collect();
    assert_eq!(starts, vec![0, 1, 2]);
    // multibyte chars are stepped over whole
    let starts: Vec<usize> = re.find_iter("é!").map(|m| m.start).collect();
    assert_eq!(starts, vec![0, 2, 3]);
}

#[test]
fn test_empty_text() {
    let star = Regex::new("a*").unwrap();
    let all = star.find_all("");
    assert_eq!(all.len(), 1);
    assert!(all[0].is_empty());
    assert_eq!(all[0].start, 0);

    let lit = Regex::new("a").unwrap();
    assert!(lit.find_all("").is_empty());
}

#[test]
fn test_multibyte_offsets() {
    let re = Regex::new("[^ ]+").unwrap();
    let all = re.find_all("naïve café");
    assert_eq!(all.len(), 2);
    assert_eq!((all[0].as_str(), all[0].range()), ("naïve", 0..6));
    assert_eq!((all[1].as_str(), all[1].range()), ("café", 7..12));
}

#[test]
fn test_iterator_is_lazy_and_fused() {
    let re = Regex::new("a").unwrap();
    let mut it = re.find_iter("banana");
    assert_eq!(it.next().map(|m| m.start), Some(1));
    assert_eq!(it.next().map(|m| m.start), Some(3));
    assert_eq!(it.next().map(|m| m.start), Some(5));
    assert!(it.next().is_none());
    assert!(it.next().is_none());
}

#[test]
fn test_restartable() {
    let re = Regex::new("[Tt]he").unwrap();
    let first = texts(&re, CAR);
    let other = texts(&re, "then THE end");
    let again = texts(&re, CAR);
    assert_eq!(first, vec!["The", "the"]);
    assert_eq!(other, vec!["the"]);
    assert_eq!(first, again);
}

#[test]
fn test_split() {
    let re = Regex::new(" +").unwrap();
    assert_eq!(re.split("a  b c"), vec!["a", "b", "c"]);

    let comma = Regex::new(",").unwrap();
    assert_eq!(comma.split(",a,"), vec!["", "a", ""]);
    assert_eq!(comma.split("abc"), vec!["abc"]);

    let xs = Regex::new("x*").unwrap();
    assert_eq!(xs.split("axb"), vec!["", "a", "", "b", ""]);
}

#[test]
fn test_join_matches() {
    let text = "(02) -Fish Go Deep & Tracey K- Cure And The Cause.mp3";
    let re = Regex::new("[^()0-9 ]+").unwrap();
    let joined = re
        .find_iter(text)
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    // digits are excluded, so the "3" of ".mp3" is dropped
    assert_eq!(joined, "-Fish Go Deep & Tracey K- Cure And The Cause.mp");
}
