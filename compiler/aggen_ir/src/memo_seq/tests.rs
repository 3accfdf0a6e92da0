use super::*;

fn strings(items: &[&str]) -> MemoSeq<String> {
    items.iter().map(ToString::to_string).collect()
}

#[test]
fn equal_contents_are_equal() {
    let a = strings(&["class", "new()"]);
    let b = strings(&["class", "new()"]);
    assert_eq!(a, b);
    assert_eq!(a.content_hash(), b.content_hash());
}

#[test]
fn order_is_significant() {
    let a = strings(&["class", "new()"]);
    let b = strings(&["new()", "class"]);
    assert_ne!(a, b);
}

#[test]
fn different_lengths_never_equal() {
    let a = strings(&["class"]);
    let b = strings(&["class", "new()"]);
    assert_ne!(a, b);
    assert_ne!(a.content_hash(), b.content_hash());
}

#[test]
fn empty_sequences_are_equal() {
    let a: MemoSeq<String> = MemoSeq::empty();
    let b: MemoSeq<String> = MemoSeq::default();
    assert_eq!(a, b);
    assert!(a.is_empty());
    assert_eq!(a.len(), 0);
}

#[test]
fn clone_shares_storage() {
    let a = strings(&["x", "y"]);
    let b = a.clone();
    assert_eq!(a.as_slice().as_ptr(), b.as_slice().as_ptr());
    assert_eq!(a, b);
}

#[test]
fn case_insensitive_policy() {
    let a: MemoSeq<String, AsciiCaseInsensitive> =
        vec!["Class".to_string(), "NEW()".to_string()].into();
    let b: MemoSeq<String, AsciiCaseInsensitive> =
        vec!["class".to_string(), "new()".to_string()].into();
    assert_eq!(a, b);
    assert_eq!(a.content_hash(), b.content_hash());
}

#[test]
fn case_insensitive_policy_keeps_boundaries() {
    let a: MemoSeq<String, AsciiCaseInsensitive> = vec!["ab".to_string(), "c".to_string()].into();
    let b: MemoSeq<String, AsciiCaseInsensitive> = vec!["a".to_string(), "bc".to_string()].into();
    assert_ne!(a, b);
    assert_ne!(a.content_hash(), b.content_hash());
}

#[test]
fn natural_policy_is_case_sensitive() {
    assert_ne!(strings(&["Class"]), strings(&["class"]));
}

#[test]
fn deref_and_iteration() {
    let seq = strings(&["a", "b", "c"]);
    assert_eq!(seq[1], "b");
    assert_eq!(seq.first().map(String::as_str), Some("a"));
    let joined: Vec<&str> = (&seq).into_iter().map(String::as_str).collect();
    assert_eq!(joined, ["a", "b", "c"]);
}

#[test]
fn content_hash_is_stable() {
    // FxHasher is unseeded: the same contents always give the same value.
    let a = strings(&["T1", "T2"]).content_hash();
    let b = strings(&["T1", "T2"]).content_hash();
    assert_eq!(a, b);
}

#[test]
fn debug_prints_as_list() {
    assert_eq!(format!("{:?}", strings(&["a", "b"])), r#"["a", "b"]"#);
}
