//! Pattern expansion tests
//!
//! Cartesian-product semantics of `multiply` and `expand` through the public API

use lacuna::category::CategoryTable;
use lacuna::pattern::{expand, expand_composite, has_categories, join_sequence, multiply};

fn categories() -> CategoryTable {
    CategoryTable::from_entries([("A", vec!["a1", "a2", "a3"]), ("B", vec!["b1", "b2"])]).unwrap()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_multiply_returns_empty_when_both_empty() {
    assert_eq!(multiply(Vec::new(), &[]).len(), 0);
}

#[test]
fn test_multiply_returns_sequences_unchanged_without_tokens() {
    let sequences = vec![strings(&["a1", "b1"]), strings(&["a2", "b2"])];
    let result = multiply(sequences.clone(), &[]);
    assert_eq!(result, sequences);
}

#[test]
fn test_multiply_returns_tokens_without_sequences() {
    let table = categories();
    let tokens = table.get("A").unwrap();

    let result = multiply(Vec::new(), tokens);

    assert_eq!(result.len(), tokens.len());
    for (sequence, token) in result.iter().zip(tokens) {
        assert_eq!(sequence, &vec![token.clone()]);
    }
}

#[test]
fn test_multiply_every_token_for_each_sequence() {
    let table = categories();
    let b = table.get("B").unwrap();
    let sequences = vec![strings(&["11", "12", "13"]), strings(&["21", "22", "23"])];

    let result = multiply(sequences.clone(), b);

    assert_eq!(
        result.len(),
        sequences.len() * b.len(),
        "result length is not sequences * tokens"
    );
    let mut expected_first = sequences[0].clone();
    expected_first.push(b[0].clone());
    assert_eq!(result[0], expected_first);
}

#[test]
fn test_has_categories_true_positive() {
    let table = categories();
    assert!(has_categories("ABBA", &table));
    assert!(has_categories("abBa", &table));
}

#[test]
fn test_has_categories_true_negative() {
    let table = categories();
    assert!(!has_categories("ab", &table));
    assert!(!has_categories("", &table));
}

#[test]
fn test_trivial_patterns() {
    let table = categories();
    assert_eq!(expand("bad", &table), vec![strings(&["b", "a", "d"])]);
    assert_eq!(expand("", &table), vec![Vec::<String>::new()]);
}

#[test]
fn test_non_trivial_pattern_size() {
    let table = categories();
    let sequences = expand("AB", &table);
    assert_eq!(sequences.len(), 3 * 2);
}

#[test]
fn test_vowel_inventory_after_literal() {
    let table = CategoryTable::from_toml_str(
        r#"
        [categories]
        C = "b,d,dz,g,ġ,gh,h,j,k,k',kh,l,m,n,p,p',q,q',r,s,ş,t,t',ts,ts',tş,tş',v,z"
        V = "a,ạ,e,i,o,u"
        "#,
    )
    .unwrap();

    let joined: Vec<String> = expand("tV", &table)
        .iter()
        .map(|s| join_sequence(s))
        .collect();

    assert_eq!(joined, vec!["ta", "tạ", "te", "ti", "to", "tu"]);
}

#[test]
fn test_composite_bracket_pattern() {
    let table = categories();
    let joined: Vec<String> = expand_composite("[x,y]B", &table)
        .iter()
        .map(|s| join_sequence(s))
        .collect();
    assert_eq!(joined, vec!["xb1", "xb2", "yb1", "yb2"]);
}
