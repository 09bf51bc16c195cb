//! Hole detection end-to-end tests

use lacuna::category::CategoryTable;
use lacuna::holes::{find_hole_reports, find_holes, HoleCriteria};
use lacuna::stats::PatternStats;

const LEXICON: &str = "a1 b1 a1a2b1 a1a3b3 a1b1b2b1 a2a2";

fn categories() -> CategoryTable {
    CategoryTable::from_entries([("A", vec!["a1", "a2", "a3"]), ("B", vec!["b1", "b2"])]).unwrap()
}

#[test]
fn test_finds_a_hole_when_pattern_not_found() {
    let table = categories();

    let whole = PatternStats::analyze("AAA", LEXICON, &table).unwrap();
    assert_eq!(whole.summary().unwrap().total_count, 0);

    let holes = find_holes("AAA", LEXICON, &table).unwrap();
    assert!(!holes.is_empty());
}

#[test]
fn test_no_hole_for_bbb() {
    let holes = find_holes("BBB", LEXICON, &categories()).unwrap();
    assert_eq!(holes.len(), 0);
}

#[test]
fn test_holes_are_unattested_instantiations() {
    let table = categories();
    let whole = PatternStats::analyze("AAA", LEXICON, &table).unwrap();

    for hole in find_holes("AAA", LEXICON, &table).unwrap() {
        assert_eq!(whole.count(&hole), 0, "{hole} should be unattested");
    }
}

/// Consonant clusters: "VCC" with a digraph consonant
#[test]
fn test_vcc_with_digraphs() {
    let table = CategoryTable::from_toml_str(
        r#"
        [categories]
        V = ["a", "o"]
        C = ["g", "gh", "r"]
        "#,
    )
    .unwrap();

    // VC: ag, agh, ogh, or; CC: ghr, rg
    let lexicon = "ag agh ogh or ghr rg";

    let reports = find_hole_reports("VCC", lexicon, &table, &HoleCriteria::default()).unwrap();
    let holes: Vec<&str> = reports.iter().map(|r| r.instantiation.as_str()).collect();

    // prefix/suffix pairs sharing the middle consonant:
    //   agh+ghr -> aghr, ogh+ghr -> oghr, or+rg -> org, ag+g? (no gX attested)
    assert_eq!(holes, vec!["aghr", "oghr", "org"]);

    let aghr = &reports[0];
    assert_eq!(aghr.phonemes, vec!["a", "gh", "r"]);
    assert_eq!(aghr.prefix, "agh");
    assert_eq!(aghr.suffix, "ghr");
}

#[test]
fn test_criteria_threshold_on_whole_count() {
    let table = CategoryTable::from_entries([("C", vec!["p", "t"]), ("V", vec!["a"])]).unwrap();
    let lexicon = "pa at pat";

    assert!(find_holes("CVC", lexicon, &table).unwrap().is_empty());

    let lenient = HoleCriteria {
        min_part_count: 1,
        max_whole_count: 1,
    };
    let reports = find_hole_reports("CVC", lexicon, &table, &lenient).unwrap();
    let holes: Vec<&str> = reports.iter().map(|r| r.instantiation.as_str()).collect();
    assert_eq!(holes, vec!["pat"]);
}
