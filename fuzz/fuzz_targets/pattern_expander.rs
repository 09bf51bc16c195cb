#![no_main]

use lacuna::category::CategoryTable;
use lacuna::holes::find_holes;
use lacuna::pattern::expand_composite;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Two tiny categories keep the product small
        let Ok(table) = CategoryTable::from_entries([("A", vec!["a", "ab"]), ("B", vec!["b"])])
        else {
            return;
        };

        // First line is the pattern, the rest is the corpus
        let (pattern, corpus) = input.split_once('\n').unwrap_or((input, ""));
        if pattern.chars().count() > 8 {
            return;
        }

        let _ = expand_composite(pattern, &table);
        let _ = find_holes(pattern, corpus, &table);
        let _ = CategoryTable::from_toml_str(input);
    }
});
