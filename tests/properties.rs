//! Property tests for parsing, serializing and overlaying.

use proptest::prelude::*;
use secretenv::core::types::EnvMap;
use secretenv::core::{env, merge};

/// Keys as they appear in real env files.
fn key() -> impl Strategy<Value = String> {
    "[A-Z_][A-Z0-9_]{0,15}"
}

/// Single-line values without double quotes.
fn value() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 /:=._-]{0,24}"
}

fn quoted(value: &str) -> String {
    if value.starts_with('/') {
        value.to_string()
    } else {
        format!("\"{}\"", value)
    }
}

proptest! {
    #[test]
    fn comment_lines_never_contribute_keys(lines in prop::collection::vec("#[^\n\r]*", 0..10)) {
        let contents = lines.join("\n");
        prop_assert!(env::parse(&contents).is_empty());
    }

    #[test]
    fn reload_recovers_keys_and_quoted_values(entries in prop::collection::btree_map(key(), value(), 0..12)) {
        let contents: String = entries
            .iter()
            .map(|(k, v)| format!("{}={}\n", k, v))
            .collect();

        let loaded = env::parse(&contents);
        prop_assert_eq!(&loaded, &entries);

        let reloaded = env::parse(&env::serialize(&loaded).join("\n"));
        prop_assert_eq!(reloaded.len(), entries.len());
        for (k, v) in &entries {
            let expected = quoted(v);
            prop_assert_eq!(reloaded.get(k), Some(&expected));
        }
    }

    #[test]
    fn serialize_emits_one_line_per_key(entries in prop::collection::btree_map(key(), value(), 0..12)) {
        let lines = env::serialize(&entries);
        prop_assert_eq!(lines.len(), entries.len());
        for (line, k) in lines.iter().zip(entries.keys()) {
            let prefix = format!("{}=", k);
            prop_assert!(line.starts_with(&prefix));
        }
    }

    #[test]
    fn last_bundle_wins(
        file in prop::collection::btree_map(key(), value(), 0..8),
        bundles in prop::collection::vec(prop::collection::btree_map(key(), value(), 0..8), 1..5),
    ) {
        let mut vars: EnvMap = file.clone();
        for (i, bundle) in bundles.iter().enumerate() {
            let payload = serde_json::to_string(bundle).unwrap();
            merge::overlay(&mut vars, &format!("bundle-{}", i), &payload).unwrap();
        }

        for (k, v) in &vars {
            let expected = bundles
                .iter()
                .rev()
                .find_map(|b| b.get(k))
                .or_else(|| file.get(k));
            prop_assert_eq!(Some(v), expected);
        }
    }
}
