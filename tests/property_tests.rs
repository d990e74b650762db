//! Property-based tests for the generator
//!
//! These tests use proptest to check that the emitted switch agrees with the loaded registry
//! across many randomly generated registries.

use std::collections::HashMap;

use cicgen::backend::emit;
use cicgen::config::EmitConfig;
use cicgen_core::{Registry, UNREGISTERED};
use proptest::prelude::*;

/// Read the `case 0xNNNN: return "...";` lines back out of a generated source file.
fn parse_cases(source: &str) -> Vec<(u16, String)> {
    source
        .lines()
        .filter_map(|line| {
            let rest = line.trim_start().strip_prefix("case 0x")?;
            let (hex, rest) = rest.split_once(": return \"")?;
            let literal = rest.strip_suffix("\"; break;")?;
            Some((u16::from_str_radix(hex, 16).ok()?, literal.to_string()))
        })
        .collect()
}

/// Evaluate the generated switch the way a C compiler would.
fn switch_lookup(cases: &HashMap<u16, String>, code: u16) -> &str {
    cases.get(&code).map_or(UNREGISTERED, String::as_str)
}

fn registry_text() -> impl Strategy<Value = String> {
    prop::collection::vec((any::<u16>(), "[A-Za-z\"'&.,]{1,10}( [A-Za-z\"'&.,]{1,10}){0,3}"), 0..40).prop_map(
        |entries| {
            entries
                .into_iter()
                .map(|(code, name)| format!("{} 0x{:04X} {}\n", code, code, name))
                .collect()
        },
    )
}

fn load(text: &str) -> Registry {
    cicgen_core::load(text).expect("generated registry must load")
}

proptest! {
    /// Property: the emitted switch resolves every code exactly like the registry does.
    #[test]
    fn switch_agrees_with_registry(text in registry_text(), probes in prop::collection::vec(any::<u16>(), 32)) {
        let registry = load(&text);
        let source = emit(&registry, &EmitConfig::default()).source.contents;
        let cases: HashMap<u16, String> = parse_cases(&source).into_iter().collect();

        let dense = 0..=registry.max_code().saturating_add(1);
        for code in dense.chain(probes).chain([u16::MAX]) {
            prop_assert_eq!(switch_lookup(&cases, code), registry.lookup(code), "code {}", code);
        }
    }

    /// Property: one case per registered code, in strictly ascending order, none above max_code.
    #[test]
    fn cases_are_dense_ordered_and_complete(text in registry_text()) {
        let registry = load(&text);
        let source = emit(&registry, &EmitConfig::default()).source.contents;
        let codes: Vec<u16> = parse_cases(&source).into_iter().map(|(code, _)| code).collect();

        prop_assert_eq!(codes.len(), registry.len());
        prop_assert!(codes.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(codes.iter().all(|&c| c <= registry.max_code()));
    }

    /// Property: generation is deterministic for the same registry text.
    #[test]
    fn generation_is_idempotent(text in registry_text()) {
        let first = emit(&load(&text), &EmitConfig::default());
        let second = emit(&load(&text), &EmitConfig::default());
        prop_assert_eq!(first, second);
    }

    /// Property: no emitted literal contains an unescaped double quote.
    #[test]
    fn literals_never_contain_bare_quotes(text in registry_text()) {
        let source = emit(&load(&text), &EmitConfig::default()).source.contents;
        for (_, literal) in parse_cases(&source) {
            let bytes = literal.as_bytes();
            for (i, &b) in bytes.iter().enumerate() {
                if b == b'"' {
                    prop_assert!(i > 0 && bytes[i - 1] == b'\\', "bare quote in {:?}", literal);
                }
            }
        }
    }
}

#[test]
fn test_parse_cases_helper() {
    let cases = parse_cases("  case 0x0007: return \"Reserved \\\"beta\\\"\"; break;\n  return \"x\";\n");
    assert_eq!(cases, vec![(7, "Reserved \\\"beta\\\"".to_string())]);
}
