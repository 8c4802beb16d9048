//! Property-based tests for alias expansion and alias files
//!
//! These tests use proptest to generate alias tables and command lines and
//! verify expansion and the file format hold up for any of them.

use cll::config::{parse_alias_assignment, parse_aliases, serialize_aliases};
use cll::dispatch::AliasTable;
use proptest::prelude::*;
use std::collections::BTreeMap;

fn alias_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}"
}

fn alias_value() -> impl Strategy<Value = String> {
    "[a-z0-9-]{1,10}( [a-z0-9-]{1,10}){0,3}"
}

proptest! {
    #[test]
    fn test_unknown_command_is_unchanged(input in "\\PC{0,60}") {
        let table = AliasTable::new();
        prop_assert_eq!(table.expand(&input), input);
    }

    #[test]
    fn test_expansion_replaces_only_first_token(
        name in alias_name(),
        value in alias_value(),
        args in prop::collection::vec("[a-z0-9./-]{1,8}", 0..4),
    ) {
        let mut table = AliasTable::new();
        table.set(name.clone(), value.clone());

        let mut line = name.clone();
        for arg in &args {
            line.push_str("   ");
            line.push_str(arg);
        }

        let mut expected = value.clone();
        for arg in &args {
            expected.push(' ');
            expected.push_str(arg);
        }
        prop_assert_eq!(table.expand(&line), expected);
    }

    #[test]
    fn test_expansion_is_not_recursive(name in alias_name(), other in alias_name()) {
        prop_assume!(name != other);
        let mut table = AliasTable::new();
        table.set(name.clone(), other.clone());
        table.set(other.clone(), "final".to_string());

        prop_assert_eq!(table.expand(&name), other);
    }

    #[test]
    fn test_assignment_parses_name_and_value(name in alias_name(), value in alias_value()) {
        let (parsed_name, parsed_value) =
            parse_alias_assignment(&format!("{}={}", name, value)).unwrap();
        prop_assert_eq!(parsed_name, name.clone());
        prop_assert_eq!(parsed_value, value.clone());

        let (_, quoted_value) =
            parse_alias_assignment(&format!("{}=\"{}\"", name, value)).unwrap();
        prop_assert_eq!(quoted_value, value);
    }

    #[test]
    fn test_alias_file_survives_serialization(
        aliases in prop::collection::btree_map(alias_name(), alias_value(), 0..10),
    ) {
        let content = serialize_aliases(&aliases);
        prop_assert!(content.starts_with("# cll aliases"));
        prop_assert_eq!(parse_aliases(&content), aliases);
    }

    #[test]
    fn test_merge_prefers_incoming(
        base in prop::collection::btree_map(alias_name(), alias_value(), 0..6),
        incoming in prop::collection::btree_map(alias_name(), alias_value(), 0..6),
    ) {
        let mut table: AliasTable = base.clone().into_iter().collect();
        table.merge(incoming.clone());

        for (name, value) in &incoming {
            prop_assert_eq!(table.get(name), Some(value.as_str()));
        }
        for (name, value) in &base {
            if !incoming.contains_key(name) {
                prop_assert_eq!(table.get(name), Some(value.as_str()));
            }
        }
        let expected: BTreeMap<_, _> = base.into_iter().chain(incoming).collect();
        prop_assert_eq!(table.len(), expected.len());
    }
}
