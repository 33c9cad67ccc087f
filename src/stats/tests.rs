//! Stats domain: tests for name resolution and totals.

use std::collections::HashMap;

use super::{StatKind, StatTotals};

#[test]
fn test_from_name_accepts_key_and_label() {
    assert_eq!(StatKind::from_name("MaxLife"), Some(StatKind::MaxLife));
    assert_eq!(StatKind::from_name("Maximum Life"), Some(StatKind::MaxLife));
    assert_eq!(StatKind::from_name("max_life"), Some(StatKind::MaxLife));
    assert_eq!(StatKind::from_name("strength"), Some(StatKind::Strength));
    assert_eq!(
        StatKind::from_name("critical-strike-chance"),
        Some(StatKind::CriticalChance)
    );
}

#[test]
fn test_from_name_rejects_unknown() {
    assert_eq!(StatKind::from_name("Luck"), None);
    assert_eq!(StatKind::from_name(""), None);
    assert_eq!(StatKind::from_name("  "), None);
}

#[test]
fn test_schema_names_are_unambiguous() {
    for kind in StatKind::ALL {
        assert_eq!(StatKind::from_name(kind.key()), Some(*kind));
        assert_eq!(StatKind::from_name(kind.label()), Some(*kind));
    }
    assert!(StatKind::ALL.len() >= 70);
}

#[test]
fn test_totals_accumulate_duplicate_keys() {
    let mut totals = StatTotals::new();
    totals.add("Strength", 10.0);
    totals.add("strength", 5.0);
    totals.add_kind(StatKind::Strength, 1.0);

    assert_eq!(totals.get(StatKind::Strength), 16.0);
    assert_eq!(totals.len(), 1);
    assert!(totals.unrecognized().is_empty());
}

#[test]
fn test_totals_keep_unrecognized_names() {
    let mut totals = StatTotals::new();
    totals.add("Luck", 3.0);
    totals.add("Luck", 2.0);

    assert_eq!(totals.get_named("Luck"), 5.0);
    assert_eq!(totals.unrecognized(), &["Luck".to_string()]);
}

#[test]
fn test_totals_sum_is_order_independent() {
    let maps: Vec<HashMap<String, f32>> = vec![
        HashMap::from([("Strength".to_string(), 10.0), ("Armour".to_string(), 25.0)]),
        HashMap::from([("Strength".to_string(), 4.0)]),
        HashMap::from([("Fire Damage".to_string(), 12.0), ("Armour".to_string(), 5.0)]),
    ];

    let mut forward = StatTotals::new();
    for map in &maps {
        forward.add_all(map);
    }
    let mut backward = StatTotals::new();
    for map in maps.iter().rev() {
        backward.add_all(map);
    }

    assert_eq!(forward, backward);
    assert_eq!(forward.get(StatKind::Strength), 14.0);
    assert_eq!(forward.get(StatKind::Armour), 30.0);
    assert_eq!(forward.get(StatKind::FireDamage), 12.0);
}

#[test]
fn test_merge_combines_totals() {
    let mut a = StatTotals::new();
    a.add("Evasion", 10.0);
    let mut b = StatTotals::new();
    b.add("Evasion", 15.0);
    b.add("Mystery", 1.0);

    a.merge(&b);

    assert_eq!(a.get(StatKind::Evasion), 25.0);
    assert_eq!(a.get_named("Mystery"), 1.0);
    assert_eq!(a.unrecognized().len(), 1);
}

#[test]
fn test_summary_uses_labels() {
    let mut totals = StatTotals::new();
    totals.add("MaxLife", 20.0);
    let summary = totals.summary();
    assert!(summary.contains("Maximum Life: +20"));

    assert_eq!(StatTotals::new().summary(), "  (no stats)");
}
