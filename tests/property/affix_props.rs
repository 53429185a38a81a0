//! Affix rule round-trip: wherever `apply` produces a surface form,
//! `undo` restores the stem.

use morf::{AffixKind, AffixRule, Condition, Flag};
use proptest::prelude::*;

fn arb_kind() -> impl Strategy<Value = AffixKind> {
    prop_oneof![Just(AffixKind::Prefix), Just(AffixKind::Suffix)]
}

/// Conditions drawn from the syntax the parser accepts: a bare dot, a
/// literal, or a (possibly negated) class.
fn arb_condition() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(".".to_string()),
        "[a-z]",
        "\\[[a-z]{1,4}\\]".prop_map(|s| s),
        "\\[\\^[a-z]{1,4}\\]".prop_map(|s| s),
    ]
}

proptest! {
    #[test]
    fn prop_apply_then_undo_round_trips(
        kind in arb_kind(),
        strip in "[a-z]{0,3}",
        add in "[a-z]{0,4}",
        condition in arb_condition(),
        word in "[a-z]{1,10}",
    ) {
        let condition = Condition::parse(&condition).expect("generated condition parses");
        let rule = AffixRule::new(kind, Flag('A' as u32), strip, add, condition, false);

        if let Some(surface) = rule.apply(&word) {
            let undone = rule.undo(&surface);
            prop_assert_eq!(
                undone.as_deref(),
                Some(word.as_str()),
                "undo failed for surface {:?}",
                surface
            );
        }
    }

    #[test]
    fn prop_apply_respects_condition(
        kind in arb_kind(),
        add in "[a-z]{1,4}",
        class in "[a-z]{1,4}",
        word in "[a-z]{1,10}",
    ) {
        // Rule constrained to words whose relevant end is in the class.
        let pattern = format!("[{class}]");
        let condition = Condition::parse(&pattern).unwrap();
        let rule = AffixRule::new(kind, Flag('A' as u32), "", add, condition, false);

        let end_char = match kind {
            AffixKind::Prefix => word.chars().next().unwrap(),
            AffixKind::Suffix => word.chars().last().unwrap(),
        };
        let admitted = class.contains(end_char);
        prop_assert_eq!(rule.apply(&word).is_some(), admitted);
    }
}
