//! Property tests for the bonus ledger's aggregation algebra

use proptest::prelude::*;

use radiant_rules::ledger::{BonusEntry, BonusLedger, BonusType, SourceKind, SourceRef};

#[derive(Debug, Clone)]
enum Op {
    Grant { key: u8, value: i32, catch_all: bool },
    Revoke { key: u8 },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..8, -10i32..10, any::<bool>())
            .prop_map(|(key, value, catch_all)| Op::Grant { key, value, catch_all }),
        (0u8..8).prop_map(|key| Op::Revoke { key }),
    ]
}

fn source(key: u8) -> SourceRef {
    SourceRef::new(SourceKind::Talent, format!("talent-{key}"))
}

proptest! {
    /// The total always equals the sum over currently-present entries,
    /// whatever the sequence of grants and revokes (including revokes of
    /// keys never granted)
    #[test]
    fn total_matches_present_entries(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut ledger = BonusLedger::new();
        // Reference model: per-key lists of (value, is_catch_all)
        let mut model: std::collections::HashMap<u8, Vec<(i32, bool)>> =
            std::collections::HashMap::new();

        for op in &ops {
            match *op {
                Op::Grant { key, value, catch_all } => {
                    let target = if catch_all { "all" } else { "strength" };
                    ledger.grant(
                        source(key),
                        [BonusEntry::new(BonusType::Attribute, target, value)],
                    );
                    model.entry(key).or_default().push((value, catch_all));
                }
                Op::Revoke { key } => {
                    ledger.revoke(&source(key));
                    model.remove(&key);
                }
            }
        }

        let expect_specific: i32 = model
            .values()
            .flatten()
            .filter(|(_, catch_all)| !catch_all)
            .map(|(v, _)| v)
            .sum();
        let expect_all: i32 = model
            .values()
            .flatten()
            .filter(|(_, catch_all)| *catch_all)
            .map(|(v, _)| v)
            .sum();

        prop_assert_eq!(ledger.total(BonusType::Attribute, "strength"), expect_specific);
        prop_assert_eq!(ledger.total(BonusType::Attribute, "all"), expect_all);
        prop_assert_eq!(
            ledger.total_with_catch_all(BonusType::Attribute, "strength"),
            expect_specific + expect_all
        );
    }

    /// Revoking a key zeroes everything that key alone contributed
    #[test]
    fn revoke_zeroes_sole_source(values in prop::collection::vec(-10i32..10, 1..10)) {
        let mut ledger = BonusLedger::new();
        let key = SourceRef::stance("stonestance");
        let entries: Vec<BonusEntry> = values
            .iter()
            .map(|v| BonusEntry::new(BonusType::Deflect, "all", *v))
            .collect();
        ledger.grant(key.clone(), entries);
        ledger.revoke(&key);
        prop_assert_eq!(ledger.total(BonusType::Deflect, "all"), 0);
        prop_assert!(!ledger.contains_source(&key));
    }
}
