//! The evaluator proper

use ahash::AHashSet;

use crate::prereq::{Prerequisite, Requirement, StatSnapshot};

/// Check a prerequisite list against the current progression state.
///
/// Pure: mutates nothing and never fails. An empty list is vacuously
/// satisfied. The AND group must hold in full; the OR group, when non-empty,
/// needs at least one hit.
pub fn requirements_met(
    prereqs: &[Prerequisite],
    unlocked_talents: &AHashSet<String>,
    snapshot: &impl StatSnapshot,
) -> bool {
    let mut or_present = false;
    let mut or_hit = false;

    for prereq in prereqs {
        let met = requirement_met(&prereq.requirement, unlocked_talents, snapshot);
        if prereq.any_of {
            or_present = true;
            or_hit |= met;
        } else if !met {
            return false;
        }
    }

    !or_present || or_hit
}

fn requirement_met(
    requirement: &Requirement,
    unlocked_talents: &AHashSet<String>,
    snapshot: &impl StatSnapshot,
) -> bool {
    match requirement {
        Requirement::Talent { id } => unlocked_talents.contains(id),
        Requirement::Skill { name, rank } => {
            snapshot.skill_rank(name).is_some_and(|r| r >= *rank)
        }
        Requirement::Attribute { name, min } => {
            snapshot.attribute(name).is_some_and(|v| v >= *min)
        }
        Requirement::Level { min } => snapshot.level() >= *min,
        Requirement::Ideal { target } => target == "first" && snapshot.ideal_spoken(),
    }
}
