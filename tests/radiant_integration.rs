//! Integration tests for the spren-bond / ideal progression

use radiant_rules::character::Character;
use radiant_rules::radiant::{BindOutcome, IdealOutcome, Surge};

/// Test 1: Windrunner scenario - bond, spren type, surge skills
#[test]
fn test_windrunner_scenario() {
    let mut c = Character::new("Kaladin");

    assert!(matches!(c.path.grant_spren("Windrunner"), Ok(BindOutcome::Bound)));
    assert!(c.path.has_spren());

    let info = c.path.order_info().unwrap();
    assert_eq!(info.spren_type, "Honorspren");
    assert_eq!(info.surges, [Surge::Adhesion, Surge::Gravitation]);

    assert_eq!(c.path.speak_ideal(&mut c.skills), IdealOutcome::Spoken);
    assert!(c.path.has_spoken_ideal());
    assert!(c.skills.rank("adhesion").unwrap() >= 1);
    assert!(c.skills.rank("gravitation").unwrap() >= 1);
}

/// Test 2: speaking the ideal twice never double-increments surge skills
#[test]
fn test_double_speak_is_idempotent() {
    let mut c = Character::new("Lift");
    c.path.grant_spren("edgedancer").unwrap();

    c.path.speak_ideal(&mut c.skills);
    let abrasion = c.skills.rank("abrasion");
    let progression = c.skills.rank("progression");

    assert_eq!(c.path.speak_ideal(&mut c.skills), IdealOutcome::AlreadySpoken);
    assert_eq!(c.skills.rank("abrasion"), abrasion);
    assert_eq!(c.skills.rank("progression"), progression);
}

/// Test 3: ideal-speaking never downgrades a player-raised surge skill
#[test]
fn test_ideal_preserves_higher_ranks() {
    let mut c = Character::new("Szeth");
    c.skills.set_rank("gravitation", 3);
    c.path.grant_spren("skybreaker").unwrap();
    c.path.speak_ideal(&mut c.skills);

    assert_eq!(c.skills.rank("gravitation"), Some(3));
    assert_eq!(c.skills.rank("division"), Some(1));
}

/// Test 4: queries stay safe in every state
#[test]
fn test_queries_total_in_all_states() {
    let mut c = Character::new("Dalinar");
    assert!(c.path.surge_pair().is_none());
    assert!(!c.path.has_spoken_ideal());

    c.path.grant_spren("bondsmith").unwrap();
    assert!(c.path.surge_pair().is_some());
    assert!(!c.path.has_spoken_ideal());

    c.path.reset();
    assert!(c.path.surge_pair().is_none());
    assert!(!c.path.has_spren());
}
