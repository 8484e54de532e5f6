//! Character sheet walkthrough - exercises the rules engine end to end
//!
//! Creates a character, binds a spren, speaks the First Ideal, unlocks the
//! Singer form talents, and switches stances, printing aggregate totals
//! along the way.

use std::path::PathBuf;

use clap::Parser;

use radiant_rules::character::Character;
use radiant_rules::core::Result;
use radiant_rules::ledger::BonusType;
use radiant_rules::rules::{load_rules, RulesTable};

#[derive(Parser)]
#[command(about = "Walk a character through the rules engine")]
struct Args {
    /// Directory with talents.toml / forms.toml / stances.toml overlays
    #[arg(long)]
    rules: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "radiant_rules=debug".into()),
        )
        .init();

    let args = Args::parse();
    let rules = match &args.rules {
        Some(dir) => load_rules(dir)?,
        None => RulesTable::builtin(),
    };

    let mut character = Character::new("Eshonai");
    character.level = 2;
    character.attributes.insert("willpower".to_string(), 2);
    character.skills.set_rank("light_weaponry", 1);

    println!("=== {} ===", character.name);

    // Radiant path
    character.path.grant_spren("windrunner")?;
    let info = character.path.order_info();
    if let Some(info) = info {
        println!("Bound a {} ({})", info.spren_type, info.name);
    }
    character.path.speak_ideal(&mut character.skills);
    println!(
        "First Ideal spoken; adhesion rank {:?}, gravitation rank {:?}",
        character.skills.rank("adhesion"),
        character.skills.rank("gravitation"),
    );

    // Talent tree
    for id in ["singer-rhythms", "forms-of-work", "forms-of-war"] {
        let outcome = character.unlock_talent(&rules, id);
        println!("unlock {id}: {outcome:?}");
    }

    // Forms
    character.set_active_form(&rules, Some("warform"));
    println!(
        "warform active: strength total {}",
        character.attribute_total("strength")
    );
    character.set_active_form(&rules, None);
    println!(
        "form cleared: strength total {}",
        character.attribute_total("strength")
    );

    // Stances
    character.unlock_stance(&rules, "stonestance");
    character.unlock_stance(&rules, "vinestance");
    character.set_active_stance(&rules, Some("stonestance"));
    println!(
        "stonestance: deflect(all) {}",
        character.bonus_total(BonusType::Deflect, "all")
    );
    character.set_active_stance(&rules, Some("vinestance"));
    println!(
        "vinestance: deflect(all) {} agility bonus {}",
        character.bonus_total(BonusType::Deflect, "all"),
        character.bonus_total(BonusType::Skill, "agility"),
    );

    let snapshot = character.to_json()?;
    println!("snapshot: {} bytes", snapshot.len());

    Ok(())
}
