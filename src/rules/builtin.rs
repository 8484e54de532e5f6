//! Compiled-in default rules data

use crate::ledger::{BonusEntry, BonusType};
use crate::prereq::Prerequisite;
use crate::rules::defs::{ExpertiseChoice, FormDef, RulesTable, StanceDef, TalentDef};

impl RulesTable {
    /// The default table: Singer forms, the sword stances, and a small
    /// talent set exercising every grant kind
    pub fn builtin() -> Self {
        let mut table = RulesTable::empty();

        for def in builtin_forms() {
            table.insert_form(def);
        }
        for def in builtin_stances() {
            table.insert_stance(def);
        }
        for def in builtin_talents() {
            table.insert_talent(def);
        }

        table
    }
}

fn builtin_forms() -> Vec<FormDef> {
    vec![
        FormDef {
            id: "warform".to_string(),
            name: "Warform".to_string(),
            bonuses: vec![
                BonusEntry::new(BonusType::Attribute, "strength", 2),
                BonusEntry::new(BonusType::Deflect, "all", 1),
            ],
        },
        FormDef {
            id: "nimbleform".to_string(),
            name: "Nimbleform".to_string(),
            bonuses: vec![
                BonusEntry::new(BonusType::Attribute, "speed", 1),
                BonusEntry::new(BonusType::Skill, "agility", 1),
            ],
        },
        FormDef {
            id: "workform".to_string(),
            name: "Workform".to_string(),
            bonuses: vec![
                BonusEntry::new(BonusType::Attribute, "strength", 1),
                BonusEntry::new(BonusType::Skill, "crafting", 1),
            ],
        },
        FormDef {
            id: "scholarform".to_string(),
            name: "Scholarform".to_string(),
            bonuses: vec![
                BonusEntry::new(BonusType::Attribute, "intellect", 1),
                BonusEntry::new(BonusType::Skill, "lore", 1),
            ],
        },
        // Dullform grants nothing; it exists so a form with an empty bonus
        // list stays a valid selection
        FormDef {
            id: "dullform".to_string(),
            name: "Dullform".to_string(),
            bonuses: vec![],
        },
    ]
}

fn builtin_stances() -> Vec<StanceDef> {
    vec![
        StanceDef {
            id: "stonestance".to_string(),
            name: "Stonestance".to_string(),
            bonuses: vec![BonusEntry::new(BonusType::Deflect, "all", 1)],
            prerequisites: vec![],
        },
        StanceDef {
            id: "vinestance".to_string(),
            name: "Vinestance".to_string(),
            bonuses: vec![BonusEntry::new(BonusType::Skill, "agility", 1)],
            prerequisites: vec![],
        },
        StanceDef {
            id: "windstance".to_string(),
            name: "Windstance".to_string(),
            bonuses: vec![BonusEntry::new(BonusType::Defense, "physical", 1)],
            prerequisites: vec![Prerequisite::skill("light_weaponry", 1)],
        },
        StanceDef {
            id: "flamestance".to_string(),
            name: "Flamestance".to_string(),
            bonuses: vec![
                BonusEntry::new(BonusType::Skill, "light_weaponry", 1),
                BonusEntry::new(BonusType::Defense, "physical", -1),
            ],
            prerequisites: vec![Prerequisite::skill("light_weaponry", 2)],
        },
        StanceDef {
            id: "smokestance".to_string(),
            name: "Smokestance".to_string(),
            bonuses: vec![BonusEntry::new(BonusType::Skill, "deception", 1)],
            prerequisites: vec![Prerequisite::talent("swordsmanship")],
        },
    ]
}

fn builtin_talents() -> Vec<TalentDef> {
    vec![
        TalentDef {
            id: "singer-rhythms".to_string(),
            name: "Singer Rhythms".to_string(),
            tree: "singer".to_string(),
            bonuses: vec![BonusEntry::new(BonusType::Skill, "insight", 1)],
            prerequisites: vec![],
            grants_forms: vec![],
            grants_expertises: vec![],
            expertise_choice: None,
        },
        TalentDef {
            id: "forms-of-work".to_string(),
            name: "Forms of Work".to_string(),
            tree: "singer".to_string(),
            bonuses: vec![],
            prerequisites: vec![Prerequisite::talent("singer-rhythms")],
            grants_forms: vec!["workform".to_string(), "nimbleform".to_string()],
            grants_expertises: vec![],
            expertise_choice: None,
        },
        TalentDef {
            id: "forms-of-war".to_string(),
            name: "Forms of War".to_string(),
            tree: "singer".to_string(),
            bonuses: vec![],
            prerequisites: vec![Prerequisite::talent("forms-of-work"), Prerequisite::level(2)],
            grants_forms: vec!["warform".to_string()],
            grants_expertises: vec![],
            expertise_choice: None,
        },
        TalentDef {
            id: "swordsmanship".to_string(),
            name: "Swordsmanship".to_string(),
            tree: "warrior".to_string(),
            bonuses: vec![BonusEntry::new(BonusType::Skill, "light_weaponry", 1)],
            prerequisites: vec![],
            grants_forms: vec![],
            grants_expertises: vec![],
            expertise_choice: None,
        },
        TalentDef {
            id: "stance-mastery".to_string(),
            name: "Stance Mastery".to_string(),
            tree: "warrior".to_string(),
            bonuses: vec![
                BonusEntry::new(BonusType::Defense, "physical", 1)
                    .with_condition("while a stance is active"),
            ],
            prerequisites: vec![Prerequisite::talent("swordsmanship")],
            grants_forms: vec![],
            grants_expertises: vec![],
            expertise_choice: None,
        },
        TalentDef {
            id: "battle-hardened".to_string(),
            name: "Battle Hardened".to_string(),
            tree: "warrior".to_string(),
            bonuses: vec![BonusEntry::new(BonusType::Health, "max", 2)],
            prerequisites: vec![
                Prerequisite::level(2),
                Prerequisite::attribute("strength", 2).or(),
                Prerequisite::attribute("willpower", 2).or(),
            ],
            grants_forms: vec![],
            grants_expertises: vec![],
            expertise_choice: None,
        },
        TalentDef {
            id: "underworld-connections".to_string(),
            name: "Underworld Connections".to_string(),
            tree: "scoundrel".to_string(),
            bonuses: vec![],
            prerequisites: vec![],
            grants_forms: vec![],
            grants_expertises: vec!["Sleight of Hand".to_string()],
            expertise_choice: None,
        },
        TalentDef {
            id: "deft-hands".to_string(),
            name: "Deft Hands".to_string(),
            tree: "scoundrel".to_string(),
            bonuses: vec![BonusEntry::new(BonusType::Skill, "thievery", 1)],
            prerequisites: vec![Prerequisite::skill("thievery", 1)],
            grants_forms: vec![],
            grants_expertises: vec![],
            expertise_choice: Some(ExpertiseChoice {
                options: vec![
                    "Sleight of Hand".to_string(),
                    "Lockpicking".to_string(),
                    "Forgery".to_string(),
                ],
                pick: 1,
            }),
        },
        TalentDef {
            id: "windrunner-squire".to_string(),
            name: "Windrunner Squire".to_string(),
            tree: "radiant".to_string(),
            bonuses: vec![BonusEntry::new(BonusType::Defense, "spiritual", 1)],
            prerequisites: vec![Prerequisite::ideal("first")],
            grants_forms: vec![],
            grants_expertises: vec![],
            expertise_choice: None,
        },
    ]
}
