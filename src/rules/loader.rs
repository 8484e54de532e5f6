//! Load rules tables from TOML files
//!
//! Each file is optional; entries overlay the builtin table by id, so a data
//! directory can patch a single talent without restating everything.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::core::Result;
use crate::rules::defs::{FormDef, RulesTable, StanceDef, TalentDef};

#[derive(Deserialize)]
struct TalentFile {
    #[serde(default)]
    talent: Vec<TalentDef>,
}

#[derive(Deserialize)]
struct FormFile {
    #[serde(default)]
    form: Vec<FormDef>,
}

#[derive(Deserialize)]
struct StanceFile {
    #[serde(default)]
    stance: Vec<StanceDef>,
}

/// Load the builtin table overlaid with any of `talents.toml`, `forms.toml`,
/// `stances.toml` found in `dir`
pub fn load_rules(dir: &Path) -> Result<RulesTable> {
    let mut table = RulesTable::builtin();

    let talents_path = dir.join("talents.toml");
    if talents_path.exists() {
        let content = fs::read_to_string(&talents_path)?;
        let file: TalentFile = toml::from_str(&content)?;
        for def in file.talent {
            tracing::debug!(id = %def.id, "talent loaded");
            table.insert_talent(def);
        }
    }

    let forms_path = dir.join("forms.toml");
    if forms_path.exists() {
        let content = fs::read_to_string(&forms_path)?;
        let file: FormFile = toml::from_str(&content)?;
        for def in file.form {
            tracing::debug!(id = %def.id, "form loaded");
            table.insert_form(def);
        }
    }

    let stances_path = dir.join("stances.toml");
    if stances_path.exists() {
        let content = fs::read_to_string(&stances_path)?;
        let file: StanceFile = toml::from_str(&content)?;
        for def in file.stance {
            tracing::debug!(id = %def.id, "stance loaded");
            table.insert_stance(def);
        }
    }

    Ok(table)
}
