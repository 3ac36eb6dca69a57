use super::{MaterialInputs, MaterialProperties};
use crate::domain::{INVALID_PARAMETER, RateError, RateResult, ValidationPolicy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A parameter deck: one material input set plus the validation policy it
/// should be computed under.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MaterialDeck {
    #[serde(default)]
    pub validation: ValidationPolicy,
    pub material: MaterialInputs,
}

impl MaterialDeck {
    pub fn new(material: MaterialInputs, validation: ValidationPolicy) -> Self {
        Self {
            validation,
            material,
        }
    }

    /// Applies a `KEY=VALUE` override such as `T=900` or `Em_v=1.4`.
    pub fn apply_override(&mut self, assignment: &str) -> RateResult<()> {
        let (key, raw_value) = assignment.split_once('=').ok_or_else(|| {
            RateError::input_validation(
                INVALID_PARAMETER,
                format!("override '{}' must have the form KEY=VALUE", assignment),
            )
        })?;

        let value = raw_value.trim().parse::<f64>().map_err(|source| {
            RateError::input_validation(
                INVALID_PARAMETER,
                format!(
                    "override '{}' has a non-numeric value '{}': {}",
                    assignment,
                    raw_value.trim(),
                    source
                ),
            )
        })?;

        self.material.set(key, value)
    }

    pub fn build(&self) -> RateResult<MaterialProperties> {
        MaterialProperties::compute(self.material, self.validation)
    }

    pub fn to_json(&self) -> RateResult<String> {
        serde_json::to_string_pretty(self).map_err(|source| {
            RateError::internal(
                "SYS.DECK_SERIALIZE",
                format!("failed to serialize material deck: {}", source),
            )
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    #[error("failed to read material deck '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse material deck '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl From<DeckError> for RateError {
    fn from(error: DeckError) -> Self {
        match &error {
            DeckError::Read { .. } => RateError::io_system("IO.DECK_READ", error.to_string()),
            DeckError::Parse { .. } => {
                RateError::input_validation("INPUT.DECK_PARSE", error.to_string())
            }
        }
    }
}

pub fn load_material_deck(deck_path: impl AsRef<Path>) -> Result<MaterialDeck, DeckError> {
    let deck_path = deck_path.as_ref();
    let source = fs::read_to_string(deck_path).map_err(|source| DeckError::Read {
        path: deck_path.to_path_buf(),
        source,
    })?;
    parse_material_deck(&source).map_err(|source| DeckError::Parse {
        path: deck_path.to_path_buf(),
        source,
    })
}

pub fn parse_material_deck(source: &str) -> Result<MaterialDeck, serde_json::Error> {
    serde_json::from_str(source)
}

/// Tungsten-like parameter set at 800 K used as the template deck.
pub fn reference_tungsten_inputs() -> MaterialInputs {
    MaterialInputs {
        temperature: 800.0,
        nu_v: 1.0e13,
        nu_g: 1.0e13,
        nu_i: 1.0e13,
        a0: 3.16e-10,
        b: 1.0e-4,
        damage_rate: 1.0e-6,
        helium_rate: 1.0e-7,
        surviving_fraction: 1.0,
        em_g: 0.8,
        em_v: 1.3,
        em_i: 0.3,
        eb_v_g: 2.5,
        eb_v_2g: 1.0,
        eb_2g: 1.0,
        ef_v: 3.5,
        z_v: 1.0,
        z_i: 1.2,
        rho: 1.0e14,
        floor: 1.0e-6,
        epsilon: 1.0,
    }
}

pub fn reference_tungsten_deck() -> MaterialDeck {
    MaterialDeck::new(reference_tungsten_inputs(), ValidationPolicy::Strict)
}
