use super::CliError;
use anyhow::Context;
use defect_core::domain::{RateError, ValidationPolicy};
use defect_core::modules::material::{MaterialDeck, load_material_deck, reference_tungsten_deck};
use defect_core::modules::serialization::write_text_artifact;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "warn";

/// Installs the stderr subscriber; `RUST_LOG` overrides the default filter.
pub(crate) fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(super) enum ValidationArg {
    Strict,
    Permissive,
}

impl From<ValidationArg> for ValidationPolicy {
    fn from(value: ValidationArg) -> Self {
        match value {
            ValidationArg::Strict => ValidationPolicy::Strict,
            ValidationArg::Permissive => ValidationPolicy::Permissive,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub(super) enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub(super) struct DeckArgs {
    /// JSON parameter deck (defaults to the reference tungsten deck)
    #[arg(long)]
    pub(super) deck: Option<PathBuf>,

    /// Override one material parameter, e.g. `--set T=900`
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub(super) overrides: Vec<String>,

    /// Validation policy, overriding the deck's own setting
    #[arg(long, value_enum)]
    pub(super) validation: Option<ValidationArg>,
}

pub(super) fn resolve_deck(args: &DeckArgs) -> Result<MaterialDeck, CliError> {
    let mut deck = match &args.deck {
        Some(path) => load_material_deck(path).map_err(RateError::from)?,
        None => reference_tungsten_deck(),
    };

    for assignment in &args.overrides {
        deck.apply_override(assignment)?;
    }
    if let Some(validation) = args.validation {
        deck.validation = validation.into();
    }

    tracing::debug!(
        deck = ?args.deck,
        overrides = args.overrides.len(),
        validation = %deck.validation,
        "resolved material deck"
    );
    Ok(deck)
}

/// Prints `content` to stdout, or writes it to `output` when given.
pub(super) fn emit_output(content: &str, output: Option<&Path>) -> Result<(), CliError> {
    match output {
        Some(path) => {
            write_text_artifact(path, content)
                .with_context(|| format!("failed to write output '{}'", path.display()))?;
            tracing::info!(path = %path.display(), "wrote output");
        }
        None => print!("{}", content),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{DeckArgs, ValidationArg, resolve_deck};
    use defect_core::domain::ValidationPolicy;
    use defect_core::modules::material::reference_tungsten_deck;

    #[test]
    fn missing_deck_falls_back_to_reference() {
        let deck = resolve_deck(&DeckArgs::default()).expect("reference deck resolves");
        assert_eq!(deck, reference_tungsten_deck());
    }

    #[test]
    fn overrides_and_validation_flag_apply_in_order() {
        let args = DeckArgs {
            deck: None,
            overrides: vec!["T=900".to_string(), "T=950".to_string()],
            validation: Some(ValidationArg::Permissive),
        };
        let deck = resolve_deck(&args).expect("deck resolves");

        assert_eq!(deck.material.temperature, 950.0);
        assert_eq!(deck.validation, ValidationPolicy::Permissive);
    }
}
