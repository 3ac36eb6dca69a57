use crate::domain::{RateError, RateResult, ValidationPolicy};
use crate::modules::material::{DerivedRates, MaterialInputs, MaterialProperties};
use crate::modules::serialization::{FloatStyle, format_float};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

const NAME_WIDTH: usize = 8;
const VALUE_WIDTH: usize = 24;
const VALUE_PRECISION: usize = 15;
const SWEEP_COLUMNS: [&str; 7] = ["alpha", "beta", "gamma", "D_i", "D_v", "D_g", "C_v_e"];

#[derive(Serialize)]
struct PropertiesReport<'a> {
    validation: ValidationPolicy,
    inputs: &'a MaterialInputs,
    derived: &'a DerivedRates,
}

/// Pretty JSON with `validation`, `inputs` and `derived` sections. Non-finite
/// values are written as `null`.
pub fn render_properties_json(properties: &MaterialProperties) -> RateResult<String> {
    let report = PropertiesReport {
        validation: properties.policy(),
        inputs: properties.inputs(),
        derived: properties.derived(),
    };
    serde_json::to_string_pretty(&report).map_err(|source| {
        RateError::internal(
            "SYS.REPORT_SERIALIZE",
            format!("failed to serialize rate report: {}", source),
        )
    })
}

pub fn render_properties_text(properties: &MaterialProperties) -> String {
    let mut lines = vec![format!(
        "# T = {} K  validation = {}",
        format_float(properties.inputs().temperature, FloatStyle::Fixed, 0, 2),
        properties.policy()
    )];
    lines.extend(properties.derived().named_values().map(|(name, value)| {
        format!(
            "{name:<width$}{}",
            format_float(value, FloatStyle::Scientific, VALUE_WIDTH, VALUE_PRECISION),
            width = NAME_WIDTH
        )
    }));
    lines.join("\n") + "\n"
}

pub fn render_sweep_table(sweep: &[MaterialProperties]) -> String {
    let mut header = format!("{:>10}", "T");
    for column in SWEEP_COLUMNS {
        header.push_str(&format!("{column:>16}"));
    }

    let mut lines = vec![header];
    for properties in sweep {
        let derived = properties.derived();
        let mut row = format_float(properties.inputs().temperature, FloatStyle::Fixed, 10, 2);
        for column in SWEEP_COLUMNS {
            let value = derived.get(column).unwrap_or(f64::NAN);
            row.push_str(&format_float(value, FloatStyle::Scientific, 16, 6));
        }
        lines.push(row);
    }
    lines.join("\n") + "\n"
}

/// Reads derived rates from either a full JSON report (its `derived`
/// section) or a bare derived-rates object.
pub fn load_derived_baseline(path: &Path) -> RateResult<DerivedRates> {
    let source = fs::read_to_string(path).map_err(|source| {
        RateError::io_system(
            "IO.BASELINE_READ",
            format!("failed to read baseline '{}': {}", path.display(), source),
        )
    })?;
    parse_derived_baseline(&source).map_err(|error| {
        RateError::input_validation(
            "INPUT.BASELINE_PARSE",
            format!("failed to parse baseline '{}': {}", path.display(), error),
        )
    })
}

pub fn parse_derived_baseline(source: &str) -> Result<DerivedRates, serde_json::Error> {
    let mut value: Value = serde_json::from_str(source)?;
    if let Some(derived) = value.get_mut("derived") {
        return serde_json::from_value(derived.take());
    }
    serde_json::from_value(value)
}
