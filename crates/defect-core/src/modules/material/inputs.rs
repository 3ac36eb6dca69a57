use crate::common::constants::BOLTZMANN_EV_PER_K;
use crate::domain::{RateError, RateResult};
use serde::{Deserialize, Serialize};

pub const INPUT_FIELD_COUNT: usize = 21;

/// The scalar material parameters a rate computation starts from.
///
/// Energies are in eV, frequencies in Hz, the lattice constant in meters and
/// the temperature in Kelvin. Serialized keys use the physics symbols
/// (`"T"`, `"Em_g"`, `"Eb_v_2g"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MaterialInputs {
    #[serde(rename = "T")]
    pub temperature: f64,
    pub nu_v: f64,
    pub nu_g: f64,
    pub nu_i: f64,
    pub a0: f64,
    pub b: f64,
    #[serde(rename = "G")]
    pub damage_rate: f64,
    #[serde(rename = "G_He")]
    pub helium_rate: f64,
    #[serde(rename = "f")]
    pub surviving_fraction: f64,
    #[serde(rename = "Em_g")]
    pub em_g: f64,
    #[serde(rename = "Em_v")]
    pub em_v: f64,
    #[serde(rename = "Em_i")]
    pub em_i: f64,
    #[serde(rename = "Eb_v_g")]
    pub eb_v_g: f64,
    #[serde(rename = "Eb_v_2g")]
    pub eb_v_2g: f64,
    #[serde(rename = "Eb_2g")]
    pub eb_2g: f64,
    #[serde(rename = "Ef_v")]
    pub ef_v: f64,
    #[serde(rename = "Z_v")]
    pub z_v: f64,
    #[serde(rename = "Z_i")]
    pub z_i: f64,
    pub rho: f64,
    pub floor: f64,
    pub epsilon: f64,
}

impl MaterialInputs {
    /// Keys in positional constructor order.
    pub const FIELD_NAMES: [&'static str; INPUT_FIELD_COUNT] = [
        "T", "nu_v", "nu_g", "nu_i", "a0", "b", "G", "G_He", "f", "Em_g", "Em_v", "Em_i",
        "Eb_v_g", "Eb_v_2g", "Eb_2g", "Ef_v", "Z_v", "Z_i", "rho", "floor", "epsilon",
    ];

    /// Builds inputs from the 21 positional scalars, ordered as `FIELD_NAMES`.
    pub fn from_ordered(values: &[f64]) -> RateResult<Self> {
        let values: [f64; INPUT_FIELD_COUNT] = values.try_into().map_err(|_| {
            RateError::input_validation(
                crate::domain::INVALID_PARAMETER,
                format!(
                    "expected {} positional material parameters, got {}",
                    INPUT_FIELD_COUNT,
                    values.len()
                ),
            )
        })?;

        let [
            temperature,
            nu_v,
            nu_g,
            nu_i,
            a0,
            b,
            damage_rate,
            helium_rate,
            surviving_fraction,
            em_g,
            em_v,
            em_i,
            eb_v_g,
            eb_v_2g,
            eb_2g,
            ef_v,
            z_v,
            z_i,
            rho,
            floor,
            epsilon,
        ] = values;

        Ok(Self {
            temperature,
            nu_v,
            nu_g,
            nu_i,
            a0,
            b,
            damage_rate,
            helium_rate,
            surviving_fraction,
            em_g,
            em_v,
            em_i,
            eb_v_g,
            eb_v_2g,
            eb_2g,
            ef_v,
            z_v,
            z_i,
            rho,
            floor,
            epsilon,
        })
    }

    pub fn to_ordered(&self) -> [f64; INPUT_FIELD_COUNT] {
        [
            self.temperature,
            self.nu_v,
            self.nu_g,
            self.nu_i,
            self.a0,
            self.b,
            self.damage_rate,
            self.helium_rate,
            self.surviving_fraction,
            self.em_g,
            self.em_v,
            self.em_i,
            self.eb_v_g,
            self.eb_v_2g,
            self.eb_2g,
            self.ef_v,
            self.z_v,
            self.z_i,
            self.rho,
            self.floor,
            self.epsilon,
        ]
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        let index = field_index(key)?;
        Some(self.to_ordered()[index])
    }

    /// Overrides one parameter by its symbol.
    pub fn set(&mut self, key: &str, value: f64) -> RateResult<()> {
        let index = field_index(key).ok_or_else(|| {
            RateError::input_validation(
                crate::domain::INVALID_PARAMETER,
                format!(
                    "unknown material parameter '{}', expected one of: {}",
                    key,
                    Self::FIELD_NAMES.join(", ")
                ),
            )
        })?;

        let mut values = self.to_ordered();
        values[index] = value;
        *self = Self::from_ordered(&values)?;
        Ok(())
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Rejects inputs outside the physical domain of the rate expressions.
    ///
    /// Every parameter must be finite and non-negative; the temperature must
    /// be strictly positive.
    pub fn validate_domain(&self) -> RateResult<()> {
        for (name, value) in Self::FIELD_NAMES.iter().zip(self.to_ordered()) {
            if !value.is_finite() {
                return Err(RateError::invalid_parameter(name, value, "must be finite"));
            }
            if value < 0.0 {
                return Err(RateError::invalid_parameter(
                    name,
                    value,
                    "must not be negative",
                ));
            }
        }

        if self.temperature <= 0.0 {
            return Err(RateError::invalid_parameter(
                "T",
                self.temperature,
                "must be greater than zero",
            ));
        }
        // every Boltzmann factor divides by k_B * T
        if BOLTZMANN_EV_PER_K * self.temperature == 0.0 {
            return Err(RateError::invalid_parameter(
                "T",
                self.temperature,
                "is too small: k_B * T underflows to zero",
            ));
        }

        Ok(())
    }
}

fn field_index(key: &str) -> Option<usize> {
    let key = key.trim();
    MaterialInputs::FIELD_NAMES
        .iter()
        .position(|name| *name == key)
}
