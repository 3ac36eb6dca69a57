//! Temperature-dependent rate constants for vacancy / SIA / helium kinetics.
//!
//! A [`MaterialProperties`] value is computed once from [`MaterialInputs`] and
//! never changes afterwards; re-deriving at another temperature or with other
//! inputs yields a new value.

mod deck;
mod inputs;
mod sweep;

pub use deck::{
    DeckError, MaterialDeck, load_material_deck, parse_material_deck, reference_tungsten_deck,
    reference_tungsten_inputs,
};
pub use inputs::{INPUT_FIELD_COUNT, MaterialInputs};
pub use sweep::{linear_temperatures, temperature_sweep};

use crate::common::constants::{ATOMS_PER_CELL, BOLTZMANN_EV_PER_K, JUMP_COORDINATION};
use crate::domain::{RateError, RateResult, ValidationPolicy};
use serde::{Deserialize, Serialize};

pub const DERIVED_FIELD_COUNT: usize = 15;

/// Rate constants derived from a [`MaterialInputs`] set.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct DerivedRates {
    #[serde(rename = "k_B")]
    pub k_b: f64,
    /// SIA reaction frequency.
    pub alpha: f64,
    /// Helium reaction frequency.
    pub beta: f64,
    /// Vacancy reaction frequency.
    pub gamma: f64,
    pub e1: f64,
    pub e2: f64,
    pub e3: f64,
    /// Re-solution rate.
    pub delta: f64,
    /// Atomic volume.
    #[serde(rename = "Omega")]
    pub omega: f64,
    #[serde(rename = "D_i")]
    pub d_i: f64,
    #[serde(rename = "D_v")]
    pub d_v: f64,
    #[serde(rename = "D_g")]
    pub d_g: f64,
    #[serde(rename = "C_s_v")]
    pub c_s_v: f64,
    #[serde(rename = "C_s_i")]
    pub c_s_i: f64,
    /// Thermal equilibrium vacancy concentration.
    #[serde(rename = "C_v_e")]
    pub c_v_e: f64,
}

impl DerivedRates {
    pub const FIELD_NAMES: [&'static str; DERIVED_FIELD_COUNT] = [
        "k_B", "alpha", "beta", "gamma", "e1", "e2", "e3", "delta", "Omega", "D_i", "D_v", "D_g",
        "C_s_v", "C_s_i", "C_v_e",
    ];

    pub fn from_inputs(inputs: &MaterialInputs) -> Self {
        let thermal_energy = BOLTZMANN_EV_PER_K * inputs.temperature;
        let prefactor = diffusion_prefactor(inputs.a0);

        let alpha = reaction_frequency(inputs.nu_i, inputs.em_i, thermal_energy);
        let beta = reaction_frequency(inputs.nu_g, inputs.em_g, thermal_energy);
        let gamma = reaction_frequency(inputs.nu_v, inputs.em_v, thermal_energy);

        Self {
            k_b: BOLTZMANN_EV_PER_K,
            alpha,
            beta,
            gamma,
            e1: boltzmann_factor(inputs.eb_v_g, thermal_energy),
            e2: boltzmann_factor(inputs.eb_v_2g, thermal_energy),
            e3: boltzmann_factor(inputs.eb_2g, thermal_energy),
            delta: inputs.b * inputs.damage_rate,
            omega: inputs.a0.powi(3) / ATOMS_PER_CELL,
            d_i: prefactor * alpha,
            d_v: prefactor * gamma,
            d_g: prefactor * beta,
            c_s_v: prefactor * inputs.z_v * inputs.rho,
            c_s_i: prefactor * inputs.z_i * inputs.rho,
            c_v_e: boltzmann_factor(inputs.ef_v, thermal_energy),
        }
    }

    pub fn to_ordered(&self) -> [f64; DERIVED_FIELD_COUNT] {
        [
            self.k_b,
            self.alpha,
            self.beta,
            self.gamma,
            self.e1,
            self.e2,
            self.e3,
            self.delta,
            self.omega,
            self.d_i,
            self.d_v,
            self.d_g,
            self.c_s_v,
            self.c_s_i,
            self.c_v_e,
        ]
    }

    pub fn named_values(&self) -> impl Iterator<Item = (&'static str, f64)> {
        Self::FIELD_NAMES.into_iter().zip(self.to_ordered())
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.named_values()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value)
    }

    fn first_non_finite(&self) -> Option<(&'static str, f64)> {
        self.named_values().find(|(_, value)| !value.is_finite())
    }
}

/// `exp(-E / kT)`.
pub fn boltzmann_factor(energy: f64, thermal_energy: f64) -> f64 {
    (-energy / thermal_energy).exp()
}

/// Arrhenius jump frequency `48 * nu * exp(-Em / kT)`.
pub fn reaction_frequency(
    attempt_frequency: f64,
    migration_energy: f64,
    thermal_energy: f64,
) -> f64 {
    JUMP_COORDINATION * attempt_frequency * boltzmann_factor(migration_energy, thermal_energy)
}

/// Shared `a0^2 / 48` factor of the diffusion coefficients and sink terms.
pub fn diffusion_prefactor(lattice_constant: f64) -> f64 {
    lattice_constant.powi(2) / JUMP_COORDINATION
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialProperties {
    inputs: MaterialInputs,
    derived: DerivedRates,
    policy: ValidationPolicy,
}

impl MaterialProperties {
    /// Computes under the default (strict) policy.
    pub fn new(inputs: MaterialInputs) -> RateResult<Self> {
        Self::compute(inputs, ValidationPolicy::default())
    }

    pub fn compute(inputs: MaterialInputs, policy: ValidationPolicy) -> RateResult<Self> {
        if policy.is_strict() {
            inputs.validate_domain()?;
        }

        let properties = Self::evaluate(inputs, policy);
        if policy.is_strict() {
            if let Some((field, value)) = properties.derived.first_non_finite() {
                return Err(RateError::numeric_overflow(field, value));
            }
        } else {
            properties.warn_non_finite();
        }

        Ok(properties)
    }

    /// Legacy behaviour: no checks, IEEE-754 propagation of zero, NaN and
    /// infinity into the derived fields.
    pub fn permissive(inputs: MaterialInputs) -> Self {
        let properties = Self::evaluate(inputs, ValidationPolicy::Permissive);
        properties.warn_non_finite();
        properties
    }

    fn warn_non_finite(&self) {
        if let Some((field, value)) = self.derived.first_non_finite() {
            tracing::warn!(
                field,
                value,
                temperature = self.inputs.temperature,
                "non-finite rate constant propagated under permissive validation"
            );
        }
    }

    fn evaluate(inputs: MaterialInputs, policy: ValidationPolicy) -> Self {
        let derived = DerivedRates::from_inputs(&inputs);
        tracing::debug!(
            temperature = inputs.temperature,
            %policy,
            alpha = derived.alpha,
            gamma = derived.gamma,
            "computed material rate constants"
        );
        Self {
            inputs,
            derived,
            policy,
        }
    }

    pub fn with_inputs(&self, inputs: MaterialInputs) -> RateResult<Self> {
        Self::compute(inputs, self.policy)
    }

    pub fn at_temperature(&self, temperature: f64) -> RateResult<Self> {
        self.with_inputs(self.inputs.with_temperature(temperature))
    }

    pub fn inputs(&self) -> &MaterialInputs {
        &self.inputs
    }

    pub fn derived(&self) -> &DerivedRates {
        &self.derived
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    /// `k_B * T` in eV.
    pub fn thermal_energy(&self) -> f64 {
        BOLTZMANN_EV_PER_K * self.inputs.temperature
    }

    pub fn diffusion_prefactor(&self) -> f64 {
        diffusion_prefactor(self.inputs.a0)
    }
}
