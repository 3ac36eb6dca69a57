use super::{MaterialInputs, MaterialProperties};
use crate::domain::{RateError, RateResult, ValidationPolicy};

/// Evenly spaced temperatures from `from` to `to`, both ends included.
pub fn linear_temperatures(from: f64, to: f64, steps: usize) -> RateResult<Vec<f64>> {
    if steps < 2 {
        return Err(RateError::invalid_parameter(
            "steps",
            steps as f64,
            "must be at least 2",
        ));
    }
    for (name, value) in [("from", from), ("to", to)] {
        if !value.is_finite() {
            return Err(RateError::invalid_parameter(name, value, "must be finite"));
        }
    }

    let span = to - from;
    let last = (steps - 1) as f64;
    Ok((0..steps)
        .map(|index| {
            if index == steps - 1 {
                to
            } else {
                from + span * index as f64 / last
            }
        })
        .collect())
}

/// Computes one [`MaterialProperties`] per temperature, all other inputs held
/// fixed. Stops at the first temperature the policy rejects.
pub fn temperature_sweep(
    inputs: MaterialInputs,
    temperatures: &[f64],
    policy: ValidationPolicy,
) -> RateResult<Vec<MaterialProperties>> {
    temperatures
        .iter()
        .map(|&temperature| {
            MaterialProperties::compute(inputs.with_temperature(temperature), policy)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{linear_temperatures, temperature_sweep};
    use crate::domain::{INVALID_PARAMETER, ValidationPolicy};
    use crate::modules::material::reference_tungsten_inputs;

    #[test]
    fn linear_temperatures_include_both_ends() {
        let temperatures = linear_temperatures(600.0, 1200.0, 7).expect("grid should build");
        assert_eq!(
            temperatures,
            vec![600.0, 700.0, 800.0, 900.0, 1000.0, 1100.0, 1200.0]
        );
    }

    #[test]
    fn linear_temperatures_reject_degenerate_grids() {
        let error = linear_temperatures(600.0, 1200.0, 1).expect_err("one step is rejected");
        assert_eq!(error.placeholder(), INVALID_PARAMETER);
        assert!(error.message().contains("'steps'"));

        let error =
            linear_temperatures(f64::NAN, 1200.0, 4).expect_err("NaN start is rejected");
        assert!(error.message().contains("'from'"));
    }

    #[test]
    fn sweep_rederives_each_temperature() {
        let temperatures = [700.0, 800.0, 900.0];
        let sweep = temperature_sweep(
            reference_tungsten_inputs(),
            &temperatures,
            ValidationPolicy::Strict,
        )
        .expect("sweep should compute");

        assert_eq!(sweep.len(), 3);
        for (properties, temperature) in sweep.iter().zip(temperatures) {
            assert_eq!(properties.inputs().temperature, temperature);
        }
        assert!(sweep[0].derived().gamma < sweep[2].derived().gamma);
        assert_eq!(sweep[0].derived().omega, sweep[2].derived().omega);
    }

    #[test]
    fn strict_sweep_fails_on_non_positive_temperature() {
        let error = temperature_sweep(
            reference_tungsten_inputs(),
            &[300.0, 0.0],
            ValidationPolicy::Strict,
        )
        .expect_err("T = 0 is rejected");
        assert_eq!(error.placeholder(), INVALID_PARAMETER);

        let permissive = temperature_sweep(
            reference_tungsten_inputs(),
            &[300.0, 0.0],
            ValidationPolicy::Permissive,
        )
        .expect("permissive sweep keeps going");
        assert_eq!(permissive[1].derived().alpha, 0.0);
    }
}
