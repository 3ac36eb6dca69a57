//! Tolerance comparison of derived rate constants against a recorded baseline.

use crate::modules::material::DerivedRates;

pub const DEFAULT_REL_TOL: f64 = 1.0e-9;
pub const DEFAULT_RELATIVE_FLOOR: f64 = 1.0e-300;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericTolerance {
    pub abs_tol: f64,
    pub rel_tol: f64,
    pub relative_floor: f64,
}

impl Default for NumericTolerance {
    fn default() -> Self {
        Self {
            abs_tol: 0.0,
            rel_tol: DEFAULT_REL_TOL,
            relative_floor: DEFAULT_RELATIVE_FLOOR,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToleranceComparison {
    pub abs_diff: f64,
    pub rel_diff: f64,
    pub passes: bool,
}

pub fn compare_with_tolerance(
    baseline: f64,
    actual: f64,
    tolerance: NumericTolerance,
) -> ToleranceComparison {
    // identical specials (NaN/NaN, inf/inf) match; any other pairing with a
    // non-finite value fails
    if (baseline.is_nan() && actual.is_nan()) || baseline == actual {
        return ToleranceComparison {
            abs_diff: 0.0,
            rel_diff: 0.0,
            passes: true,
        };
    }

    let abs_diff = (actual - baseline).abs();
    if !baseline.is_finite() || !actual.is_finite() {
        return ToleranceComparison {
            abs_diff,
            rel_diff: f64::INFINITY,
            passes: false,
        };
    }

    let rel_denominator = baseline.abs().max(tolerance.relative_floor);
    let rel_diff = abs_diff / rel_denominator;
    let passes = abs_diff <= tolerance.abs_tol || abs_diff <= tolerance.rel_tol * rel_denominator;

    ToleranceComparison {
        abs_diff,
        rel_diff,
        passes,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldComparison {
    pub field: &'static str,
    pub baseline: f64,
    pub actual: f64,
    pub comparison: ToleranceComparison,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BaselineReport {
    pub tolerance: NumericTolerance,
    pub fields: Vec<FieldComparison>,
    pub passed: bool,
}

impl BaselineReport {
    pub fn failures(&self) -> impl Iterator<Item = &FieldComparison> {
        self.fields
            .iter()
            .filter(|field| !field.comparison.passes)
    }
}

pub fn compare_derived(
    baseline: &DerivedRates,
    actual: &DerivedRates,
    tolerance: NumericTolerance,
) -> BaselineReport {
    let fields: Vec<FieldComparison> = baseline
        .named_values()
        .zip(actual.to_ordered())
        .map(|((field, baseline), actual)| FieldComparison {
            field,
            baseline,
            actual,
            comparison: compare_with_tolerance(baseline, actual, tolerance),
        })
        .collect();
    let passed = fields.iter().all(|field| field.comparison.passes);

    BaselineReport {
        tolerance,
        fields,
        passed,
    }
}

pub fn format_numeric(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }

    if value == f64::INFINITY {
        return "inf".to_string();
    }

    if value == f64::NEG_INFINITY {
        return "-inf".to_string();
    }

    format!("{value:.15E}")
}

pub fn render_baseline_summary(report: &BaselineReport) -> String {
    let mut lines = vec![format!(
        "Baseline status: {} (relTol={}, absTol={})",
        if report.passed { "PASS" } else { "FAIL" },
        format_numeric(report.tolerance.rel_tol),
        format_numeric(report.tolerance.abs_tol)
    )];
    for failure in report.failures() {
        lines.push(format!(
            "  {}: baseline={} actual={} rel_diff={}",
            failure.field,
            format_numeric(failure.baseline),
            format_numeric(failure.actual),
            format_numeric(failure.comparison.rel_diff)
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::{
        NumericTolerance, compare_derived, compare_with_tolerance, format_numeric,
        render_baseline_summary,
    };
    use crate::modules::material::{MaterialProperties, reference_tungsten_inputs};

    #[test]
    fn relative_tolerance_accepts_small_drift() {
        let tolerance = NumericTolerance::default();
        let comparison = compare_with_tolerance(3.0e6, 3.0e6 * (1.0 + 5.0e-10), tolerance);
        assert!(comparison.passes);
        assert!(comparison.rel_diff < 1.0e-9);

        let comparison = compare_with_tolerance(3.0e6, 3.0e6 * (1.0 + 5.0e-9), tolerance);
        assert!(!comparison.passes);
    }

    #[test]
    fn absolute_tolerance_covers_values_near_zero() {
        let tolerance = NumericTolerance {
            abs_tol: 1.0e-30,
            ..NumericTolerance::default()
        };
        assert!(compare_with_tolerance(0.0, 5.0e-31, tolerance).passes);
        assert!(!compare_with_tolerance(0.0, 5.0e-31, NumericTolerance::default()).passes);
    }

    #[test]
    fn special_values_only_match_themselves() {
        let tolerance = NumericTolerance::default();
        assert!(compare_with_tolerance(f64::NAN, f64::NAN, tolerance).passes);
        assert!(compare_with_tolerance(f64::INFINITY, f64::INFINITY, tolerance).passes);
        assert!(!compare_with_tolerance(f64::INFINITY, 1.0, tolerance).passes);
        assert!(!compare_with_tolerance(1.0, f64::NAN, tolerance).passes);
    }

    #[test]
    fn infinite_baseline_never_matches_finite_value() {
        let loose = NumericTolerance {
            abs_tol: 1.0e300,
            rel_tol: 1.0,
            ..NumericTolerance::default()
        };
        for (baseline, actual) in [
            (f64::INFINITY, 1.0),
            (1.0, f64::INFINITY),
            (f64::NEG_INFINITY, -1.0e308),
            (f64::INFINITY, f64::NEG_INFINITY),
        ] {
            let comparison = compare_with_tolerance(baseline, actual, loose);
            assert!(!comparison.passes, "{baseline} vs {actual} should fail");
            assert_eq!(comparison.rel_diff, f64::INFINITY);
        }
    }

    #[test]
    fn derived_comparison_fails_when_baseline_overflowed() {
        let base = MaterialProperties::new(reference_tungsten_inputs()).expect("base computes");
        let mut baseline = *base.derived();
        baseline.alpha = f64::INFINITY;

        let report = compare_derived(&baseline, base.derived(), NumericTolerance::default());
        assert!(!report.passed);
        let failed: Vec<&str> = report.failures().map(|field| field.field).collect();
        assert_eq!(failed, vec!["alpha"]);
        assert!(render_baseline_summary(&report).contains("  alpha: baseline=inf"));
    }

    #[test]
    fn derived_comparison_flags_changed_fields() {
        let base = MaterialProperties::new(reference_tungsten_inputs()).expect("base computes");
        let same = compare_derived(base.derived(), base.derived(), NumericTolerance::default());
        assert!(same.passed);
        assert_eq!(same.fields.len(), 15);
        assert_eq!(same.failures().count(), 0);

        let hotter = base.at_temperature(801.0).expect("hotter computes");
        let report = compare_derived(base.derived(), hotter.derived(), NumericTolerance::default());
        assert!(!report.passed);
        let failed: Vec<&str> = report.failures().map(|field| field.field).collect();
        assert!(failed.contains(&"alpha"));
        assert!(failed.contains(&"C_v_e"));
        assert!(!failed.contains(&"Omega"));
        assert!(!failed.contains(&"C_s_i"));

        let summary = render_baseline_summary(&report);
        assert!(summary.starts_with("Baseline status: FAIL"));
        assert!(summary.contains("  alpha: baseline="));
    }

    #[test]
    fn numeric_formatting_names_special_values() {
        assert_eq!(format_numeric(f64::NAN), "NaN");
        assert_eq!(format_numeric(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_numeric(1.0), "1.000000000000000E0");
    }
}
