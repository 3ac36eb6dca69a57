use super::CliError;
use super::helpers::{DeckArgs, OutputFormat, emit_output, resolve_deck};
use defect_core::modules::material::{
    linear_temperatures, reference_tungsten_deck, temperature_sweep,
};
use defect_core::modules::report::{
    load_derived_baseline, render_properties_json, render_properties_text, render_sweep_table,
};
use defect_core::numerics::{
    DEFAULT_REL_TOL, NumericTolerance, compare_derived, render_baseline_summary,
};
use std::path::PathBuf;

#[derive(clap::Args)]
pub(super) struct ComputeArgs {
    #[command(flatten)]
    deck: DeckArgs,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write the report to this path instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(clap::Args)]
pub(super) struct SweepArgs {
    #[command(flatten)]
    deck: DeckArgs,

    /// First temperature of the grid (K)
    #[arg(long)]
    from: f64,

    /// Last temperature of the grid (K)
    #[arg(long)]
    to: f64,

    /// Number of grid points, both ends included
    #[arg(long, default_value_t = 5)]
    steps: usize,

    /// Write the table to this path instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(clap::Args)]
pub(super) struct CheckArgs {
    #[command(flatten)]
    deck: DeckArgs,

    /// JSON report or derived-rates object to compare against
    #[arg(long)]
    baseline: PathBuf,

    /// Relative tolerance per derived field
    #[arg(long, default_value_t = DEFAULT_REL_TOL)]
    rel_tol: f64,

    /// Absolute tolerance per derived field
    #[arg(long, default_value_t = 0.0)]
    abs_tol: f64,
}

#[derive(clap::Args)]
pub(super) struct TemplateArgs {
    /// Write the deck to this path instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(super) fn run_compute_command(args: ComputeArgs) -> Result<i32, CliError> {
    let deck = resolve_deck(&args.deck)?;
    let properties = deck.build()?;
    tracing::info!(
        temperature = properties.inputs().temperature,
        validation = %properties.policy(),
        "computed rate constants"
    );

    let rendered = match args.format {
        OutputFormat::Text => render_properties_text(&properties),
        OutputFormat::Json => render_properties_json(&properties)? + "\n",
    };
    emit_output(&rendered, args.output.as_deref())?;
    Ok(0)
}

pub(super) fn run_sweep_command(args: SweepArgs) -> Result<i32, CliError> {
    let deck = resolve_deck(&args.deck)?;
    let temperatures = linear_temperatures(args.from, args.to, args.steps)?;
    let sweep = temperature_sweep(deck.material, &temperatures, deck.validation)?;
    tracing::info!(
        points = sweep.len(),
        from = args.from,
        to = args.to,
        "computed temperature sweep"
    );

    emit_output(&render_sweep_table(&sweep), args.output.as_deref())?;
    Ok(0)
}

pub(super) fn run_check_command(args: CheckArgs) -> Result<i32, CliError> {
    let deck = resolve_deck(&args.deck)?;
    let properties = deck.build()?;
    let baseline = load_derived_baseline(&args.baseline)?;
    let tolerance = NumericTolerance {
        abs_tol: args.abs_tol,
        rel_tol: args.rel_tol,
        ..NumericTolerance::default()
    };

    let report = compare_derived(&baseline, properties.derived(), tolerance);
    tracing::info!(
        baseline = %args.baseline.display(),
        passed = report.passed,
        failures = report.failures().count(),
        "compared against baseline"
    );
    println!("{}", render_baseline_summary(&report));

    if report.passed { Ok(0) } else { Ok(1) }
}

pub(super) fn run_template_command(args: TemplateArgs) -> Result<i32, CliError> {
    let rendered = reference_tungsten_deck().to_json()? + "\n";
    emit_output(&rendered, args.output.as_deref())?;
    Ok(0)
}
