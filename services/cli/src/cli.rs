use crate::demo::{run_demo, DemoArgs};
use crate::infra::{print_json, read_json, InMemoryScoringRepository, RecordedAnalyzer};
use clap::{Args, Parser, Subcommand, ValueEnum};
use nil_scoring::config::AppConfig;
use nil_scoring::engines::compliance::ComplianceSnapshot;
use nil_scoring::engines::fmv::{AthleteSnapshot, FmvCalculation};
use nil_scoring::engines::lookups::LookupTables;
use nil_scoring::error::AppError;
use nil_scoring::scoring::{
    parse_social_stats, BatchInput, ComplianceMode, ComplianceRequest, ContractAnalysis,
    ScoringService,
};
use nil_scoring::telemetry;
use serde::Serialize;
use serde_json::json;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(
    name = "nil-scoring",
    about = "Score NIL deals for compliance risk and athletes for fair market value",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a deal snapshot for compliance risk
    Compliance(ComplianceArgs),
    /// Calculate an athlete's fair-market-value score
    Fmv(FmvArgs),
    /// Calculate FMV scores for a list of athletes
    Batch(BatchArgs),
    /// Validate a lookup table file and print its summary
    Lookups(LookupsArgs),
    /// Score the bundled sample deals and athletes (default command)
    Demo(DemoArgs),
}

#[derive(Args, Debug)]
struct ComplianceArgs {
    /// Deal snapshot JSON (deal, athlete, review, tax, optional fmvRange)
    #[arg(long)]
    input: PathBuf,
    /// Full scoring persists and enriches; quick only triages
    #[arg(long, value_enum, default_value_t = ModeArg::Full)]
    mode: ModeArg,
    /// Recorded contract analysis JSON to attach in full mode
    #[arg(long)]
    analysis: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ModeArg {
    Full,
    Quick,
}

impl From<ModeArg> for ComplianceMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Full => ComplianceMode::Full,
            ModeArg::Quick => ComplianceMode::Quick,
        }
    }
}

#[derive(Args, Debug)]
struct FmvArgs {
    /// Athlete snapshot JSON (profile, socialStats, jurisdictionRules, ranking)
    #[arg(long)]
    input: PathBuf,
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// JSON array of athlete snapshots
    #[arg(long)]
    input: PathBuf,
    /// CSV of social stats appended to the matching athletes
    #[arg(long)]
    social_csv: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct LookupsArgs {
    /// Lookup file to validate (defaults to NIL_LOOKUPS_PATH or the bundled tables)
    #[arg(long)]
    path: Option<PathBuf>,
}

pub(crate) type CliService = ScoringService<InMemoryScoringRepository, RecordedAnalyzer>;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FmvOutput {
    #[serde(flatten)]
    pub(crate) calculation: FmvCalculation,
    pub(crate) is_public_score: bool,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    match command {
        Command::Compliance(args) => run_compliance(args).await,
        Command::Fmv(args) => run_fmv(args),
        Command::Batch(args) => run_batch(args),
        Command::Lookups(args) => run_lookups(args),
        Command::Demo(args) => run_demo(args).await,
    }
}

/// Loads configuration, installs tracing, and wires the service to an in-memory store.
pub(crate) fn bootstrap(
    analysis: Option<ContractAnalysis>,
) -> Result<(CliService, InMemoryScoringRepository), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let lookups = Arc::new(config.scoring.lookup_tables()?);
    let repository = InMemoryScoringRepository::default();
    let service = ScoringService::new(
        Arc::new(repository.clone()),
        Arc::new(RecordedAnalyzer::new(analysis)),
        lookups,
        &config.scoring,
    )?;

    Ok((service, repository))
}

pub(crate) fn fmv_output(
    service: &CliService,
    snapshot: &AthleteSnapshot,
) -> Result<FmvOutput, AppError> {
    let calculation = service.calculate_fmv(&snapshot.profile.id)?;
    let stored = service.stored_fmv(&snapshot.profile.id)?;
    Ok(FmvOutput {
        calculation,
        is_public_score: stored.is_public_score,
    })
}

async fn run_compliance(args: ComplianceArgs) -> Result<(), AppError> {
    let snapshot: ComplianceSnapshot = read_json(&args.input)?;
    let analysis = match &args.analysis {
        Some(path) => Some(read_json::<ContractAnalysis>(path)?),
        None => None,
    };

    let (service, repository) = bootstrap(analysis)?;
    let request = ComplianceRequest {
        deal_id: Some(snapshot.deal.id.0.clone()),
        mode: args.mode.into(),
    };
    repository.insert_deal(snapshot);

    let report = service.score_compliance(request).await?;
    print_json(&report)
}

fn run_fmv(args: FmvArgs) -> Result<(), AppError> {
    let snapshot: AthleteSnapshot = read_json(&args.input)?;

    let (service, repository) = bootstrap(None)?;
    repository.insert_athlete(snapshot.clone());

    print_json(&fmv_output(&service, &snapshot)?)
}

fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let records: Vec<serde_json::Value> = read_json(&args.input)?;
    let mut input = BatchInput::from_records(records);
    let (service, repository) = bootstrap(None)?;

    if let Some(path) = &args.social_csv {
        let imported = parse_social_stats(File::open(path)?)?;
        for athlete_id in input.apply_social_import(imported) {
            tracing::warn!(athlete_id = %athlete_id, "social stats reference an unknown athlete");
        }
    }

    let athlete_ids = input.athlete_ids();
    for athlete in input.athletes {
        repository.insert_athlete(athlete);
    }

    let mut report = service.calculate_fmv_batch(&athlete_ids);
    report.record_rejected(input.rejected);
    let tier_counts: Vec<_> = report
        .tier_counts()
        .into_iter()
        .map(|(tier, count)| json!({ "tier": tier.label(), "count": count }))
        .collect();

    print_json(&json!({
        "attempted": report.attempted(),
        "succeeded": report.succeeded(),
        "tierCounts": tier_counts,
        "calculations": report.calculations,
        "failures": report.failures,
    }))
}

fn run_lookups(args: LookupsArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let tables = match &args.path {
        Some(path) => LookupTables::from_path(path)?,
        None => config.scoring.lookup_tables()?,
    };
    tracing::info!(version = tables.version, "lookup tables validated");

    print_json(&json!({
        "version": tables.version,
        "defaultState": tables.default_state,
        "complianceWeights": tables.compliance_weights,
        "highValuePositions": tables.high_value_positions.len(),
        "majorMarketStates": tables.major_market_states,
        "brandScreenEntries": tables.brand_screen.len(),
    }))
}
