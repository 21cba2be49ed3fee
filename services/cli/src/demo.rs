use crate::cli::{bootstrap, fmv_output, FmvOutput};
use crate::infra::print_json;
use chrono::{TimeZone, Utc};
use clap::Args;
use nil_scoring::engines::compliance::ComplianceSnapshot;
use nil_scoring::engines::fmv::AthleteSnapshot;
use nil_scoring::error::AppError;
use nil_scoring::scoring::{
    parse_social_stats, AnalysisRiskLevel, ComplianceReport, ComplianceRequest, ContractAnalysis,
};
use serde::Serialize;

const DEMO_DEALS: &str = include_str!("../fixtures/demo_deals.json");
const DEMO_ATHLETES: &str = include_str!("../fixtures/demo_athletes.json");
const DEMO_SOCIAL_STATS: &str = include_str!("../fixtures/demo_social_stats.csv");

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Attach a recorded contract analysis to full compliance reports
    #[arg(long)]
    pub(crate) with_analysis: bool,
    /// Skip the FMV portion of the demo
    #[arg(long)]
    pub(crate) skip_fmv: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DealOutcome {
    deal_id: String,
    full: ComplianceReport,
    quick: ComplianceReport,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DemoOutput {
    compliance: Vec<DealOutcome>,
    fmv: Vec<FmvOutput>,
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        with_analysis,
        skip_fmv,
    } = args;

    let deals: Vec<ComplianceSnapshot> = serde_json::from_str(DEMO_DEALS)?;
    let analysis = with_analysis.then(sample_analysis);
    let (service, repository) = bootstrap(analysis)?;

    let mut compliance = Vec::with_capacity(deals.len());
    for deal in deals {
        let deal_id = deal.deal.id.0.clone();
        repository.insert_deal(deal);

        let full = service
            .score_compliance(ComplianceRequest::full(deal_id.as_str()))
            .await?;
        let quick = service
            .score_compliance(ComplianceRequest::quick(deal_id.as_str()))
            .await?;
        compliance.push(DealOutcome {
            deal_id,
            full,
            quick,
        });
    }

    let mut fmv = Vec::new();
    if !skip_fmv {
        let mut athletes: Vec<AthleteSnapshot> = serde_json::from_str(DEMO_ATHLETES)?;
        let mut social = parse_social_stats(DEMO_SOCIAL_STATS.as_bytes())?.strict()?;
        for athlete in &mut athletes {
            if let Some(stats) = social.remove(&athlete.profile.id) {
                athlete.social_stats = stats;
            }
        }

        for athlete in athletes {
            repository.insert_athlete(athlete.clone());
            fmv.push(fmv_output(&service, &athlete)?);
        }
    }

    print_json(&DemoOutput { compliance, fmv })
}

fn sample_analysis() -> ContractAnalysis {
    ContractAnalysis {
        summary: "Short-term promotional agreement with standard usage rights".to_string(),
        risk_flags: vec!["auto-renewal clause".to_string()],
        risk_level: AnalysisRiskLevel::Low,
        analyzed_at: Utc
            .with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
            .single()
            .unwrap_or_else(Utc::now),
    }
}
