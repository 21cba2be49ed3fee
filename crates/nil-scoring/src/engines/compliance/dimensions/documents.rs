use super::{Assessment, DimensionContext, Finding};
use crate::engines::compliance::domain::ConsentStatus;
use crate::engines::resolve::non_blank;

const RISK_FLAG_PENALTY: f64 = 0.05;
const RISK_FLAG_CAP: f64 = 0.25;

pub(super) fn assess(ctx: &DimensionContext<'_>) -> Assessment {
    let deal = &ctx.snapshot.deal;
    let review = &ctx.snapshot.review;
    let mut assessment = Assessment::default();

    let has_contract = non_blank(deal.contract_text.as_deref()).is_some()
        || non_blank(deal.contract_url.as_deref()).is_some();

    if !review.contract_signed {
        let finding = if has_contract {
            Finding::new(0.35, "CONTRACT_NOT_SIGNED", "contract on file but not signed")
        } else {
            Finding::new(0.35, "CONTRACT_MISSING", "no written contract on file")
        };
        assessment.find(finding.recommend("Execute a written, signed contract before work begins"));
    }

    if !review.w9_submitted {
        assessment.find(
            Finding::new(0.20, "W9_MISSING", "W-9 not collected")
                .recommend("Collect a W-9 from the athlete before the first payment"),
        );
    }

    if !review.disclosure_form_on_file {
        assessment.find(
            Finding::new(0.20, "DISCLOSURE_FORM_MISSING", "disclosure form not on file")
                .recommend("Attach the completed disclosure form to the deal record"),
        );
    }

    if ctx.is_minor() && ctx.snapshot.athlete.consent_status != Some(ConsentStatus::Approved) {
        assessment.find(
            Finding::new(
                0.25,
                "GUARDIAN_SIGNATURE_MISSING",
                "minor athlete without an approved guardian signature",
            )
            .recommend("Collect a guardian co-signature on the contract"),
        );
    }

    if let (Some(start), Some(end)) = (deal.start_date, deal.end_date) {
        if end < start {
            assessment.find(
                Finding::new(0.10, "DEAL_DATES_INVALID", "end date precedes start date")
                    .recommend("Correct the contract term dates"),
            );
        }
    }

    let flags = &review.contract_risk_flags;
    if !flags.is_empty() {
        let penalty = (flags.len() as f64 * RISK_FLAG_PENALTY).min(RISK_FLAG_CAP);
        assessment.find(
            Finding::new(
                penalty,
                "CONTRACT_RISK_FLAGS",
                format!("contract analysis flagged: {}", flags.join(", ")),
            )
            .recommend("Have counsel resolve the flagged contract clauses"),
        );
    }

    if assessment.is_clean() {
        assessment.note("signed contract, W-9, and disclosure form on file");
    }

    assessment
}
