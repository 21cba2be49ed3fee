use super::{Assessment, DimensionContext, Finding};
use crate::engines::compliance::domain::PaymentSource;
use crate::engines::lookups::keyword_label;
use crate::engines::resolve::ResolvedFrom;
use crate::engines::subject::AthleteRole;

pub(super) fn assess(ctx: &DimensionContext<'_>) -> Assessment {
    let deal = &ctx.snapshot.deal;
    let review = &ctx.snapshot.review;
    let athlete = &ctx.snapshot.athlete;
    let mut assessment = Assessment::default();

    let needs_school_approval =
        deal.school_affiliated || athlete.role == AthleteRole::CollegeAthlete;
    if needs_school_approval && !review.school_approved {
        assessment.find(
            Finding::new(0.20, "SCHOOL_APPROVAL_MISSING", "school approval not on file")
                .recommend("Obtain written approval from the school compliance office before signing"),
        );
    }

    if !review.disclosure_filed {
        assessment.find(
            Finding::new(0.20, "DISCLOSURE_NOT_FILED", "deal not disclosed to the institution")
                .recommend("File the NIL disclosure with the school within the reporting window"),
        );
    }

    if !review.third_party_verified {
        assessment.find(
            Finding::new(
                0.10,
                "THIRD_PARTY_UNVERIFIED",
                "counter-party not verified by a third party",
            )
            .recommend("Verify the counter-party through an approved NIL clearinghouse"),
        );
    }

    if deal.booster_connected {
        assessment.find(
            Finding::new(
                0.30,
                "BOOSTER_CONNECTED_DEAL",
                "counter-party is connected to a booster",
            )
            .recommend("Route booster-connected deals through the compliance office before any payment"),
        );
    } else {
        let source = &ctx.payment_source;
        match source.value {
            PaymentSource::Booster => assessment.find(
                Finding::new(
                    0.30,
                    "BOOSTER_PAYMENT_SOURCE",
                    format!("payment source classified as booster ({})", describe(source.source)),
                )
                .recommend("Route booster-connected deals through the compliance office before any payment"),
            ),
            PaymentSource::Collective => assessment.find(
                Finding::new(
                    0.15,
                    "COLLECTIVE_PAYMENT_SOURCE",
                    format!(
                        "payment source classified as collective ({})",
                        describe(source.source)
                    ),
                )
                .recommend("Confirm the collective's deliverables reflect real promotional work"),
            ),
            PaymentSource::School => assessment.note("institution-funded deal"),
            PaymentSource::Brand => {
                if source.is_default() {
                    assessment.note("payment source unclassified, treated as brand");
                }
            }
        }
    }

    let pay_for_play_wording = ctx
        .lookups
        .pay_for_play_keywords
        .iter()
        .find(|keyword| ctx.terms.mentions(keyword));
    if deal.performance_based || pay_for_play_wording.is_some() {
        let note = match pay_for_play_wording {
            Some(keyword) => format!(
                "compensation tied to athletic performance ('{}')",
                keyword_label(keyword)
            ),
            None => "compensation tied to athletic performance".to_string(),
        };
        assessment.find(
            Finding::new(0.30, "PAY_FOR_PLAY_PERFORMANCE_INCENTIVE", note)
                .recommend("Remove compensation terms tied to athletic performance or playing time"),
        );
    }

    if let Some(keyword) = ctx
        .lookups
        .enrollment_keywords
        .iter()
        .find(|keyword| ctx.terms.mentions(keyword))
    {
        assessment.find(
            Finding::new(
                0.40,
                "ENROLLMENT_CONTINGENT_PAYMENT",
                format!(
                    "payment appears contingent on enrollment ('{}')",
                    keyword_label(keyword)
                ),
            )
            .recommend("Remove any term conditioning payment on enrollment, commitment, or transfer"),
        );
    }

    if athlete.role == AthleteRole::HsStudent
        && ctx.lookups.restricts_high_school_nil(&ctx.jurisdiction.value)
    {
        assessment.find(
            Finding::new(
                0.20,
                "HS_NIL_RESTRICTED_STATE",
                format!(
                    "{} restricts high-school NIL activity",
                    ctx.jurisdiction.value
                ),
            )
            .recommend("Confirm the state athletic association permits this deal before signing"),
        );
    }

    assessment
}

fn describe(source: ResolvedFrom) -> &'static str {
    match source {
        ResolvedFrom::Candidate(name) => name,
        ResolvedFrom::Default => "default",
    }
}
