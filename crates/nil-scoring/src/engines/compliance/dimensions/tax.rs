use super::{Assessment, DimensionContext, Finding};

pub(super) fn assess(ctx: &DimensionContext<'_>) -> Assessment {
    let snapshot = ctx.snapshot;
    let thresholds = &ctx.lookups.tax_thresholds;
    let mut assessment = Assessment::default();

    let earnings = snapshot.tax.ytd_nil_earnings + snapshot.deal.compensation_amount;
    let acknowledged = snapshot.athlete.tax_obligation_acknowledged;
    let supported = snapshot.tax.professional_support;

    if !snapshot.review.w9_submitted {
        assessment.find(
            Finding::new(0.35, "TAX_W9_NOT_ON_FILE", "no W-9 for 1099 reporting")
                .recommend("Collect a W-9 from the athlete before the first payment"),
        );
    }

    if !acknowledged {
        assessment.find(
            Finding::new(
                0.25,
                "TAX_OBLIGATION_UNACKNOWLEDGED",
                "athlete has not acknowledged NIL tax obligations",
            )
            .recommend("Have the athlete complete the NIL tax obligations acknowledgment"),
        );
        if earnings >= thresholds.filing {
            assessment.find(Finding::new(
                0.10,
                "TAX_FILING_REQUIRED",
                format!("year-to-date NIL earnings {earnings:.0} exceed the filing threshold"),
            ));
        }
    }

    if !supported && earnings >= thresholds.professional_support {
        assessment.find(
            Finding::new(
                0.15,
                "TAX_PROFESSIONAL_SUPPORT_RECOMMENDED",
                format!("{earnings:.0} in NIL earnings without professional tax support"),
            )
            .recommend("Connect the athlete with a tax professional familiar with NIL income"),
        );
    }

    if !supported && earnings >= thresholds.quarterly_estimates {
        assessment.find(
            Finding::new(
                0.10,
                "TAX_QUARTERLY_ESTIMATES_DUE",
                "earnings level requires quarterly estimated payments",
            )
            .recommend("Set up quarterly estimated tax payments"),
        );
    }

    if assessment.is_clean() {
        assessment.note(format!(
            "tax ready with {earnings:.0} in year-to-date NIL earnings"
        ));
    }

    assessment
}
