use super::{Assessment, DimensionContext, Finding};

const ABOVE_RANGE_RATIO: f64 = 1.5;
const EXTREME_RATIO: f64 = 3.0;

pub(super) fn assess(ctx: &DimensionContext<'_>) -> Assessment {
    let compensation = ctx.snapshot.deal.compensation_amount;
    let mut assessment = Assessment::default();

    let Some(range) = ctx.snapshot.fmv_range else {
        assessment.find(
            Finding::new(
                0.50,
                "FMV_UNAVAILABLE",
                "no independent FMV estimate for the athlete",
            )
            .recommend("Run an FMV calculation for the athlete before finalizing compensation"),
        );
        return assessment;
    };

    if compensation < range.low {
        assessment.find(Finding::new(
            0.05,
            "FMV_BELOW_RANGE",
            format!(
                "compensation {compensation:.0} below modeled range {:.0}-{:.0}",
                range.low, range.high
            ),
        ));
        return assessment;
    }

    if compensation <= range.high {
        assessment.note(format!(
            "compensation {compensation:.0} within modeled range {:.0}-{:.0}",
            range.low, range.high
        ));
        return assessment;
    }

    let ratio = if range.high > 0.0 {
        compensation / range.high
    } else {
        f64::INFINITY
    };

    let finding = if ratio <= ABOVE_RANGE_RATIO {
        Finding::new(
            0.30,
            "FMV_ABOVE_RANGE",
            format!("compensation {ratio:.2}x the top of the modeled range"),
        )
        .recommend("Document the deliverables that justify compensation above modeled FMV")
    } else if ratio <= EXTREME_RATIO {
        Finding::new(
            0.65,
            "FMV_SIGNIFICANTLY_ABOVE_RANGE",
            format!("compensation {ratio:.2}x the top of the modeled range"),
        )
        .recommend("Obtain an independent valuation supporting the compensation level")
    } else {
        Finding::new(
            1.0,
            "EXTREME_FMV_DEVIATION",
            if ratio.is_finite() {
                format!("compensation {ratio:.2}x the top of the modeled range")
            } else {
                "compensation offered against a zero FMV estimate".to_string()
            },
        )
        .recommend("Reduce compensation to a defensible market rate or escalate for review")
    };
    assessment.find(finding);

    assessment
}
