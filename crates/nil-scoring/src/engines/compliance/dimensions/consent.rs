use super::{Assessment, DimensionContext, Finding};
use crate::engines::compliance::domain::ConsentStatus;

pub(super) fn assess(ctx: &DimensionContext<'_>) -> Assessment {
    let athlete = &ctx.snapshot.athlete;
    let mut assessment = Assessment::default();

    if !ctx.is_minor() {
        assessment.note("guardian consent not required for adult athletes");
        return assessment;
    }

    match athlete.consent_status {
        Some(ConsentStatus::Approved) if athlete.guardian_verified => {
            assessment.note("guardian consent approved by an identity-verified guardian");
        }
        Some(ConsentStatus::Approved) => assessment.find(
            Finding::new(
                0.20,
                "GUARDIAN_UNVERIFIED",
                "guardian consent approved but guardian identity not verified",
            )
            .recommend("Verify the guardian's identity"),
        ),
        Some(ConsentStatus::Pending) => assessment.find(
            Finding::new(0.70, "GUARDIAN_CONSENT_PENDING", "guardian consent pending")
                .recommend("Follow up with the guardian to complete consent"),
        ),
        None => assessment.find(
            Finding::new(
                1.0,
                "GUARDIAN_CONSENT_MISSING",
                "minor athlete with no guardian consent record",
            )
            .recommend("Request guardian consent before proceeding"),
        ),
    }

    assessment
}
