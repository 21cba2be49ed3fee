use super::{code_suffix, Assessment, DimensionContext, Finding};
use crate::engines::lookups::{keyword_label, ScreenSeverity};

const CAUTION_PENALTY_COLLEGE: f64 = 0.30;
const CAUTION_PENALTY_YOUTH: f64 = 0.60;

pub(super) fn assess(ctx: &DimensionContext<'_>) -> Assessment {
    let youth = ctx.uses_youth_rules();
    let mut assessment = Assessment::default();
    let mut seen_categories: Vec<&str> = Vec::new();

    for entry in &ctx.lookups.brand_screen {
        let keyword = keyword_label(&entry.keyword);
        if seen_categories.contains(&entry.category.as_str())
            || !ctx.brand.mentions(&entry.keyword)
        {
            continue;
        }
        seen_categories.push(entry.category.as_str());

        let severity = if youth {
            entry.high_school
        } else {
            entry.college
        };
        let category = entry.category.replace('_', " ");

        match severity {
            ScreenSeverity::Prohibited => assessment.find(
                Finding::new(
                    1.0,
                    format!("PROHIBITED_{}", code_suffix(&entry.category)),
                    format!("{category} is a prohibited category ('{keyword}')"),
                )
                .recommend(format!(
                    "Decline or restructure: {category} sponsorships are not permitted for this athlete"
                )),
            ),
            ScreenSeverity::Caution => {
                let penalty = if youth {
                    CAUTION_PENALTY_YOUTH
                } else {
                    CAUTION_PENALTY_COLLEGE
                };
                assessment.find(
                    Finding::new(
                        penalty,
                        format!("BRAND_CAUTION_{}", code_suffix(&entry.category)),
                        format!("{category} requires additional review ('{keyword}')"),
                    )
                    .recommend(format!(
                        "Confirm {category} sponsorship terms with the compliance office"
                    )),
                );
            }
        }
    }

    if assessment.is_clean() {
        assessment.note("counter-party passed category screening");
    }

    assessment
}
