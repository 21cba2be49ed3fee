use super::common::*;
use crate::engines::compliance::{ComplianceSnapshot, ConsentStatus, FmvRange, RiskTier};
use crate::engines::subject::AthleteRole;

#[test]
fn clean_deal_is_low_risk() {
    let quick = engine().quick_check(&clean_snapshot(), scored_at());

    assert_eq!(quick.risk_tier, RiskTier::Low);
    assert!(quick.quick_issues.is_empty());
}

#[test]
fn booster_connection_is_high_risk_with_the_critical_issue_first() {
    let mut snapshot = clean_snapshot();
    snapshot.review.w9_submitted = false;
    snapshot.deal.booster_connected = true;

    let quick = engine().quick_check(&snapshot, scored_at());

    assert_eq!(quick.risk_tier, RiskTier::High);
    assert_eq!(
        quick.quick_issues.first().map(String::as_str),
        Some("counter-party is connected to a booster")
    );
}

#[test]
fn outstanding_paperwork_is_never_reported_as_low() {
    let mut snapshot = clean_snapshot();
    snapshot.review.w9_submitted = false;

    let quick = engine().quick_check(&snapshot, scored_at());
    let full = score(&snapshot);

    assert_eq!(full.total_score, 96.75);
    assert_eq!(quick.risk_tier, RiskTier::Medium);
    assert!(quick
        .quick_issues
        .iter()
        .any(|issue| issue.starts_with("documentHygiene has 1")));
}

#[test]
fn quick_issues_are_capped() {
    let mut snapshot = clean_snapshot();
    snapshot.review = Default::default();
    snapshot.athlete = minor_athlete();
    snapshot.deal.counter_party_name = "Lucky Sportsbook".to_string();
    snapshot.deal.performance_based = true;

    let quick = engine().quick_check(&snapshot, scored_at());

    assert_eq!(quick.risk_tier, RiskTier::High);
    assert_eq!(quick.quick_issues.len(), 5);
    assert!(quick.quick_issues[0].contains("performance"));
}

/// Small linear congruential generator so the sweep is reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0 >> 33
    }

    fn flag(&mut self) -> bool {
        self.next() % 2 == 0
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next() % items.len() as u64) as usize]
    }
}

fn random_snapshot(rng: &mut Lcg) -> ComplianceSnapshot {
    let mut snapshot = clean_snapshot();
    if rng.flag() {
        snapshot.athlete = minor_athlete();
    }
    snapshot.athlete.consent_status = *rng.pick(&[
        None,
        Some(ConsentStatus::Pending),
        Some(ConsentStatus::Approved),
    ]);
    snapshot.athlete.guardian_verified = rng.flag();
    snapshot.athlete.tax_obligation_acknowledged = rng.flag();
    if rng.flag() {
        snapshot.athlete.role = AthleteRole::CollegeAthlete;
    }

    snapshot.deal.counter_party_name = rng
        .pick(&[
            "Acme Apparel",
            "Hometown Brewery",
            "Lucky Sportsbook",
            "Lone Star NIL Collective",
            "Peak Energy Drink Co",
        ])
        .to_string();
    snapshot.deal.compensation_amount = *rng.pick(&[500.0, 2_500.0, 6_000.0, 12_000.0, 60_000.0]);
    snapshot.deal.booster_connected = rng.next() % 5 == 0;
    snapshot.deal.performance_based = rng.next() % 5 == 0;
    snapshot.deal.school_affiliated = rng.flag();

    snapshot.review.school_approved = rng.flag();
    snapshot.review.disclosure_filed = rng.flag();
    snapshot.review.third_party_verified = rng.flag();
    snapshot.review.contract_signed = rng.flag();
    snapshot.review.w9_submitted = rng.flag();
    snapshot.review.disclosure_form_on_file = rng.flag();
    if rng.flag() {
        snapshot.review.contract_risk_flags = vec!["auto-renewal".to_string()];
    }

    snapshot.tax.professional_support = rng.flag();
    snapshot.fmv_range = *rng.pick(&[
        None,
        Some(FmvRange {
            low: 1_000.0,
            high: 5_000.0,
        }),
        Some(FmvRange {
            low: 10_000.0,
            high: 50_000.0,
        }),
    ]);
    snapshot
}

#[test]
fn quick_tier_is_never_milder_than_full_status() {
    let engine = engine();
    let mut rng = Lcg(0x5eed);

    for round in 0..500 {
        let snapshot = random_snapshot(&mut rng);
        let full = engine.score(&snapshot, scored_at());
        let quick = engine.quick_check(&snapshot, scored_at());

        assert!(
            quick.risk_tier >= RiskTier::for_status(full.status),
            "round {round}: quick {:?} vs full {:?} ({})",
            quick.risk_tier,
            full.status,
            full.total_score
        );
        assert!(quick.quick_issues.len() <= 5);
    }
}
