use super::*;

// =============================================================
// Catalog integrity
// =============================================================

#[test]
fn form_ids_are_unique() {
    for (i, a) in FORMS.iter().enumerate() {
        for b in &FORMS[i + 1..] {
            assert_ne!(a.id, b.id);
        }
    }
}

#[test]
fn every_submission_belongs_to_a_known_form() {
    for s in SUBMISSIONS {
        assert!(find_form(s.form_id).is_some(), "orphan submission {}", s.id);
    }
}

// =============================================================
// Lookups
// =============================================================

#[test]
fn find_form_by_id() {
    assert_eq!(find_form("3").map(|f| f.name), Some("Grant Proposal Round B"));
    assert!(find_form("99").is_none());
    assert!(find_form("").is_none());
}

#[test]
fn find_submission_is_scoped_to_its_form() {
    assert!(find_submission("1", "s-101").is_some());
    assert!(find_submission("3", "s-101").is_none());
    assert!(find_submission("1", "s-999").is_none());
}

#[test]
fn submissions_for_filters_by_form() {
    let subs = submissions_for("3");
    assert_eq!(subs.len(), 2);
    assert!(subs.iter().all(|s| s.form_id == "3"));
    assert!(submissions_for("99").is_empty());
}

#[test]
fn recent_submissions_are_newest_first_and_limited() {
    let recent = recent_submissions(3);
    assert_eq!(recent.len(), 3);
    assert_eq!(recent[0].id, "s-103");
    assert!(recent.windows(2).all(|w| w[0].submitted_at >= w[1].submitted_at));
}

// =============================================================
// Derived values
// =============================================================

#[test]
fn overview_stats_sum_the_form_table() {
    let stats = overview_stats();
    assert_eq!(stats.forms, 4);
    assert_eq!(stats.responses, 342 + 1_208 + 87 + 519);
    assert_eq!(stats.flagged, 27 + 96 + 12 + 41);
    assert_eq!(stats.credits, CREDIT_BALANCE);
    assert!((71..=82).contains(&stats.avg_quality));
}

#[test]
fn risk_bands_split_at_30_and_70() {
    assert_eq!(ScoreBand::for_risk(0), ScoreBand::Low);
    assert_eq!(ScoreBand::for_risk(29), ScoreBand::Low);
    assert_eq!(ScoreBand::for_risk(30), ScoreBand::Medium);
    assert_eq!(ScoreBand::for_risk(69), ScoreBand::Medium);
    assert_eq!(ScoreBand::for_risk(70), ScoreBand::High);
}

#[test]
fn quality_band_is_inverted() {
    assert_eq!(ScoreBand::for_quality(92), ScoreBand::Low);
    assert_eq!(ScoreBand::for_quality(50), ScoreBand::Medium);
    assert_eq!(ScoreBand::for_quality(10), ScoreBand::High);
}

#[test]
fn flagged_when_any_risk_is_high() {
    let flagged: Vec<_> = SUBMISSIONS.iter().filter(|s| s.is_flagged()).map(|s| s.id).collect();
    assert_eq!(flagged, vec!["s-102", "s-103", "s-302"]);
}
