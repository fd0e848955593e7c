use super::*;

fn form_of(view: &DashboardView) -> Option<&str> {
    match view {
        DashboardView::Analysis { form_id, .. } | DashboardView::Submission { form_id, .. } => Some(form_id.as_str()),
        DashboardView::Section(_) | DashboardView::NotFound { .. } => None,
    }
}

fn submission_of(view: &DashboardView) -> Option<&str> {
    match view {
        DashboardView::Submission { submission_id, .. } => Some(submission_id.as_str()),
        _ => None,
    }
}

// =============================================================
// TopView
// =============================================================

#[test]
fn top_view_resolves_known_paths() {
    assert_eq!(TopView::from_path("/"), TopView::Landing);
    assert_eq!(TopView::from_path("/login"), TopView::Login);
    assert_eq!(TopView::from_path("/login?signup=1"), TopView::Login);
    assert_eq!(TopView::from_path("/dashboard/"), TopView::Dashboard);
}

#[test]
fn unmatched_paths_land_on_landing() {
    for path in ["", "/pricing", "/dashboard/forms/3", "/LOGIN", "/logout"] {
        assert_eq!(TopView::from_path(path), TopView::Landing, "{path}");
    }
}

#[test]
fn top_view_paths_round_trip() {
    for view in [TopView::Landing, TopView::Login, TopView::Dashboard] {
        assert_eq!(TopView::from_path(view.path()), view);
    }
}

#[test]
fn auth_and_logout_transitions() {
    assert_eq!(TopView::Login.after_auth(), TopView::Dashboard);
    assert_eq!(TopView::Dashboard.after_logout(), TopView::Login);
    assert_eq!(TopView::Landing.after_auth(), TopView::Landing);
    assert_eq!(TopView::Landing.after_logout(), TopView::Landing);
}

#[test]
fn signup_href_carries_query_flag() {
    assert_eq!(signup_href(), "/login?signup=1");
}

// =============================================================
// DashboardView
// =============================================================

#[test]
fn dashboard_starts_on_overview() {
    let view = DashboardView::default();
    assert_eq!(view, DashboardView::Section(Section::Overview));
    assert_eq!(form_of(&view), None);
}

#[test]
fn select_switches_between_sibling_sections() {
    let view = DashboardView::default().select(Section::Settings);
    assert_eq!(view.section(), Section::Settings);
    assert_eq!(view.select(Section::Forms), DashboardView::Section(Section::Forms));
}

#[test]
fn analysis_never_shows_a_stale_form() {
    let overview = DashboardView::default();
    let first = overview.open_analysis("3");
    assert_eq!(form_of(&first), Some("3"));

    let back = first.back();
    assert_eq!(back, DashboardView::Section(Section::Overview));
    assert_eq!(form_of(&back), None);

    let second = back.open_analysis("1");
    assert_eq!(form_of(&second), Some("1"));
}

#[test]
fn analysis_remembers_origin_section() {
    let view = DashboardView::Section(Section::Forms).open_analysis("2");
    assert_eq!(view.section(), Section::Forms);
    assert_eq!(view.back(), DashboardView::Section(Section::Forms));
}

#[test]
fn unknown_form_opens_not_found() {
    let view = DashboardView::default().open_analysis("42");
    assert_eq!(
        view,
        DashboardView::NotFound {
            missing: MissingRecord::Form("42".to_owned()),
            from: Section::Overview,
        }
    );
    assert_eq!(form_of(&view), None);
    assert_eq!(view.back(), DashboardView::Section(Section::Overview));
}

#[test]
fn submission_opens_from_analysis_and_backs_out_to_it() {
    let analysis = DashboardView::Section(Section::Forms).open_analysis("1");
    let detail = analysis.open_submission("s-102");
    assert_eq!(submission_of(&detail), Some("s-102"));
    assert_eq!(form_of(&detail), Some("1"));
    assert_eq!(detail.back(), analysis);
}

#[test]
fn submission_from_another_form_is_not_found() {
    let detail = DashboardView::default().open_analysis("1").open_submission("s-301");
    assert_eq!(
        detail,
        DashboardView::NotFound {
            missing: MissingRecord::Submission("s-301".to_owned()),
            from: Section::Overview,
        }
    );
}

#[test]
fn submission_requires_analysis() {
    let overview = DashboardView::default();
    assert_eq!(overview.open_submission("s-101"), overview);
}

#[test]
fn leaving_detail_clears_identifiers() {
    let detail = DashboardView::default().open_analysis("1").open_submission("s-101");
    let elsewhere = detail.select(Section::Settings);
    assert_eq!(form_of(&elsewhere), None);
    assert_eq!(submission_of(&elsewhere), None);
}

#[test]
fn missing_record_messages() {
    assert_eq!(MissingRecord::Form("9".to_owned()).describe(), "No form with id \"9\".");
    assert!(MissingRecord::Submission("x".to_owned()).describe().contains("\"x\""));
}
