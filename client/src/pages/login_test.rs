use super::*;

#[test]
fn heading_and_step_follow_mode() {
    let mut form = AuthForm::new(AuthMode::Signup);
    assert_eq!(heading(&form), "Create your account");
    assert_eq!(step_label(&form), Some("Step 1 of 2"));

    form.step = SignupStep::Profile;
    assert_eq!(heading(&form), "Tell us about your organization");
    assert_eq!(step_label(&form), Some("Step 2 of 2"));

    let login = AuthForm::new(AuthMode::Login);
    assert_eq!(heading(&login), "Welcome back");
    assert_eq!(step_label(&login), None);
}

#[test]
fn submit_label_reflects_in_flight_and_step() {
    let mut form = AuthForm::new(AuthMode::Signup);
    assert_eq!(submit_label(&form), "Continue");
    form.step = SignupStep::Profile;
    assert_eq!(submit_label(&form), "Create account");
    form.in_flight = true;
    assert_eq!(submit_label(&form), "Please wait...");
    assert_eq!(submit_label(&AuthForm::new(AuthMode::Login)), "Sign in");
}

#[test]
fn toggle_prompt_offers_the_other_mode() {
    assert_eq!(toggle_prompt(AuthMode::Login).1, "Sign up");
    assert_eq!(toggle_prompt(AuthMode::Signup).1, "Sign in");
}
