use super::*;

fn draft(name: &str, features: Vec<Feature>) -> SettingsDraft {
    SettingsDraft { project_name: name.to_owned(), features, ..SettingsDraft::default() }
}

// =============================================================
// submit
// =============================================================

#[test]
fn submit_rejects_empty_name() {
    for name in ["", "   ", "\t\n"] {
        let errors = draft(name, vec![Feature::Auth]).submit().unwrap_err();
        assert_eq!(errors.project_name, Some(NAME_REQUIRED));
        assert_eq!(errors.features, None);
    }
}

#[test]
fn submit_rejects_empty_feature_set() {
    let errors = draft("Acme", Vec::new()).submit().unwrap_err();
    assert_eq!(errors.features, Some(FEATURES_REQUIRED));
    assert_eq!(errors.project_name, None);
}

#[test]
fn submit_reports_both_fields_together() {
    let errors = draft(" ", Vec::new()).submit().unwrap_err();
    assert_eq!(errors.project_name, Some(NAME_REQUIRED));
    assert_eq!(errors.features, Some(FEATURES_REQUIRED));
    assert!(!errors.is_empty());
}

#[test]
fn submit_builds_settings_without_email() {
    let settings = SettingsDraft {
        project_name: "Acme".to_owned(),
        project_type: ProjectType::Dashboard,
        features: vec![Feature::Auth],
        theme: Theme::Modern,
    }
    .submit()
    .unwrap();
    assert_eq!(settings.project_name, "Acme");
    assert_eq!(settings.project_type, ProjectType::Dashboard);
    assert_eq!(settings.features, vec![Feature::Auth]);
    assert_eq!(settings.theme, Theme::Modern);
    assert_eq!(settings.email, None);
}

// =============================================================
// toggle_feature
// =============================================================

#[test]
fn toggle_feature_appends_then_removes() {
    let mut d = draft("Acme", vec![Feature::Auth]);
    d.toggle_feature(Feature::Forms);
    assert_eq!(d.features, vec![Feature::Auth, Feature::Forms]);
    d.toggle_feature(Feature::Auth);
    assert_eq!(d.features, vec![Feature::Forms]);
    assert!(!d.has_feature(Feature::Auth));
}

#[test]
fn default_draft_matches_landing_preset() {
    let d = SettingsDraft::default();
    assert_eq!(d.project_name, "React Dashboard");
    assert_eq!(d.features.len(), 4);
    assert!(d.submit().is_ok());
}

// =============================================================
// validate_email
// =============================================================

#[test]
fn validate_email_accepts_minimal_address() {
    assert_eq!(validate_email("a@b.c"), Ok("a@b.c".to_owned()));
    assert!(validate_email("someone@example.co.uk").is_ok());
}

#[test]
fn validate_email_rejects_malformed_addresses() {
    for raw in ["a@b", "a.com", "", "a b@c.d", "a@@b.c", "@b.c"] {
        assert_eq!(validate_email(raw), Err(EMAIL_INVALID), "{raw:?} should be rejected");
    }
}
