//! End-to-end exercises of the form components as a hosting view drives them

use assert_matches::assert_matches;
use passform_shared::{
    AppPrefs, ConfirmMatch, GlyphPair, MatchConfig, MatchState, PasswordValidator, PrefsManager,
    SecretValue,
};

#[test]
fn registration_flow_reaches_submit() {
    let mut form_config = AppPrefs::default().form;
    form_config.confirm.requires_form_validity = true;

    let validator = PasswordValidator::new(form_config.rules.rules());
    let mut confirm = ConfirmMatch::new();

    // Primary typed first; confirmation still empty
    confirm.set_primary("Valid!Passw0rd".to_string());
    let form_valid = validator.meets_rules(confirm.primary());
    assert!(form_valid);
    assert_matches!(confirm.state(), MatchState::Neutral);
    assert!(!confirm.submit_enabled(&form_config.confirm, form_valid));

    // Confirmation in progress
    confirm.set_confirmation("Valid!".to_string());
    assert_matches!(confirm.state(), MatchState::Mismatch);
    assert_eq!(
        confirm.help_line(&form_config.confirm),
        Some("Passwords do not match.")
    );
    assert!(!confirm.submit_enabled(&form_config.confirm, form_valid));

    // Confirmation complete
    confirm.set_confirmation("Valid!Passw0rd".to_string());
    assert_matches!(confirm.state(), MatchState::Valid);
    assert!(confirm.help_line(&form_config.confirm).is_none());
    assert!(confirm.submit_enabled(&form_config.confirm, form_valid));
}

#[test]
fn weak_password_blocks_submit_only_under_form_validity_policy() {
    let form_config = AppPrefs::default().form;
    let validator = PasswordValidator::new(form_config.rules.rules());

    // Matches itself but fails the registration rules
    let mut confirm = ConfirmMatch::new();
    confirm.set_primary("weakmatch".to_string());
    confirm.set_confirmation("weakmatch".to_string());
    assert!(confirm.is_valid());

    let form_valid = validator.meets_rules(confirm.primary());
    assert!(!form_valid);

    let ignores_form = MatchConfig {
        requires_form_validity: false,
        ..MatchConfig::default()
    };
    let demands_form = MatchConfig {
        requires_form_validity: true,
        ..MatchConfig::default()
    };

    assert!(confirm.submit_enabled(&ignores_form, form_valid));
    assert!(!confirm.submit_enabled(&demands_form, form_valid));
}

#[test]
fn confirmation_scenarios_match_expected_states() {
    let config = MatchConfig::default();

    let cases = vec![
        ("abc", "", MatchState::Neutral, false),
        ("abc", "ab", MatchState::Mismatch, false),
        ("abc", "abc", MatchState::Valid, true),
    ];

    for (primary, confirmation, expected_state, expected_submit) in cases {
        let confirm = ConfirmMatch::with_values(primary.to_string(), confirmation.to_string());
        assert_eq!(
            confirm.state(),
            expected_state,
            "primary={primary:?} confirmation={confirmation:?}"
        );
        // Form validity must not participate under the default policy
        assert_eq!(confirm.submit_enabled(&config, false), expected_submit);
        assert_eq!(confirm.submit_enabled(&config, true), expected_submit);
    }
}

#[test]
fn double_toggle_restores_glyph_and_label() {
    let toggle = AppPrefs::default().form.toggle;
    let mut secret = SecretValue::with_value("abc");

    let initial_glyph = toggle.glyphs.for_mode(secret.mode()).to_string();
    let initial_label = toggle.labels.for_mode(secret.mode()).to_string();
    assert_eq!(initial_glyph, "🙈");
    assert_eq!(initial_label, "Show password");

    secret.toggle();
    assert_eq!(toggle.glyphs.for_mode(secret.mode()), "🐵");
    assert_eq!(toggle.labels.for_mode(secret.mode()), "Hide password");

    secret.toggle();
    assert!(secret.is_obscured());
    assert_eq!(toggle.glyphs.for_mode(secret.mode()), initial_glyph);
    assert_eq!(toggle.labels.for_mode(secret.mode()), initial_label);
}

#[test]
fn alternate_glyph_convention_projects_through_the_same_component() {
    let mut prefs = AppPrefs::default();
    prefs.form.toggle.glyphs = GlyphPair::padlocks();

    let mut secret = SecretValue::new();
    assert_eq!(prefs.form.toggle.glyphs.for_mode(secret.mode()), "🔒");

    secret.toggle();
    assert_eq!(prefs.form.toggle.glyphs.for_mode(secret.mode()), "🔓");
}

#[test]
fn saved_preferences_drive_the_components_after_reload() {
    let temp = tempfile::tempdir().unwrap();
    let prefs_path = temp.path().join("preferences.toml");

    let mut manager = PrefsManager::with_path(prefs_path.clone());
    manager.load().unwrap();
    manager.prefs_mut().form.toggle.glyphs = GlyphPair::padlocks();
    manager.prefs_mut().form.confirm.help_text = None;
    manager.save().unwrap();

    let mut reloaded = PrefsManager::with_path(prefs_path);
    reloaded.load().unwrap();
    let form_config = reloaded.prefs().form.clone();

    // No help line can appear with help_text disabled
    let mut confirm = ConfirmMatch::new();
    confirm.set_primary("abc".to_string());
    confirm.set_confirmation("ab".to_string());
    assert_matches!(confirm.state(), MatchState::Mismatch);
    assert!(confirm.help_line(&form_config.confirm).is_none());

    let secret = SecretValue::new();
    assert_eq!(form_config.toggle.glyphs.for_mode(secret.mode()), "🔒");
}
