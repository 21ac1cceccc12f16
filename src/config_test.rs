use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_config_matches_constants() {
    let cfg = ComposerConfig::default();
    assert_eq!(cfg.event_name, "chat_message");
    assert_eq!(cfg.image_accept, ".gif,.jpg,.jpeg,.png");
    assert_eq!(cfg.file_accept, "*");
    assert_eq!(cfg.name_display_limit, 10);
    assert_eq!(cfg.send_key, "Enter");
    assert_eq!(cfg.textarea_rows, 2);
}

#[test]
fn accept_for_picks_filter_by_picker() {
    let cfg = ComposerConfig::default();
    assert_eq!(cfg.accept_for(PickerKind::Image), DEFAULT_IMAGE_ACCEPT);
    assert_eq!(cfg.accept_for(PickerKind::File), DEFAULT_FILE_ACCEPT);
}

// =============================================================
// from_json
// =============================================================

#[test]
fn from_json_empty_object_is_default() {
    let cfg = ComposerConfig::from_json("{}").unwrap();
    assert_eq!(cfg, ComposerConfig::default());
}

#[test]
fn from_json_overrides_only_given_fields() {
    let cfg = ComposerConfig::from_json(r#"{"event_name":"dm","name_display_limit":4}"#).unwrap();
    assert_eq!(cfg.event_name, "dm");
    assert_eq!(cfg.name_display_limit, 4);
    assert_eq!(cfg.send_key, DEFAULT_SEND_KEY);
    assert_eq!(cfg.image_accept, DEFAULT_IMAGE_ACCEPT);
}

#[test]
fn from_json_rejects_malformed_documents() {
    let err = ComposerConfig::from_json("[1, 2").unwrap_err();
    assert!(matches!(err, ComposerError::Config(_)));

    let err = ComposerConfig::from_json(r#"{"textarea_rows":"two"}"#).unwrap_err();
    assert!(matches!(err, ComposerError::Config(_)));
}
