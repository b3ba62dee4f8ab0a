//! Native-side checks of the crate's pure surface: the formatter, the flag
//! predicate and the embedded-config parsing the wasm entry points build on.

use ctf_ui::{ToastKind, UiConfig, flag, timeago};

#[test]
fn relative_time_matches_platform_display() {
    // One case per unit branch, as rendered on the scoreboard.
    let cases = [
        (40_000_000, "1 años"),
        (5_000_000, "1 meses"),
        (100_000, "1 días"),
        (4_000, "1 horas"),
        (90, "1 minutos"),
        (30, "30 segundos"),
    ];
    for (elapsed, expected) in cases {
        assert_eq!(timeago::format_elapsed(elapsed), expected);
    }
}

#[test]
fn submitted_flags_validate_like_the_server() {
    assert!(flag::is_valid_flag("flag{abc_123}"));
    assert!(!flag::is_valid_flag("flag{}"));
    assert!(!flag::is_valid_flag("FLAG{abc}"));
    assert!(!flag::is_valid_flag("flag{abc-123}"));
}

#[test]
fn config_block_overrides_compose_with_defaults() {
    let parsed: UiConfig = serde_json::from_str(
        r##"{
            "refresh_interval_ms": 30000,
            "offline_message": "Sin conexión",
            "confetti_colors": ["#ffffff"]
        }"##,
    )
    .unwrap();
    assert_eq!(parsed.refresh_interval_ms, 30_000);
    assert_eq!(parsed.offline_message, "Sin conexión");
    assert_eq!(parsed.confetti_colors, vec!["#ffffff".to_owned()]);
    // Everything unnamed keeps the platform defaults.
    assert_eq!(parsed.toast_duration_ms, 3_000);
    assert_eq!(parsed.vibrate_pattern, vec![100, 50, 100]);
    assert_eq!(parsed.copied_message, "Copiado al portapapeles!");
}

#[test]
fn toast_kind_parsing_defaults_to_info() {
    assert_eq!(ToastKind::from_name("success"), ToastKind::Success);
    assert_eq!(ToastKind::from_name("error"), ToastKind::Error);
    assert_eq!(ToastKind::from_name("anything-else"), ToastKind::Info);
}
