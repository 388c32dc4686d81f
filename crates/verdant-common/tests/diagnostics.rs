use super::*;

#[test]
fn format_message_replaces_positional_args() {
    assert_eq!(
        format_message("'{0}' expected, found '{1}'", &[";", "}"]),
        "';' expected, found '}'"
    );
}

#[test]
fn format_message_leaves_unknown_placeholders() {
    assert_eq!(format_message("{0} and {2}", &["a"]), "a and {2}");
}

#[test]
fn error_covers_whole_node_by_default() {
    let diag = DiagnosticInfo::error(1002, "';' expected.");
    assert!(diag.is_error());
    assert_eq!(diag.offset, 0);
    assert_eq!(diag.width, 0);
}

#[test]
fn warning_keeps_code_and_message() {
    let diag = DiagnosticInfo::warning(7, "unreachable").with_span(3, 4);
    assert_eq!(diag.severity, DiagnosticSeverity::Warning);
    assert_eq!(diag.code, 7);
    assert_eq!((diag.offset, diag.width), (3, 4));
}

#[test]
fn from_template_formats_message() {
    let diag = DiagnosticInfo::from_template(
        1005,
        DiagnosticSeverity::Error,
        "'{0}' expected.",
        &[")"],
    );
    assert_eq!(diag.message_text, "')' expected.");
}

#[test]
fn diagnostic_serializes_severity_by_name() {
    let diag = DiagnosticInfo::error(1, "x");
    let json = serde_json::to_string(&diag).expect("diagnostic should serialize");
    assert!(json.contains("\"severity\":\"Error\""), "got {json}");
}
