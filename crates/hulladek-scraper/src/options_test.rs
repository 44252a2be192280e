use super::*;

const STREETS_FRAGMENT: &str = r#"
<select>
    <option value="">Kérjük válasszon!</option>
    <option value="54">Alkotmány utca</option>
    <option value="55">Andrássy út</option>
</select>
"#;

#[test]
fn parse_options_decodes_value_and_label() {
    let options = parse_options(STREETS_FRAGMENT);

    assert_eq!(options.len(), 3);
    assert_eq!(
        options[2],
        SelectOption {
            value: "55".to_owned(),
            label: "Andrássy út".to_owned(),
        }
    );
}

#[test]
fn parse_options_skips_empty_text() {
    let html = r#"<option value="1"></option><option value="2">  </option><option value="3">Kept</option>"#;
    let options = parse_options(html);

    assert_eq!(options.len(), 1);
    assert_eq!(options[0].label, "Kept");
}

#[test]
fn exact_label_returns_value() {
    let value = resolve_option(STREETS_FRAGMENT, "Andrássy út").expect("expected a match");
    assert_eq!(value, "55");
}

#[test]
fn empty_value_falls_back_to_label() {
    let html = r#"<option value="">Andrássy út</option>"#;
    let value = resolve_option(html, "Andrássy út").expect("expected a match");
    assert_eq!(value, "Andrássy út");
}

#[test]
fn matching_is_case_insensitive() {
    let html = r#"<option value="7">Andrássy</option>"#;
    let value = resolve_option(html, "ANDRÁSSY").expect("expected a match");
    assert_eq!(value, "7");
}

#[test]
fn dash_variants_fold_to_hyphen() {
    // The site renders house-number ranges with an en dash.
    let html = r#"<option value="31">Váci út 12–14</option>"#;
    let value = resolve_option(html, "12-14").expect("expected a match");
    assert_eq!(value, "31");
}

#[test]
fn partial_label_matches_by_substring() {
    let value = resolve_option(STREETS_FRAGMENT, "Andrássy").expect("expected a match");
    assert_eq!(value, "55");
}

#[test]
fn substring_ties_resolve_to_first_in_document_order() {
    let html = r#"
        <option value="1">Petőfi utca</option>
        <option value="2">Petőfi tér</option>
    "#;
    let value = resolve_option(html, "Petőfi").expect("expected a match");
    assert_eq!(value, "1");
}

#[test]
fn no_match_reports_every_candidate() {
    let err = resolve_option(STREETS_FRAGMENT, "Kossuth").expect_err("expected no match");

    match &err {
        CalendarError::OptionNotFound { label, candidates } => {
            assert_eq!(label, "Kossuth");
            assert_eq!(candidates.len(), 3);
        }
        other => panic!("expected OptionNotFound, got: {other:?}"),
    }

    // The message must enumerate the (value, label) pairs seen.
    let message = err.to_string();
    assert!(message.contains("Kossuth"), "message: {message}");
    assert!(message.contains("(\"55\", \"Andrássy út\")"), "message: {message}");
    assert!(message.contains("(\"54\", \"Alkotmány utca\")"), "message: {message}");
}

#[test]
fn no_options_at_all_is_a_lookup_error() {
    let err = resolve_option("", "Andrássy").expect_err("expected no match");
    assert!(matches!(
        err,
        CalendarError::OptionNotFound { ref candidates, .. } if candidates.is_empty()
    ));
}
