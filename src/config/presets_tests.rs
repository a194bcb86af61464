use super::*;

fn rule<'a>(preset: &'a Value, id: &str) -> &'a Value {
    preset
        .get("rules")
        .and_then(|rules| rules.get(id))
        .unwrap_or_else(|| panic!("preset should configure {id}"))
}

#[test]
fn recommended_enables_core_rules() {
    let preset = load_preset("recommended").unwrap();

    for id in [
        "human-first/no-comments",
        "human-first/no-magic-values",
        "max-lines-per-function",
        "max-lines",
        "max-params",
    ] {
        assert_eq!(
            rule(&preset, id).get("severity").and_then(Value::as_str),
            Some("error"),
            "{id} should be an error"
        );
    }
    assert_eq!(
        rule(&preset, "human-first/no-magic-numbers")
            .get("severity")
            .and_then(Value::as_str),
        Some("off")
    );
}

#[test]
fn recommended_limits() {
    let preset = load_preset("recommended").unwrap();
    assert_eq!(
        rule(&preset, "max-params").get("max").and_then(Value::as_integer),
        Some(2)
    );
    assert_eq!(
        rule(&preset, "max-lines").get("max").and_then(Value::as_integer),
        Some(250)
    );
    let per_function = rule(&preset, "max-lines-per-function");
    assert_eq!(per_function.get("max").and_then(Value::as_integer), Some(50));
    assert_eq!(
        per_function.get("skipComments").and_then(Value::as_bool),
        Some(true)
    );
}

#[test]
fn none_preset_is_empty() {
    let preset = load_preset("none").unwrap();
    assert!(preset.as_table().unwrap().is_empty());
}

#[test]
fn unknown_preset_lists_available() {
    let err = load_preset("strict").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Unknown preset: 'strict'"));
    assert!(message.contains("recommended, none"));
}

#[test]
fn display_name_is_namespaced() {
    assert_eq!(preset_display_name("recommended"), "human-first/recommended");
}
