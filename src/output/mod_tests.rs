use std::path::PathBuf;

use super::*;

#[test]
fn output_format_from_str() {
    assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert_eq!("stylish".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!("sarif".parse::<OutputFormat>().unwrap(), OutputFormat::Sarif);
}

#[test]
fn output_format_unknown() {
    let err = "html".parse::<OutputFormat>().unwrap_err();
    assert_eq!(err, "Unknown output format: html");
}

#[test]
fn formatter_for_each_format() {
    let reports = vec![FileReport::linted(PathBuf::from("a.js"), Vec::new())];

    let text = formatter_for(OutputFormat::Text, ColorMode::Never, 0)
        .format(&reports)
        .unwrap();
    assert!(text.contains("no problems found"));

    let json = formatter_for(OutputFormat::Json, ColorMode::Never, 0)
        .format(&reports)
        .unwrap();
    assert!(serde_json::from_str::<serde_json::Value>(&json).is_ok());

    let sarif = formatter_for(OutputFormat::Sarif, ColorMode::Never, 0)
        .format(&reports)
        .unwrap();
    assert!(sarif.contains("\"version\": \"2.1.0\""));
}
