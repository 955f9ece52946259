//! Tests for output format selection.

use crate::output::OutputFormat;

#[test]
fn test_parse_format_names() {
    assert_eq!(OutputFormat::parse("table"), Some(OutputFormat::Table));
    assert_eq!(OutputFormat::parse("plain"), Some(OutputFormat::Plain));
    assert_eq!(OutputFormat::parse("json"), Some(OutputFormat::Json));
}

#[test]
fn test_parse_format_is_case_insensitive() {
    assert_eq!(OutputFormat::parse("TABLE"), Some(OutputFormat::Table));
    assert_eq!(OutputFormat::parse("Json"), Some(OutputFormat::Json));
}

#[test]
fn test_parse_format_unknown_is_none() {
    assert_eq!(OutputFormat::parse("yaml"), None);
    assert_eq!(OutputFormat::parse(""), None);
}
