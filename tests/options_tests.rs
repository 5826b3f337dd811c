use sqlalign::{AlignError, FormatOptions, QuoteSet, format_sql_with};

#[test]
fn test_default_options() {
    let options = FormatOptions::default();
    assert_eq!(options.quotes.chars(), &['\'', '"']);
    assert_eq!(options.column_wrap, Some('`'));
    assert!(options.validate().is_ok());
}

#[test]
fn test_empty_object_gives_defaults() {
    let options = FormatOptions::from_json(serde_json::json!({})).unwrap();
    assert_eq!(options, FormatOptions::default());
}

#[test]
fn test_null_column_wrap_disables_wrapping() {
    let options = FormatOptions::from_json(serde_json::json!({"column_wrap": null})).unwrap();
    assert_eq!(options.column_wrap, None);
    assert_eq!(options.quotes, QuoteSet::default());
}

#[test]
fn test_custom_quotes_and_wrap() {
    let options =
        FormatOptions::from_json(serde_json::json!({"quotes": "'", "column_wrap": "\""})).unwrap();
    assert_eq!(options.quotes.chars(), &['\'']);
    assert_eq!(options.column_wrap, Some('"'));
}

#[test]
fn test_invalid_options() {
    let result = FormatOptions::from_json(serde_json::json!({"quotes": ""}));
    assert!(matches!(result, Err(AlignError::InvalidOption { .. })));

    let result = FormatOptions::from_json(serde_json::json!({"column_wrap": "'"}));
    assert!(matches!(result, Err(AlignError::InvalidOption { .. })));

    let result = FormatOptions::from_json(serde_json::json!(["quotes"]));
    assert!(matches!(result, Err(AlignError::InvalidOption { .. })));

    let result = FormatOptions::from_json(serde_json::json!({"indent": 4}));
    assert!(matches!(result, Err(AlignError::Json(_))));

    let result = FormatOptions::from_json(serde_json::json!({"column_wrap": "ab"}));
    assert!(matches!(result, Err(AlignError::Json(_))));
}

#[test]
fn test_options_from_file() {
    let path = std::env::temp_dir().join(format!("sqlalign_options_{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "column_wrap": null }"#).unwrap();
    let options = FormatOptions::from_file(&path);
    std::fs::remove_file(&path).unwrap();
    assert_eq!(options.unwrap().column_wrap, None);

    let missing = FormatOptions::from_file("does/not/exist.json");
    assert!(matches!(missing, Err(AlignError::Io(_))));
}

#[test]
fn test_quote_set_drives_literal_padding() {
    let options = FormatOptions::default()
        .with_quotes(QuoteSet::from("'"))
        .with_column_wrap(None);
    let input = "INSERT INTO t (a) VALUES (\"x\"), ('yyyy');";
    assert_eq!(
        format_sql_with(input, &options),
        "INSERT INTO t\n(a     )\nVALUES\n(   \"x\"),\n('yyyy');"
    );
}
