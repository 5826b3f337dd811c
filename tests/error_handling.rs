use sqlalign::{AlignError, FormatOptions, ParsedStatement, format_sql, format_statement};
use std::borrow::Cow;

#[test]
fn test_missing_column_list() {
    let result = ParsedStatement::parse("INSERT INTO t;", &FormatOptions::default());
    assert!(matches!(result, Err(AlignError::MissingColumnList(_))));
}

#[test]
fn test_missing_values_keyword() {
    let result = ParsedStatement::parse("INSERT INTO t (a) SELECT 1;", &FormatOptions::default());
    assert!(matches!(result, Err(AlignError::MissingValuesKeyword(_))));

    // VALUES must be a whole word
    let result = ParsedStatement::parse("INSERT INTO t (a) VALUESX (1);", &FormatOptions::default());
    assert!(matches!(result, Err(AlignError::MissingValuesKeyword(_))));
}

#[test]
fn test_malformed_tuples() {
    let raw = "INSERT INTO t (a) VALUES 1);";
    let result = ParsedStatement::parse(raw, &FormatOptions::default());
    match result {
        Err(AlignError::MalformedTuples(text)) => assert_eq!(text, "1);"),
        other => panic!("expected MalformedTuples, got {other:?}"),
    }
    assert!(matches!(format_statement(raw, &FormatOptions::default()), Cow::Borrowed(_)));
}

#[test]
fn test_error_messages() {
    let err = AlignError::InvalidSelection {
        start: 1,
        end: 2,
        len: 0,
    };
    assert_eq!(err.to_string(), "Invalid selection 1..2 for a document of 0 bytes");

    let err = AlignError::MalformedTuples("1);".to_string());
    assert_eq!(err.to_string(), "Value list does not start with a tuple: 1);");
}

#[test]
fn test_formatting_is_total_over_odd_inputs() {
    for input in [
        "",
        ")",
        "'",
        "\"",
        "INSERT",
        "INSERT);",
        "(((",
        ");INSERT",
        "INSERT INTO t (a) VALUES (",
        "INSERT INTO t (a) VALUES ();",
        "INSERT INTO t () VALUES (1);",
        "INSERT INTO t (a) VALUES (1),,(2);",
        "INSERT INTO t (a, b) VALUES (1, 'x), (2, 'y');",
        "INSERT INTO 表 (名前) VALUES ('値');",
    ] {
        let once = format_sql(input).into_owned();
        assert_eq!(format_sql(&once), once, "not idempotent for {input:?}");
    }
}

#[test]
fn test_empty_lists() {
    assert_eq!(
        format_sql("INSERT INTO t (a) VALUES ();"),
        "INSERT INTO t\n(`a`)\nVALUES\n(   );"
    );
    assert_eq!(
        format_sql("INSERT INTO t () VALUES (1);"),
        "INSERT INTO t\n()\nVALUES\n(1);"
    );
}
