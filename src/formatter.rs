use crate::{
    options::FormatOptions,
    result::{AlignError, Result},
    statement::{format_statement, next_statement},
};
use std::borrow::Cow;
use std::ops::Range;
use std::path::Path;

/// Align every INSERT statement in `text` using the default options
pub fn format_sql(text: &str) -> Cow<'_, str> {
    format_sql_with(text, &FormatOptions::default())
}

/// Align every INSERT statement in `text`, copying all other text verbatim.
/// Borrows the input when nothing changed.
pub fn format_sql_with<'a>(text: &'a str, options: &FormatOptions) -> Cow<'a, str> {
    let mut output = String::with_capacity(text.len());
    let mut cursor = 0;
    let mut changed = false;

    while let Some(span) = next_statement(text, cursor, &options.quotes) {
        output.push_str(&text[cursor..span.start]);

        let formatted = format_statement(span.raw, options);
        tracing::trace!(start = span.start, end = span.end, "formatted INSERT statement");
        changed |= formatted != span.raw;
        output.push_str(&formatted);

        cursor = span.end;
    }

    if !changed {
        return Cow::Borrowed(text);
    }

    output.push_str(&text[cursor..]);
    Cow::Owned(output)
}

/// Align only the selected byte range and return the whole document with that range replaced
pub fn format_selection(
    document: &str,
    selection: Range<usize>,
    options: &FormatOptions,
) -> Result<String> {
    let Range { start, end } = selection;
    let selected = document
        .get(start..end)
        .ok_or(AlignError::InvalidSelection {
            start,
            end,
            len: document.len(),
        })?;

    let formatted = format_sql_with(selected, options);
    Ok([&document[..start], formatted.as_ref(), &document[end..]].concat())
}

/// Check whether a path names a SQL script (`.sql`, any case)
pub fn is_sql_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("sql"))
}
