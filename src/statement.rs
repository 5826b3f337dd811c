use crate::{
    options::FormatOptions,
    result::{AlignError, Result},
    str_utils::{QuoteSet, find_unquoted, split_unquoted, unquoted_matches},
    width::{display_width, pad_left, pad_right},
};
use regex::Regex;
use std::borrow::Cow;

pub const INSERT_KEYWORD: &str = "INSERT";
pub const STATEMENT_END: &str = ");";

// Regex compiled once as a lazy static for performance
static VALUES_KEYWORD_REGEX: once_cell::sync::Lazy<Regex> =
    once_cell::sync::Lazy::new(|| Regex::new(r"(?i)\A\s*(values)\b\s*").unwrap());

/// One located `INSERT ... );` statement, as byte offsets into the scanned text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementSpan<'a> {
    pub start: usize,
    /// Offset just past the terminating `;`
    pub end: usize,
    pub raw: &'a str,
}

/// Locate the next unquoted `INSERT` (any case) at or after `from` and the first unquoted `);` after it.
/// Returns `None` when there is no `INSERT`, or when the one found is never terminated.
pub fn next_statement<'a>(text: &'a str, from: usize, quotes: &QuoteSet) -> Option<StatementSpan<'a>> {
    let start = find_unquoted(text, INSERT_KEYWORD, from, quotes, true)?;
    let Some(close) = find_unquoted(text, STATEMENT_END, start, quotes, false) else {
        tracing::debug!(start, "unterminated INSERT statement, leaving the remaining text untouched");
        return None;
    };

    let end = close + STATEMENT_END.len();
    Some(StatementSpan {
        start,
        end,
        raw: &text[start..end],
    })
}

/// An INSERT statement split into its clause, column list, keyword and value tuples
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedStatement<'a> {
    /// Everything before the column list, trimmed
    pub insert_clause: &'a str,
    /// Column names, trimmed and re-wrapped
    pub columns: Vec<String>,
    /// The keyword as written in the statement, normally `VALUES`
    pub value_keyword: &'a str,
    /// Raw field texts, one inner vector per row; rows may be shorter or longer than `columns`
    pub tuples: Vec<Vec<&'a str>>,
    /// Quote set the statement was parsed with; decides literal vs. bare padding on render
    pub quotes: QuoteSet,
}

impl<'a> ParsedStatement<'a> {
    /// Match `<clause> ( <columns> ) VALUES ( <tuples> )` with quote-aware boundaries
    pub fn parse(raw: &'a str, options: &FormatOptions) -> Result<Self> {
        let quotes = &options.quotes;

        let open = find_unquoted(raw, "(", 0, quotes, false)
            .ok_or_else(|| AlignError::MissingColumnList(raw.to_string()))?;

        // The column list ends at the first unquoted ')' followed by the keyword
        let (close, value_keyword, tuples_start) = unquoted_matches(raw, ")", open + 1, quotes, false)
            .find_map(|close| {
                let rest = &raw[close + 1..];
                let caps = VALUES_KEYWORD_REGEX.captures(rest)?;
                let keyword = caps.get(1)?;
                let whole = caps.get(0)?;
                Some((close, &rest[keyword.range()], close + 1 + whole.end()))
            })
            .ok_or_else(|| AlignError::MissingValuesKeyword(raw.to_string()))?;

        let tuples_text = raw[tuples_start..].trim();
        if !tuples_text.is_empty() && !tuples_text.starts_with('(') {
            return Err(AlignError::MalformedTuples(tuples_text.to_string()));
        }

        let columns = split_unquoted(&raw[open + 1..close], ",", quotes)
            .into_iter()
            .map(str::trim)
            .filter(|column| !column.is_empty())
            .map(|column| wrap_column(column, options.column_wrap))
            .collect();

        Ok(ParsedStatement {
            insert_clause: raw[..open].trim(),
            columns,
            value_keyword,
            tuples: parse_tuples(tuples_text, quotes),
            quotes: quotes.clone(),
        })
    }

    /// Per-column width: the widest of the header and every row's field at that index
    pub fn column_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let widest_field = self
                    .tuples
                    .iter()
                    .filter_map(|tuple| tuple.get(idx))
                    .map(|field| display_width(field))
                    .max()
                    .unwrap_or(0);
                widest_field.max(display_width(column))
            })
            .collect()
    }

    /// Serialize with aligned columns. Headers and quoted literals are left-aligned,
    /// everything else (numbers, NULL, function calls) is right-aligned.
    pub fn render(&self) -> String {
        let widths = self.column_widths();

        let columns = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(column, &width)| pad_right(column, width))
            .collect::<Vec<_>>()
            .join(", ");

        let mut rendered = format!("{}\n({columns})\n{}", self.insert_clause, self.value_keyword);

        if !self.tuples.is_empty() {
            let rows = self
                .tuples
                .iter()
                .map(|tuple| {
                    let fields = tuple
                        .iter()
                        .enumerate()
                        .map(|(idx, field)| {
                            // Fields past the declared columns are left as they are
                            let width = widths.get(idx).copied().unwrap_or(0);
                            if self.quotes.any_in(field) {
                                pad_right(field, width)
                            } else {
                                pad_left(field, width)
                            }
                        })
                        .collect::<Vec<_>>()
                        .join(", ");
                    format!("({fields})")
                })
                .collect::<Vec<_>>()
                .join(",\n");

            rendered.push('\n');
            rendered.push_str(&rows);
            rendered.push(';');
        }

        rendered
    }
}

fn wrap_column(column: &str, wrap: Option<char>) -> String {
    match wrap {
        Some(wrap) => {
            let bare: String = column.chars().filter(|&ch| ch != wrap).collect();
            format!("{wrap}{bare}{wrap}")
        }
        None => column.to_string(),
    }
}

/// Split the value list into rows at every unquoted `)` followed by optional whitespace and `,`.
/// The `)` and `,` are consumed; the opening `(` stays on the next chunk.
fn split_rows<'a>(tuples_text: &'a str, quotes: &QuoteSet) -> Vec<&'a str> {
    let mut rows = Vec::new();
    let mut start = 0;

    for close in unquoted_matches(tuples_text, ")", 0, quotes, false) {
        let after = &tuples_text[close + 1..];
        let gap = after.len() - after.trim_start().len();
        if after[gap..].starts_with(',') {
            rows.push(&tuples_text[start..close]);
            start = close + 1 + gap + 1;
        }
    }
    rows.push(&tuples_text[start..]);

    rows
}

/// Split the text after the keyword into rows, then each row on unquoted commas
fn parse_tuples<'a>(tuples_text: &'a str, quotes: &QuoteSet) -> Vec<Vec<&'a str>> {
    if tuples_text.is_empty() {
        return Vec::new();
    }

    let chunks = split_rows(tuples_text, quotes);
    let last = chunks.len() - 1;

    chunks
        .into_iter()
        .enumerate()
        .map(|(idx, chunk)| {
            let chunk = chunk.trim();
            let chunk = chunk.strip_prefix('(').unwrap_or(chunk);
            let chunk = match chunk.strip_suffix(STATEMENT_END) {
                Some(body) => body,
                // A statement handed in without its terminator still closes its last row
                None if idx == last => chunk.strip_suffix(')').unwrap_or(chunk),
                None => chunk,
            };
            split_unquoted(chunk, ",", quotes)
                .into_iter()
                .map(str::trim)
                .collect()
        })
        .collect()
}

/// Format one statement, or hand it back untouched when it does not have the INSERT ... VALUES shape
pub fn format_statement<'a>(raw: &'a str, options: &FormatOptions) -> Cow<'a, str> {
    match ParsedStatement::parse(raw, options) {
        Ok(parsed) => Cow::Owned(parsed.render()),
        Err(err) => {
            tracing::debug!(%err, "statement left unchanged");
            Cow::Borrowed(raw)
        }
    }
}
