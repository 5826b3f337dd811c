pub mod formatter;
pub mod options;
pub mod result;
pub mod statement;
pub mod str_utils;
pub mod width;

// Re-export types for convenience
pub use formatter::{format_selection, format_sql, format_sql_with, is_sql_file};
pub use options::FormatOptions;
pub use result::{AlignError, Result};
pub use statement::{ParsedStatement, StatementSpan, format_statement, next_statement};
pub use str_utils::QuoteSet;
pub use width::display_width;
