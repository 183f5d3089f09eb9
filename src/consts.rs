/// How many lines above a block are searched for a `<month> <day>` line.
pub const DEFAULT_NAMED_DATE_WINDOW: usize = 6;

/// How many lines above a block are searched for a `[d/m/yy, ...]` chat timestamp.
pub const DEFAULT_TIMESTAMP_WINDOW: usize = 10;

/// Locale precedence handed to the date resolver.
pub const DEFAULT_LOCALES: &str = "es,en";

/// Number of dates kept when the terminal table is thinned.
pub const DEFAULT_REPORT_ROWS: usize = 8;

/// No-break space, common in copy-pasted chat exports.
pub const NBSP: char = '\u{00a0}';
