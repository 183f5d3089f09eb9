use crate::consts::{DEFAULT_LOCALES, DEFAULT_NAMED_DATE_WINDOW, DEFAULT_TIMESTAMP_WINDOW};
use crate::dates::{parse_locales, CalendarResolver, Locale};
use crate::error::{ChatScoreError, CsResult};
use clap::{parser::ValueSource, ArgAction, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    #[serde(flatten)]
    pub extraction: ExtractionParams,
    #[command(flatten)]
    #[serde(flatten)]
    pub cleaning: CleaningParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExtractionParams {
    /// Lines above a block searched for a "<month> <day>" line
    #[arg(long, default_value_t = DEFAULT_NAMED_DATE_WINDOW)]
    pub named_date_window: usize,

    /// Lines above a block searched for a "[d/m/yy, ..." chat timestamp
    #[arg(long, default_value_t = DEFAULT_TIMESTAMP_WINDOW)]
    pub timestamp_window: usize,

    /// Date locales in precedence order
    #[arg(long, default_value = DEFAULT_LOCALES)]
    pub locales: String,

    /// Year used for dates written without one (defaults to the current year)
    #[arg(long)]
    pub default_year: Option<i32>,
}

impl Default for ExtractionParams {
    fn default() -> Self {
        Self {
            named_date_window: DEFAULT_NAMED_DATE_WINDOW,
            timestamp_window: DEFAULT_TIMESTAMP_WINDOW,
            locales: DEFAULT_LOCALES.to_string(),
            default_year: None,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CleaningParams {
    /// Overwrite score drops with the previous value
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub autocorrect: bool,
}

impl Default for CleaningParams {
    fn default() -> Self {
        Self { autocorrect: true }
    }
}

impl ExtractionParams {
    pub fn get_locales(&self) -> CsResult<Vec<Locale>> {
        parse_locales(&self.locales)
    }

    pub fn resolver(&self) -> CalendarResolver {
        match self.default_year {
            Some(year) => CalendarResolver::new(year),
            None => CalendarResolver::current_year(),
        }
    }

    pub fn validate(&self) -> CsResult<()> {
        if self.named_date_window == 0 && self.timestamp_window == 0 {
            return Err(ChatScoreError::Config(
                "Both date windows are zero; no block could ever be dated".to_string(),
            ));
        }
        self.get_locales().map(|_| ())
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CsResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.extraction.validate()?;
        Ok(config)
    }

    /// Copies over only the values the user actually typed on the command
    /// line, so file values survive clap defaults.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($group:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$group.$field = cli.$group.$field.clone();
                }
            };
        }

        update_if_present!(extraction.named_date_window);
        update_if_present!(extraction.timestamp_window);
        update_if_present!(extraction.locales);
        update_if_present!(extraction.default_year);

        update_if_present!(cleaning.autocorrect);
    }
}
