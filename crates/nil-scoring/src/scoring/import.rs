use std::collections::BTreeMap;
use std::io::Read;

use serde::{Deserialize, Deserializer};

use crate::engines::fmv::SocialStat;
use crate::engines::subject::AthleteId;

/// Social-stat rows grouped by athlete, in file order.
pub type SocialStatsByAthlete = BTreeMap<AthleteId, Vec<SocialStat>>;

#[derive(Debug, thiserror::Error)]
pub enum SocialImportError {
    #[error("social stats line {line}: {source}")]
    Row {
        line: u64,
        #[source]
        source: csv::Error,
    },
    #[error("social stats line {line}: {message}")]
    Invalid { line: u64, message: String },
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Outcome of reading a social-stat export. A bad row only affects the athlete it names.
#[derive(Debug, Default)]
pub struct SocialImport {
    pub stats: SocialStatsByAthlete,
    /// Rejected rows, keyed by the athlete each row names.
    pub rejected: BTreeMap<AthleteId, Vec<SocialImportError>>,
    /// Rows too malformed to name an athlete.
    pub unattributed: Vec<SocialImportError>,
}

impl SocialImport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty() && self.unattributed.is_empty()
    }

    /// Fails on the first rejected row, for exports that must be entirely valid.
    pub fn strict(self) -> Result<SocialStatsByAthlete, SocialImportError> {
        if let Some(err) = self.unattributed.into_iter().next() {
            return Err(err);
        }
        if let Some(err) = self
            .rejected
            .into_values()
            .flatten()
            .min_by_key(SocialImportError::line)
        {
            return Err(err);
        }
        Ok(self.stats)
    }

    fn reject(&mut self, athlete_id: Option<&str>, err: SocialImportError) {
        match athlete_id.filter(|id| !id.is_empty()) {
            Some(id) => self
                .rejected
                .entry(AthleteId(id.to_string()))
                .or_default()
                .push(err),
            None => self.unattributed.push(err),
        }
    }
}

impl SocialImportError {
    fn line(&self) -> u64 {
        match self {
            SocialImportError::Row { line, .. } | SocialImportError::Invalid { line, .. } => *line,
            SocialImportError::Csv(_) => 0,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SocialRow {
    athlete_id: String,
    platform: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    followers: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    engagement_rate: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    verified: Option<String>,
}

/// Parses `athlete_id, platform, followers, engagement_rate, verified` rows.
/// Blank cells count as missing. Malformed rows are collected with their line number
/// instead of aborting the import; only an unreadable header fails outright.
pub fn parse_social_stats<R: Read>(reader: R) -> Result<SocialImport, SocialImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let athlete_column = headers.iter().position(|header| header == "athlete_id");
    let mut import = SocialImport::default();

    for record in csv_reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(source) => {
                let line = source.position().map_or(0, |position| position.line());
                import.reject(None, SocialImportError::Row { line, source });
                continue;
            }
        };
        let line = record.position().map_or(0, |position| position.line());
        let named = athlete_column.and_then(|column| record.get(column));

        let row: SocialRow = match record.deserialize(Some(&headers)) {
            Ok(row) => row,
            Err(source) => {
                import.reject(named, SocialImportError::Row { line, source });
                continue;
            }
        };
        match row.into_stat() {
            Ok((athlete_id, stat)) => import.stats.entry(athlete_id).or_default().push(stat),
            Err(message) => import.reject(named, SocialImportError::Invalid { line, message }),
        }
    }

    if !import.is_clean() {
        tracing::warn!(
            athletes = import.rejected.len(),
            unattributed = import.unattributed.len(),
            "social stats import rejected rows"
        );
    }
    Ok(import)
}

impl SocialRow {
    fn into_stat(self) -> Result<(AthleteId, SocialStat), String> {
        if self.athlete_id.is_empty() {
            return Err("athlete_id must not be blank".to_string());
        }
        if self.platform.is_empty() {
            return Err("platform must not be blank".to_string());
        }

        let followers = match self.followers.as_deref() {
            Some(value) => parse_followers(value)?,
            None => 0,
        };
        let engagement_rate = match self.engagement_rate.as_deref() {
            Some(value) => parse_engagement(value)?,
            None => 0.0,
        };
        let verified = match self.verified.as_deref() {
            Some(value) => parse_flag(value)?,
            None => false,
        };

        Ok((
            AthleteId(self.athlete_id),
            SocialStat {
                platform: self.platform.to_ascii_lowercase(),
                followers,
                engagement_rate,
                verified,
            },
        ))
    }
}

/// Accepts thousands separators, as spreadsheets tend to export them.
fn parse_followers(value: &str) -> Result<u64, String> {
    value
        .replace(',', "")
        .parse::<u64>()
        .map_err(|_| format!("followers '{value}' is not a whole number"))
}

/// `4.5%` and `0.045` both mean a 4.5% engagement rate.
fn parse_engagement(value: &str) -> Result<f64, String> {
    let (number, percent) = match value.strip_suffix('%') {
        Some(number) => (number.trim(), true),
        None => (value, false),
    };
    let parsed = number
        .parse::<f64>()
        .map_err(|_| format!("engagement_rate '{value}' is not a number"))?;
    let rate = if percent { parsed / 100.0 } else { parsed };
    if !(0.0..=1.0).contains(&rate) {
        return Err(format!("engagement_rate '{value}' must be between 0 and 1"));
    }
    Ok(rate)
}

fn parse_flag(value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Ok(true),
        "false" | "no" | "n" | "0" => Ok(false),
        _ => Err(format!("verified '{value}' is not a yes/no value")),
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
