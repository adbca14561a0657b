use crate::app_dirs::AppDirs;
use crate::difficulty::Difficulty;
use crate::session::SessionResult;
use chrono::{DateTime, Local, NaiveDateTime, SecondsFormat, TimeZone};
use csv::{ReaderBuilder, Trim, WriterBuilder};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const HEADER: [&str; 5] = ["timestamp", "wpm", "accuracy", "errors", "difficulty"];

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("history record could not be encoded: {0}")]
    Csv(#[from] csv::Error),
}

/// One persisted session, one CSV row. Field order is the column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    #[serde(with = "iso8601")]
    pub timestamp: DateTime<Local>,
    pub wpm: f64,
    pub accuracy: u8,
    pub errors: usize,
    pub difficulty: Difficulty,
}

impl From<&SessionResult> for HistoryRecord {
    fn from(r: &SessionResult) -> Self {
        Self {
            timestamp: r.timestamp,
            wpm: r.wpm,
            accuracy: r.accuracy,
            errors: r.errors,
            difficulty: r.difficulty,
        }
    }
}

impl From<HistoryRecord> for SessionResult {
    fn from(r: HistoryRecord) -> Self {
        Self {
            timestamp: r.timestamp,
            wpm: r.wpm,
            accuracy: r.accuracy,
            errors: r.errors,
            difficulty: r.difficulty,
        }
    }
}

/// Accepts RFC 3339 as well as naive ISO-8601 (read as local time).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Local>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
}

mod iso8601 {
    use super::{format_timestamp, parse_timestamp};
    use chrono::{DateTime, Local};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &DateTime<Local>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&format_timestamp(ts))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Local>, D::Error> {
        let raw = String::deserialize(d)?;
        parse_timestamp(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid timestamp '{raw}'")))
    }
}

/// Append-only log of completed sessions.
///
/// Assumes a single writer: nothing here locks the backing file against
/// another process appending at the same time.
pub trait HistoryStore {
    fn append(&self, result: &SessionResult) -> Result<(), HistoryError>;

    /// Every record in insertion order. Missing or malformed history reads
    /// as empty.
    fn load_all(&self) -> Vec<HistoryRecord>;

    /// The last `n` records, or all of them if there are fewer.
    fn tail(&self, n: usize) -> Vec<HistoryRecord> {
        let mut records = self.load_all();
        let skip = records.len().saturating_sub(n);
        records.split_off(skip)
    }
}

#[derive(Debug, Clone)]
pub struct CsvHistoryStore {
    path: PathBuf,
}

impl CsvHistoryStore {
    pub fn new() -> Self {
        Self {
            path: AppDirs::history_path(),
        }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn encode(result: &SessionResult, with_header: bool) -> Result<Vec<u8>, HistoryError> {
        let mut writer = WriterBuilder::new()
            .has_headers(with_header)
            .from_writer(Vec::new());
        writer.serialize(HistoryRecord::from(result))?;
        writer
            .into_inner()
            .map_err(|e| HistoryError::Io(e.into_error()))
    }
}

impl Default for CsvHistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryStore for CsvHistoryStore {
    fn append(&self, result: &SessionResult) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        // A missing or zero-length file still needs the header row
        let needs_header = fs::metadata(&self.path)
            .map(|m| m.len() == 0)
            .unwrap_or(true);

        // Encode the whole row before touching the file
        let row = Self::encode(result, needs_header)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(&row)?;
        file.sync_data()?;

        debug!(
            "appended {} session ({} wpm, {}%) to {}",
            result.difficulty,
            result.wpm,
            result.accuracy,
            self.path.display()
        );
        Ok(())
    }

    fn load_all(&self) -> Vec<HistoryRecord> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no history at {}", self.path.display());
                return Vec::new();
            }
            Err(e) => {
                warn!("cannot read history at {}: {e}", self.path.display());
                return Vec::new();
            }
        };

        let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(file);
        match reader
            .deserialize::<HistoryRecord>()
            .collect::<Result<Vec<_>, _>>()
        {
            Ok(records) => records,
            Err(e) => {
                warn!(
                    "ignoring malformed history at {}: {e}",
                    self.path.display()
                );
                Vec::new()
            }
        }
    }
}

/// Render a timestamp the way it is written to the log.
pub fn format_timestamp(ts: &DateTime<Local>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, false)
}
