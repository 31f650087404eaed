//! CSV readers for the five datasets
//!
//! Reader-based functions do the parsing so tests can feed in-memory data;
//! the path-based entry point adds the missing-file handling.

use std::{
    collections::BTreeMap,
    fs::File,
    io::{ErrorKind, Read},
    path::Path,
};

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::de::DeserializeOwned;

use super::{
    models::{RosterEntry, WeeklyPlayerStat},
    schema::{column_index, missing_columns, DatasetKind},
};
use crate::{error::AnalyticsError, Result};

fn corrupt(kind: DatasetKind, source: &str, reason: impl Into<String>) -> AnalyticsError {
    AnalyticsError::DatasetCorrupt {
        dataset: kind.name().to_string(),
        path: source.to_string(),
        reason: reason.into(),
    }
}

fn reader<R: Read>(rdr: R) -> csv::Reader<R> {
    ReaderBuilder::new().trim(Trim::All).from_reader(rdr)
}

/// Read and validate the header row.
fn checked_headers<R: Read>(
    kind: DatasetKind,
    source: &str,
    reader: &mut csv::Reader<R>,
) -> Result<StringRecord> {
    let headers = reader
        .headers()
        .map_err(|e| corrupt(kind, source, format!("unreadable header row: {e}")))?
        .clone();

    let missing = missing_columns(kind, &headers);
    if !missing.is_empty() {
        return Err(corrupt(
            kind,
            source,
            format!("missing required column(s): {}", missing.join(", ")),
        ));
    }
    Ok(headers)
}

fn row_error(kind: DatasetKind, source: &str, err: csv::Error) -> AnalyticsError {
    let line = err
        .position()
        .map(|p| format!(" at line {}", p.line()))
        .unwrap_or_default();
    corrupt(kind, source, format!("bad row{line}: {err}"))
}

/// Deserialize every row of a dataset with a fixed schema.
pub fn read_typed<T, R>(kind: DatasetKind, source: &str, rdr: R) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut reader = reader(rdr);
    let headers = checked_headers(kind, source, &mut reader)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| row_error(kind, source, e))?;
        let row = record
            .deserialize::<T>(Some(&headers))
            .map_err(|e| row_error(kind, source, e))?;
        rows.push(row);
    }
    Ok(rows)
}

/// Key columns plus every other column as raw text.
struct LooseRow {
    line: u64,
    key: String,
    team: String,
    fields: BTreeMap<String, String>,
}

fn read_loose<R: Read>(kind: DatasetKind, source: &str, rdr: R) -> Result<Vec<LooseRow>> {
    let mut reader = reader(rdr);
    let headers = checked_headers(kind, source, &mut reader)?;

    let columns = kind.required_columns();
    let key_idx = column_index(&headers, columns[0])
        .ok_or_else(|| corrupt(kind, source, "missing key column"))?;
    let team_idx = column_index(&headers, columns[1])
        .ok_or_else(|| corrupt(kind, source, "missing team column"))?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| row_error(kind, source, e))?;
        let mut fields = BTreeMap::new();
        for (idx, (header, value)) in headers.iter().zip(record.iter()).enumerate() {
            if idx == key_idx || idx == team_idx || header.is_empty() {
                continue;
            }
            fields.insert(header.to_string(), value.to_string());
        }
        rows.push(LooseRow {
            line: record.position().map_or(0, |p| p.line()),
            key: record.get(key_idx).unwrap_or_default().to_string(),
            team: record.get(team_idx).unwrap_or_default().to_string(),
            fields,
        });
    }
    Ok(rows)
}

pub fn read_weekly_stats<R: Read>(source: &str, rdr: R) -> Result<Vec<WeeklyPlayerStat>> {
    let kind = DatasetKind::WeeklyStats;
    read_loose(kind, source, rdr)?
        .into_iter()
        .map(|row| -> Result<WeeklyPlayerStat> {
            let week = match row.fields.get("week").map(|w| w.trim()) {
                None | Some("") => None,
                Some(w) => Some(w.parse::<u16>().map_err(|_| {
                    corrupt(
                        kind,
                        source,
                        format!("bad row at line {}: week {w:?} is not a week number", row.line),
                    )
                })?),
            };
            Ok(WeeklyPlayerStat {
                week,
                player_name: row.key,
                recent_team: row.team,
                fields: row.fields,
            })
        })
        .collect()
}

pub fn read_rosters<R: Read>(source: &str, rdr: R) -> Result<Vec<RosterEntry>> {
    let rows = read_loose(DatasetKind::Rosters, source, rdr)?;
    Ok(rows
        .into_iter()
        .map(|row| RosterEntry {
            player_name: row.key,
            team: row.team,
            fields: row.fields,
        })
        .collect())
}

/// Open a dataset file; `Ok(None)` when the file does not exist.
pub fn open_source(path: &Path) -> Result<Option<File>> {
    match File::open(path) {
        Ok(file) => Ok(Some(file)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}
