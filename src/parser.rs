//! Roster parser.
//!
//! Roster format, one member per line:
//! ```text
//! # comment
//! 0x1234...abcd	2021-03-15	100	0
//! 0x9876...fedc	-	100	0
//! ```
//!
//! - Fields are separated by tabs: address, join date, weight, months on leave
//! - Blank lines and lines starting with `#` are ignored
//! - A join date of `-` marks an organizational entry; it is excluded
//! - Lines with the wrong number of fields are skipped, not fatal
//!
//! No field is interpreted here. Type coercion and range checks happen in
//! the encoder so that every row is validated the same way.

use std::fs;
use std::path::Path;

use crate::error::RosterError;
use crate::record::RawRow;

/// Number of tab-separated fields in a roster line.
pub const FIELD_COUNT: usize = 4;

/// Join date placeholder marking an excluded row.
pub const EXCLUDED_DATE: &str = "-";

/// A roster line that was dropped without aborting the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Skipped {
    /// Line did not split into [`FIELD_COUNT`] fields.
    FieldCount { line: usize, found: usize },
    /// Row carried the [`EXCLUDED_DATE`] placeholder.
    Excluded { line: usize, address: String },
}

/// Result of parsing a roster: eligible rows in input order, plus the lines
/// that were skipped along the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterParse {
    pub rows: Vec<RawRow>,
    pub skipped: Vec<Skipped>,
}

/// Parse roster text into eligible rows.
pub fn parse_roster(text: &str) -> RosterParse {
    let mut parsed = RosterParse::default();

    for (idx, line) in text.lines().enumerate() {
        let line_num = idx + 1;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        let [address, join_date, weight, months_on_leave] = fields[..] else {
            parsed.skipped.push(Skipped::FieldCount {
                line: line_num,
                found: fields.len(),
            });
            continue;
        };

        if join_date == EXCLUDED_DATE {
            parsed.skipped.push(Skipped::Excluded {
                line: line_num,
                address: address.to_string(),
            });
            continue;
        }

        parsed.rows.push(RawRow::new(
            line_num,
            address,
            join_date,
            weight,
            months_on_leave,
        ));
    }

    parsed
}

/// Read and parse a roster file.
///
/// Fails if the file cannot be read or if no eligible rows remain.
pub fn read_roster(path: &Path) -> Result<RosterParse, RosterError> {
    let text = fs::read_to_string(path).map_err(|source| RosterError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let parsed = parse_roster(&text);
    if parsed.rows.is_empty() {
        return Err(RosterError::NoEligibleRecords);
    }
    Ok(parsed)
}
