//! Field validation and binary packing for a single roster row.
//!
//! Checks run in a fixed order and the first failure wins:
//! address, date shape, year, month, weight, months on leave.

use crate::error::EncodeError;
use crate::record::{ADDRESS_LEN, EncodedRecord, MemberRecord, RawRow};

pub const MIN_YEAR: i64 = 1970;
pub const MAX_YEAR: i64 = 2100;
pub const MAX_WEIGHT: i64 = 100;
pub const MAX_MONTHS_ON_LEAVE: i64 = u16::MAX as i64;

/// Validate a raw row and pack it into its 27-byte form.
pub fn encode(row: &RawRow) -> Result<EncodedRecord, EncodeError> {
    MemberRecord::try_from(row).map(|m| m.encode())
}

impl TryFrom<&RawRow> for MemberRecord {
    type Error = EncodeError;

    fn try_from(row: &RawRow) -> Result<Self, Self::Error> {
        let address = parse_address(&row.address)?;

        let date = row.join_date.trim();
        let parts: Vec<&str> = date.split('-').collect();
        let [year, month, _day] = parts[..] else {
            return Err(EncodeError::InvalidDateFormat(row.join_date.clone()));
        };

        let join_year = parse_in_range(year, MIN_YEAR, MAX_YEAR)
            .ok_or_else(|| EncodeError::InvalidYear(year.to_string()))?;
        let join_month = parse_in_range(month, 1, 12)
            .ok_or_else(|| EncodeError::InvalidMonth(month.to_string()))?;
        let weight = parse_in_range(&row.weight, 0, MAX_WEIGHT)
            .ok_or_else(|| EncodeError::InvalidWeight(row.weight.clone()))?;
        let months_on_leave = parse_in_range(&row.months_on_leave, 0, MAX_MONTHS_ON_LEAVE)
            .ok_or_else(|| EncodeError::InvalidMonthsOnLeave(row.months_on_leave.clone()))?;

        // Bounds above keep every cast lossless.
        Ok(MemberRecord {
            address,
            join_year: join_year as u16,
            join_month: join_month as u8,
            weight: weight as u8,
            months_on_leave: months_on_leave as u16,
        })
    }
}

/// Normalize an address to 40 lower-case hex characters and decode it.
///
/// Surrounding whitespace and one leading `0x`/`0X` are stripped.
pub fn normalize_address(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed)
        .trim()
        .to_ascii_lowercase();

    if digits.len() == ADDRESS_LEN * 2 && digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        Some(digits)
    } else {
        None
    }
}

fn parse_address(raw: &str) -> Result<[u8; ADDRESS_LEN], EncodeError> {
    let invalid = || EncodeError::InvalidAddress(raw.to_string());
    let digits = normalize_address(raw).ok_or_else(invalid)?;

    let mut address = [0u8; ADDRESS_LEN];
    hex::decode_to_slice(&digits, &mut address).map_err(|_| invalid())?;
    Ok(address)
}

/// Parse a decimal integer and check `min <= n <= max`.
///
/// Parsing as `i64` first means `-1` or `70000` are range failures rather
/// than syntax failures, and nothing is ever truncated.
fn parse_in_range(s: &str, min: i64, max: i64) -> Option<i64> {
    s.trim()
        .parse::<i64>()
        .ok()
        .filter(|n| (min..=max).contains(n))
}
