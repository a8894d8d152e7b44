//! Random member generation.
//!
//! Distribution:
//! - 60% joined within the last [`RECENT_DAYS`] days, the rest between
//!   [`RECENT_DAYS`] and [`HISTORY_DAYS`] days ago
//! - 90% full-time (weight 100), 10% part-time (weight 50)
//! - 10% have 1-9 months on leave, the rest 0
//!
//! Members come back sorted by join date, oldest first.

use chrono::{Days, NaiveDate};
use rand::Rng;
use roster_payload::RawRow;

/// Roughly 60 months.
pub const RECENT_DAYS: u64 = 60 * 30;

/// Roughly 10 years.
pub const HISTORY_DAYS: u64 = 365 * 10;

pub const RECENT_SHARE: f64 = 0.6;
pub const FULL_TIME_SHARE: f64 = 0.9;
pub const ON_LEAVE_SHARE: f64 = 0.1;

pub const FULL_TIME_WEIGHT: u8 = 100;
pub const PART_TIME_WEIGHT: u8 = 50;

/// One synthetic roster member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMember {
    /// `0x` followed by 40 lower-case hex characters.
    pub address: String,
    pub join_date: NaiveDate,
    pub weight: u8,
    pub months_on_leave: u8,
}

impl GeneratedMember {
    /// Roster row for this member; `line` is its 1-based position.
    pub fn to_row(&self, line: usize) -> RawRow {
        RawRow::new(
            line,
            self.address.as_str(),
            self.join_date.format("%Y-%m-%d").to_string(),
            self.weight.to_string(),
            self.months_on_leave.to_string(),
        )
    }
}

/// Generate `n` members relative to `today`, sorted by join date.
pub fn generate_members<R: Rng>(rng: &mut R, n: usize, today: NaiveDate) -> Vec<GeneratedMember> {
    let mut members: Vec<GeneratedMember> = (0..n).map(|_| random_member(rng, today)).collect();
    members.sort_by_key(|m| m.join_date);
    members
}

fn random_member<R: Rng>(rng: &mut R, today: NaiveDate) -> GeneratedMember {
    let address_bytes: [u8; 20] = rng.random();

    let days_ago = if rng.random_bool(RECENT_SHARE) {
        rng.random_range(0..=RECENT_DAYS)
    } else {
        rng.random_range(RECENT_DAYS..=HISTORY_DAYS)
    };

    let weight = if rng.random_bool(FULL_TIME_SHARE) {
        FULL_TIME_WEIGHT
    } else {
        PART_TIME_WEIGHT
    };

    let months_on_leave = if rng.random_bool(ON_LEAVE_SHARE) {
        rng.random_range(1..=9)
    } else {
        0
    };

    GeneratedMember {
        address: format!("0x{}", hex::encode(address_bytes)),
        join_date: today - Days::new(days_ago),
        weight,
        months_on_leave,
    }
}

/// Render members as roster text, one tab-delimited row per line.
pub fn render_roster(members: &[GeneratedMember]) -> String {
    let mut out = String::new();
    for (i, m) in members.iter().enumerate() {
        out.push_str(&m.to_row(i + 1).to_string());
        out.push('\n');
    }
    out
}
