//! Summary statistics for a generated roster.

use std::fmt;

use chrono::{Days, NaiveDate};

use crate::generator::{FULL_TIME_WEIGHT, GeneratedMember, PART_TIME_WEIGHT, RECENT_DAYS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterStats {
    pub total: usize,
    pub full_time: usize,
    pub part_time: usize,
    pub with_breaks: usize,
    /// Joined on or after `today - RECENT_DAYS`.
    pub recent: usize,
    pub oldest: Option<NaiveDate>,
    pub newest: Option<NaiveDate>,
}

impl RosterStats {
    pub fn from_members(members: &[GeneratedMember], today: NaiveDate) -> Self {
        let cutoff = today - Days::new(RECENT_DAYS);

        Self {
            total: members.len(),
            full_time: count(members, |m| m.weight == FULL_TIME_WEIGHT),
            part_time: count(members, |m| m.weight == PART_TIME_WEIGHT),
            with_breaks: count(members, |m| m.months_on_leave > 0),
            recent: count(members, |m| m.join_date >= cutoff),
            oldest: members.iter().map(|m| m.join_date).min(),
            newest: members.iter().map(|m| m.join_date).max(),
        }
    }

    pub fn older(&self) -> usize {
        self.total - self.recent
    }

    fn pct(&self, n: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            n as f64 / self.total as f64 * 100.0
        }
    }

    fn write_share(&self, f: &mut fmt::Formatter<'_>, label: &str, n: usize) -> fmt::Result {
        writeln!(f, "  {label:<22}{n} ({:.1}%)", self.pct(n))
    }
}

fn count(members: &[GeneratedMember], pred: impl Fn(&GeneratedMember) -> bool) -> usize {
    members.iter().filter(|&m| pred(m)).count()
}

impl fmt::Display for RosterStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Statistics:")?;
        self.write_share(f, "Full-time (100%):", self.full_time)?;
        self.write_share(f, "Part-time (50%):", self.part_time)?;
        self.write_share(f, "With breaks (1-9m):", self.with_breaks)?;
        self.write_share(f, "Recent (<60m):", self.recent)?;
        self.write_share(f, "Older (60m+):", self.older())?;

        if let (Some(oldest), Some(newest)) = (self.oldest, self.newest) {
            writeln!(f)?;
            writeln!(f, "Date range:")?;
            writeln!(f, "  Oldest: {}", oldest.format("%Y-%m-%d"))?;
            writeln!(f, "  Newest: {}", newest.format("%Y-%m-%d"))?;
        }
        Ok(())
    }
}
