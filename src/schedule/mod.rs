//! Recurring due-date projection.
//!
//! A schedule advances one period at a time from a seed date until the
//! projected date lies strictly after the reference day. Each step starts
//! from the previous result, so a day-of-month clamped in a shorter month
//! stays clamped for the steps that follow.

mod clock;

pub use clock::{Clock, FixedClock, SystemClock};

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, WalletError};

const WEEKLY_TO_MONTHLY: f64 = 4.33;
const BIWEEKLY_TO_MONTHLY: f64 = 2.17;
const MONTHS_PER_YEAR: f64 = 12.0;

/// Upper bound on catch-up steps; far beyond any plausible seed.
const MAX_STEPS: u32 = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Monthly,
    Weekly,
    Biweekly,
    Yearly,
}

impl Frequency {
    pub const ALL: [Frequency; 4] = [
        Frequency::Monthly,
        Frequency::Weekly,
        Frequency::Biweekly,
        Frequency::Yearly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Monthly => "monthly",
            Frequency::Weekly => "weekly",
            Frequency::Biweekly => "biweekly",
            Frequency::Yearly => "yearly",
        }
    }

    /// Monthly-equivalent of one payment. Fixed approximations, not calendar math.
    pub fn monthly_equivalent(&self, amount: f64) -> f64 {
        match self {
            Frequency::Monthly => amount,
            Frequency::Weekly => amount * WEEKLY_TO_MONTHLY,
            Frequency::Biweekly => amount * BIWEEKLY_TO_MONTHLY,
            Frequency::Yearly => amount / MONTHS_PER_YEAR,
        }
    }

    /// Date one period after `from`; `None` on calendar overflow.
    pub fn advance(&self, from: NaiveDate) -> Option<NaiveDate> {
        match self {
            Frequency::Weekly => from.checked_add_signed(Duration::days(7)),
            Frequency::Biweekly => from.checked_add_signed(Duration::days(14)),
            Frequency::Monthly => from.checked_add_months(Months::new(1)),
            Frequency::Yearly => from.checked_add_months(Months::new(12)),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = WalletError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "monthly" | "aylik" | "aylık" => Ok(Frequency::Monthly),
            "weekly" | "haftalik" | "haftalık" => Ok(Frequency::Weekly),
            "biweekly" => Ok(Frequency::Biweekly),
            "yearly" | "yillik" | "yıllık" => Ok(Frequency::Yearly),
            other => Err(WalletError::InvalidInput(format!(
                "unknown frequency `{other}` (expected monthly, weekly, biweekly, yearly)"
            ))),
        }
    }
}

/// Projects the first date strictly after `today` by adding one period at a
/// time to `seed`. At least one step is always taken, so a seed already in the
/// future still moves forward by one period.
pub fn next_payment_date(seed: NaiveDate, frequency: Frequency, today: NaiveDate) -> Result<NaiveDate> {
    let mut candidate = seed;
    for _ in 0..MAX_STEPS {
        candidate = frequency.advance(candidate).ok_or_else(|| {
            WalletError::InvalidInput(format!(
                "date overflow projecting {frequency} schedule from {seed}"
            ))
        })?;
        if candidate > today {
            return Ok(candidate);
        }
    }
    Err(WalletError::InvalidInput(format!(
        "{frequency} schedule from {seed} does not reach {today}"
    )))
}

/// Parses an ISO `YYYY-MM-DD` date supplied by a user.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|err| WalletError::InvalidInput(format!("invalid date `{value}`: {err}")))
}
