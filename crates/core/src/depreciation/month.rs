//! Calendar months as the inventory sheet names them.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::MONTHS_PER_YEAR;
use crate::errors::DepreciationError;

/// Purchase month of an asset.
///
/// Serialized with the Indonesian name used in the `Bulan Beli` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PurchaseMonth {
    #[serde(rename = "Januari")]
    January,
    #[serde(rename = "Februari")]
    February,
    #[serde(rename = "Maret")]
    March,
    #[serde(rename = "April")]
    April,
    #[serde(rename = "Mei")]
    May,
    #[serde(rename = "Juni")]
    June,
    #[serde(rename = "Juli")]
    July,
    #[serde(rename = "Agustus")]
    August,
    #[serde(rename = "September")]
    September,
    #[serde(rename = "Oktober")]
    October,
    #[serde(rename = "November")]
    November,
    #[serde(rename = "Desember")]
    December,
}

impl PurchaseMonth {
    /// All months in calendar order.
    pub const ALL: [PurchaseMonth; 12] = [
        PurchaseMonth::January,
        PurchaseMonth::February,
        PurchaseMonth::March,
        PurchaseMonth::April,
        PurchaseMonth::May,
        PurchaseMonth::June,
        PurchaseMonth::July,
        PurchaseMonth::August,
        PurchaseMonth::September,
        PurchaseMonth::October,
        PurchaseMonth::November,
        PurchaseMonth::December,
    ];

    /// Resolves a month name, ignoring case and surrounding whitespace.
    ///
    /// Both the sheet's Indonesian names and English names are accepted.
    /// Anything else is an error; there is no fallback month.
    pub fn from_name(name: &str) -> Result<Self, DepreciationError> {
        let needle = name.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|m| {
                m.indonesian_name().to_lowercase() == needle
                    || m.english_name().to_lowercase() == needle
            })
            .ok_or_else(|| DepreciationError::UnresolvedMonthName(name.to_string()))
    }

    /// Month for a 1-based month number.
    pub fn from_number(number: u32) -> Option<Self> {
        match number {
            1..=12 => Some(Self::ALL[(number - 1) as usize]),
            _ => None,
        }
    }

    /// 1-based month-of-year.
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    pub fn indonesian_name(self) -> &'static str {
        match self {
            PurchaseMonth::January => "Januari",
            PurchaseMonth::February => "Februari",
            PurchaseMonth::March => "Maret",
            PurchaseMonth::April => "April",
            PurchaseMonth::May => "Mei",
            PurchaseMonth::June => "Juni",
            PurchaseMonth::July => "Juli",
            PurchaseMonth::August => "Agustus",
            PurchaseMonth::September => "September",
            PurchaseMonth::October => "Oktober",
            PurchaseMonth::November => "November",
            PurchaseMonth::December => "Desember",
        }
    }

    pub fn english_name(self) -> &'static str {
        match self {
            PurchaseMonth::January => "January",
            PurchaseMonth::February => "February",
            PurchaseMonth::March => "March",
            PurchaseMonth::April => "April",
            PurchaseMonth::May => "May",
            PurchaseMonth::June => "June",
            PurchaseMonth::July => "July",
            PurchaseMonth::August => "August",
            PurchaseMonth::September => "September",
            PurchaseMonth::October => "October",
            PurchaseMonth::November => "November",
            PurchaseMonth::December => "December",
        }
    }
}

impl fmt::Display for PurchaseMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.indonesian_name())
    }
}

/// A calendar month of a specific year. The day is implicitly the 1st.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearMonth {
    pub year: i32,
    /// 1-based month-of-year
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: PurchaseMonth) -> Self {
        Self {
            year,
            month: month.number(),
        }
    }

    /// Months since year 0, January.
    fn ordinal(self) -> i64 {
        self.year as i64 * MONTHS_PER_YEAR as i64 + (self.month as i64 - 1)
    }

    /// Advances by `months` calendar months, rolling the year over.
    /// The year saturates at `i32::MAX`.
    pub fn add_months(self, months: u32) -> Self {
        let zero_based = (self.month - 1) as i64 + months as i64;
        let per_year = MONTHS_PER_YEAR as i64;
        let years = i32::try_from(zero_based / per_year).unwrap_or(i32::MAX);
        Self {
            year: self.year.saturating_add(years),
            month: (zero_based % per_year) as u32 + 1,
        }
    }

    /// Signed number of calendar months from `self` to `later`.
    pub fn months_until(self, later: YearMonth) -> i64 {
        later.ordinal() - self.ordinal()
    }

    pub fn purchase_month(self) -> PurchaseMonth {
        // month is kept in 1..=12 by every constructor
        PurchaseMonth::ALL[(self.month.clamp(1, 12) - 1) as usize]
    }
}

impl From<NaiveDate> for YearMonth {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.purchase_month(), self.year)
    }
}
