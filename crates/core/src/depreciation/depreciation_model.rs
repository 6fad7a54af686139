//! Depreciation domain models.

use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::month::{PurchaseMonth, YearMonth};
use crate::constants::{MAX_CALENDAR_YEAR, MAX_SCHEDULE_MONTHS, MIN_CALENDAR_YEAR};
use crate::errors::DepreciationError;

/// Validated inputs for one straight-line evaluation.
///
/// Construction is the validation boundary: negative amounts, years outside
/// the calendar and schedules longer than [`MAX_SCHEDULE_MONTHS`] never
/// reach the calculator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepreciationInput {
    acquisition_cost: Decimal,
    monthly_depreciation: Decimal,
    purchase: YearMonth,
    total_months: u32,
}

impl DepreciationInput {
    pub fn new(
        acquisition_cost: Decimal,
        monthly_depreciation: Decimal,
        purchase_year: i32,
        purchase_month: PurchaseMonth,
    ) -> Result<Self, DepreciationError> {
        if acquisition_cost.is_sign_negative() && !acquisition_cost.is_zero() {
            return Err(DepreciationError::NegativeAmount {
                field: "acquisitionCost",
                value: acquisition_cost.to_string(),
            });
        }
        if monthly_depreciation.is_sign_negative() && !monthly_depreciation.is_zero() {
            return Err(DepreciationError::NegativeAmount {
                field: "monthlyDepreciation",
                value: monthly_depreciation.to_string(),
            });
        }
        if !(MIN_CALENDAR_YEAR..=MAX_CALENDAR_YEAR).contains(&purchase_year) {
            return Err(DepreciationError::YearOutOfRange {
                year: purchase_year,
                min: MIN_CALENDAR_YEAR,
                max: MAX_CALENDAR_YEAR,
            });
        }
        let total_months = schedule_months(acquisition_cost, monthly_depreciation)?;
        Ok(Self {
            acquisition_cost,
            monthly_depreciation,
            purchase: YearMonth::new(purchase_year, purchase_month),
            total_months,
        })
    }

    /// Same as [`DepreciationInput::new`] but resolves the month from its name.
    pub fn from_month_name(
        acquisition_cost: Decimal,
        monthly_depreciation: Decimal,
        purchase_year: i32,
        purchase_month_name: &str,
    ) -> Result<Self, DepreciationError> {
        let month = PurchaseMonth::from_name(purchase_month_name)?;
        Self::new(acquisition_cost, monthly_depreciation, purchase_year, month)
    }

    pub fn acquisition_cost(&self) -> Decimal {
        self.acquisition_cost
    }

    pub fn monthly_depreciation(&self) -> Decimal {
        self.monthly_depreciation
    }

    pub fn purchase(&self) -> YearMonth {
        self.purchase
    }

    /// Whole months until the cost is written off; zero for a zero rate.
    pub fn total_months(&self) -> u32 {
        self.total_months
    }
}

// Floor division drops a partial final month
fn schedule_months(cost: Decimal, rate: Decimal) -> Result<u32, DepreciationError> {
    if rate.is_zero() {
        return Ok(0);
    }
    cost.checked_div(rate)
        .and_then(|months| months.floor().to_u32())
        .filter(|months| *months <= MAX_SCHEDULE_MONTHS)
        .ok_or_else(|| DepreciationError::ScheduleTooLong {
            acquisition_cost: cost.to_string(),
            monthly_depreciation: rate.to_string(),
            max_months: MAX_SCHEDULE_MONTHS,
        })
}

/// How a result should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DepreciationStatus {
    /// Book value still above zero.
    Depreciating,
    /// The whole depreciation period has elapsed.
    FullyDepreciated,
    /// Monthly depreciation is zero; the schedule cannot be computed.
    InvalidRate,
}

/// Book value and cumulative depreciation at the end of one depreciation year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyDepreciation {
    pub year: i32,
    pub book_value: Decimal,
    pub cumulative_depreciation: Decimal,
}

/// Outcome of a straight-line evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepreciationResult {
    pub acquisition_cost: Decimal,
    pub monthly_depreciation: Decimal,
    pub purchase: YearMonth,
    pub evaluated_at: YearMonth,
    pub total_months: u32,
    /// Absent when the monthly depreciation is zero.
    pub end_date: Option<YearMonth>,
    pub elapsed_months: u32,
    pub progress_ratio: f64,
    pub book_value: Decimal,
    pub remaining_months: u32,
    pub yearly_series: Vec<YearlyDepreciation>,
}

impl DepreciationResult {
    /// True for the degenerate result produced by a zero monthly depreciation.
    pub fn is_invalid_rate(&self) -> bool {
        self.total_months == 0
    }

    pub fn status(&self) -> DepreciationStatus {
        if self.is_invalid_rate() {
            DepreciationStatus::InvalidRate
        } else if self.elapsed_months >= self.total_months {
            DepreciationStatus::FullyDepreciated
        } else {
            DepreciationStatus::Depreciating
        }
    }

    /// Whole percent shown on the progress indicator.
    pub fn progress_percent(&self) -> u32 {
        (self.progress_ratio * 100.0).floor() as u32
    }

    pub fn accumulated_depreciation(&self) -> Decimal {
        self.acquisition_cost - self.book_value
    }
}

/// Depreciation of a stored asset, ready for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDepreciation {
    pub asset_number: String,
    pub asset_name: String,
    pub economic_life_years: Option<u32>,
    pub status: DepreciationStatus,
    pub progress_percent: u32,
    pub formatted_acquisition_cost: String,
    pub formatted_book_value: String,
    pub formatted_monthly_depreciation: String,
    pub result: DepreciationResult,
}
