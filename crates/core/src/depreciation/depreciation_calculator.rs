use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;

use super::depreciation_model::{DepreciationInput, DepreciationResult, YearlyDepreciation};
use super::month::YearMonth;
use crate::constants::MONTHS_PER_YEAR;
use crate::errors::Result;

/// Evaluates a straight-line depreciation schedule at `evaluation_date`.
///
/// Month granularity: the purchase and evaluation dates only contribute
/// their year and month. A zero monthly depreciation yields the degenerate
/// result (`total_months == 0`, no end date, empty series) rather than an
/// error; see [`DepreciationResult::is_invalid_rate`].
pub fn calculate_depreciation(
    input: &DepreciationInput,
    evaluation_date: NaiveDate,
) -> DepreciationResult {
    let cost = input.acquisition_cost();
    let rate = input.monthly_depreciation();
    let purchase = input.purchase();
    let evaluated_at = YearMonth::from(evaluation_date);

    let elapsed_months = purchase.months_until(evaluated_at).max(0) as u32;

    if rate.is_zero() {
        debug!(
            "Monthly depreciation is zero for purchase {}; returning undepreciated value",
            purchase
        );
        return DepreciationResult {
            acquisition_cost: cost,
            monthly_depreciation: rate,
            purchase,
            evaluated_at,
            total_months: 0,
            end_date: None,
            elapsed_months,
            progress_ratio: 0.0,
            book_value: cost,
            remaining_months: 0,
            yearly_series: Vec::new(),
        };
    }

    let total_months = input.total_months();
    let end_date = purchase.add_months(total_months);

    let progress_ratio = if total_months == 0 {
        0.0
    } else {
        (elapsed_months as f64 / total_months as f64).min(1.0)
    };

    // A truncated final month is never charged separately: once the whole
    // schedule has elapsed the asset is worth nothing.
    let book_value = if total_months > 0 && elapsed_months >= total_months {
        Decimal::ZERO
    } else {
        rate.checked_mul(Decimal::from(elapsed_months))
            .map_or(Decimal::ZERO, |charged| (cost - charged).max(Decimal::ZERO))
    };
    let remaining_months = evaluated_at.months_until(end_date).max(0) as u32;

    DepreciationResult {
        acquisition_cost: cost,
        monthly_depreciation: rate,
        purchase,
        evaluated_at,
        total_months,
        end_date: Some(end_date),
        elapsed_months,
        progress_ratio,
        book_value,
        remaining_months,
        yearly_series: yearly_series(cost, rate, purchase.year, total_months),
    }
}

/// Same as [`calculate_depreciation`], resolving the purchase month by name.
pub fn evaluate(
    acquisition_cost: Decimal,
    monthly_depreciation: Decimal,
    purchase_year: i32,
    purchase_month_name: &str,
    evaluation_date: NaiveDate,
) -> Result<DepreciationResult> {
    let input = DepreciationInput::from_month_name(
        acquisition_cost,
        monthly_depreciation,
        purchase_year,
        purchase_month_name,
    )?;
    Ok(calculate_depreciation(&input, evaluation_date))
}

/// Year-end book values, one entry per depreciation year that still leaves
/// a positive value. The first entry is labelled with the purchase year.
fn yearly_series(
    cost: Decimal,
    rate: Decimal,
    purchase_year: i32,
    total_months: u32,
) -> Vec<YearlyDepreciation> {
    let per_year = rate.checked_mul(Decimal::from(MONTHS_PER_YEAR));
    let mut series = Vec::new();

    for index in 0..=(total_months / MONTHS_PER_YEAR) {
        // An overflowing charge has already written off the whole cost
        let cumulative = per_year
            .and_then(|per_year| per_year.checked_mul(Decimal::from(index + 1)))
            .map_or(cost, |charged| charged.min(cost));
        let remaining = cost - cumulative;
        if remaining <= Decimal::ZERO {
            break;
        }
        series.push(YearlyDepreciation {
            year: purchase_year.saturating_add(index as i32),
            book_value: remaining,
            cumulative_depreciation: cumulative,
        });
    }

    series
}
