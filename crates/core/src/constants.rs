/// Months in a depreciation year
pub const MONTHS_PER_YEAR: u32 = 12;

/// Decimal places used when rounding distribution percentages
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Placeholder the inventory sheet uses for "no value"
pub const EMPTY_CELL: &str = "-";

/// Valid range for a recorded purchase year
pub const MIN_PURCHASE_YEAR: i32 = 1900;
pub const MAX_PURCHASE_YEAR: i32 = 2100;

/// Valid range for the advisory economic life, in years
pub const MIN_ECONOMIC_LIFE_YEARS: u32 = 1;
pub const MAX_ECONOMIC_LIFE_YEARS: u32 = 50;

/// Economic life assumed when a new asset does not state one
pub const DEFAULT_ECONOMIC_LIFE_YEARS: u32 = 4;

/// Calendar years the depreciation engine accepts for a purchase
pub const MIN_CALENDAR_YEAR: i32 = 1;
pub const MAX_CALENDAR_YEAR: i32 = 9999;

/// Longest straight-line schedule the engine will compute, in months
pub const MAX_SCHEDULE_MONTHS: u32 = 1200;
