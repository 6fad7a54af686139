pub mod number_utils;
pub mod time_utils;

pub use number_utils::{format_rupiah, parse_sheet_number};
pub use time_utils::{Clock, FixedClock, SystemClock, DEFAULT_VALUATION_TZ};
