//! Break aggregation: coffee-break totals with a free allowance, and the
//! lunch deduction with its configured floor.

use crate::models::time_log::BreakInterval;

/// The first 30 minutes of coffee breaks per log are free; only the excess
/// reduces worked time.
pub const COFFEE_ALLOWANCE_MINUTES: i64 = 30;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreakTotals {
    pub coffee_minutes: i64,
    pub excess_coffee_minutes: i64,
    pub lunch_minutes: i64,
    /// What actually comes off worked time: actual lunch, raised to the
    /// company floor when one is configured.
    pub lunch_deduction: i64,
}

/// Sums complete break intervals only; a break still in progress contributes
/// nothing. `lunch_floor` ≤ 0 disables the floor.
pub fn aggregate_breaks(
    coffee_breaks: &[BreakInterval],
    lunch_break: Option<&BreakInterval>,
    lunch_floor: i64,
) -> BreakTotals {
    let coffee_minutes: i64 = coffee_breaks.iter().filter_map(|b| b.minutes()).sum();
    let excess_coffee_minutes = (coffee_minutes - COFFEE_ALLOWANCE_MINUTES).max(0);

    let lunch_minutes = lunch_break.and_then(|b| b.minutes()).unwrap_or(0);
    let lunch_deduction = if lunch_floor > 0 {
        lunch_minutes.max(lunch_floor)
    } else {
        lunch_minutes
    };

    BreakTotals {
        coffee_minutes,
        excess_coffee_minutes,
        lunch_minutes,
        lunch_deduction,
    }
}
