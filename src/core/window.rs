//! Work-window arithmetic: lateness, in-window minutes and the raw overtime
//! ceiling, for both scheduled and unscheduled logs.
//!
//! Net worked time is floored at zero everywhere. The upstream screens
//! disagreed on this (some displayed negative hours when the lunch deduction
//! exceeded the clocked time); the floor is the deliberate policy here and is
//! what keeps `work_inside + raw_overtime <= gross`.

use crate::core::breaks::BreakTotals;
use crate::models::shift::ShiftWindow;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkWindow {
    pub late_minutes: i64,
    pub net_minutes: i64,
    pub work_inside_minutes: i64,
    pub raw_overtime_minutes: i64,
}

/// No schedule matched: work is capped by the company default shift and
/// lateness is meaningless.
///
/// The lunch floor is already baked into the cap
/// (`default_shift - lunch_floor`), so net only loses lunch time when a
/// lunch was actually taken; deducting the floor again would double-count it.
pub fn unscheduled(
    gross_minutes: i64,
    breaks: &BreakTotals,
    default_shift_minutes: i64,
    lunch_floor: i64,
) -> WorkWindow {
    let lunch_deduction = if breaks.lunch_minutes > 0 {
        breaks.lunch_deduction
    } else {
        0
    };
    let net_minutes = (gross_minutes - lunch_deduction - breaks.excess_coffee_minutes).max(0);
    let cap_minutes = (default_shift_minutes - lunch_floor).max(0);

    WorkWindow {
        late_minutes: 0,
        net_minutes,
        work_inside_minutes: net_minutes.min(cap_minutes),
        raw_overtime_minutes: (net_minutes - cap_minutes).max(0),
    }
}

/// A schedule matched: lateness counts against the shift start, in-window
/// work against the scheduled duration, and overtime is clocked time past
/// the shift end. Here the floored lunch deduction always applies: the
/// schedule presumes the lunch was owed.
pub fn scheduled(
    time_in: DateTime<Utc>,
    time_out: DateTime<Utc>,
    breaks: &BreakTotals,
    shift: &ShiftWindow,
) -> WorkWindow {
    let gross_minutes = (time_out - time_in).num_minutes();
    let net_minutes =
        (gross_minutes - breaks.lunch_deduction - breaks.excess_coffee_minutes).max(0);

    let late_minutes = (time_in - shift.start).num_minutes().max(0);

    let inside = (shift.scheduled_minutes()
        - late_minutes
        - breaks.lunch_deduction
        - breaks.excess_coffee_minutes)
        .max(0);

    // overtime starts at the shift end or the clock-in, whichever is later;
    // a clock-in past the shift end must not count unworked time
    let overtime_from = shift.end.max(time_in);

    WorkWindow {
        late_minutes,
        net_minutes,
        // cannot exceed what was actually worked
        work_inside_minutes: inside.min(net_minutes),
        raw_overtime_minutes: (time_out - overtime_from).num_minutes().max(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::shift::ShiftWindow;
    use chrono::{NaiveDate, NaiveTime, TimeZone};

    fn no_breaks(lunch_floor: i64) -> BreakTotals {
        BreakTotals {
            coffee_minutes: 0,
            excess_coffee_minutes: 0,
            lunch_minutes: 0,
            lunch_deduction: lunch_floor,
        }
    }

    fn with_lunch(lunch: i64, floor: i64, excess_coffee: i64) -> BreakTotals {
        BreakTotals {
            coffee_minutes: 0,
            excess_coffee_minutes: excess_coffee,
            lunch_minutes: lunch,
            lunch_deduction: lunch.max(floor),
        }
    }

    fn ts(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 6, h, m, 0).unwrap()
    }

    fn day_shift(sh: u32, eh: u32) -> ShiftWindow {
        ShiftWindow::anchor(
            "Day",
            NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
            NaiveTime::from_hms_opt(sh, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(eh, 0, 0).unwrap(),
        )
    }

    #[test]
    fn unscheduled_ten_hour_day_no_lunch() {
        // gross 600, default 8h, floor 60 → cap 420, net 600, OT 180
        let w = unscheduled(600, &no_breaks(60), 480, 60);
        assert_eq!(w.net_minutes, 600);
        assert_eq!(w.work_inside_minutes, 420);
        assert_eq!(w.raw_overtime_minutes, 180);
        assert_eq!(w.late_minutes, 0);
    }

    #[test]
    fn unscheduled_lunch_taken_is_deducted() {
        // a 45-minute lunch gets floored to 60 before deduction
        let w = unscheduled(600, &with_lunch(45, 60, 0), 480, 60);
        assert_eq!(w.net_minutes, 540);
        assert_eq!(w.work_inside_minutes, 420);
        assert_eq!(w.raw_overtime_minutes, 120);
    }

    #[test]
    fn net_is_floored_at_zero() {
        // 45 minutes clocked, 60 deducted: never negative
        let w = unscheduled(45, &with_lunch(60, 60, 0), 480, 60);
        assert_eq!(w.net_minutes, 0);
        assert_eq!(w.work_inside_minutes, 0);
        assert_eq!(w.raw_overtime_minutes, 0);
    }

    #[test]
    fn scheduled_late_arrival_with_overtime() {
        // shift 09:00–17:00, in 09:15, out 18:00, lunch floor 60
        let w = scheduled(ts(9, 15), ts(18, 0), &no_breaks(60), &day_shift(9, 17));
        assert_eq!(w.late_minutes, 15);
        assert_eq!(w.net_minutes, 465);
        // 480 - 15 - 60 = 405, under the 465 net cap
        assert_eq!(w.work_inside_minutes, 405);
        assert_eq!(w.raw_overtime_minutes, 60);
    }

    #[test]
    fn scheduled_early_arrival_is_not_late() {
        let w = scheduled(ts(8, 30), ts(17, 0), &no_breaks(60), &day_shift(9, 17));
        assert_eq!(w.late_minutes, 0);
        assert_eq!(w.raw_overtime_minutes, 0);
    }

    #[test]
    fn scheduled_inside_capped_by_net() {
        // left 3h early: the schedule says 420 but net is only 240
        let w = scheduled(ts(9, 0), ts(14, 0), &no_breaks(60), &day_shift(9, 17));
        assert_eq!(w.net_minutes, 240);
        assert_eq!(w.work_inside_minutes, 240);
    }

    #[test]
    fn excess_coffee_reduces_both_cases() {
        let w = unscheduled(480, &with_lunch(0, 0, 15), 480, 0);
        assert_eq!(w.net_minutes, 465);

        let w = scheduled(ts(9, 0), ts(17, 0), &with_lunch(0, 0, 15), &day_shift(9, 17));
        assert_eq!(w.work_inside_minutes, 465);
    }

    #[test]
    fn clock_in_after_shift_end_counts_only_worked_time() {
        // evening call-out on a scheduled day: in 18:00, out 23:00,
        // shift 09:00-17:00 → overtime is the 5 clocked hours, not 6
        let w = scheduled(ts(18, 0), ts(23, 0), &no_breaks(60), &day_shift(9, 17));
        assert_eq!(w.work_inside_minutes, 0);
        assert_eq!(w.raw_overtime_minutes, 300);
        assert!(w.work_inside_minutes + w.raw_overtime_minutes <= 300);
    }

    #[test]
    fn clock_in_exactly_at_shift_end() {
        let w = scheduled(ts(17, 0), ts(20, 30), &no_breaks(60), &day_shift(9, 17));
        assert_eq!(w.work_inside_minutes, 0);
        assert_eq!(w.raw_overtime_minutes, 210);
    }

    #[test]
    fn derived_work_never_exceeds_gross() {
        for gross in [0, 30, 240, 480, 600, 900] {
            for lunch in [0, 30, 60, 120] {
                let w = unscheduled(gross, &with_lunch(lunch, 60, 10), 480, 60);
                assert!(
                    w.work_inside_minutes + w.raw_overtime_minutes <= gross.max(0),
                    "gross={gross} lunch={lunch}"
                );
            }
        }
    }

    #[test]
    fn overnight_shift_overtime() {
        // 22:00–06:00 shift; out at 07:30 next day → 90 overtime
        let shift = day_shift(22, 6);
        let time_in = ts(22, 0);
        let time_out = Utc.with_ymd_and_hms(2025, 1, 7, 7, 30, 0).unwrap();
        let w = scheduled(time_in, time_out, &no_breaks(0), &shift);
        assert_eq!(w.late_minutes, 0);
        assert_eq!(w.raw_overtime_minutes, 90);
        assert_eq!(w.work_inside_minutes, 480);
    }
}
