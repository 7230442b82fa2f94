//! The derivation façade: one pure function from a raw time log plus context
//! to the display-ready metrics record. Every view (list, export, overtime
//! validation) consumes this identically; the upstream screens each carried
//! their own drifted copy of this math.

use crate::core::breaks::aggregate_breaks;
use crate::core::overtime::reconcile;
use crate::core::schedule::ScheduleResolver;
use crate::core::window;
use crate::models::metrics::{OvertimeLabel, TimeLogMetrics};
use crate::models::overtime::{self, OvertimeRequest};
use crate::models::settings::CompanySettings;
use crate::models::time_log::TimeLog;

/// Read-only context a derivation runs against.
pub struct DeriveContext<'a> {
    pub settings: &'a CompanySettings,
    pub resolver: &'a dyn ScheduleResolver,
    pub overtime_requests: &'a [OvertimeRequest],
}

pub struct Core;

impl Core {
    /// Derive the full metrics record for one time log.
    pub fn derive(log: &TimeLog, ctx: &DeriveContext) -> TimeLogMetrics {
        let date = log.work_date();
        let breaks = aggregate_breaks(
            &log.coffee_breaks,
            log.lunch_break.as_ref(),
            ctx.settings.lunch_floor(),
        );

        let shift = ctx.resolver.resolve_shift_window(log.user_id, date);
        let applicable_shifts = ctx.resolver.applicable_names(log.user_id, date);

        let mut metrics = TimeLogMetrics {
            log_id: log.id,
            user_id: log.user_id,
            date,
            active: log.time_out.is_none(),
            gross_minutes: log.gross_minutes(),
            breaks,
            late_minutes: 0,
            net_minutes: 0,
            work_inside_minutes: 0,
            raw_overtime_minutes: 0,
            overtime_label: OvertimeLabel::None,
            approved_minutes: 0,
            shown_overtime_minutes: 0,
            period_minutes: 0,
            shift,
            applicable_shifts,
            device_in: log.device_in_summary(),
            device_out: log.device_out_summary(),
            loc_in: log.loc_in_summary(),
            loc_out: log.loc_out_summary(),
        };

        // An active log has no duration yet; the row renders with
        // placeholders instead of zeros.
        let Some(time_out) = log.time_out else {
            return metrics;
        };

        let win = match &metrics.shift {
            Some(shift) => window::scheduled(log.time_in, time_out, &metrics.breaks, shift),
            None => window::unscheduled(
                metrics.gross_minutes.unwrap_or(0),
                &metrics.breaks,
                ctx.settings.default_shift_minutes(),
                ctx.settings.lunch_floor(),
            ),
        };

        let latest = overtime::latest_for_log(ctx.overtime_requests, log.id);
        let outcome = reconcile(win.raw_overtime_minutes, latest);

        metrics.late_minutes = win.late_minutes;
        metrics.net_minutes = win.net_minutes;
        metrics.work_inside_minutes = win.work_inside_minutes;
        metrics.raw_overtime_minutes = win.raw_overtime_minutes;
        metrics.overtime_label = outcome.label;
        metrics.approved_minutes = outcome.approved_minutes;
        metrics.shown_overtime_minutes = outcome.shown_minutes;
        metrics.period_minutes = win.work_inside_minutes + outcome.approved_minutes;

        metrics
    }

    /// Derive a batch, preserving input order.
    pub fn derive_all(logs: &[TimeLog], ctx: &DeriveContext) -> Vec<TimeLogMetrics> {
        logs.iter().map(|log| Self::derive(log, ctx)).collect()
    }
}
