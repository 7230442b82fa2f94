//! Schedule matching: which shift window applies to a user on a date.
//!
//! Two backing data shapes exist upstream (recurring templates and
//! pre-materialized per-day assignments), so two resolvers implement one
//! interface and the caller picks by which data it loaded.

use crate::models::shift::{DailyShift, ShiftTemplate, ShiftWindow};
use chrono::{Datelike, NaiveDate, Weekday};
use regex::Regex;
use std::sync::OnceLock;

pub trait ScheduleResolver {
    /// The authoritative shift window for this user/date, or `None` when
    /// unscheduled.
    fn resolve_shift_window(&self, user_id: i64, date: NaiveDate) -> Option<ShiftWindow>;

    /// Every schedule name applicable that day, for display. The first entry
    /// corresponds to the authoritative window.
    fn applicable_names(&self, user_id: i64, date: NaiveDate) -> Vec<String> {
        self.resolve_shift_window(user_id, date)
            .map(|w| vec![w.name])
            .unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Recurrence templates
// ---------------------------------------------------------------------------

pub struct RecurrenceRuleResolver {
    templates: Vec<ShiftTemplate>,
}

impl RecurrenceRuleResolver {
    pub fn new(templates: Vec<ShiftTemplate>) -> Self {
        Self { templates }
    }

    /// All templates matching this user/date, in input order. The first is
    /// authoritative.
    pub fn applicable<'a>(&'a self, user_id: i64, date: NaiveDate) -> Vec<&'a ShiftTemplate> {
        self.templates
            .iter()
            .filter(|t| template_matches(t, user_id, date))
            .collect()
    }
}

impl ScheduleResolver for RecurrenceRuleResolver {
    fn resolve_shift_window(&self, user_id: i64, date: NaiveDate) -> Option<ShiftWindow> {
        self.applicable(user_id, date)
            .first()
            .map(|t| ShiftWindow::anchor(&t.shift_name, date, t.start_time, t.end_time))
    }

    fn applicable_names(&self, user_id: i64, date: NaiveDate) -> Vec<String> {
        self.applicable(user_id, date)
            .iter()
            .map(|t| t.shift_name.clone())
            .collect()
    }
}

pub fn template_matches(template: &ShiftTemplate, user_id: i64, date: NaiveDate) -> bool {
    if !template.assigned_to_all && template.assigned_user_id != Some(user_id) {
        return false;
    }
    if date < template.start_date {
        return false;
    }
    if let Some(end) = template.end_date {
        if date > end {
            return false;
        }
    }
    rule_weekdays(&template.recurrence_rule).contains(&date.weekday())
}

/// Pulls the weekday codes out of the `BYDAY=` component of a
/// semicolon-delimited recurrence rule. Unknown codes are ignored; a rule
/// without `BYDAY` matches no weekday.
fn rule_weekdays(rule: &str) -> Vec<Weekday> {
    static BYDAY: OnceLock<Regex> = OnceLock::new();
    let re = BYDAY.get_or_init(|| Regex::new(r"BYDAY=([^;]+)").unwrap());

    let Some(caps) = re.captures(rule) else {
        return Vec::new();
    };

    caps[1]
        .split(',')
        .filter_map(|code| match code.trim().to_ascii_uppercase().as_str() {
            "MO" => Some(Weekday::Mon),
            "TU" => Some(Weekday::Tue),
            "WE" => Some(Weekday::Wed),
            "TH" => Some(Weekday::Thu),
            "FR" => Some(Weekday::Fri),
            "SA" => Some(Weekday::Sat),
            "SU" => Some(Weekday::Sun),
            _ => None,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Per-day assignments
// ---------------------------------------------------------------------------

pub struct DailyAssignmentResolver {
    assignments: Vec<DailyShift>,
}

impl DailyAssignmentResolver {
    pub fn new(assignments: Vec<DailyShift>) -> Self {
        Self { assignments }
    }
}

impl ScheduleResolver for DailyAssignmentResolver {
    fn resolve_shift_window(&self, user_id: i64, date: NaiveDate) -> Option<ShiftWindow> {
        self.assignments
            .iter()
            .find(|a| a.user_id == user_id && a.date == date)
            .map(|a| ShiftWindow::anchor(&a.shift_name, date, a.start_time, a.end_time))
    }
}
