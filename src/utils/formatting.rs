//! Formatting helpers for CLI and export outputs.

/// Placeholder shown wherever a value cannot be derived (active logs,
/// unresolvable payloads). Rows always render; they never error out.
pub const PLACEHOLDER: &str = "—";

pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 && want_sign {
        "-"
    } else {
        ""
    };

    if short {
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// Duration for display, with the placeholder for logs still running.
pub fn mins_or_placeholder(mins: Option<i64>) -> String {
    match mins {
        Some(m) => mins2readable(m, false, true),
        None => PLACEHOLDER.to_string(),
    }
}
