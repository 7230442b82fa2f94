use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::{Core, DeriveContext};
use crate::dataset::Dataset;
use crate::errors::AppResult;
use crate::models::metrics::TimeLogMetrics;
use crate::ui::messages::header;
use crate::utils::date::{current_month_bounds, format_date, parse_period};
use crate::utils::formatting::{PLACEHOLDER, mins_or_placeholder, mins2readable};
use crate::utils::table::Table;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        user,
        details,
    } = cmd
    {
        let dataset = Dataset::load(Path::new(&cfg.data_dir), cfg)?;

        let bounds = match period {
            Some(p) => parse_period(p)?,
            None => Some(current_month_bounds()),
        };

        let resolver = dataset.schedule_resolver();
        let ctx = DeriveContext {
            settings: &dataset.settings,
            resolver: resolver.as_ref(),
            overtime_requests: &dataset.overtime_requests,
        };

        let metrics: Vec<TimeLogMetrics> = dataset
            .time_logs
            .iter()
            .filter(|log| user.is_none_or(|u| log.user_id == u))
            .filter(|log| {
                bounds.is_none_or(|(start, end)| {
                    let d = log.work_date();
                    start <= d && d <= end
                })
            })
            .map(|log| Core::derive(log, &ctx))
            .collect();

        if metrics.is_empty() {
            println!("No time logs for the selected period.");
            return Ok(());
        }

        print_table(&metrics, cfg);

        if *details {
            for m in &metrics {
                print_details(m, &dataset);
            }
        }
    }
    Ok(())
}

fn print_table(metrics: &[TimeLogMetrics], cfg: &Config) {
    let mut table = Table::new(vec![
        "log", "user", "date", "shift", "late", "worked", "overtime", "ot status", "period",
    ]);

    for m in metrics {
        let worked = if m.active {
            PLACEHOLDER.to_string()
        } else {
            mins2readable(m.work_inside_minutes, false, true)
        };
        let overtime = if m.active {
            PLACEHOLDER.to_string()
        } else {
            mins2readable(m.shown_overtime_minutes, false, true)
        };
        let period = if m.active {
            PLACEHOLDER.to_string()
        } else {
            mins2readable(m.period_minutes, false, true)
        };

        table.add_row(vec![
            m.log_id.to_string(),
            m.user_id.to_string(),
            format_date(m.date, cfg.show_weekday),
            m.shift
                .as_ref()
                .map(|s| s.name.clone())
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            mins2readable(m.late_minutes, false, true),
            worked,
            overtime,
            m.overtime_label.to_string(),
            period,
        ]);
    }

    print!("{}", table.render());
}

fn print_details(m: &TimeLogMetrics, dataset: &Dataset) {
    header(format!("log {} — {}", m.log_id, m.date));
    println!("  gross:         {}", mins_or_placeholder(m.gross_minutes));
    println!(
        "  coffee:        {} ({} over allowance)",
        mins2readable(m.breaks.coffee_minutes, false, true),
        mins2readable(m.breaks.excess_coffee_minutes, false, true),
    );
    println!(
        "  lunch:         {} (deducted {})",
        mins2readable(m.breaks.lunch_minutes, false, true),
        mins2readable(m.breaks.lunch_deduction, false, true),
    );
    println!(
        "  net:           {}",
        if m.active {
            PLACEHOLDER.to_string()
        } else {
            mins2readable(m.net_minutes, false, true)
        }
    );
    if !m.applicable_shifts.is_empty() {
        println!("  schedules:     {}", m.applicable_shifts.join(", "));
    }
    println!("  device in/out: {} / {}", m.device_in, m.device_out);
    println!("  loc in/out:    {} / {}", m.loc_in.text, m.loc_out.text);

    let restricted = dataset.restricted_locations(m.user_id);
    if !restricted.is_empty() {
        let names: Vec<&str> = restricted.iter().map(|l| l.name.as_str()).collect();
        println!("  geofences:     {}", names.join(", "));
    }
}
