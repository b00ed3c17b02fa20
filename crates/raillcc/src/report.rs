//! Plain-text reports

use std::fmt::Write;

use raillcc_core::LccOutcome;
use raillcc_core::config::LccParameters;
use raillcc_core::model::{MaintenanceEvent, MonthRecord};
use raillcc_core::optimization::{ComparisonRow, OptimizationResult, SweepResult};
use raillcc_core::renewal::RenewalOption;

/// Format an amount with thousands separators and two decimals
pub fn format_amount(value: f64) -> String {
    let rounded = (value.abs() * 100.0).round() as u64;
    let whole = (rounded / 100).to_string();
    let cents = rounded % 100;

    let mut grouped = String::new();
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if value < 0.0 && rounded > 0 { "-" } else { "" };
    format!("{sign}{grouped}.{cents:02}")
}

/// Format a duration in years with one decimal
pub fn format_years(years: f64) -> String {
    format!("{years:.1} y")
}

/// Summary of one run: selected option, cost breakdown and optional listings
pub fn outcome_report(title: &str, outcome: &LccOutcome, params: &LccParameters) -> String {
    let technical_life_years = params.technical_life_years;
    let mut out = String::new();
    let _ = writeln!(out, "== {title} ==");
    let _ = writeln!(
        out,
        "Selected:   {} (month {})",
        outcome.selected.label, outcome.selected.month
    );
    let _ = writeln!(out, "Lifetime:   {}", format_years(outcome.lifetime_years));
    let _ = writeln!(out, "Annuity:    {} /m/year", format_amount(outcome.annuity));
    let _ = writeln!(
        out,
        "LCC ({technical_life_years} y): {} /m",
        format_amount(outcome.lcc_track(technical_life_years))
    );

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:<8} {:>16} {:>16} {:>16}",
        "Rail", "Maintenance", "Capacity", "Renewal"
    );
    for rail in &outcome.ledger.rails {
        let _ = writeln!(
            out,
            "{:<8} {:>16} {:>16} {:>16}",
            rail.side,
            format_amount(rail.maintenance),
            format_amount(rail.capacity),
            format_amount(rail.renewal)
        );
    }
    let shared = &outcome.ledger.shared;
    let _ = writeln!(
        out,
        "{:<8} {:>16} {:>16} {:>16}",
        "tamping",
        format_amount(shared.tamping),
        format_amount(shared.tamping_capacity),
        "-"
    );

    if let Some(options) = &outcome.options {
        let _ = writeln!(out);
        out.push_str(&options_table(options, &outcome.selected, technical_life_years));
    }
    if let Some(history) = &outcome.history {
        let _ = writeln!(out);
        out.push_str(&history_table(history, params));
    }
    out
}

/// Every renewal option a run produced, the selected one marked
pub fn options_table(
    options: &[RenewalOption],
    selected: &RenewalOption,
    technical_life_years: u32,
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "  {:<22} {:>6} {:>8} {:>18} {:>12} {:>14}",
        "Option", "Month", "Years", "Present value", "Annuity", "LCC"
    );

    let best = options.iter().position(|option| option == selected);

    for (i, option) in options.iter().enumerate() {
        let marker = if Some(i) == best { '*' } else { ' ' };
        let _ = writeln!(
            out,
            "{marker} {:<22} {:>6} {:>8.2} {:>18} {:>12} {:>14}",
            option.label,
            option.month,
            option.horizon_years,
            format_amount(option.total_present_value()),
            format_amount(option.annuity),
            format_amount(option.lcc_track(technical_life_years))
        );
    }
    out
}

fn event_codes(events: &[MaintenanceEvent]) -> String {
    events
        .iter()
        .map(|event| match event {
            MaintenanceEvent::Grinding { side } => format!("G{}", side.tag()),
            MaintenanceEvent::Milling { side } => format!("M{}", side.tag()),
            MaintenanceEvent::Renewal { side } => format!("R{}", side.tag()),
            MaintenanceEvent::Tamping => "T".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Month-by-month rail condition
pub fn history_table(history: &[MonthRecord], params: &LccParameters) -> String {
    let mut out = String::new();
    let _ = write!(out, "{:>5} {:>8} {:>9}", "Month", "MGT", "Gauge");
    if let Some(first) = history.first() {
        for rail in &first.rails {
            let tag = rail.side.tag();
            let _ = write!(out, " {:>8} {:>8}", format!("Index {tag}"), format!("RCF {tag}"));
        }
    }
    let _ = writeln!(out, "  Events");

    for record in history {
        let _ = write!(
            out,
            "{:>5} {:>8.1} {:>9.2}",
            record.month,
            params.months_to_mgt(record.month),
            record.gauge
        );
        for rail in &record.rails {
            let _ = write!(out, " {:>8.3} {:>8.3}", rail.index, rail.rcf_residual);
        }
        let _ = writeln!(out, "  {}", event_codes(&record.events));
    }
    out
}

pub fn sweep_report(sweep: &SweepResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "== Grinding sweep (gauge correction every {} months) ==",
        sweep.gauge_correction_interval
    );
    let _ = writeln!(
        out,
        "  {:>8} {:>12} {:>8} {:>14}",
        "Interval", "Annuity", "Years", "Total LCC"
    );

    let optimum = sweep.optimum().map(|p| p.grinding_interval);
    for point in &sweep.points {
        let marker = if Some(point.grinding_interval) == optimum { '*' } else { ' ' };
        let _ = writeln!(
            out,
            "{marker} {:>8} {:>12} {:>8.2} {:>14}",
            point.grinding_interval,
            format_amount(point.annuity),
            point.lifetime_years,
            format_amount(point.total_lcc)
        );
    }
    out
}

pub fn optimization_report(result: &OptimizationResult, top: usize) -> String {
    let mut out = String::new();
    let best = &result.best;
    let _ = writeln!(
        out,
        "== Strategy search ({} strategies) ==",
        result.num_evaluations()
    );
    let _ = writeln!(
        out,
        "Best: grind high every {} months, low every {} months, correct gauge every {} months",
        best.strategy.grinding_interval_high,
        best.strategy.grinding_interval_low,
        best.strategy.gauge_correction_interval
    );
    let _ = writeln!(
        out,
        "      annuity {} /m/year over {}",
        format_amount(best.annuity),
        format_years(best.lifetime_years)
    );

    let mut ranked: Vec<_> = result.evaluations.iter().collect();
    ranked.sort_by(|a, b| a.annuity.total_cmp(&b.annuity));
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:>6} {:>6} {:>6} {:>12} {:>8}",
        "High", "Low", "Gauge", "Annuity", "Years"
    );
    for record in ranked.into_iter().take(top) {
        let _ = writeln!(
            out,
            "{:>6} {:>6} {:>6} {:>12} {:>8.2}",
            record.strategy.grinding_interval_high,
            record.strategy.grinding_interval_low,
            record.strategy.gauge_correction_interval,
            format_amount(record.annuity),
            record.lifetime_years
        );
    }
    out
}

pub fn comparison_report(rows: &[ComparisonRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== Joint vs separate maintenance ==");
    let _ = writeln!(
        out,
        "{:>8} {:>12} {:>8} {:>14} {:>12} {:>8} {:>12} {:>8} {:>14}",
        "Interval",
        "Joint",
        "Years",
        "Joint LCC",
        "High",
        "Years",
        "Low",
        "Years",
        "Separate LCC"
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{:>8} {:>12} {:>8.2} {:>14} {:>12} {:>8.2} {:>12} {:>8.2} {:>14}",
            row.grinding_interval,
            format_amount(row.joint_annuity),
            row.joint_lifetime_years,
            format_amount(row.joint_total_lcc),
            format_amount(row.high_annuity),
            row.high_lifetime_years,
            format_amount(row.low_annuity),
            row.low_lifetime_years,
            format_amount(row.separate_total_lcc)
        );
    }
    out
}
