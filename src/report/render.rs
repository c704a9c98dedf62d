//! Text and JSON rendering of an [`RoiReport`]

use crate::report::{one_decimal, CurrencyFormatter, ItemizedList, RoiReport};
use crate::Result;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Table};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// How a report is written out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable tables
    #[default]
    Text,
    /// The full report as JSON
    Json,
    /// Only the whole-dollar engine output as JSON
    Results,
}

pub fn render(
    report: &RoiReport,
    format: OutputFormat,
    currency: &CurrencyFormatter,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report, currency)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Results => Ok(serde_json::to_string_pretty(&report.results)?),
    }
}

fn amount_cell(currency: &CurrencyFormatter, amount: f64) -> Cell {
    Cell::new(currency.format(amount)).set_alignment(CellAlignment::Right)
}

fn itemized_table(list: &ItemizedList, currency: &CurrencyFormatter) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        Cell::new(&list.title),
        Cell::new("Amount").set_alignment(CellAlignment::Right),
    ]);
    for item in &list.items {
        table.add_row(vec![Cell::new(&item.label), amount_cell(currency, item.amount)]);
    }
    table.add_row(vec![
        Cell::new(&list.total.label),
        amount_cell(currency, list.total.amount),
    ]);
    table
}

pub fn render_text(report: &RoiReport, currency: &CurrencyFormatter) -> String {
    let mut summary = Table::new();
    summary
        .load_preset(UTF8_FULL)
        .set_header(vec![
            Cell::new("ROI Summary"),
            Cell::new("Amount").set_alignment(CellAlignment::Right),
        ]);
    for card in &report.summary {
        summary.add_row(vec![Cell::new(&card.title), amount_cell(currency, card.amount)]);
    }

    let mut impact = Table::new();
    impact.load_preset(UTF8_FULL).set_header(vec![
        Cell::new("Financial Impact"),
        Cell::new("Amount").set_alignment(CellAlignment::Right),
    ]);
    for bar in &report.impact_chart.bars {
        impact.add_row(vec![Cell::new(&bar.name), amount_cell(currency, bar.value)]);
    }

    let chart = &report.no_show_chart;
    let mut no_show = Table::new();
    no_show.load_preset(UTF8_FULL).set_header(vec![
        Cell::new("No-Show Rate"),
        Cell::new("%").set_alignment(CellAlignment::Right),
    ]);
    for bar in [&chart.before, &chart.after] {
        no_show.add_row(vec![
            Cell::new(&bar.name),
            Cell::new(format!("{}%", one_decimal(bar.value)))
                .set_alignment(CellAlignment::Right),
        ]);
    }

    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(out, "{summary}\n");
    let _ = writeln!(out, "{}\n", itemized_table(&report.revenue_breakdown, currency));
    let _ = writeln!(out, "{}\n", itemized_table(&report.usage_costs, currency));
    let _ = writeln!(out, "{impact}\n");
    let _ = writeln!(out, "{no_show}");
    let _ = writeln!(out, "{}\n", chart.caption());
    let _ = writeln!(out, "Calculation Notes");
    for note in &report.notes {
        let _ = writeln!(out, "  - {}: {}", note.title, note.text);
    }
    let _ = writeln!(out, "\n{}", report.disclaimer);
    out
}
