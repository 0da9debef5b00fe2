use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use projection_core::view::format_percent;
use projection_core::{ChartModel, HistoricalPoint, LoadReport};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::fmt::Write as _;
use std::io::Stdout;
use std::time::Duration;

use crate::app::{handle_input, App};
use crate::ui;

/// Run the application in headless mode (no UI)
pub fn run_headless(app: &App, json: bool) -> Result<()> {
    let chart = app.chart();

    if json {
        let report = HeadlessReport {
            chart: &chart,
            load: app.load_report,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_headless_text(&chart, &app.load_report));
    }

    Ok(())
}

#[derive(serde::Serialize)]
struct HeadlessReport<'a> {
    #[serde(flatten)]
    chart: &'a ChartModel,
    load: LoadReport,
}

pub fn render_headless_text(chart: &ChartModel, load: &LoadReport) -> String {
    let selection = &chart.selection;
    let mut out = String::new();

    let _ = writeln!(out, "\nGrowth Projection");
    let _ = writeln!(out, "=================");
    let _ = writeln!(out, "Technology: {}", selection.technology.label());
    let _ = writeln!(out, "Model: {}", selection.model.label());
    let _ = writeln!(
        out,
        "Training year: {}",
        selection
            .train_year
            .map_or_else(|| "(none)".to_string(), |year| year.to_string())
    );
    let years = chart
        .training_years
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let _ = writeln!(out, "Training years offered: {years}");
    let _ = writeln!(out, "Y axis max: {:.0}", chart.y_max);
    let _ = writeln!(
        out,
        "Loaded: {} historical, {} projections ({} skipped, {} invalid values)",
        load.historical_loaded, load.projections_loaded, load.skipped_records, load.invalid_values
    );

    write_points(&mut out, "Historical", &chart.series.historical);

    if selection.show_out_of_sample {
        write_points(&mut out, "Out-of-sample", &chart.series.out_of_sample);
    } else {
        let _ = writeln!(
            out,
            "\nOut-of-sample: {} points hidden (use --out-of-sample)",
            chart.series.out_of_sample.len()
        );
    }

    let _ = writeln!(out, "\nProjected:");
    if chart.series.projected.is_empty() {
        let _ = writeln!(out, "- (no matching projection)");
    }
    for point in &chart.series.projected {
        let _ = writeln!(out, "- {}: {}", point.year, format_percent(point.projected));
    }

    out
}

fn write_points(out: &mut String, title: &str, points: &[HistoricalPoint]) {
    let _ = writeln!(out, "\n{title}:");
    if points.is_empty() {
        let _ = writeln!(out, "- (none)");
    }
    for point in points {
        let _ = writeln!(out, "- {}: {}", point.year, format_percent(point.actual));
    }
}

/// Run the main application event loop
pub fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    loop {
        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if !matches!(
            event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            continue;
        }

        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                handle_input(app, key.code);
                if !app.running {
                    break;
                }
            }
            Ok(Event::Resize(width, height)) => {
                tracing::debug!(width, height, "terminal resized");
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!("Failed to read terminal event: {e}");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use projection_core::{Dataset, Selection};

    fn app(selection: Selection) -> App {
        let historical = r#"[
            {"technology": "wind", "year": 2010, "Actual": "0.05"},
            {"technology": "wind", "year": 2015, "Actual": "NA"},
            {"technology": "wind", "year": 2020, "Actual": "0.12"}
        ]"#;
        let projections = r#"[
            {"technology": "wind", "model": "Logistic", "training_year": 2015, "year": 2020, "Projected": "0.15"}
        ]"#;
        let (dataset, report) = Dataset::from_json(historical, projections).unwrap();
        App::new(dataset, report, selection)
    }

    #[test]
    fn text_report_lists_series_and_hides_out_of_sample() {
        let app = app(Selection::default());
        let text = render_headless_text(&app.chart(), &app.load_report);

        assert!(text.contains("Technology: Onshore Wind"));
        assert!(text.contains("Training years offered: 2015"));
        assert!(text.contains("- 2010: 5.00%"));
        assert!(text.contains("- 2015: No data"));
        assert!(text.contains("1 points hidden"));
        assert!(text.contains("- 2020: 15.00%"));
        assert!(text.contains("Y axis max: 15"));
    }

    #[test]
    fn text_report_shows_out_of_sample_when_enabled() {
        let app = app(Selection {
            show_out_of_sample: true,
            ..Selection::default()
        });
        let text = render_headless_text(&app.chart(), &app.load_report);
        assert!(text.contains("Out-of-sample:\n- 2020: 12.00%"));
    }

    #[test]
    fn json_report_flattens_chart_fields() {
        let app = app(Selection::default());
        let chart = app.chart();
        let report = HeadlessReport {
            chart: &chart,
            load: app.load_report,
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["selection"]["technology"], "wind");
        assert_eq!(value["series"]["historical"][1]["actual"], serde_json::Value::Null);
        assert_eq!(value["load"]["historical_loaded"], 3);
        assert_eq!(value["y_max"], 15.0);
    }
}
