use projection_core::view::{format_percent, OUT_OF_SAMPLE_RGB};
use projection_core::{ChartModel, LoadReport};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::widgets::chart::rgb;

pub fn render_readout(
    chart: &ChartModel,
    inspect_year: i32,
    load: &LoadReport,
    f: &mut Frame<'_>,
    area: Rect,
) {
    let readout = chart.readout(inspect_year);
    let label_style = Style::default().fg(Color::Gray);

    let mut lines = vec![
        TextLine::from(Span::styled(
            format!("Year {}", readout.year),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        value_line("Historical", readout.actual, label_style, Color::White),
        value_line(
            "Projection",
            readout.projected,
            label_style,
            rgb(chart.selection.model.rgb()),
        ),
    ];

    if chart.selection.show_out_of_sample {
        lines.push(value_line(
            "Out-of-sample",
            readout.out_of_sample,
            label_style,
            rgb(OUT_OF_SAMPLE_RGB),
        ));
    }

    lines.extend([
        TextLine::from(""),
        TextLine::from(Span::styled("Points", label_style)),
        TextLine::from(format!(
            "{} historical / {} out-of-sample / {} projected",
            chart.series.historical.len(),
            chart.series.out_of_sample.len(),
            chart.series.projected.len()
        )),
        TextLine::from(""),
        TextLine::from(Span::styled("Data", label_style)),
        TextLine::from(format!(
            "{} skipped records, {} invalid values",
            load.skipped_records, load.invalid_values
        )),
    ]);

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .title(" Values ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn value_line(
    label: &str,
    value: Option<f64>,
    label_style: Style,
    color: Color,
) -> TextLine<'static> {
    TextLine::from(vec![
        Span::styled(format!("{label}: "), label_style),
        Span::styled(format_percent(value), Style::default().fg(color)),
    ])
}
