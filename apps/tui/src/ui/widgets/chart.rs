use projection_core::axis::{x_ticks, X_DOMAIN};
use projection_core::view::{OUT_OF_SAMPLE_RGB, Y_AXIS_LABEL};
use projection_core::ChartModel;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph};
use ratatui::Frame;

pub const fn rgb(color: (u8, u8, u8)) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}

pub fn render_projection_chart(chart: &ChartModel, inspect_year: i32, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" Projection ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if chart.series.is_empty() {
        let paragraph = Paragraph::new("No data for this selection")
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let points = chart.plot_points(inspect_year);

    let mut datasets = vec![
        Dataset::default()
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::DarkGray))
            .data(&points.cursor),
        Dataset::default()
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::Gray))
            .data(&points.train_marker),
        Dataset::default()
            .name("Projection")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(rgb(chart.selection.model.rgb())))
            .data(&points.projected),
        Dataset::default()
            .name("Historical Data")
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .data(&points.historical),
    ];

    if let Some(out_of_sample) = points.out_of_sample.as_deref() {
        datasets.push(
            Dataset::default()
                .name("Out-of-Sample Data")
                .marker(Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(rgb(OUT_OF_SAMPLE_RGB)))
                .data(out_of_sample),
        );
    }

    let x_labels = x_ticks()
        .into_iter()
        .map(|year| Span::raw(year.to_string()))
        .collect::<Vec<_>>();
    let y_labels = vec![
        Span::raw("0"),
        Span::raw(format!("{:.0}", chart.y_max / 2.0)),
        Span::raw(format!("{:.0}", chart.y_max)),
    ];

    let widget = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title("Year")
                .style(Style::default().fg(Color::Gray))
                .bounds([f64::from(X_DOMAIN[0]), f64::from(X_DOMAIN[1])])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(Y_AXIS_LABEL)
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, chart.y_max])
                .labels(y_labels),
        );

    f.render_widget(widget, area);
}
