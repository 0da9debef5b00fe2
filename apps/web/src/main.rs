use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use projection_core::axis::{x_ticks, X_DOMAIN};
use projection_core::records::{RawHistoricalRecord, RawProjectionRecord};
use projection_core::view::{
    clamp_year, format_percent, CHART_TITLE, OUT_OF_SAMPLE_RGB, Y_AXIS_LABEL,
};
use projection_core::{ChartModel, Control, Dataset, LoadReport, ProjectionView, Selection};
use ratzilla::ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line as TextLine, Span, Text},
    widgets::{Axis, Block, Borders, Chart, Dataset as ChartDataset, GraphType, Paragraph, Wrap},
    Terminal,
};
use ratzilla::event::KeyCode;
use ratzilla::{DomBackend, WebRenderer};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Request, RequestInit, RequestMode, Response};

const HISTORICAL_URL: &str = "historical.json";
const PROJECTIONS_URL: &str = "projections.json";

struct WebState {
    view: Option<ProjectionView>,
    report: LoadReport,
    focus_index: usize,
    inspect_year: i32,
    error: Option<String>,
}

impl WebState {
    fn new() -> Self {
        Self {
            view: None,
            report: LoadReport::default(),
            focus_index: 0,
            inspect_year: 2015,
            error: None,
        }
    }

    fn focused(&self) -> Control {
        Control::from_index(self.focus_index).unwrap_or(Control::Technology)
    }
}

fn main() -> io::Result<()> {
    let state = Rc::new(RefCell::new(WebState::new()));

    spawn_local(fetch_data(state.clone()));

    let backend = DomBackend::new()?;
    let mut terminal = Terminal::new(backend)?;

    terminal.on_key_event({
        let state = state.clone();
        move |event| handle_key(&mut state.borrow_mut(), event.code, event.shift)
    });

    terminal.draw_web(move |f| {
        let area = f.area();
        let block = Block::default()
            .title(CHART_TITLE)
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray));
        let inner = block.inner(area).inner(Margin::new(1, 1));
        f.render_widget(block, area);

        let state = state.borrow();
        if let Some(view) = state.view.as_ref() {
            render_dashboard(&state, view, f, inner);
        } else {
            let message = state.error.as_deref().map_or_else(
                || "Loading historical.json and projections.json...".to_string(),
                |error| format!("Failed to load data: {error}"),
            );
            let paragraph = Paragraph::new(Text::from(TextLine::from(message)))
                .alignment(Alignment::Center);
            f.render_widget(paragraph, inner);
        }
    });

    Ok(())
}

fn handle_key(state: &mut WebState, code: KeyCode, shift: bool) {
    let len = Control::ALL.len();
    match code {
        KeyCode::Up => state.focus_index = (state.focus_index + len - 1) % len,
        // Shift+Tab arrives as Tab with the shift flag set.
        KeyCode::Tab if shift => state.focus_index = (state.focus_index + len - 1) % len,
        KeyCode::Down | KeyCode::Tab => state.focus_index = (state.focus_index + 1) % len,
        KeyCode::Left => {
            let control = state.focused();
            if let Some(view) = state.view.as_mut() {
                view.adjust(control, false);
            }
        }
        KeyCode::Right | KeyCode::Enter | KeyCode::Char(' ') => {
            let control = state.focused();
            if let Some(view) = state.view.as_mut() {
                view.adjust(control, true);
            }
        }
        KeyCode::Char('o') => {
            if let Some(view) = state.view.as_mut() {
                view.toggle_out_of_sample();
            }
        }
        KeyCode::Char('[') => state.inspect_year = clamp_year(state.inspect_year - 1),
        KeyCode::Char(']') => state.inspect_year = clamp_year(state.inspect_year + 1),
        _ => {}
    }
}

fn render_dashboard(
    state: &WebState,
    view: &ProjectionView,
    f: &mut ratzilla::ratatui::Frame<'_>,
    area: Rect,
) {
    let chart = view.chart();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(12),
            Constraint::Length(1),
        ])
        .split(area);

    render_controls(state, &chart, f, layout[0]);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(74), Constraint::Percentage(26)])
        .split(layout[1]);

    render_chart(&chart, state.inspect_year, f, content[0]);
    render_readout(&chart, state, f, content[1]);

    let hint = Paragraph::new(Span::styled(
        "↑↓/Tab focus • ←→/Space change • o out-of-sample • [ ] inspect year",
        Style::default().fg(Color::DarkGray),
    ))
    .alignment(Alignment::Center);
    f.render_widget(hint, layout[2]);
}

fn render_controls(
    state: &WebState,
    chart: &ChartModel,
    f: &mut ratzilla::ratatui::Frame<'_>,
    area: Rect,
) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);
    let selection = &chart.selection;

    for (control, cell) in Control::ALL.into_iter().zip(cells.iter()) {
        let focused = state.focused() == control;
        let value = match control {
            Control::Technology => selection.technology.label().to_string(),
            Control::Model => selection.model.label().to_string(),
            Control::TrainYear => selection
                .train_year
                .map_or_else(|| "None".to_string(), |year| year.to_string()),
            Control::OutOfSample => {
                let mark = if selection.show_out_of_sample { "x" } else { " " };
                format!("[{mark}] Show")
            }
        };
        let color = if focused { Color::Yellow } else { Color::Gray };

        let paragraph = Paragraph::new(value)
            .alignment(Alignment::Center)
            .style(Style::default().fg(if focused {
                Color::Yellow
            } else {
                Color::White
            }))
            .block(
                Block::default()
                    .title(control.label())
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            );
        f.render_widget(paragraph, *cell);
    }
}

fn render_chart(
    chart: &ChartModel,
    inspect_year: i32,
    f: &mut ratzilla::ratatui::Frame<'_>,
    area: Rect,
) {
    let block = Block::default()
        .title("Projection")
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
    let (r, g, b) = chart.selection.model.rgb();
    let (or, og, ob) = OUT_OF_SAMPLE_RGB;

    let mut datasets = vec![
        ChartDataset::default()
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::DarkGray))
            .data(&points.cursor),
        ChartDataset::default()
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::Gray))
            .data(&points.train_marker),
        ChartDataset::default()
            .name("Projection")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Rgb(r, g, b)))
            .data(&points.projected),
        ChartDataset::default()
            .name("Historical Data")
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::White))
            .data(&points.historical),
    ];
    if let Some(out_of_sample) = points.out_of_sample.as_deref() {
        datasets.push(
            ChartDataset::default()
                .name("Out-of-Sample Data")
                .marker(Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(Color::Rgb(or, og, ob)))
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

fn render_readout(
    chart: &ChartModel,
    state: &WebState,
    f: &mut ratzilla::ratatui::Frame<'_>,
    area: Rect,
) {
    let readout = chart.readout(state.inspect_year);
    let label = Style::default().fg(Color::Gray);

    let mut lines = vec![
        TextLine::from(Span::styled(
            format!("Year {}", readout.year),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(vec![
            Span::styled("Historical: ", label),
            Span::raw(format_percent(readout.actual)),
        ]),
        TextLine::from(vec![
            Span::styled("Projection: ", label),
            Span::raw(format_percent(readout.projected)),
        ]),
    ];
    if chart.selection.show_out_of_sample {
        lines.push(TextLine::from(vec![
            Span::styled("Out-of-sample: ", label),
            Span::raw(format_percent(readout.out_of_sample)),
        ]));
    }
    lines.push(TextLine::from(""));
    lines.push(TextLine::from(Span::styled(
        format!(
            "{} historical • {} projection rows",
            state.report.historical_loaded, state.report.projections_loaded
        ),
        label,
    )));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .title("Values")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

async fn fetch_data(store: Rc<RefCell<WebState>>) {
    let historical = fetch_json::<Vec<RawHistoricalRecord>>(HISTORICAL_URL).await;
    let projections = fetch_json::<Vec<RawProjectionRecord>>(PROJECTIONS_URL).await;

    let mut state = store.borrow_mut();
    match (historical, projections) {
        (Ok(historical), Ok(projections)) => {
            let (dataset, report) = Dataset::from_records(historical, projections);
            if let Ok(summary) = serde_json::to_string(&report) {
                web_sys::console::log_1(&format!("Loaded projection data: {summary}").into());
            }
            let view = ProjectionView::new(dataset, Selection::default());
            state.inspect_year = view.initial_inspect_year();
            state.view = Some(view);
            state.report = report;
        }
        (Err(error), _) | (_, Err(error)) => {
            web_sys::console::error_1(&error.clone().into());
            state.error = Some(error);
        }
    }
}

async fn fetch_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let window = web_sys::window().ok_or("No window available")?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|error| format!("Failed to build request for {url}: {error:?}"))?;

    let response_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|error| format!("Failed to fetch {url}: {error:?}"))?;

    let response = response_value
        .dyn_into::<Response>()
        .map_err(|_| format!("Unexpected response for {url}"))?;

    if !response.ok() {
        return Err(format!("{url} returned HTTP {}", response.status()));
    }

    let body = response
        .json()
        .map_err(|error: JsValue| format!("Failed to read {url} body: {error:?}"))?;
    let json = wasm_bindgen_futures::JsFuture::from(body)
        .await
        .map_err(|error| format!("Failed to read {url} body: {error:?}"))?;

    serde_wasm_bindgen::from_value::<T>(json)
        .map_err(|error| format!("Failed to parse {url}: {error}"))
}
