use crate::app::App;
use crate::ui::widgets::chart::render_projection_chart;
use crate::ui::widgets::controls::render_controls;
use crate::ui::widgets::popup::centered_rect;
use crate::ui::widgets::readout::render_readout;
use projection_core::view::CHART_TITLE;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const SHORTCUTS: &str =
    "Tab/↑↓ focus • ←→ change • o out-of-sample • [ ] inspect year • F1 help • q quit";

pub fn render_main(app: &App, f: &mut Frame<'_>) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Controls
            Constraint::Min(10),   // Chart and readout
            Constraint::Length(3), // Status
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area().inner(Margin::new(1, 0)));

    render_title(f, layout[0]);
    render_controls(app, f, layout[1]);
    render_content(app, f, layout[2]);
    render_status(app, f, layout[3]);
    render_shortcuts(f, layout[4]);

    if app.show_help {
        let area = f.area();
        render_help_popup(f, area);
    }
}

fn render_title(f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let title = Paragraph::new(TextLine::from(Span::styled(
        CHART_TITLE,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(block);
    f.render_widget(title, area);
}

fn render_content(app: &App, f: &mut Frame<'_>, area: Rect) {
    let chart = app.chart();
    let split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(74), Constraint::Percentage(26)])
        .split(area);

    render_projection_chart(&chart, app.inspect_year, f, split[0]);
    render_readout(&chart, app.inspect_year, &app.load_report, f, split[1]);
}

fn render_status(app: &App, f: &mut Frame<'_>, area: Rect) {
    let selection = app.view.selection();
    let (message, color) = if app.status_message.is_empty() {
        (
            format!(
                "{} • {} • trained to {}",
                selection.technology.label(),
                selection.model.label(),
                selection
                    .train_year
                    .map_or_else(|| "—".to_string(), |year| year.to_string())
            ),
            Color::White,
        )
    } else {
        (app.status_message.clone(), Color::Yellow)
    };

    let paragraph = Paragraph::new(Span::styled(message, Style::default().fg(color))).block(
        Block::default()
            .title(" Status ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray)),
    );
    f.render_widget(paragraph, area);
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect) {
    let paragraph = Paragraph::new(Span::styled(SHORTCUTS, Style::default().fg(Color::DarkGray)))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_help_popup(f: &mut Frame<'_>, area: Rect) {
    let popup = centered_rect(64, 16, area);
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let rows = [
        ("Tab / ↓", "Focus next control"),
        ("Shift+Tab / ↑", "Focus previous control"),
        ("→ / Enter / Space", "Next option, or toggle"),
        ("←", "Previous option, or toggle"),
        ("o", "Show or hide out-of-sample data"),
        ("[ / ]", "Move the inspected year"),
        ("F1 / Esc", "Close this help"),
        ("q", "Quit"),
    ];

    let mut lines = vec![
        TextLine::from(""),
        TextLine::from("The dashed line marks the training year."),
        TextLine::from(""),
    ];
    lines.extend(rows.iter().map(|(key, action)| {
        TextLine::from(vec![
            Span::styled(format!("{key:>18}  "), key_style),
            Span::raw(*action),
        ])
    }));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}
