use crate::app::{App, Control};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_controls(app: &App, f: &mut Frame<'_>, area: Rect) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (control, cell) in Control::ALL.into_iter().zip(cells.iter()) {
        let focused = app.focused() == control;
        let border_color = if focused { Color::Yellow } else { Color::Gray };
        let value_style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let block = Block::default()
            .title(format!(" {} ", control.label()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let paragraph = Paragraph::new(control_value(app, control))
            .style(value_style)
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(paragraph, *cell);
    }
}

/// Text shown inside a control; selectors get arrows when focused.
pub fn control_value(app: &App, control: Control) -> String {
    let selection = app.view.selection();
    let value = match control {
        Control::Technology => selection.technology.label().to_string(),
        Control::Model => selection.model.label().to_string(),
        Control::TrainYear => selection
            .train_year
            .map_or_else(|| "None".to_string(), |year| year.to_string()),
        Control::OutOfSample => {
            let mark = if selection.show_out_of_sample { "x" } else { " " };
            return format!("[{mark}] Show");
        }
    };

    if app.focused() == control {
        format!("◀ {value} ▶")
    } else {
        value
    }
}
