use projection_core::view::clamp_year;
use projection_core::{ChartModel, Control, Dataset, LoadReport, ProjectionView, Selection};

use crate::app::input::helpers::{wrap_decrement, wrap_increment};

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub view: ProjectionView,
    pub load_report: LoadReport,
    pub focus_index: usize,
    pub inspect_year: i32,
    pub show_help: bool,
    pub status_message: String,
}

impl App {
    pub fn new(dataset: Dataset, load_report: LoadReport, selection: Selection) -> Self {
        let view = ProjectionView::new(dataset, selection);
        let inspect_year = view.initial_inspect_year();

        let mut app = Self {
            running: true,
            view,
            load_report,
            focus_index: 0,
            inspect_year,
            show_help: false,
            status_message: String::new(),
        };
        app.after_selection_change();
        app
    }

    pub fn focused(&self) -> Control {
        Control::from_index(self.focus_index).unwrap_or(Control::Technology)
    }

    pub fn focus_next(&mut self) {
        self.focus_index = wrap_increment(self.focus_index, Control::ALL.len());
    }

    pub fn focus_prev(&mut self) {
        self.focus_index = wrap_decrement(self.focus_index, Control::ALL.len());
    }

    /// Changes the focused control; `forward` picks the next option.
    pub fn adjust_focused(&mut self, forward: bool) {
        self.view.adjust(self.focused(), forward);
        self.after_selection_change();
    }

    pub fn toggle_out_of_sample(&mut self) {
        self.view.toggle_out_of_sample();
        self.after_selection_change();
    }

    pub fn move_inspector(&mut self, delta: i32) {
        self.inspect_year = clamp_year(self.inspect_year.saturating_add(delta));
    }

    pub fn chart(&self) -> ChartModel {
        self.view.chart()
    }

    fn after_selection_change(&mut self) {
        let selection = self.view.selection();
        self.status_message = match selection.train_year {
            Some(_) => String::new(),
            None => format!(
                "No projections available for {}",
                selection.technology.label()
            ),
        };
        tracing::debug!(?selection, "selection changed");
    }
}
