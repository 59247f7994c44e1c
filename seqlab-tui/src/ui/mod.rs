//! Top-level UI layout — two scenario panes, comparison footer, status bar.

pub mod comparison_panel;
pub mod scenario_panel;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: scenario panes + comparison footer + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(4),
            Constraint::Length(1),
        ])
        .split(f.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    for pane_idx in 0..2 {
        let is_active = app.focused == pane_idx;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::panel_border(is_active))
            .title(format!(" Scenario {} ", pane_idx + 1))
            .title_style(theme::panel_title(is_active));
        let inner = block.inner(columns[pane_idx]);
        f.render_widget(block, columns[pane_idx]);
        scenario_panel::render(f, inner, app, pane_idx);
    }

    comparison_panel::render(f, chunks[1], app);
    status_bar::render(f, chunks[2], app);
}
