//! Comparison footer — each scenario's share of the combined dataset count.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(false))
        .title(" Comparison ")
        .title_style(theme::panel_title(false));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines: Vec<Line> = match &app.comparison {
        Some(cmp) => vec![
            Line::from(vec![
                Span::styled("Scenario 1: ", theme::muted()),
                Span::styled(format!("{:.2}%", cmp.share1), theme::positive()),
                Span::styled(
                    format!(" of total ({} datasets)", cmp.total1),
                    theme::secondary(),
                ),
            ]),
            Line::from(vec![
                Span::styled("Scenario 2: ", theme::muted()),
                Span::styled(format!("{:.2}%", cmp.share2), theme::positive()),
                Span::styled(
                    format!(" of total ({} datasets)", cmp.total2),
                    theme::secondary(),
                ),
            ]),
        ],
        None => vec![Line::from(Span::styled(
            "Run both scenarios with results to enable comparison.",
            theme::muted(),
        ))],
    };

    f.render_widget(Paragraph::new(lines), inner);
}
