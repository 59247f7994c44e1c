//! Bottom status bar — dataset label, key hints, last status message.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(
        format!(" {} ", app.dataset_label),
        theme::accent(),
    ));
    spans.push(Span::styled(
        "| Tab:pane j/k:field h/l:value q:quit",
        theme::muted(),
    ));

    if let Some(message) = &app.status {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(message.as_str(), theme::warning()));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
