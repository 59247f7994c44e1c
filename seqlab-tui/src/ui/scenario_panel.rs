//! One scenario pane: selector rows, ranked outcomes with percentage bars,
//! per-outcome RDR sublines, dataset total.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, SelectorField};
use crate::theme;

const BAR_WIDTH: usize = 20;

pub fn render(f: &mut Frame, area: Rect, app: &AppState, pane_idx: usize) {
    let pane = &app.panes[pane_idx];
    let pane_focused = app.focused == pane_idx;
    let mut lines: Vec<Line> = Vec::new();

    // Selector rows.
    for i in 0..SelectorField::COUNT {
        let field = SelectorField::from_index(i).unwrap();
        let value = pane
            .selected_value(&app.options, field)
            .unwrap_or("(no data)");
        let focused = pane_focused && pane.field == field;

        lines.push(Line::from(vec![
            Span::styled(format!("{:<12}", field.label()), theme::muted()),
            Span::styled(format!(" {value} "), theme::selector(focused)),
        ]));
    }
    lines.push(Line::from(""));

    // Outcome listing.
    match &pane.report {
        None => {
            lines.push(Line::from(Span::styled(
                "No matching data found for this scenario.",
                theme::warning(),
            )));
        }
        Some(report) => {
            lines.push(Line::from(Span::styled("Outcomes", theme::accent_bold())));
            for outcome in &report.outcomes {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{} ", outcome.stat.end_point_session),
                        theme::accent(),
                    ),
                    Span::styled(
                        format!(
                            "| Count: {} ({:.2}%)",
                            outcome.stat.count, outcome.stat.percentage
                        ),
                        theme::secondary(),
                    ),
                ]));
                lines.push(Line::from(Span::styled(
                    percentage_bar(outcome.stat.percentage),
                    theme::positive(),
                )));
                for (i, rdr) in outcome.top_rdr.iter().enumerate() {
                    lines.push(Line::from(vec![
                        Span::styled(format!("    {}. Most frequent RDR: ", i + 1), theme::muted()),
                        Span::styled(rdr.model.clone(), theme::positive()),
                        Span::styled(format!(" ({} times)", rdr.count), theme::muted()),
                    ]));
                }
            }
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("Number of datasets: {}", report.total_count),
                theme::accent_bold(),
            )));
        }
    }

    let para = Paragraph::new(lines);
    f.render_widget(para, area);
}

/// A fixed-width textual bar for a 0–100 percentage.
fn percentage_bar(percentage: f64) -> String {
    let filled = ((percentage / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!(
        "  {}{}",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled)
    )
}
