//! # TitleBar Component
//!
//! Single-line header showing the application name, the view currently on
//! screen, and any transient status message (including surfaced internal
//! errors — those must stay visible, not vanish into the log).
//!
//! Purely presentational: all fields are props set by the caller each
//! frame. Props live in the struct rather than render parameters so the
//! `Component` trait keeps its fixed signature.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use crate::tui::component::Component;

pub struct TitleBar {
    /// Human label for the active view ("Overview" or a stage id).
    pub view_label: String,
    /// Transient status text; empty means nothing to show.
    pub status_message: String,
}

impl TitleBar {
    pub fn new(view_label: String, status_message: String) -> Self {
        Self {
            view_label,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text = if self.status_message.is_empty() {
            format!("HOBA Framework Navigator · {}", self.view_label)
        } else {
            format!(
                "HOBA Framework Navigator · {} | {}",
                self.view_label, self.status_message
            )
        };
        frame.render_widget(
            Span::styled(text, Style::default().add_modifier(Modifier::BOLD)),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered_row(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| title_bar.render(f, f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        (0..80).map(|x| buffer[(x, 0)].symbol().to_string()).collect()
    }

    #[test]
    fn shows_view_label() {
        let mut tb = TitleBar::new("Overview".to_string(), String::new());
        let row = rendered_row(&mut tb);
        assert!(row.contains("HOBA Framework Navigator"));
        assert!(row.contains("Overview"));
        assert!(!row.contains('|'));
    }

    #[test]
    fn appends_status_message() {
        let mut tb = TitleBar::new(
            "Business Model".to_string(),
            "internal error: unknown stage".to_string(),
        );
        let row = rendered_row(&mut tb);
        assert!(row.contains("Business Model | internal error"));
    }
}
