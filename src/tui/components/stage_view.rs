//! # Stage Detail Panel
//!
//! One stage's full markdown body, with a header naming the stage and a
//! rule under it. Stateless — the navigator already resolved which stage
//! and the store already resolved its body.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};

use crate::tui::markdown;

pub fn render_stage(id: &str, body: &str) -> Text<'static> {
    let mut text = Text::from(vec![
        Line::from(Span::styled(
            id.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )),
        Line::default(),
    ]);
    text.extend(markdown::render(body, Color::White));
    text
}
