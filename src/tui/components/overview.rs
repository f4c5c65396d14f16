//! # Overview Panel
//!
//! Renders the roadmap-at-a-glance view in one of two configured variants:
//! a box-and-arrow diagram drawn from the static graph description, or a
//! pointer to an external roadmap image. Both present the same `Overview`
//! navigation state — the variant is a config choice, not a state.
//!
//! Drawing is purely mechanical: boxes are stacked in declaration order and
//! cross-cutting nodes hang off their target stage with a dashed connector.
//! No layout is computed beyond label padding.

use std::collections::HashMap;
use std::path::Path;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use unicode_width::UnicodeWidthStr;

use crate::content::graph::OverviewGraph;
use crate::core::config::{OverviewMode, ResolvedConfig};

const MARGIN: &str = "  ";

/// Build the overview panel for the configured variant.
pub fn render_overview(graph: &OverviewGraph, config: &ResolvedConfig) -> Text<'static> {
    match config.overview {
        OverviewMode::Diagram => diagram_text(graph),
        OverviewMode::Image => image_text(&config.image_path),
    }
}

fn diagram_text(graph: &OverviewGraph) -> Text<'static> {
    let stage_ids: Vec<_> = graph.stage_ids().collect();

    // Dashed attachments, keyed by the stage they point at.
    let mut attached: HashMap<&str, Vec<&str>> = HashMap::new();
    for (from, to) in graph.cross_cutting_links() {
        attached.entry(to).or_default().push(from);
    }

    let labels: Vec<String> = stage_ids
        .iter()
        .enumerate()
        .map(|(i, id)| format!("{}. {}", i + 1, id))
        .collect();
    let inner = labels.iter().map(|l| l.width()).max().unwrap_or(0) + 2;

    let box_style = Style::default().fg(Color::Cyan);
    let label_style = Style::default().add_modifier(Modifier::BOLD);
    let dashed_style = Style::default().fg(Color::Yellow);

    let mut lines: Vec<Line<'static>> = Vec::new();
    lines.push(Line::from(Span::styled(
        "Business Architecture Transformation Roadmap",
        Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    )));
    lines.push(Line::default());

    for (i, (id, label)) in stage_ids.iter().zip(&labels).enumerate() {
        lines.push(Line::from(Span::styled(
            format!("{MARGIN}┌{}┐", "─".repeat(inner)),
            box_style,
        )));

        let pad = inner - 1 - label.width();
        let mut mid = vec![
            Span::styled(format!("{MARGIN}│"), box_style),
            Span::raw(" "),
            Span::styled(label.clone(), label_style),
            Span::raw(" ".repeat(pad)),
            Span::styled("│", box_style),
        ];
        for name in attached.get(id).into_iter().flatten() {
            mid.push(Span::styled(format!("  ◀╌╌╌  ┆ {name} ┆"), dashed_style));
        }
        lines.push(Line::from(mid));

        lines.push(Line::from(Span::styled(
            format!("{MARGIN}└{}┘", "─".repeat(inner)),
            box_style,
        )));

        if i + 1 < stage_ids.len() {
            let arrow_pad = " ".repeat(MARGIN.len() + 1 + inner / 2);
            lines.push(Line::from(Span::styled(format!("{arrow_pad}│"), box_style)));
            lines.push(Line::from(Span::styled(format!("{arrow_pad}▼"), box_style)));
        }
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "╌╌ cross-cutting element, applies across stages",
        Style::default().fg(Color::DarkGray),
    )));

    Text::from(lines)
}

fn image_text(path: &Path) -> Text<'static> {
    let mut lines = vec![
        Line::from("The roadmap overview is provided as an external image:"),
        Line::default(),
        Line::from(Span::styled(
            format!("{MARGIN}{}", path.display()),
            Style::default().fg(Color::Cyan),
        )),
        Line::default(),
    ];

    if path.exists() {
        lines.push(Line::from(Span::styled(
            "Open it in an image viewer alongside this terminal.",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        // Missing image is non-fatal: warn visibly, keep navigating.
        lines.push(Line::from(Span::styled(
            "⚠ warning: image file not found",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            "Set image_path in the config, or switch to the generated \
             diagram with --overview diagram.",
            Style::default().fg(Color::Yellow),
        )));
    }

    Text::from(lines)
}
