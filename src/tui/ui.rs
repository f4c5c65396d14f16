use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect, Size};
use ratatui::style::{Color, Style};
use ratatui::text::{Span, Text};
use ratatui::widgets::{Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollbarVisibility};

use crate::content::graph::OverviewGraph;
use crate::core::config::ResolvedConfig;
use crate::core::navigator::{Navigator, View};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{TitleBar, overview, stage_view};

const KEY_HINTS: &str =
    " ↑/↓ move · Enter open · ←/→ stage · Esc overview · PgUp/PgDn scroll · q quit";

pub fn draw_ui(
    frame: &mut Frame,
    nav: &Navigator,
    tui: &mut TuiState,
    config: &ResolvedConfig,
    graph: &OverviewGraph,
) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, hint_area] = layout.areas(frame.area());

    let view = nav.current();

    let view_label = match &view {
        View::Overview => "Overview".to_string(),
        View::StageDetail(id) => id.clone(),
    };
    let mut title_bar = TitleBar::new(view_label, tui.status_message.clone());
    title_bar.render(frame, title_area);

    // Sidebar gets what it needs, content takes the rest.
    let sidebar_width = tui.sidebar.width().min(main_area.width / 2);
    let [sidebar_area, content_area] =
        Layout::horizontal([Length(sidebar_width), Min(0)]).areas(main_area);
    tui.sidebar.render(frame, sidebar_area, &view);

    let text = match &view {
        View::Overview => overview::render_overview(graph, config),
        View::StageDetail(id) => match nav.store().get_body(id) {
            Ok(body) => stage_view::render_stage(id, body),
            // Unreachable while the navigator validates selections, but a
            // dangling id must show up on screen, not disappear.
            Err(e) => Text::from(format!("internal error: {e}")),
        },
    };
    draw_content(frame, content_area, text, tui);

    frame.render_widget(
        Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray)),
        hint_area,
    );
}

fn draw_content(frame: &mut Frame, area: Rect, text: Text<'static>, tui: &mut TuiState) {
    // Reserve one column for the scrollbar.
    let content_width = area.width.saturating_sub(1);
    let paragraph = Paragraph::new(text).wrap(Wrap { trim: false });
    let height = paragraph.line_count(content_width) as u16;

    let mut scroll_view = ScrollView::new(Size::new(content_width, height))
        .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
        .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
    scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, height));

    frame.render_stateful_widget(scroll_view, area, &mut tui.scroll_state);
}
