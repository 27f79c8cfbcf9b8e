use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::Clear;

use crate::components::overlay::{centered_rect, modal_block_with_hint};

/// Draws a centered modal and returns its inner area.
pub fn render_modal(
    frame: &mut Frame,
    width: Constraint,
    height: Constraint,
    title: &str,
    hint: &str,
) -> Rect {
    let area = centered_rect(frame.area(), width, height);
    frame.render_widget(Clear, area);

    let block = modal_block_with_hint(title, hint);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    inner
}
