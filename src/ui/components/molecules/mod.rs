mod hint_bar;
mod modal_frame;

pub use hint_bar::{chip_hint_line, hint_spans};
pub use modal_frame::render_modal;
