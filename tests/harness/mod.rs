pub mod fixtures;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

use couchrep::app::state::AppState;
use couchrep::domain::{ServerOrigin, Session};
use couchrep::ui::components::layout::MainLayout;

pub const TEST_WIDTH: u16 = 100;
pub const TEST_HEIGHT: u16 = 30;

const FIXED_TIME_MS: u128 = 0;

pub fn create_test_state() -> AppState {
    AppState::new(
        ServerOrigin::default(),
        Session::new(Some("admin".to_string()), Some("secret".to_string())),
    )
}

pub fn create_test_terminal() -> Terminal<TestBackend> {
    let backend = TestBackend::new(TEST_WIDTH, TEST_HEIGHT);
    Terminal::new(backend).unwrap()
}

pub fn render_to_lines(terminal: &mut Terminal<TestBackend>, state: &AppState) -> Vec<String> {
    terminal
        .draw(|frame| MainLayout::render(frame, state, Some(FIXED_TIME_MS)))
        .unwrap();

    buffer_lines(terminal.backend().buffer())
}

pub fn render_to_string(terminal: &mut Terminal<TestBackend>, state: &AppState) -> String {
    render_to_lines(terminal, state).join("\n")
}

fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    (0..buffer.area.height)
        .map(|y| {
            let line: String = (0..buffer.area.width)
                .filter_map(|x| buffer.cell((x, y)))
                .map(|cell| cell.symbol())
                .collect();
            line.trim_end().to_string()
        })
        .collect()
}
