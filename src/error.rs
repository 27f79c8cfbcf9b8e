use std::fmt::Display;
use std::io::stdout;
use std::panic;

use color_eyre::eyre::Result;
use crossterm::{
    execute,
    terminal::{LeaveAlternateScreen, disable_raw_mode},
};

/// Installs color-eyre reporting and a panic hook that hands the terminal
/// back before the report is printed.
pub fn install_hooks() -> Result<()> {
    let hook_builder = color_eyre::config::HookBuilder::default().display_env_section(false);
    let (panic_hook, eyre_hook) = hook_builder.into_hooks();
    eyre_hook.install()?;

    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        tracing::error!(panic = %panic_info, "panic");
        print_report(panic_hook.panic_report(panic_info));
    }));

    Ok(())
}

#[allow(
    clippy::print_stderr,
    reason = "the terminal is restored, stderr is the only channel left"
)]
fn print_report(report: impl Display) {
    eprintln!("{}", report);
}

fn restore_terminal() -> Result<()> {
    if crossterm::terminal::is_raw_mode_enabled()? {
        execute!(stdout(), LeaveAlternateScreen)?;
        disable_raw_mode()?;
    }
    Ok(())
}
