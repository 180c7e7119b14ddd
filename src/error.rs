use std::panic;

use color_eyre::eyre::Result;

pub use crate::ui::tui::restore_terminal;

pub fn install_hooks() -> Result<()> {
    let hook_builder = color_eyre::config::HookBuilder::default().display_env_section(false);
    let (panic_hook, eyre_hook) = hook_builder.into_hooks();
    eyre_hook.install()?;

    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        tracing::error!(panic = %panic_info, "panicked");
        print_report(&panic_hook.panic_report(panic_info).to_string());
    }));

    Ok(())
}

#[expect(
    clippy::print_stderr,
    reason = "the terminal has been restored; stderr is the only place left to report"
)]
fn print_report(report: &str) {
    eprintln!("{report}");
}
