#![warn(clippy::pedantic)]

pub mod actions;
pub mod dialog;
pub mod global;
pub mod renderer;
pub mod ui;
pub mod window;

use anyhow::Result as AnyResult;

fn main() -> AnyResult<()> {
    let has_term = std::io::IsTerminal::is_terminal(&std::io::stdin());
    // Log to a terminal, if available. Else, log to "log.out" in the working directory.
    if has_term {
        env_logger::builder()
            .filter_level(log::LevelFilter::Debug)
            .parse_default_env()
            .init();
    } else {
        let _ = simple_logging::log_to_file("log.out", log::LevelFilter::Debug);
    }

    let hotkeys = global::hotkeys::Hotkeys::get();
    log::debug!("Hotkeys source: {:?}", hotkeys.source());
    // Never overwrite a file the user wrote but we couldn't read.
    if hotkeys.should_save() {
        if let Err(e) = hotkeys.save() {
            log::warn!("Failed to save hotkey config:\n{e:?}");
        };
    }

    window::run()
}
