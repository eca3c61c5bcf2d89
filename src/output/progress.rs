use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Runs `f` while a spinner ticks on stderr. The spinner is cleared before
/// returning, and stays hidden when stderr is not a terminal.
pub fn with_spinner<T>(msg: String, f: impl FnOnce() -> T) -> anyhow::Result<T> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner().template("{spinner} {msg} [{elapsed_precise}]")?,
    );
    pb.set_message(msg);
    pb.enable_steady_tick(Duration::from_millis(100));

    let out = f();

    pb.finish_and_clear();
    Ok(out)
}
