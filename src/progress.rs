use indicatif::{ProgressBar, ProgressStyle};

/// Spinner on stderr; indicatif hides it when stderr is not a terminal.
pub fn stage_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
        .template("{spinner} [{elapsed}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

/// Close the spinner with the HTTP status, or mark it failed when no response came back.
pub fn finish_spinner(pb: &ProgressBar, status: Option<u16>) {
    let message = pb.message();
    match status {
        Some(code) => pb.finish_with_message(format!("✓ {message} ({code})")),
        None => pb.finish_with_message(format!("✗ {message} (no response)")),
    }
}
