//! 终端进度输出

use std::io::Write;
use std::sync::Mutex;

use colored::Colorize;
use dns_zone_report_core::traits::ProgressReporter;

/// Prints ` ➤ label` when a task starts and rewrites the line as ` ✔ label` or ` ✘ label`.
#[derive(Default)]
pub struct ConsoleReporter {
    current: Mutex<Option<String>>,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    fn take_label(&self) -> String {
        self.current
            .lock()
            .ok()
            .and_then(|mut current| current.take())
            .unwrap_or_default()
    }
}

/// A failed flush only delays the start line until the next newline.
fn flush_or_log(out: &mut impl Write) {
    if let Err(e) = out.flush() {
        tracing::debug!("Failed to flush progress output: {e}");
    }
}

impl ProgressReporter for ConsoleReporter {
    fn on_start(&self, label: &str) {
        if let Ok(mut current) = self.current.lock() {
            *current = Some(label.to_string());
        }
        print!(" {} {label}", "➤".cyan());
        flush_or_log(&mut std::io::stdout());
    }

    fn on_success(&self) {
        println!("\r {} {}", "✔".green(), self.take_label());
    }

    fn on_error(&self, message: &str) {
        println!("\r {} {}", "✘".red(), self.take_label());
        eprintln!("   {}", message.red());
    }
}
