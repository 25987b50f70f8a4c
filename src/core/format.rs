//! Text layout of entries in the log file
//!
//! Each entry starts with a newline:
//!
//! ```text
//! [08-01-2025 03:04:05:123 PM] [orders] [submit] [INFO] : accepted
//! ```
//!
//! `EXCEPTION` entries put the description between an opening banner and a
//! closing banner; the closing banner is the opening one with the word
//! `EXCEPTION` blanked out by asterisks.

use super::log_entry::LogEntry;
use super::log_level::LogLevel;

pub const LINE_ENDING: &str = "\n";

/// Width of the `=` separator lines.
pub const SEPARATOR_WIDTH: usize = 101;

/// Asterisks on each side of the `EXCEPTION` title.
pub const TITLE_PADDING: usize = 46;

const TITLE: &str = "EXCEPTION";

/// Opening banner, three lines each terminated by [`LINE_ENDING`].
pub fn exception_banner() -> String {
    let separator = "=".repeat(SEPARATOR_WIDTH);
    let padding = "*".repeat(TITLE_PADDING);
    let mut banner = String::with_capacity(3 * (SEPARATOR_WIDTH + LINE_ENDING.len()));
    banner.push_str(&separator);
    banner.push_str(LINE_ENDING);
    banner.push_str(&padding);
    banner.push_str(TITLE);
    banner.push_str(&padding);
    banner.push_str(LINE_ENDING);
    banner.push_str(&separator);
    banner.push_str(LINE_ENDING);
    banner
}

/// Closing banner: the opening banner with the title replaced by `*` of equal width.
pub fn closing_banner() -> String {
    exception_banner().replace(TITLE, &"*".repeat(TITLE.len()))
}

fn header(entry: &LogEntry) -> String {
    format!(
        "{}[{}] [{}] [{}] [{}] : ",
        LINE_ENDING,
        entry.timestamp(),
        entry.source_name(),
        entry.caller_name(),
        entry.level()
    )
}

/// Render one entry exactly as it is appended to the file.
pub fn render_entry(entry: &LogEntry) -> String {
    let mut output = header(entry);
    if entry.level() == LogLevel::Exception {
        output.push_str(LINE_ENDING);
        output.push_str(&exception_banner());
        output.push_str(entry.message());
        output.push_str(LINE_ENDING);
        output.push_str(&closing_banner());
    } else {
        output.push_str(entry.message());
    }
    output
}
