//! Nice QLadder output formatting.

use std::fmt;

use log;

const QLADDER_BANNER_LENGTH: usize = 103;

/// Logs a warning to the `qladder-output` logger.
macro_rules! qladder_warn {
    ($fmt:expr $(, $($arg:tt)*)?) => { log::warn!(target: "qladder-output", $fmt, $($($arg)*)?); }
}

/// Logs a main output line to the `qladder-output` logger.
macro_rules! qladder_output {
    ($fmt:expr $(, $($arg:tt)*)?) => { log::info!(target: "qladder-output", $fmt, $($($arg)*)?); }
}

pub(crate) use {qladder_output, qladder_warn};

/// Writes a nicely formatted section title.
pub(crate) fn write_title(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    let length = title.chars().count().max(QLADDER_BANNER_LENGTH - 6);
    let bar = "─".repeat(length);
    writeln!(f, "┌──{bar}──┐")?;
    writeln!(f, "│§ {title:^length$} §│")?;
    writeln!(f, "└──{bar}──┘")?;
    Ok(())
}

/// Logs a nicely formatted section title to the `qladder-output` logger.
pub(crate) fn log_title(title: &str) {
    let length = title.chars().count().max(QLADDER_BANNER_LENGTH - 6);
    let bar = "─".repeat(length);
    qladder_output!("┌──{bar}──┐");
    qladder_output!("│§ {title:^length$} §│");
    qladder_output!("└──{bar}──┘");
}

/// Writes a nicely formatted subtitle.
pub(crate) fn write_subtitle(f: &mut fmt::Formatter<'_>, subtitle: &str) -> fmt::Result {
    let length = subtitle.chars().count();
    let bar = "═".repeat(length);
    writeln!(f, "{subtitle}")?;
    writeln!(f, "{bar}")?;
    Ok(())
}

/// Turns a boolean into `yes` or `no`.
pub(crate) fn nice_bool(b: bool) -> &'static str {
    if b {
        "yes"
    } else {
        "no"
    }
}

/// Logs a list of terms to the `qladder-output` logger, one numbered term per line, followed by
/// an empty line.
pub(crate) fn log_terms<D: fmt::Display>(terms: &[D]) {
    let width = terms.len().to_string().len();
    terms.iter().enumerate().for_each(|(i, term)| {
        qladder_output!("{:>width$}. {term}", i + 1);
    });
    qladder_output!("");
}

/// A trait for logging `QLadder` outputs nicely.
pub(crate) trait QLadderOutput: fmt::Debug + fmt::Display {
    /// Logs display output nicely.
    fn log_output_display(&self) {
        let lines = self.to_string();
        lines.lines().for_each(|line| {
            qladder_output!("{line}");
        })
    }
}

// Blanket implementation
impl<T> QLadderOutput for T where T: fmt::Debug + fmt::Display {}
