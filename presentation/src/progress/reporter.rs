//! Progress reporting for outreach batches and mail dispatch

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use outreach_application::ports::progress::{DispatchNotifier, ProgressNotifier};
use outreach_domain::{TransportAttempt, TransportOutcome};
use std::sync::Mutex;

/// Reports batch progress with a progress bar on stderr
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn batch_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_batch_start(&self, total_targets: usize) {
        let pb = ProgressBar::new(total_targets as u64);
        pb.set_style(Self::batch_style());
        pb.set_prefix("Scouting");
        pb.set_message("Starting...");

        if let Ok(mut bar) = self.bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_domain_complete(&self, host: &str, success: bool) {
        if let Ok(bar) = self.bar.lock()
            && let Some(pb) = bar.as_ref()
        {
            let status = if success {
                format!("{} {}", "v".green(), host)
            } else {
                format!("{} {}", "x".red(), host)
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_batch_complete(&self, succeeded: usize, failed: usize) {
        if let Ok(mut bar) = self.bar.lock()
            && let Some(pb) = bar.take()
        {
            pb.finish_with_message(format!(
                "{} ({} ok, {} failed)",
                "done".green(),
                succeeded,
                failed
            ));
        }
    }
}

/// Simple text-based progress (no fancy UI), written to stderr
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_batch_start(&self, total_targets: usize) {
        eprintln!(
            "{} {} ({} domains)",
            "->".cyan(),
            "Scouting".bold(),
            total_targets
        );
    }

    fn on_domain_complete(&self, host: &str, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), host);
        } else {
            eprintln!("  {} {} (failed)", "x".red(), host);
        }
    }

    fn on_batch_complete(&self, _succeeded: usize, _failed: usize) {
        eprintln!();
    }
}

/// Prints one line per transport attempt as it happens
pub struct DispatchReporter;

impl DispatchReporter {
    pub fn attempt_line(attempt: &TransportAttempt) -> String {
        match &attempt.outcome {
            TransportOutcome::Succeeded => format!(
                "  {} Email sent successfully using {}",
                "v".green(),
                attempt.transport
            ),
            TransportOutcome::AuthFailed { reason } => format!(
                "  {} Authentication failed for {}: {}",
                "x".red(),
                attempt.transport,
                reason
            ),
            TransportOutcome::Failed { reason } => format!(
                "  {} Failed to send using {}: {}",
                "x".red(),
                attempt.transport,
                reason
            ),
        }
    }
}

impl DispatchNotifier for DispatchReporter {
    fn on_attempt(&self, attempt: &TransportAttempt) {
        eprintln!("{}", Self::attempt_line(attempt));
    }

    fn on_dispatch_complete(&self, recipient: &str, success_count: usize) {
        if success_count > 0 {
            eprintln!("{} Email sent to {}", "->".cyan(), recipient.bold());
        } else {
            eprintln!("{} Nothing was sent to {}", "->".red(), recipient.bold());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attempt_lines() {
        colored::control::set_override(false);

        let sent = TransportAttempt {
            transport: "smtp.one.com, me".to_string(),
            outcome: TransportOutcome::Succeeded,
        };
        assert_eq!(
            DispatchReporter::attempt_line(&sent),
            "  v Email sent successfully using smtp.one.com, me"
        );

        let refused = TransportAttempt {
            transport: "backup".to_string(),
            outcome: TransportOutcome::AuthFailed {
                reason: "535".to_string(),
            },
        };
        assert_eq!(
            DispatchReporter::attempt_line(&refused),
            "  x Authentication failed for backup: 535"
        );
    }

    #[test]
    fn test_reporter_without_start_is_noop() {
        let reporter = ProgressReporter::new();
        reporter.on_domain_complete("foo.com", true);
        reporter.on_batch_complete(1, 0);
    }
}
