//! Console output formatter for outreach results

use colored::Colorize;
use outreach_application::{BatchOutcome, DomainFailure};
use outreach_domain::{
    CandidateEmailSet, OutreachResult, RecipientSelection, TransportAttempt, TransportOutcome,
};

/// Formats outreach results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format every result with its message body, then the failures
    pub fn format(outcome: &BatchOutcome) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Outreach Results"));
        output.push('\n');

        for result in &outcome.results {
            output.push_str(&format!(
                "\n{} {}\n",
                format!("── {} ──", result.host).yellow().bold(),
                result.url.dimmed()
            ));
            output.push_str(&format!(
                "{} {}\n",
                "Recipient:".cyan().bold(),
                Self::recipient_label(&result.selection)
            ));
            output.push_str(&format!(
                "{} {}\n\n",
                "Candidates:".cyan().bold(),
                Self::candidates_label(&result.candidates)
            ));
            output.push_str(&Self::indent(&result.outreach_body, "  "));
            output.push('\n');
        }

        if !outcome.failures.is_empty() {
            output.push_str(&Self::section_header("Failures"));
            for failure in &outcome.failures {
                output.push_str(&Self::failure_line(failure));
            }
        }

        output.push_str(&Self::footer());
        output.push_str(&Self::totals(outcome));

        output
    }

    /// Format one line per domain (concise output)
    pub fn format_summary(outcome: &BatchOutcome) -> String {
        let mut output = String::new();

        for result in &outcome.results {
            output.push_str(&format!(
                "{} {:<30} {} ({} candidate{})\n",
                "v".green(),
                result.host,
                Self::recipient_label(&result.selection),
                result.candidates.len(),
                if result.candidates.len() == 1 { "" } else { "s" }
            ));
        }

        for failure in &outcome.failures {
            output.push_str(&Self::failure_line(failure));
        }

        output.push_str(&Self::totals(outcome));
        output
    }

    /// Format results as JSON (the export format)
    pub fn format_json(results: &[OutreachResult]) -> String {
        serde_json::to_string_pretty(results).unwrap_or_else(|_| "[]".to_string())
    }

    /// Format the per-transport outcomes of a configuration check
    pub fn format_check(attempts: &[TransportAttempt]) -> String {
        if attempts.is_empty() {
            return format!("{}\n", "No transports configured.".yellow());
        }

        let mut output = String::new();
        for attempt in attempts {
            let line = match &attempt.outcome {
                TransportOutcome::Succeeded => {
                    format!("{} {}: ok", "v".green(), attempt.transport)
                }
                TransportOutcome::AuthFailed { reason } => format!(
                    "{} {}: authentication failed ({})",
                    "x".red(),
                    attempt.transport,
                    reason
                ),
                TransportOutcome::Failed { reason } => {
                    format!("{} {}: {}", "x".red(), attempt.transport, reason)
                }
            };
            output.push_str(&line);
            output.push('\n');
        }
        output
    }

    /// Human-readable recipient state
    pub fn recipient_label(selection: &RecipientSelection) -> String {
        match selection {
            RecipientSelection::Selected { email } => email.green().to_string(),
            RecipientSelection::Manual { email } => format!("{} (manual)", email.green()),
            RecipientSelection::NoCandidates => "none (no addresses found)".dimmed().to_string(),
            RecipientSelection::Rejected { suggestion } => format!(
                "{} (suggested {:?}, not found on the site)",
                "none".yellow(),
                suggestion
            ),
        }
    }

    fn candidates_label(candidates: &CandidateEmailSet) -> String {
        if candidates.is_empty() {
            return "-".to_string();
        }
        candidates
            .iter()
            .map(|email| {
                let methods = candidates
                    .methods(email)
                    .map(|methods| {
                        methods
                            .iter()
                            .map(|m| m.as_str())
                            .collect::<Vec<_>>()
                            .join(", ")
                    })
                    .unwrap_or_default();
                format!("{} [{}]", email, methods.dimmed())
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn failure_line(failure: &DomainFailure) -> String {
        format!(
            "{} {} (line {}): {}\n",
            "x".red(),
            failure.label(),
            failure.line,
            failure.error
        )
    }

    fn totals(outcome: &BatchOutcome) -> String {
        format!(
            "{} succeeded, {} failed\n",
            outcome.succeeded().to_string().green(),
            outcome.failed().to_string().red()
        )
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use outreach_application::RunOutreachError;
    use outreach_domain::DiscoveryMethod;

    fn outcome() -> BatchOutcome {
        let mut candidates = CandidateEmailSet::new();
        candidates.insert("a@foo.com", DiscoveryMethod::Mailto);
        candidates.insert("a@foo.com", DiscoveryMethod::Markup);

        BatchOutcome {
            results: vec![OutreachResult::new(
                "foo.com",
                "https://foo.com",
                "Hello Foo!\nLet's talk.",
                RecipientSelection::Selected {
                    email: "a@foo.com".to_string(),
                },
                candidates,
            )],
            failures: vec![DomainFailure {
                line: 2,
                input: "bar.com".to_string(),
                host: Some("bar.com".to_string()),
                error: RunOutreachError::Cancelled,
            }],
        }
    }

    #[test]
    fn test_format_full() {
        colored::control::set_override(false);

        let output = ConsoleFormatter::format(&outcome());

        assert!(output.contains("── foo.com ──"));
        assert!(output.contains("Recipient: a@foo.com"));
        assert!(output.contains("a@foo.com [markup, mailto]"));
        assert!(output.contains("  Hello Foo!\n  Let's talk."));
        assert!(output.contains("x bar.com (line 2): Cancelled"));
        assert!(output.contains("1 succeeded, 1 failed"));
    }

    #[test]
    fn test_format_summary() {
        colored::control::set_override(false);

        let output = ConsoleFormatter::format_summary(&outcome());

        assert!(output.starts_with("v foo.com"));
        assert!(output.contains("a@foo.com (1 candidate)"));
    }

    #[test]
    fn test_format_json_round_trips() {
        let outcome = outcome();

        let json = ConsoleFormatter::format_json(&outcome.results);
        let parsed: Vec<OutreachResult> = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, outcome.results);
    }

    #[test]
    fn test_recipient_labels() {
        colored::control::set_override(false);

        assert_eq!(
            ConsoleFormatter::recipient_label(&RecipientSelection::NoCandidates),
            "none (no addresses found)"
        );
        assert_eq!(
            ConsoleFormatter::recipient_label(&RecipientSelection::Rejected {
                suggestion: "x@y.com".to_string()
            }),
            "none (suggested \"x@y.com\", not found on the site)"
        );
    }

    #[test]
    fn test_format_check() {
        colored::control::set_override(false);

        let attempts = vec![
            TransportAttempt {
                transport: "primary".to_string(),
                outcome: TransportOutcome::Succeeded,
            },
            TransportAttempt {
                transport: "backup".to_string(),
                outcome: TransportOutcome::AuthFailed {
                    reason: "535".to_string(),
                },
            },
        ];

        let output = ConsoleFormatter::format_check(&attempts);

        assert_eq!(
            output,
            "v primary: ok\nx backup: authentication failed (535)\n"
        );
        assert!(ConsoleFormatter::format_check(&[]).contains("No transports"));
    }
}
