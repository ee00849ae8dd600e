use std::fmt::Display;

use encverify_core::{Verdict, VerificationOutcome, VerificationReport};
use owo_colors::OwoColorize;
use owo_colors::Stream::{Stderr, Stdout};

/// Print a heading with colored styling and clear separation
pub fn print_heading(text: &str) {
    let line = "=".repeat(50);
    println!("{}", line.if_supports_color(Stdout, |t| t.bright_blue()));
    println!(" {}", text.if_supports_color(Stdout, |t| t.bold()));
    println!("{}", line.if_supports_color(Stdout, |t| t.bright_blue()));
}

/// Print an info line with label and value, with the label colored
pub fn print_info<T: Display>(label: &str, value: T) {
    println!("{}: {}", label.if_supports_color(Stdout, |t| t.bright_cyan()), value);
}

/// Print one check result as `[STATUS] Name: message`
pub fn print_outcome(name: &str, outcome: &VerificationOutcome) {
    let tag = format!("[{}]", outcome.label());
    match outcome {
        VerificationOutcome::Pass { .. } => print!("{}", tag.if_supports_color(Stdout, |t| t.green())),
        VerificationOutcome::NeedsReview { .. } => {
            print!("{}", tag.if_supports_color(Stdout, |t| t.yellow()))
        }
        VerificationOutcome::Undetermined { .. } => {
            print!("{}", tag.if_supports_color(Stdout, |t| t.magenta()))
        }
    }
    println!(" {}: {}", name.if_supports_color(Stdout, |t| t.bold()), outcome.message());
}

/// Print the verdict line
pub fn print_verdict(verdict: Verdict) {
    let text = format!("Verdict: {}", verdict);
    match verdict {
        Verdict::Accept => println!("{}", text.if_supports_color(Stdout, |t| t.bright_green())),
        Verdict::Review => println!("{}", text.if_supports_color(Stdout, |t| t.yellow())),
        Verdict::Undetermined => println!("{}", text.if_supports_color(Stdout, |t| t.magenta())),
    }
}

/// Print a full verification report
pub fn print_report(report: &VerificationReport, started_at: &str) {
    print_heading("Re-encode Verification");
    print_info("Started", started_at);
    print_info("Original", report.original.display());
    print_info("Candidate", report.candidate.display());
    println!();
    for (name, outcome) in report.checks() {
        print_outcome(name, outcome);
    }
    println!();
    print_verdict(report.verdict);
}

/// Print an error message to stderr in red
pub fn print_error<T: Display>(message: T) {
    let text = format!("Error: {}", message);
    eprintln!("{}", text.if_supports_color(Stderr, |t| t.bright_red()));
}
