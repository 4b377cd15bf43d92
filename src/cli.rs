//! CLI definitions: argument parsing and help text.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

const AFTER_HELP: &str = "\
EXAMPLES:
  text-markup reply.md                   Preview segments of a saved reply
  cat reply.md | text-markup             Read the reply from stdin
  text-markup reply.md -k tokio          Highlight \"tokio\" in plain text
  text-markup reply.md --format json     Emit reasoning and segments as JSON

ENVIRONMENT:
  TEXT_MARKUP_REASONING_OPEN    Opening reasoning marker (default <think>)
  TEXT_MARKUP_REASONING_CLOSE   Closing reasoning marker (default </think>)
";

/// Output format for the parsed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One line per segment, prefixed with its kind
    Text,
    /// Reasoning and segments as a JSON object
    Json,
}

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Split model output into reasoning, text, code and math segments",
    after_help = AFTER_HELP
)]
pub struct Args {
    /// Input file ('-' or omitted reads stdin)
    pub input: Option<PathBuf>,

    /// Keyword to highlight in plain-text segments (case-sensitive)
    #[arg(short = 'k', long, default_value = "")]
    pub keyword: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }

    /// True when input should come from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.input
            .as_deref()
            .is_none_or(|p| p.as_os_str() == "-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_from_flags() {
        let args = Args::parse_from(["text-markup"]);
        assert_eq!(args.log_level(), "warn");
        let args = Args::parse_from(["text-markup", "-vv"]);
        assert_eq!(args.log_level(), "debug");
        let args = Args::parse_from(["text-markup", "-v", "-q"]);
        assert_eq!(args.log_level(), "error");
    }

    #[test]
    fn stdin_when_no_path_or_dash() {
        assert!(Args::parse_from(["text-markup"]).reads_stdin());
        assert!(Args::parse_from(["text-markup", "-"]).reads_stdin());
        assert!(!Args::parse_from(["text-markup", "reply.md"]).reads_stdin());
    }

    #[test]
    fn format_and_keyword() {
        let args = Args::parse_from(["text-markup", "-k", "rust", "--format", "json"]);
        assert_eq!(args.keyword, "rust");
        assert_eq!(args.format, Format::Json);
    }
}
