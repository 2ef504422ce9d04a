use std::fmt::Display;
use std::process::ExitCode;

const PASS_MARK: &str = "\u{2705}";
const FAIL_MARK: &str = "\u{274c}";

/// What a subcommand hands back to the terminal.
#[derive(Debug, PartialEq)]
pub(crate) enum Outcome {
    /// Printed on stdout, exit code 0.
    Passed(String),
    /// Printed on stderr, exit code 1.
    Failed(String),
}

impl Outcome {
    pub(crate) fn passed(summary: impl Display) -> Self {
        Self::Passed(format!("{PASS_MARK} {summary}"))
    }

    pub(crate) fn failed(summary: impl Display) -> Self {
        Self::Failed(format!("{FAIL_MARK} {summary}"))
    }

    /// Machine-readable stdout, printed without a status mark.
    pub(crate) fn output(text: String) -> Self {
        Self::Passed(text)
    }

    pub(crate) fn report(self) -> ExitCode {
        match self {
            Self::Passed(text) => {
                println!("{text}");
                ExitCode::SUCCESS
            },
            Self::Failed(text) => {
                eprintln!("{text}");
                ExitCode::FAILURE
            },
        }
    }
}
