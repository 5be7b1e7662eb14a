use std::fmt;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::{QuizConfig, QuizConfigError};
use ui::App;

const DEFAULT_QUESTIONS: u32 = 15;
const DEFAULT_POINTS_PER_QUESTION: u32 = 10;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidQuestions { raw: String },
    InvalidPoints { raw: String },
    InvalidConfig(QuizConfigError),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidQuestions { raw } => write!(f, "invalid --questions value: {raw}"),
            ArgsError::InvalidPoints { raw } => write!(f, "invalid --points value: {raw}"),
            ArgsError::InvalidConfig(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--questions <n>] [--points <n>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --questions {DEFAULT_QUESTIONS}");
    eprintln!("  --points {DEFAULT_POINTS_PER_QUESTION}   # points per question");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_QUESTIONS, QUIZ_POINTS");
}

// Malformed environment values fall back to the defaults; the flags are the
// strict surface.
fn env_count(name: &str) -> Option<u32> {
    std::env::var(name)
        .ok()
        .and_then(|value| value.trim().parse().ok())
}

fn parse_config(args: &mut impl Iterator<Item = String>) -> Result<QuizConfig, ArgsError> {
    let mut questions = env_count("QUIZ_QUESTIONS").unwrap_or(DEFAULT_QUESTIONS);
    let mut points_per_question = env_count("QUIZ_POINTS").unwrap_or(DEFAULT_POINTS_PER_QUESTION);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--questions" => {
                let value = require_value(args, "--questions")?;
                questions = value
                    .parse()
                    .map_err(|_| ArgsError::InvalidQuestions { raw: value.clone() })?;
            }
            "--points" => {
                let value = require_value(args, "--points")?;
                points_per_question = value
                    .parse()
                    .map_err(|_| ArgsError::InvalidPoints { raw: value.clone() })?;
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }

    QuizConfig::new(questions, points_per_question).map_err(ArgsError::InvalidConfig)
}

fn main() {
    let mut args = std::env::args().skip(1);
    let config = match parse_config(&mut args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            print_usage();
            std::process::exit(2);
        }
    };

    // Some macOS dev setups leave tao windows always-on-top; pin it off.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(config)
        .launch(App);
}
