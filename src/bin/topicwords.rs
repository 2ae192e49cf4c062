//! Print the most important words of a text file
//!
//! ```text
//! topicwords notes.txt
//! topicwords --count 10 --json notes.txt
//! ```
//!
//! Wrong arguments end the program without output. Any failure while
//! reading or ranking prints one generic error line and exits with status 1.

use std::ffi::OsString;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use tracing::Level;

use topic_words::pipeline::artifacts::KeywordResult;
use topic_words::pipeline::observer::TracingObserver;
use topic_words::{KeywordConfig, KeywordError, Pipeline, StripRule};

/// Trailing-character rule
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Strip {
    /// Strip any last character outside a-z
    Literal,
    /// Strip only a last ASCII punctuation character
    Punctuation,
}

impl From<Strip> for StripRule {
    fn from(strip: Strip) -> Self {
        match strip {
            Strip::Literal => StripRule::Literal,
            Strip::Punctuation => StripRule::AsciiPunctuation,
        }
    }
}

/// Command-line arguments
#[derive(Parser, Debug)]
#[clap(name = "topicwords", version, about = "Finds the most important words in a text file")]
struct Args {
    /// Text file to read.
    file: PathBuf,

    /// Number of words to print.
    #[clap(short = 'n', long, default_value_t = 5)]
    count: usize,

    /// Print the result as JSON with counts and buckets.
    #[clap(long)]
    json: bool,

    /// How to trim the last character of each token.
    #[clap(long, value_enum, default_value = "literal")]
    strip: Strip,

    /// Log to stderr; repeat for more detail.
    #[clap(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn print_result(result: &KeywordResult, json: bool) -> std::io::Result<()> {
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if json {
        serde_json::to_writer_pretty(&mut out, result)?;
        writeln!(out)?;
    } else {
        for word in result.words() {
            writeln!(out, "{word}")?;
        }
    }
    out.flush()
}

fn run(args: &Args) -> Result<KeywordResult, KeywordError> {
    let config = KeywordConfig::default()
        .with_max_words(args.count)
        .with_strip_rule(args.strip.into());
    let pipeline = Pipeline::from_config(config)?;
    pipeline.run_path(&args.file, &mut TracingObserver)
}

/// Parses `argv`, turning every clap failure except help and version into
/// [`KeywordError::Usage`].
fn parse_args<I, T>(argv: I) -> Result<Args, KeywordError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Args::try_parse_from(argv).map_err(|err| match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        _ => KeywordError::Usage(err.to_string()),
    })
}

fn main() -> ExitCode {
    let outcome = parse_args(std::env::args_os()).and_then(|args| {
        init_logging(args.verbose);
        run(&args).and_then(|result| {
            print_result(&result, args.json).map_err(|e| KeywordError::Io {
                path: PathBuf::from("<stdout>"),
                source: e,
            })
        })
    });

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = %err, "extraction failed");
            if let Some(message) = err.user_message() {
                println!("{message}");
            }
            if err.is_usage() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use topic_words::GENERIC_MESSAGE;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["topicwords", "notes.txt"]).unwrap();
        assert_eq!(args.file, PathBuf::from("notes.txt"));
        assert_eq!(args.count, 5);
        assert!(!args.json);
        assert_eq!(args.verbose, 0);
        assert_eq!(StripRule::from(args.strip), StripRule::Literal);
    }

    #[test]
    fn test_args_options() {
        let args = Args::try_parse_from([
            "topicwords", "-n", "3", "--json", "--strip", "punctuation", "-vv", "notes.txt",
        ])
        .unwrap();
        assert_eq!(args.count, 3);
        assert!(args.json);
        assert_eq!(args.verbose, 2);
        assert_eq!(StripRule::from(args.strip), StripRule::AsciiPunctuation);
    }

    #[test]
    fn test_wrong_argument_count_is_an_error() {
        assert!(Args::try_parse_from(["topicwords"]).is_err());
        assert!(Args::try_parse_from(["topicwords", "a.txt", "b.txt"]).is_err());
    }

    #[test]
    fn test_parse_failure_is_a_silent_usage_error() {
        let err = parse_args(["topicwords"]).unwrap_err();
        assert!(matches!(err, KeywordError::Usage(_)));
        assert!(err.is_usage());
        assert_eq!(err.user_message(), None);

        let err = parse_args(["topicwords", "-n", "many", "notes.txt"]).unwrap_err();
        assert!(err.is_usage());
        assert!(parse_args(["topicwords", "notes.txt"]).is_ok());
    }

    #[test]
    fn test_zero_count_is_rejected_at_run() {
        let args = Args::try_parse_from(["topicwords", "-n", "0", "notes.txt"]).unwrap();
        let err = run(&args).unwrap_err();
        assert!(matches!(err, KeywordError::InvalidConfig(_)));
        assert_eq!(err.user_message(), Some(GENERIC_MESSAGE));
    }
}
