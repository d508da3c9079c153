use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use sentinel_scan::predicate::CharPredicate;
use sentinel_scan::{
    AccumulationMode, ExerciseRegistry, LoopConvention, ScanConfig, ScanError, Scanner, Sequence,
    TerminationPolicy,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sentinel-scan", about = "Scan sentinel-terminated sequences and count or filter symbols")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv per-step trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Count symbols satisfying a predicate.
    Count(ScanArgs),
    /// Copy out the symbols satisfying a predicate.
    Filter(ScanArgs),
    /// Run a built-in exercise by name.
    Exercise {
        /// Exercise name (see `list`).
        name: String,
    },
    /// List built-in exercises.
    List,
}

#[derive(Args, Debug)]
struct ScanArgs {
    /// Literal sequence to scan.
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    input: Option<String>,
    /// Read the sequence from a file instead (trailing newline is dropped).
    #[arg(long)]
    file: Option<PathBuf>,
    /// Stop at the first occurrence of this character.
    #[arg(long, short)]
    terminator: Option<String>,
    /// Scan the whole sequence (the default when no terminator is given).
    #[arg(long, conflicts_with = "terminator")]
    at_end: bool,
    /// Predicate: any, vowel, consonant, digit, is:C, not:C, in:CHARS, not-in:CHARS.
    #[arg(long, short, default_value = "any")]
    predicate: String,
    /// Loop shape: lookahead or post-test.
    #[arg(long, default_value = "lookahead")]
    convention: String,
    /// Upper-case the sequence, terminator and predicate operands before scanning.
    #[arg(long)]
    fold_case: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Count(args) => run_scan(args, AccumulationMode::Count, cli.verbose)?,
        Commands::Filter(args) => run_scan(args, AccumulationMode::Collect, cli.verbose)?,
        Commands::Exercise { name } => run_exercise(&name)?,
        Commands::List => run_list(),
    }

    Ok(())
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// A parsed `count`/`filter` invocation, ready to hand to a [`Scanner`].
#[derive(Debug)]
struct PreparedScan {
    sequence: Sequence<char>,
    predicate: CharPredicate,
    config: ScanConfig<char>,
}

fn prepare_scan(args: &ScanArgs, verbosity: u8) -> Result<PreparedScan> {
    let mut sequence = Sequence::from(read_input(args)?);
    let mut terminator = match &args.terminator {
        Some(text) if !args.at_end => Some(parse_terminator(text)?),
        _ => None,
    };
    let mut predicate: CharPredicate = args
        .predicate
        .parse()
        .with_context(|| format!("failed to parse predicate '{}'", args.predicate))?;
    let convention: LoopConvention = args.convention.parse()?;

    if args.fold_case {
        sequence = sequence.to_ascii_uppercase();
        terminator = terminator.map(|c| c.to_ascii_uppercase());
        predicate = predicate.to_ascii_uppercase();
    }

    let policy = match terminator {
        Some(symbol) => TerminationPolicy::StopAtSymbol(symbol),
        None => TerminationPolicy::StopAtEnd,
    };
    let config = ScanConfig::with_policy(policy)
        .with_convention(convention)
        .with_step_tracing(verbosity >= 3);

    Ok(PreparedScan {
        sequence,
        predicate,
        config,
    })
}

fn run_scan(args: ScanArgs, mode: AccumulationMode, verbosity: u8) -> Result<()> {
    let PreparedScan {
        sequence,
        predicate,
        config,
    } = prepare_scan(&args, verbosity)?;
    info!(len = sequence.len(), policy = ?config.policy, convention = %config.convention, ?mode, "starting scan");

    let result = Scanner::new(config).run(&sequence, &predicate, mode);

    println!(
        "{}\t({}; {} examined)",
        result.output,
        result.stop_reason(),
        result.trace.examined_count()
    );

    Ok(())
}

fn run_exercise(name: &str) -> Result<()> {
    let registry = ExerciseRegistry::with_builtin();
    let report = registry
        .run(name)
        .with_context(|| format!("exercise '{name}' failed"))?;
    println!("{report}");
    Ok(())
}

fn run_list() {
    let registry = ExerciseRegistry::with_builtin();
    for info in registry.list() {
        println!("{}\t{}", info.name, info.description);
    }
}

fn read_input(args: &ScanArgs) -> Result<String> {
    match (&args.input, &args.file) {
        (Some(text), _) => Ok(text.clone()),
        (None, Some(path)) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read sequence from {}", path.display()))?;
            Ok(strip_line_ending(&contents).to_string())
        }
        (None, None) => bail!("no input sequence given"),
    }
}

fn parse_terminator(text: &str) -> Result<char, ScanError> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ScanError::InvalidConfiguration(format!(
            "terminator must be exactly one character, got '{text}'"
        ))),
    }
}

fn strip_line_ending(contents: &str) -> &str {
    contents.trim_end_matches(['\r', '\n'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentinel_scan::{ScanOutput, StopReason};
    use test_case::test_case;

    fn scan_args(argv: &[&str]) -> (ScanArgs, u8) {
        let cli = Cli::try_parse_from(argv).expect("valid command line");
        match cli.command {
            Commands::Count(args) | Commands::Filter(args) => (args, cli.verbose),
            other => panic!("expected a scan command, got {other:?}"),
        }
    }

    #[test_case("ZZ" ; "two characters")]
    #[test_case("" ; "empty")]
    #[test_case("ab*" ; "three characters")]
    fn terminator_must_be_one_character(text: &str) {
        let err = parse_terminator(text).unwrap_err();
        assert!(matches!(err, ScanError::InvalidConfiguration(_)), "{err:?}");
    }

    #[test_case("*", '*' ; "ascii")]
    #[test_case("ñ", 'ñ' ; "multibyte")]
    fn single_character_terminator_is_accepted(text: &str, expected: char) {
        assert_eq!(parse_terminator(text).unwrap(), expected);
    }

    #[test_case("ABC*\n", "ABC*" ; "lf")]
    #[test_case("ABC*\r\n", "ABC*" ; "crlf")]
    #[test_case("ABC*", "ABC*" ; "no newline")]
    #[test_case("AB\nC\n", "AB\nC" ; "inner newline kept")]
    fn file_contents_lose_trailing_line_ending(contents: &str, expected: &str) {
        assert_eq!(strip_line_ending(contents), expected);
    }

    #[test]
    fn file_input_is_read_without_line_ending() {
        let path = std::env::temp_dir().join(format!("sentinel-scan-input-{}.txt", std::process::id()));
        std::fs::write(&path, "BAAC*\r\n").unwrap();
        let (args, verbosity) = scan_args(&[
            "sentinel-scan",
            "count",
            "--file",
            path.to_str().unwrap(),
            "-p",
            "is:A",
        ]);
        let prepared = prepare_scan(&args, verbosity);
        std::fs::remove_file(&path).unwrap();

        let prepared = prepared.unwrap();
        assert_eq!(prepared.sequence.to_text(), "BAAC*");
        let result = Scanner::new(prepared.config).count(&prepared.sequence, &prepared.predicate);
        assert_eq!(result.output, 2);
        assert_eq!(result.stop_reason(), StopReason::EndOfSequence);
    }

    #[test]
    fn fold_case_upper_cases_the_terminator() {
        let (args, verbosity) = scan_args(&[
            "sentinel-scan",
            "count",
            "-t",
            "z",
            "--fold-case",
            "-p",
            "consonant",
            "abcz",
        ]);
        let prepared = prepare_scan(&args, verbosity).unwrap();
        assert_eq!(prepared.config.policy, TerminationPolicy::StopAtSymbol('Z'));

        let result = Scanner::new(prepared.config).run(
            &prepared.sequence,
            &prepared.predicate,
            AccumulationMode::Count,
        );
        assert_eq!(result.output, ScanOutput::Count(2));
        assert_eq!(result.stop_reason(), StopReason::Terminator { position: 3 });
    }

    #[test]
    fn without_fold_case_lowercase_terminator_is_not_found() {
        let (args, verbosity) = scan_args(&["sentinel-scan", "count", "-t", "z", "ABCZ"]);
        let prepared = prepare_scan(&args, verbosity).unwrap();
        let result = Scanner::new(prepared.config).count(&prepared.sequence, &prepared.predicate);
        assert_eq!(result.output, 4);
        assert_eq!(result.stop_reason(), StopReason::Exhausted { len: 4 });
    }

    #[test]
    fn multi_character_terminator_is_rejected_on_the_command_line() {
        let (args, verbosity) = scan_args(&["sentinel-scan", "count", "--terminator", "ZZ", "ABCZ"]);
        let err = prepare_scan(&args, verbosity).err().expect("configuration error");
        assert!(matches!(
            err.downcast_ref::<ScanError>(),
            Some(ScanError::InvalidConfiguration(_))
        ));
    }
}
