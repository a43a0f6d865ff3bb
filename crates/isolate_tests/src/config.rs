// crates/isolate_tests/src/config.rs

use anyhow::{anyhow, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

use isolate_common::markers::DOCS_MODE_ARG;
use isolate_common::EncodingPolicy;
use raw_literal_extractor::UnterminatedPolicy;

pub const OUTPUT_DIR_ENV: &str = "ISOLATE_TESTS_OUTPUT_DIR";
pub const ENCODING_ENV: &str = "ISOLATE_TESTS_ENCODING";
pub const UNTERMINATED_ENV: &str = "ISOLATE_TESTS_UNTERMINATED";
pub const LOG_ENV: &str = "ISOLATE_TESTS_LOG";

/// Centralized runtime configuration composed from CLI + environment.
/// Flags win over environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub input: PathBuf,
    pub docs: bool,
    pub named: bool,
    pub inline: bool,
    pub output_dir: PathBuf,
    pub encoding: EncodingPolicy,
    pub unterminated: UnterminatedPolicy,
    pub verbose: bool,
}

impl AppConfig {
    /// Defaults for extracting `input` into the current directory.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            docs: false,
            named: false,
            inline: false,
            output_dir: PathBuf::from("."),
            encoding: EncodingPolicy::default(),
            unterminated: UnterminatedPolicy::default(),
            verbose: false,
        }
    }

    /// Builds the config from parsed arguments, consulting `env` for
    /// settings not given on the command line.
    pub fn from_matches<F>(matches: &ArgMatches, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let input = matches
            .get_one::<PathBuf>("path")
            .cloned()
            .ok_or_else(|| anyhow!("missing input path"))?;

        let mut config = AppConfig::new(input);
        config.docs = matches
            .get_one::<String>("mode")
            .map(|m| m == DOCS_MODE_ARG)
            .unwrap_or(false);
        config.named = matches.get_flag("named");
        config.inline = matches.get_flag("inline");
        config.verbose = matches.get_flag("verbose");

        if let Some(dir) = matches
            .get_one::<PathBuf>("output_dir")
            .cloned()
            .or_else(|| env(OUTPUT_DIR_ENV).map(PathBuf::from))
        {
            config.output_dir = dir;
        }

        if let Some(policy) = setting(matches, "encoding", &env, ENCODING_ENV) {
            config.encoding = policy.parse::<EncodingPolicy>().map_err(|e| anyhow!(e))?;
        }
        if let Some(policy) = setting(matches, "unterminated", &env, UNTERMINATED_ENV) {
            config.unterminated = policy.parse::<UnterminatedPolicy>().map_err(|e| anyhow!(e))?;
        }

        Ok(config)
    }
}

fn setting<F>(matches: &ArgMatches, id: &str, env: &F, var: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    matches.get_one::<String>(id).cloned().or_else(|| env(var))
}

pub fn build_cli() -> Command {
    Command::new("isolate_tests")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Writes every embedded contract snippet of C++ tests or reST docs into its own .sol file")
        .arg(
            Arg::new("path")
                .help("File or directory to extract from")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .index(1),
        )
        .arg(
            Arg::new("mode")
                .help("Pass `docs` to extract indented listings from documentation")
                .value_parser([DOCS_MODE_ARG])
                .index(2),
        )
        .arg(
            Arg::new("named")
                .long("named")
                .help("Name files <NNN>_<test case>.sol instead of by content hash")
                .action(ArgAction::SetTrue)
                .conflicts_with("mode"),
        )
        .arg(
            Arg::new("inline")
                .long("inline")
                .help("Literal content may start on the opener line")
                .action(ArgAction::SetTrue)
                .conflicts_with("mode"),
        )
        .arg(
            Arg::new("output_dir")
                .long("output-dir")
                .num_args(1)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Directory to write snippets into (default: current directory)"),
        )
        .arg(
            Arg::new("encoding")
                .long("encoding")
                .num_args(1)
                .help("Invalid UTF-8 handling: discard, replace or strict"),
        )
        .arg(
            Arg::new("unterminated")
                .long("unterminated")
                .num_args(1)
                .help("Unterminated raw literal handling: warn or error"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue),
        )
}
