//! `xsd-skeleton`: write a skeleton XML document for an XSD schema.
//!
//! Exit codes: 0 on success, 2 for invalid arguments, otherwise the code
//! given by [`SkeletonError::exit_code`].

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use tracing::error;
use tracing_subscriber::EnvFilter;
use xsdskeleton::{
    ChoicePolicy, DEFAULT_MAX_DEPTH, RootWrapper, SkeletonConfig, SkeletonError,
    generate_skeleton_file, generate_skeleton_file_to,
};

/// CLI-specific choice policy with clap argument parsing support.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliChoicePolicy {
    /// Emit every alternative of a choice.
    All,
    /// Emit only the first alternative of a choice.
    First,
}

impl From<CliChoicePolicy> for ChoicePolicy {
    fn from(policy: CliChoicePolicy) -> Self {
        match policy {
            CliChoicePolicy::All => Self::AllBranches,
            CliChoicePolicy::First => Self::FirstBranch,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "xsd-skeleton")]
#[command(about = "Generate a skeleton XML document from an XSD schema")]
struct Cli {
    /// Path to the XSD schema.
    input: PathBuf,
    /// Output path (default: the input path with an .xml extension).
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Maximum synthesis depth before giving up on recursive schemas (1 to 8192).
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
    /// Element name collapsed into the document root (default: the root's own name).
    #[arg(long, conflicts_with = "no_root_collapse")]
    root_wrapper: Option<String>,
    /// Never collapse a wrapper element into the document root.
    #[arg(long)]
    no_root_collapse: bool,
    /// Attribute stamped on the root element, as KEY=VALUE. May be repeated.
    #[arg(long = "root-attribute", value_name = "KEY=VALUE", value_parser = parse_attribute)]
    root_attributes: Vec<(String, String)>,
    /// How to render xs:choice groups.
    #[arg(long, value_enum, default_value = "all")]
    choice: CliChoicePolicy,
    /// Increase log verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> SkeletonConfig {
        let root_wrapper = match (&self.root_wrapper, self.no_root_collapse) {
            (_, true) => RootWrapper::Disabled,
            (Some(name), false) => RootWrapper::Named(name.clone()),
            (None, false) => RootWrapper::RootName,
        };

        let mut config = SkeletonConfig::new()
            .with_max_depth(self.max_depth)
            .with_root_wrapper(root_wrapper)
            .with_choice_policy(self.choice.into());
        for (name, value) in self.root_attributes.iter() {
            config = config.with_root_attribute(name, value);
        }

        config
    }
}

fn parse_attribute(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn report(err: &SkeletonError) {
    error!("{err}");
    eprintln!("error: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.config();
    let result = match &cli.output {
        Some(output) => generate_skeleton_file_to(&cli.input, output, &config),
        None => generate_skeleton_file(&cli.input, &config),
    };

    match result {
        Ok(path) => {
            println!("{}", path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            report(&err);
            ExitCode::from(err.exit_code())
        }
    }
}
