use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use constgen_codegen::Generator;
use constgen_spec::{load_document, Document, Target};

#[derive(Parser)]
#[command(name = "constgen", about = "Render shared constants and enums into many languages")]
#[command(version, propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate every configured output file
    Generate {
        /// Definition file (.yaml, .yml or .json)
        input: PathBuf,
        /// Only generate these targets (repeat the flag or separate with commas)
        #[arg(long, value_delimiter = ',')]
        only: Vec<Target>,
        /// Resolve relative output paths against this directory
        #[arg(long)]
        base_dir: Option<PathBuf>,
        /// Print generated content instead of writing files
        #[arg(long)]
        dry_run: bool,
    },
    /// Load and validate a definition file
    Check {
        /// Definition file (.yaml, .yml or .json)
        input: PathBuf,
    },
    /// List supported target identifiers
    Targets,
    /// Print the JSON Schema of the definition file
    Schema,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Command::Generate {
            input,
            only,
            base_dir,
            dry_run,
        } => cmd_generate(&input, &only, base_dir.as_deref(), dry_run),
        Command::Check { input } => cmd_check(&input),
        Command::Targets => cmd_targets(),
        Command::Schema => cmd_schema(),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::from(1)
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn load(input: &Path) -> Result<Document> {
    load_document(input).with_context(|| format!("Failed to load '{}'", input.display()))
}

fn cmd_generate(
    input: &Path,
    only: &[Target],
    base_dir: Option<&Path>,
    dry_run: bool,
) -> Result<bool> {
    let document = load(input)?;

    let mut generator = Generator::new(&document);
    if !only.is_empty() {
        generator = generator.only(only.iter().copied());
    }
    if let Some(dir) = base_dir {
        generator = generator.base_dir(dir);
    }

    if dry_run {
        for (target, path, content) in generator.preview()? {
            println!("{} {} {}", "→".dimmed(), target.to_string().bold(), path.display());
            print!("{content}");
            println!();
        }
        return Ok(true);
    }

    let outcomes = generator.generate()?;
    let mut failed = 0;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(()) => println!(
                "{} {:<10} {}",
                "✓".green().bold(),
                outcome.target.id(),
                outcome.path.display()
            ),
            Err(e) => {
                failed += 1;
                println!("{} {:<10} {e}", "✗".red().bold(), outcome.target.id());
            }
        }
    }

    println!();
    if failed == 0 {
        println!("{} Generated {} file(s)", "✓".green().bold(), outcomes.len());
        Ok(true)
    } else {
        println!(
            "{} {} of {} target(s) failed",
            "✗".red().bold(),
            failed,
            outcomes.len()
        );
        Ok(false)
    }
}

fn cmd_check(input: &Path) -> Result<bool> {
    let document = load(input)?;

    println!("{}", "Definitions".bold().underline());
    println!("  Constants: {}", document.constants().len());
    println!("  Enums:     {}", document.enums().len());

    println!();
    println!("{}", "Targets".bold().underline());
    for (target, output) in document.outputs() {
        println!("  {:<10} {}", target.id(), output.path().display());
    }

    println!();
    println!("{} Definition file is valid", "✓".green().bold());
    Ok(true)
}

fn cmd_targets() -> Result<bool> {
    for target in Target::ALL {
        println!("{}", target.id());
    }
    Ok(true)
}

fn cmd_schema() -> Result<bool> {
    let schema = constgen_spec::schema_def::generate_document_schema();
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(true)
}
