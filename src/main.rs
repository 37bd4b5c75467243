//! onto-shop CLI: SHOP program generator for planning ontologies.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};

use onto_shop::config::GeneratorConfig;
use onto_shop::error::ShopError;
use onto_shop::export::KnowledgeExport;
use onto_shop::generator::{Generator, Program};
use onto_shop::loader::{self, InputFormat};

#[derive(Parser)]
#[command(
    name = "onto-shop",
    version,
    about = "Generate SHOP domains and problems from a planning ontology"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every domain and problem definition as SHOP text.
    Generate {
        /// Knowledge-base document (Turtle, N-Triples, RDF/XML, N-Quads, TriG or JSON).
        input: PathBuf,

        /// Input format; guessed from the extension when omitted.
        #[arg(long)]
        format: Option<InputFormat>,

        /// TOML generator configuration.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write the program here instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,

        /// Write `defdomain` forms to a separate file.
        #[arg(long)]
        domain_out: Option<PathBuf>,

        /// Write `defproblem` forms to a separate file.
        #[arg(long)]
        problem_out: Option<PathBuf>,

        /// Fail on ambiguous specialization, negation or domain targets.
        #[arg(long)]
        strict: bool,

        /// Render units on the rayon thread pool.
        #[arg(long)]
        parallel: bool,
    },

    /// List the domain and problem definitions of a knowledge base.
    Inspect {
        /// Knowledge-base document.
        input: PathBuf,

        /// Input format; guessed from the extension when omitted.
        #[arg(long)]
        format: Option<InputFormat>,

        /// TOML generator configuration.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Emit JSON instead of a text listing.
        #[arg(long)]
        json: bool,
    },
}

fn load_config(path: Option<&Path>) -> Result<GeneratorConfig> {
    match path {
        Some(p) => Ok(GeneratorConfig::load(p)?),
        None => Ok(GeneratorConfig::default()),
    }
}

fn write_text(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(p) => std::fs::write(p, text).into_diagnostic(),
        None => std::io::stdout()
            .lock()
            .write_all(text.as_bytes())
            .into_diagnostic(),
    }
}

/// Report every failed unit and fail if there was one.
fn report_failures(program: Program) -> Result<()> {
    let total = program.units().len();
    let mut failed = 0usize;
    for unit in program.into_units() {
        if let Err(e) = unit.output {
            failed += 1;
            eprintln!("{:?}", miette::Report::new(ShopError::from(e)));
        }
    }
    if failed > 0 {
        miette::bail!("{failed} of {total} units could not be rendered");
    }
    Ok(())
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            format,
            config,
            output,
            domain_out,
            problem_out,
            strict,
            parallel,
        } => {
            let mut config = load_config(config.as_deref())?;
            config.strict_ambiguity |= strict;
            config.parallel |= parallel;

            let kb = loader::load_path(&input, format, &config)?;
            let program = Generator::new(&kb, config).generate();

            let domains = program.domain_text();
            let problems = program.problem_text();
            let mut rest = String::new();
            match &domain_out {
                Some(path) => write_text(Some(path.as_path()), &domains)?,
                None => rest.push_str(&domains),
            }
            match &problem_out {
                Some(path) => write_text(Some(path.as_path()), &problems)?,
                None => rest.push_str(&problems),
            }
            if output.is_some() || domain_out.is_none() || problem_out.is_none() {
                write_text(output.as_deref(), &rest)?;
            }

            report_failures(program)?;
        }

        Commands::Inspect {
            input,
            format,
            config,
            json,
        } => {
            let config = load_config(config.as_deref())?;
            let kb = loader::load_path(&input, format, &config)?;
            let export = KnowledgeExport::from_kb(&kb);

            if json {
                let json = serde_json::to_string_pretty(&export).into_diagnostic()?;
                println!("{json}");
            } else if export.domains.is_empty() && export.problems.is_empty() {
                println!("No domain or problem definitions found.");
            } else {
                print!("{}", export.to_text());
            }
        }
    }

    Ok(())
}
