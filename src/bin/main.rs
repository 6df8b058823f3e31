use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use excheck::{parser, Config, ExceptionHierarchy, MethodRelation, Validator};

#[derive(Parser)]
#[command(name = "excheck")]
#[command(about = "Check method overrides against the checked-exception rule")]
#[command(version)]
struct Cli {
    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct HierarchyArgs {
    /// TOML config describing the exception hierarchy
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Extra exception declaration files (`class X extends Y {}`)
    #[arg(short, long = "decls", value_name = "FILE")]
    decls: Vec<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate an overriding method header against its parent
    Check {
        /// Parent method header, e.g. "void show() throws IOException"
        #[arg(long, value_name = "HEADER")]
        parent: String,

        /// Overriding method header
        #[arg(long, value_name = "HEADER")]
        child: String,

        /// Report every offending exception instead of the first
        #[arg(long)]
        all: bool,

        /// Treat headers with different parameter lists as overloads
        #[arg(long)]
        relation: bool,

        #[command(flatten)]
        hierarchy: HierarchyArgs,
    },

    /// Print the exception hierarchy
    Tree {
        #[command(flatten)]
        hierarchy: HierarchyArgs,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli.command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

/// Ok(false) means the override was rejected
fn run(command: &Commands) -> Result<bool> {
    match command {
        Commands::Check { parent, child, all, relation, hierarchy } => {
            let hierarchy = load_hierarchy(hierarchy)?;
            let validator = Validator::new(&hierarchy);
            let parent = parser::parse_method(parent).context("invalid parent header")?;
            let child = parser::parse_method(child).context("invalid child header")?;

            // an overload never overrides; `check` still resolves both lists
            if *relation && MethodRelation::between(&parent, &child) != MethodRelation::Override {
                let result = validator.check(&parent, &child)?;
                println!("{result}");
                return Ok(result.is_allowed());
            }

            if *all {
                let violations = validator.diagnose(&parent, &child)?;
                if violations.is_empty() {
                    println!("allowed");
                }
                for v in &violations {
                    println!("rejected: {} ({}): {}", v.offending, v.reason, v);
                }
                return Ok(violations.is_empty());
            }

            let result = validator.validate(&parent, &child)?;
            println!("{result}");
            Ok(result.is_allowed())
        }
        Commands::Tree { hierarchy } => {
            let hierarchy = load_hierarchy(hierarchy)?;
            print!("{}", hierarchy.render_tree());
            Ok(true)
        }
    }
}

fn load_hierarchy(args: &HierarchyArgs) -> Result<ExceptionHierarchy> {
    let config = match &args.config {
        Some(path) => Config::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => Config::default(),
    };
    let mut builder = config.builder()?;
    for path in &args.decls {
        builder.declare_all(&read_decls(path)?);
    }
    Ok(builder.build()?)
}

fn read_decls(path: &Path) -> Result<Vec<parser::ExceptionDecl>> {
    let source = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parser::parse_declarations(&source).with_context(|| format!("parsing {}", path.display()))
}
