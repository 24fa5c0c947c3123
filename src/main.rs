use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use termkit_builder::{builtin_manifests, BuilderOptions, ConfigNode, PanelBuilder};
use termkit_core::ComponentRegistry;

#[derive(Parser)]
#[command(name = "termkit")]
#[command(about = "Validate and build terminal kit widget trees", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v, -vv); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a panel config against the registered manifests
    Validate(ValidateArgs),
    /// Build a panel config into a widget tree
    Build(BuildArgs),
    /// List the registered component manifests
    Manifests(ManifestsArgs),
}

#[derive(Args)]
struct RegistryArgs {
    /// Extra manifest file (one manifest or an array), loaded after the built-ins
    #[arg(short, long)]
    manifests: Option<PathBuf>,
}

#[derive(Args)]
struct ValidateArgs {
    /// Panel config JSON file
    config: PathBuf,

    #[command(flatten)]
    registry: RegistryArgs,
}

#[derive(Args)]
struct BuildArgs {
    /// Panel config JSON file
    config: PathBuf,

    #[command(flatten)]
    registry: RegistryArgs,

    /// Fail on validation errors instead of logging them
    #[arg(long)]
    strict: bool,

    /// Skip manifest validation
    #[arg(long)]
    no_validate: bool,

    /// Trace each build step (shown with -vv)
    #[arg(long)]
    debug: bool,

    /// Deepest accepted nesting level
    #[arg(long)]
    max_depth: Option<usize>,

    /// Write the tree here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct ManifestsArgs {
    #[command(flatten)]
    registry: RegistryArgs,

    /// Print full manifests as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Validate(args) => validate(args),
        Commands::Build(args) => build(args).map(|()| ExitCode::SUCCESS),
        Commands::Manifests(args) => manifests(args).map(|()| ExitCode::SUCCESS),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

fn load_registry(args: &RegistryArgs) -> Result<Arc<ComponentRegistry>> {
    let registry = ComponentRegistry::with_manifests(builtin_manifests())
        .context("failed to register built-in manifests")?;

    if let Some(path) = &args.manifests {
        let json = read(path)?;
        let count = registry
            .load_json(&json)
            .with_context(|| format!("failed to load manifests from {}", path.display()))?;
        tracing::info!(count, path = %path.display(), "loaded manifests");
    }

    Ok(Arc::new(registry))
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn load_config(path: &Path) -> Result<ConfigNode> {
    let json = read(path)?;
    ConfigNode::from_json(&json).with_context(|| format!("invalid panel config in {}", path.display()))
}

fn validate(args: ValidateArgs) -> Result<ExitCode> {
    let registry = load_registry(&args.registry)?;
    let config = load_config(&args.config)?;

    let builder = PanelBuilder::with_registry(registry);
    let result = builder.validate(&config);
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(if result.valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn build(args: BuildArgs) -> Result<()> {
    let registry = load_registry(&args.registry)?;
    let config = load_config(&args.config)?;

    let mut options = BuilderOptions::default();
    if args.strict {
        options = options.strict();
    }
    if args.no_validate {
        options = options.without_validation();
    }
    if args.debug {
        options = options.debug();
    }
    if let Some(max_depth) = args.max_depth {
        options = options.with_max_depth(max_depth);
    }

    let builder = PanelBuilder::new(registry, options);
    let tree = builder
        .build(&config)
        .with_context(|| format!("failed to build {}", args.config.display()))?;
    let json = tree.to_json()?;

    match &args.output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote widget tree");
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn manifests(args: ManifestsArgs) -> Result<()> {
    let registry = load_registry(&args.registry)?;

    if args.json {
        let manifests: Vec<_> = registry
            .tag_names()
            .iter()
            .filter_map(|tag| registry.get(tag))
            .collect();
        println!("{}", serde_json::to_string_pretty(&manifests)?);
    } else {
        for tag in registry.tag_names() {
            println!("{tag}");
        }
    }
    Ok(())
}
