//! doxbuild CLI - versioned documentation build driver
//!
//! Usage: doxbuild <COMMAND>
//!
//! Commands:
//!   build   Run the documentation generator and link the index alias
//!   clean   Remove generated output and the alias

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use doxbuild::config::{Config, ConfigWarning, CONFIG_FILE};
use doxbuild::error::DoxbuildError;
use doxbuild::orchestrator::{self, BuildOptions, CleanOptions};

/// Environment variable supplying the project directory when
/// `--project-dir` is not given.
const PROJECT_DIR_ENV: &str = "DOXBUILD_PROJECT_DIR";

/// doxbuild - versioned documentation build driver
#[derive(Parser, Debug)]
#[command(name = "doxbuild")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format for CI
    #[arg(long, default_value = "false")]
    json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to doxbuild.toml (defaults to ./doxbuild.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the documentation generator and link the index alias
    Build {
        /// Directory of the documented package (holds the version marker)
        #[arg(short, long)]
        project_dir: Option<PathBuf>,

        /// Dry run - read inputs and check preconditions, mutate nothing
        #[arg(long)]
        dry_run: bool,
    },

    /// Remove generated output and the alias
    Clean {
        /// Dry run - list removal targets without removing them
        #[arg(long)]
        dry_run: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Single environment read at the process boundary; everything below
    // takes the project directory as an explicit parameter.
    let env_project_dir = std::env::var_os(PROJECT_DIR_ENV).map(PathBuf::from);

    let result = match cli.command {
        Commands::Build {
            ref project_dir,
            dry_run,
        } => cmd_build(
            &cli,
            project_dir.clone().or(env_project_dir),
            dry_run,
        ),
        Commands::Clean { dry_run } => cmd_clean(&cli, dry_run),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("✗ Error: {err}");
            let code = err
                .downcast_ref::<DoxbuildError>()
                .map(DoxbuildError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code as u8)
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
    let (config, warnings) = Config::load_or_default(&path)?;
    if !cli.json {
        print_config_warnings(&warnings);
    }
    Ok(config)
}

fn print_config_warnings(warnings: &[ConfigWarning]) {
    for warning in warnings {
        eprintln!(
            "⚠ Unknown key '{}' in {} (ignored)",
            warning.key,
            warning.file.display()
        );
    }
}

fn cmd_build(cli: &Cli, project_dir: Option<PathBuf>, dry_run: bool) -> Result<()> {
    let config = load_config(cli)?;

    let project_dir = project_dir.ok_or_else(|| {
        anyhow::anyhow!(
            "no project directory: pass --project-dir or set {PROJECT_DIR_ENV}"
        )
    })?;

    if !cli.json {
        println!("📚 Doxbuild Build");
        println!("Project: {}", project_dir.display());
        println!("Base config: {}", config.generator.base_config.display());
        if dry_run {
            println!("Mode: Dry run");
        }
    }

    let options = BuildOptions { dry_run };
    let report = orchestrator::build(&config, &project_dir, &options)?;

    if cli.json {
        let output = serde_json::json!({
            "event": "build",
            "status": if dry_run { "dry-run" } else { "success" },
            "version": report.version,
            "output_dir": report.output_dir.display().to_string(),
            "alias": report.alias.as_ref().map(|p| p.display().to_string()),
        });
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    println!("\n✓ Version: {}", report.version);

    if dry_run {
        println!("✓ Composed configuration stream:\n");
        print!("{}", report.composed);
        return Ok(());
    }

    if cli.verbose > 0 && !report.generator_stdout.is_empty() {
        println!("\n{}", report.generator_stdout.trim_end());
    }

    println!("✓ Generated: {}", report.output_dir.display());
    if let Some(alias) = &report.alias {
        println!(
            "✓ Linked: {} -> {}",
            alias.display(),
            config.index_target().display()
        );
    }
    println!();

    Ok(())
}

fn cmd_clean(cli: &Cli, dry_run: bool) -> Result<()> {
    let config = load_config(cli)?;

    if !cli.json {
        println!("🧹 Doxbuild Clean");
        if dry_run {
            println!("Mode: Dry run");
        }
    }

    let options = CleanOptions { dry_run };
    let report = orchestrator::clean(&config, &options)?;

    if cli.json {
        let output = serde_json::json!({
            "event": "clean",
            "status": if dry_run { "dry-run" } else { "success" },
            "removed": report.removed.iter().map(|p| p.display().to_string()).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    if report.removed.is_empty() {
        println!("\nNothing to remove.");
    } else {
        let verb = if dry_run { "Would remove" } else { "Removed" };
        println!();
        for path in &report.removed {
            println!("✓ {}: {}", verb, path.display());
        }
    }
    println!();

    Ok(())
}
