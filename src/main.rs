use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use modlister::{
    config::{Config, ListOptions},
    model::{ModList, Modpack},
    output::{render, OutputFormat},
    scanner::UnreadableArchivePolicy,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "modlister")]
#[command(
    author,
    version,
    about = "List the mods in a modpack from their mcmod.info metadata"
)]
struct Cli {
    /// Increase log output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every mod archive under the mods directory
    List {
        /// Modpack name shown in the report banner
        modpack: String,

        /// Minecraft version the modpack targets
        mc_version: String,

        /// Write the report to this file instead of stdout
        output: Option<PathBuf>,

        /// Directory to scan (falls back to the configured mods directory)
        root: Option<PathBuf>,

        /// Output format (text, json, table)
        #[arg(short, long)]
        format: Option<String>,

        /// What to do with files that are not readable zip archives
        #[arg(long, value_enum)]
        on_unreadable: Option<UnreadableArchivePolicy>,

        /// Hide the progress bar when writing to a file
        #[arg(long)]
        no_progress: bool,
    },

    /// Show or create config file
    Config {
        /// Generate default config file
        #[arg(long)]
        init: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::List {
            modpack,
            mc_version,
            output,
            root,
            format,
            on_unreadable,
            no_progress,
        } => {
            let config = Config::load().context("Failed to load config file")?;

            let format_str = format.unwrap_or_else(|| config.default_format.clone());
            let format = OutputFormat::from_str(&format_str).map_err(|e| anyhow::anyhow!(e))?;

            let mut scanner = config.scanner();
            if let Some(policy) = on_unreadable {
                scanner.on_unreadable = policy;
            }

            let options = ListOptions {
                modpack: Modpack::new(modpack, mc_version),
                root: config.resolve_root(root.as_deref())?,
                output,
                format,
                scanner,
            };

            let show_progress = !no_progress && options.output.is_some();
            run_list(options, show_progress)
        }
        Commands::Config { init, path } => handle_config(init, path),
    }
}

fn run_list(options: ListOptions, show_progress: bool) -> Result<()> {
    tracing::info!("Scanning {:?}", options.root);

    let archives = options.scanner.collect_archives(&options.root)?;

    let progress = if show_progress {
        let pb = ProgressBar::new(archives.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
                .progress_chars("#>-"),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    let mods = options.scanner.read_archives(&archives, |path| {
        if let Some(ref pb) = progress {
            if let Some(name) = path.file_name() {
                pb.set_message(name.to_string_lossy().into_owned());
            }
            pb.inc(1);
        }
    });

    if let Some(pb) = progress {
        match &mods {
            Ok(mods) => pb.finish_with_message(format!("Read {} mods", mods.len())),
            Err(_) => pb.abandon(),
        }
    }

    let list = ModList::new(options.modpack, mods?);
    render(&list, options.output.as_deref(), options.format)?;

    if let Some(path) = &options.output {
        eprintln!("Mod list written to: {}", path.display());
    }

    Ok(())
}

fn handle_config(init: bool, show_path: bool) -> Result<()> {
    let config_path = Config::config_path();

    if show_path {
        println!("{}", config_path.display());
        return Ok(());
    }

    if init {
        if config_path.exists() {
            println!("Config file already exists at: {}", config_path.display());
            return Ok(());
        }

        let config = Config::default();
        config.save()?;
        println!("Created config file at: {}", config_path.display());
        println!();
        println!("Default configuration:");
        println!("{}", Config::generate_default_config());
        return Ok(());
    }

    if config_path.exists() {
        let content = std::fs::read_to_string(&config_path)?;
        println!("Config file: {}", config_path.display());
        println!();
        println!("{}", content);
    } else {
        println!("No config file found.");
        println!("Run 'modlister config --init' to create one.");
        println!();
        println!("Config path: {}", config_path.display());
    }

    Ok(())
}
