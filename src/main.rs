use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use git_tag_version::config;
use git_tag_version::ui;
use git_tag_version::{Resolution, VersionResolver};

#[derive(clap::Parser)]
#[command(
    name = "git-tag-version",
    about = "Derive a version string from the tags on the current git commit"
)]
struct Args {
    #[arg(
        default_value = ".",
        help = "Build descriptor file (or directory) whose repository is inspected"
    )]
    descriptor: PathBuf,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Version to print when none can be derived from git")]
    fallback: Option<String>,

    #[arg(long, help = "Print debug diagnostics to stderr")]
    verbose: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose);

    if args.version {
        println!("git-tag-version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = config::load_config(args.config.as_deref())
        .context("Error loading config")?;

    let resolution = VersionResolver::new(&config).resolve_path(&args.descriptor);

    if let Resolution::Resolved(version) = &resolution {
        println!("{}", version);
        return Ok(());
    }

    let reason = ui::describe_resolution(&resolution).unwrap_or_default();
    match args.fallback {
        Some(fallback) => {
            if args.verbose {
                ui::display_status(&reason);
            }
            println!("{}", resolution.apply(&fallback));
            Ok(())
        }
        None => {
            ui::display_error(&reason);
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}
