use anyhow::Context;
use clap::Parser;
use datafetch_core::{
    console::Console,
    manifest::{Manifest, DEFAULT_MANIFEST},
    requirements::check_requirements,
    runner::Runner,
    FetchError,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "datafetch",
    about = "Download the datasets described in a sources manifest",
    version
)]
struct Cli {
    /// Agree to all licenses and skip every prompt
    #[arg(long)]
    yes: bool,

    /// Manifest to read (JSON, or YAML with a .yaml/.yml extension)
    #[arg(long, short = 'm', env = "DATAFETCH_MANIFEST", default_value = DEFAULT_MANIFEST)]
    manifest: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let manifest = Manifest::load(&cli.manifest)
        .with_context(|| format!("failed to load {}", cli.manifest.display()))?;

    println!("==> Testing requirements");
    if let Err(e) = check_requirements(&manifest.settings.pager) {
        if let FetchError::MissingExecutable { name, hint } = &e {
            println!("==> Fatal error: Missing {name} executable.");
            println!("{hint}");
            std::process::exit(1);
        }
        return Err(e.into());
    }
    println!("==> All requirements met.");

    let cwd = std::env::current_dir().context("cannot determine current directory")?;
    let base = cli
        .manifest
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| cwd.clone());

    let mut runner = Runner::new(
        manifest.output_root(&cwd),
        base,
        manifest.settings.clone(),
        Console::stdio(cli.yes),
    )
    .context("failed to initialize runner")?;

    let summary = runner.run(&manifest)?;
    tracing::info!(
        completed = summary.completed.len(),
        skipped = summary.skipped.len(),
        failed = summary.failed.len(),
        root = %runner.root().display(),
        "run finished"
    );
    Ok(())
}
