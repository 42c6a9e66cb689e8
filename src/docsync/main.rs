use clap::Parser;
use colored::*;
use docsync::api::{CmdMessage, CmdResult, DocsyncApi, EntryReport, EntryStatus, MessageLevel};
use docsync::config::DocsyncConfig;
use docsync::error::{DocsyncError, Result};
use docsync::init::initialize;
use docsync::store::fs::FileStore;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut api = init_api(&cli)?;

    match cli.command {
        Some(Commands::Sync) | None => handle_sync(&mut api),
        Some(Commands::Check) => handle_check(&api),
        Some(Commands::List) => handle_list(&api),
        Some(Commands::Config) => handle_config(&api),
        Some(Commands::Init { force }) => handle_init(&api, force),
    }
}

/// Logs go to stderr; `RUST_LOG` takes precedence over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn init_api(cli: &Cli) -> Result<DocsyncApi<FileStore>> {
    let dir = match &cli.dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };

    let api = initialize(&dir)?;
    Ok(match cli.match_mode {
        Some(mode) => api.with_match_mode(mode.into()),
        None => api,
    })
}

fn handle_sync(api: &mut DocsyncApi<FileStore>) -> Result<()> {
    let result = api.sync()?;
    print_reports(&result);
    print_messages(&result.messages);
    Ok(())
}

fn handle_check(api: &DocsyncApi<FileStore>) -> Result<()> {
    let result = api.check()?;
    print_reports(&result);
    print_messages(&result.messages);

    let outdated = result.outdated().count();
    if outdated > 0 {
        return Err(DocsyncError::Api(format!(
            "{} readme(s) out of date, run `docsync sync`",
            outdated
        )));
    }
    Ok(())
}

fn handle_list(api: &DocsyncApi<FileStore>) -> Result<()> {
    let result = api.list()?;
    print_reports(&result);
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(api: &DocsyncApi<FileStore>) -> Result<()> {
    let result = api.config()?;
    if let Some(config) = &result.config {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(api: &DocsyncApi<FileStore>, force: bool) -> Result<()> {
    let result = api.init(force)?;
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

fn print_reports(result: &CmdResult) {
    let width = result
        .reports
        .iter()
        .map(|r| r.source.display().to_string().len())
        .max()
        .unwrap_or(0);

    for report in &result.reports {
        println!(
            "{:<width$}  {}  {}{}",
            report.source.display().to_string(),
            "->".dimmed(),
            report.readme.display(),
            status_suffix(report),
            width = width
        );
    }
}

fn status_suffix(report: &EntryReport) -> String {
    match report.status {
        None => String::new(),
        Some(EntryStatus::Written) => format!("  {}", "written".green()),
        Some(EntryStatus::UpToDate) => format!("  {}", "up to date".dimmed()),
        Some(EntryStatus::Stale) => format!("  {}", "stale".yellow()),
        Some(EntryStatus::Missing) => format!("  {}", "missing".red()),
    }
}

fn print_config(config: &DocsyncConfig) {
    println!("path_prefix = {}", config.path_prefix);
    println!("apps_dir = {}", config.apps_dir.display());
    println!("readme_name = {}", config.readme_name);
    println!("match_mode = {}", config.match_mode.as_str());
    println!("entries = {}", config.entries.len());
}
