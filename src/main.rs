//! ExportDash - Main CLI Entry Point

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use exportdash::{
    cli::{parse_status_filter, Args, Commands, Config, Verbosity},
    repl::{DashboardSession, DisplayManager, ReplSession},
};
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run the interactive dashboard
fn run_repl(session: DashboardSession, display: DisplayManager, verbosity: Verbosity) -> Result<()> {
    let mut repl = ReplSession::new(session, display)?;
    repl.set_verbose(verbosity.show_events());
    repl.show_welcome(VERSION);

    loop {
        match repl.read_input() {
            Ok(Some(input)) => match repl.handle_input(&input) {
                Ok(true) => continue,
                Ok(false) => break,
                Err(e) => repl.display().show_error(&e.to_string()),
            },
            Ok(None) => {
                // EOF (Ctrl-D)
                break;
            }
            Err(e) => {
                if e.to_string().contains("Interrupted") {
                    println!("\nUse /exit to quit gracefully");
                    continue;
                } else {
                    return Err(e);
                }
            }
        }
    }

    if verbosity.show_progress() {
        repl.session().telemetry().display_summary();
    }

    Ok(())
}

/// Print checklist, progress, summary and schedule once
fn show_once(session: &mut DashboardSession, display: &DisplayManager, statuses: &[String]) -> Result<()> {
    let filter = parse_status_filter(statuses)?;
    session.set_filter(filter);

    let checklist = session.checklist();
    display.render_checklist(&session.visible_rows(), session.filter(), checklist.len());
    display.render_progress(&checklist.completion_stats(), &checklist.status_counts());
    display.render_advice(&session.advise(None));
    display.render_schedule(&checklist.schedule());
    Ok(())
}

fn show_config(config: &Config) -> Result<()> {
    println!("{}", "Effective configuration".bold().cyan());
    if let Some(path) = Config::default_path() {
        println!("{}", format!("# default location: {}", path.display()).dimmed());
    }
    println!("{}", config.to_toml()?);
    Ok(())
}

fn init_logging(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("exportdash={}", verbosity.log_directive())));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    let verbosity = args.verbosity();
    init_logging(verbosity);

    let config = Config::load(args.config.as_deref())?;
    if !config.display.color_output {
        colored::control::set_override(false);
    }

    let anchor = args.anchor_date()?;
    let display = DisplayManager::new()
        .with_progress_bars(config.display.show_progress_bars && verbosity.show_progress());
    let mut session = DashboardSession::new(anchor, &config);

    match args.command.clone().unwrap_or(Commands::Start) {
        Commands::Start => run_repl(session, display, verbosity)?,
        Commands::Show { statuses } => show_once(&mut session, &display, &statuses)?,
        Commands::Export { out } => {
            let (path, bytes) = session.export(out.as_deref())?;
            display.show_export(&path, bytes);
        }
        Commands::Config => show_config(&config)?,
    }

    Ok(())
}
