// Chat-style terminal front-end. Same backend as the console binary; only
// the presentation differs. Logs go to a file because stdout belongs to the
// alternate screen.

use anyhow::Result;
use simplelog::WriteLogger;
use std::fs::OpenOptions;
use tally::cli::{self, CliArgs};
use tally::config::Config;
use tally::context::{AppContext, StandardContext};
use tally::session::{LoadReport, Session};
use tally::storage::Storage;

fn main() -> Result<()> {
    let args = CliArgs::parse(std::env::args().skip(1))
        .map_err(|e| anyhow::anyhow!("{}\nTry 'tally-chat --help'", e))?;
    if args.wants_help {
        cli::print_help("tally-chat");
        return Ok(());
    }

    let ctx = StandardContext::new(args.root.clone());
    let config = Config::load_or_default(&ctx)?;
    init_logging(&ctx, &config.log_filter);

    let task_file = match args.file {
        Some(path) => path,
        None => config.resolve_task_file(&ctx)?,
    };
    let (session, report) = Session::open(Storage::new(task_file));

    let mut greeting = vec![
        "Hello! I'm Tally!".to_string(),
        "What can I do for you?".to_string(),
    ];
    match report {
        LoadReport::Loaded { count, skipped } if config.show_load_summary => {
            greeting.push(format!("Tasks loaded successfully from storage ({}).", count));
            if skipped > 0 {
                greeting.push(format!("Skipped {} unreadable lines.", skipped));
            }
        }
        LoadReport::Failed => greeting.push(
            "Warning: Could not load tasks from storage. Starting with empty list.".to_string(),
        ),
        _ => {}
    }

    tally::tui::run(session, greeting)
}

fn init_logging(ctx: &dyn AppContext, filter: &str) {
    let level = filter.parse().unwrap_or(log::LevelFilter::Info);
    if let Ok(path) = ctx.get_log_file_path()
        && let Ok(file) = OpenOptions::new().create(true).append(true).open(path)
    {
        let _ = WriteLogger::init(level, simplelog::Config::default(), file);
    }
}
