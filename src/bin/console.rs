// Line-oriented console front-end: reads one command per line from stdin,
// prints framed responses to stdout. All banner text lives here; the core
// only produces task-level strings.

use anyhow::Result;
use simplelog::{ColorChoice, TermLogger, TerminalMode};
use std::io::{self, BufRead};
use tally::cli::{self, CliArgs};
use tally::config::Config;
use tally::context::StandardContext;
use tally::session::{LoadReport, Response, Session};
use tally::storage::Storage;

const DIVIDER: &str = "____________________________________________________________";

fn main() -> Result<()> {
    let args =
        CliArgs::parse(std::env::args().skip(1)).map_err(|e| anyhow::anyhow!("{}\nTry 'tally --help'", e))?;
    if args.wants_help {
        cli::print_help("tally");
        return Ok(());
    }

    let ctx = StandardContext::new(args.root.clone());
    let config = Config::load_or_default(&ctx)?;
    init_logging(&config.log_filter);

    let task_file = match args.file {
        Some(path) => path,
        None => config.resolve_task_file(&ctx)?,
    };
    let (mut session, report) = Session::open(Storage::new(task_file));

    show_block(&["Hello! I'm Tally!".to_string(), "What can I do for you?".to_string()]);
    match report {
        LoadReport::Loaded { count, skipped } if config.show_load_summary => {
            let mut lines = vec![format!("Tasks loaded successfully from storage ({}).", count)];
            if skipped > 0 {
                lines.push(format!("Skipped {} unreadable lines.", skipped));
            }
            show_block(&lines);
        }
        LoadReport::Failed => show_block(&[
            "Warning: Could not load tasks from storage. Starting with empty list.".to_string(),
        ]),
        _ => {}
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match session.handle(&line) {
            Ok(Response::Bye) => {
                if let Err(e) = session.save() {
                    show_block(&[e.to_string()]);
                }
                show_block(&Response::Bye.lines());
                return Ok(());
            }
            Ok(response) => show_block(&response.lines()),
            Err(e) => show_block(&[format!("OOPS!!! {}", e)]),
        }
    }

    // Input source closed without a `bye`; save anyway so a piped session
    // still persists its tasks.
    if let Err(e) = session.save() {
        show_block(&[e.to_string()]);
    }
    show_block(&Response::Bye.lines());
    Ok(())
}

fn show_block(lines: &[String]) {
    println!("{}", DIVIDER);
    for line in lines {
        println!("{}", line);
    }
    println!("{}", DIVIDER);
    println!();
}

fn init_logging(filter: &str) {
    let level = filter.parse().unwrap_or(log::LevelFilter::Info);
    // Stderr keeps log lines out of the piped/captured conversation.
    let _ = TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}
