// File: ./src/cli.rs
//! Shared command-line interface logic, like argument handling and help.

use std::path::PathBuf;

/// Arguments shared by both front-ends.
#[derive(Debug, Default)]
pub struct CliArgs {
    pub root: Option<PathBuf>,
    pub file: Option<PathBuf>,
    pub wants_help: bool,
}

impl CliArgs {
    /// Parses `--root/-r`, `--file` and `--help/-h`. Unknown flags are an
    /// error so typos don't silently start a session against the default
    /// data directory.
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self, String> {
        let mut parsed = Self::default();
        let mut iter = args.into_iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "-h" | "--help" | "help" => parsed.wants_help = true,
                "-r" | "--root" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| "--root requires a path argument".to_string())?;
                    parsed.root = Some(PathBuf::from(value));
                }
                "--file" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| "--file requires a path argument".to_string())?;
                    parsed.file = Some(PathBuf::from(value));
                }
                other => return Err(format!("Unknown argument: {}", other)),
            }
        }
        Ok(parsed)
    }
}

pub fn print_help(binary_name: &str) {
    let is_chat = binary_name.contains("chat");

    println!(
        "Tally v{} - A personal task-tracking assistant ({})",
        env!("CARGO_PKG_VERSION"),
        if is_chat { "chat view" } else { "console" }
    );
    println!();
    println!("USAGE:");
    println!("    {} [--root <path>] [--file <path>]", binary_name);
    println!("    {} --help", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    -r, --root <path>     Use a different directory for config and data.");
    println!("    --file <path>         Use a specific task file instead of the default.");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("COMMANDS (one per line inside the app):");
    println!("    list                                     Show all tasks");
    println!("    find <keyword>                           Search descriptions");
    println!("    todo <description>                       Add a plain task");
    println!("    deadline <description> /by <date>        Add a task with a due date");
    println!("    event <description> /from <date> /to <date>");
    println!("                                             Add a task spanning two dates");
    println!("    mark <n> | unmark <n> | delete <n>       Change or remove task number n");
    println!("    priority <n> <high|medium|low>           Set the priority of task n");
    println!("    bye                                      Save and exit");
    println!();
    println!("DATES:");
    println!("    Accepted formats: yyyy-MM-dd, d/M/yyyy, d-M-yyyy");
    println!("    Example: deadline return book /by 2025-12-31");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs, String> {
        CliArgs::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn parses_root_and_file() {
        let args = parse(&["--root", "/tmp/x", "--file", "/tmp/t.txt"]).unwrap();
        assert_eq!(args.root, Some(PathBuf::from("/tmp/x")));
        assert_eq!(args.file, Some(PathBuf::from("/tmp/t.txt")));
        assert!(!args.wants_help);
    }

    #[test]
    fn help_flags() {
        assert!(parse(&["-h"]).unwrap().wants_help);
        assert!(parse(&["--help"]).unwrap().wants_help);
    }

    #[test]
    fn rejects_unknown_and_dangling_flags() {
        assert!(parse(&["--frobnicate"]).is_err());
        assert!(parse(&["--root"]).is_err());
        assert!(parse(&["--file"]).is_err());
    }
}
