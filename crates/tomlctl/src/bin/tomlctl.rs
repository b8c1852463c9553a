//! `tomlctl` — script-friendly TOML management.
//!
//! Usage:
//!   tomlctl get  <file> <path>
//!   tomlctl set  <file> <path> <value>
//!   tomlctl has  <file> <path>
//!   tomlctl del  <file> <path>
//!   tomlctl list <file> [path] [--json]

use std::path::Path;

use tomlctl::cli::{self, CliError, Presence};

fn usage() -> ! {
    eprintln!(
        r#"tomlctl: script-friendly TOML management

Usage:
    tomlctl get  <file> <path>           read a value
    tomlctl set  <file> <path> <value>   write a value (creates the path)
    tomlctl has  <file> <path>           check that a path exists (exit 0/1)
    tomlctl del  <file> <path>           delete a path
    tomlctl list <file> [path] [--json]  print the tree at a path

Path syntax:
    a.b.c       table keys
    a.b[0].c    array index

Examples:
    tomlctl get config.toml personal.name
    tomlctl set config.toml personal.age 18
    tomlctl set config.toml personal.skills "[bash, rust]"
    tomlctl del config.toml "personal.skills[0]"
    tomlctl list config.toml personal --json

Note: under zsh, quote paths that contain brackets."#
    );
    std::process::exit(2);
}

fn require_args(args: &[String], n: usize) {
    if args.len() != n {
        usage();
    }
}

fn run_list(args: &[String]) -> Result<(), CliError> {
    let Some(file) = args.first() else {
        return Err(CliError::Usage("list needs a TOML file".to_string()));
    };
    let mut path: Option<&str> = None;
    let mut json = false;
    for arg in &args[1..] {
        if arg.trim().is_empty() {
            return Err(CliError::Usage("empty argument".to_string()));
        }
        if arg == "--json" {
            json = true;
            continue;
        }
        if path.is_some() {
            return Err(CliError::Usage(format!(
                "list takes at most one path (got extra argument '{arg}')"
            )));
        }
        path = Some(arg);
    }
    let out = cli::list(Path::new(file), path, json)?;
    println!("{out}");
    Ok(())
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let Some(command) = args.get(1) else { usage() };

    let result = match command.as_str() {
        "get" => {
            require_args(&args, 4);
            cli::get(Path::new(&args[2]), &args[3]).map(|value| println!("{value}"))
        }
        "set" => {
            require_args(&args, 5);
            cli::set_value(Path::new(&args[2]), &args[3], &args[4])
        }
        "has" => {
            require_args(&args, 4);
            match cli::has(Path::new(&args[2]), &args[3]) {
                Ok(Presence::Found) => std::process::exit(0),
                Ok(Presence::NotFound) => std::process::exit(1),
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            }
        }
        "del" => {
            require_args(&args, 4);
            cli::del(Path::new(&args[2]), &args[3])
        }
        "list" => run_list(&args[2..]),
        _ => usage(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
