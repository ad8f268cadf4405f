//! Tint CLI entry point.

use tintc::commands::{dump_tokens, highlight_file, show_language};
use tintc::CliError;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let command = args[1].as_str();

    match command {
        "highlight" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: tint highlight <file>");
                std::process::exit(1);
            };
            exit_on_error(highlight_file(path));
        }
        "lang" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: tint lang <file>");
                std::process::exit(1);
            };
            show_language(path);
        }
        "tokens" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: tint tokens <file>");
                std::process::exit(1);
            };
            exit_on_error(dump_tokens(path));
        }
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn exit_on_error(result: Result<(), CliError>) {
    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("TINT_LOG"))
        .with_writer(std::io::stderr)
        .init();
}

fn print_usage() {
    println!("Tint - syntax highlighting from the terminal");
    println!();
    println!("Usage: tint <command> [arguments]");
    println!();
    println!("Commands:");
    println!("  highlight <file>   Print the file with ANSI syntax colors");
    println!("  lang <file>        Print the language selected for the file name");
    println!("  tokens <file>      Dump the classified token stream");
    println!("  help               Show this help");
    println!();
    println!("Environment:");
    println!("  TINT_LOG           Tracing filter (e.g. debug, tint_render=debug)");
}
