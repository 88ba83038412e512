mod catalog;
mod models;
mod money;
mod planner;
mod run;
mod ui;

use anyhow::Result;

const DEFAULT_API: &str = "http://127.0.0.1:8000";

fn main() -> Result<()> {
    let mut args: Vec<String> = std::env::args().collect();
    let base_url = take_api_flag(&mut args)
        .or_else(|| std::env::var("GEARPLAN_API").ok())
        .unwrap_or_else(|| DEFAULT_API.to_string());

    let client = catalog::SearchClient::new(&base_url)?;

    match args.len() {
        1 => run::as_tui(&client),
        2.. => run::as_cli(&args, &client),
        _ => {
            eprintln!("Usage: gearplan [command]");
            Ok(())
        }
    }
}

/// Pull `--api <url>` out of the argument list so the command dispatch only
/// sees subcommands.
fn take_api_flag(args: &mut Vec<String>) -> Option<String> {
    let pos = args.iter().position(|a| a == "--api")?;
    if pos + 1 >= args.len() {
        args.remove(pos);
        return None;
    }
    let url = args.remove(pos + 1);
    args.remove(pos);
    Some(url)
}
