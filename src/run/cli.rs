use anyhow::Result;

use crate::catalog::SearchClient;
use crate::money::format_money;
use crate::ui::app::RESULT_LIMIT;

pub(crate) fn as_cli(args: &[String], client: &SearchClient) -> Result<()> {
    match args[1].as_str() {
        "search" | "s" => cli_search(&args[2..], client),
        "categories" => cli_categories(client),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("gearplan {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("GearPlan — terminal catalog browser and rental budget planner");
    println!();
    println!("Usage: gearplan [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  search [query]                Search the catalog and print results");
    println!("    --limit <n>                 Maximum results (default {RESULT_LIMIT})");
    println!("  categories                    List catalog categories");
    println!("  --api <url>                   Search service base URL");
    println!("                                (or set GEARPLAN_API)");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
}

fn cli_search(args: &[String], client: &SearchClient) -> Result<()> {
    let limit = args
        .windows(2)
        .find(|w| w[0] == "--limit")
        .and_then(|w| w[1].parse::<usize>().ok())
        .unwrap_or(RESULT_LIMIT);

    let query: Vec<&str> = {
        let mut skip_next = false;
        args.iter()
            .filter(|a| {
                if skip_next {
                    skip_next = false;
                    return false;
                }
                if a.as_str() == "--limit" {
                    skip_next = true;
                    return false;
                }
                true
            })
            .map(String::as_str)
            .collect()
    };
    let query = query.join(" ");

    let items = client.search(&query, limit)?;
    if items.is_empty() {
        println!("No items found");
        return Ok(());
    }

    println!("{:>6}  {:<40} {:<16} {:>12}", "ID", "Name", "Category", "$/Day");
    for item in &items {
        let price = match item.price_per_day {
            Some(p) => format_money(p),
            None => "—".to_string(),
        };
        println!(
            "{:>6}  {:<40} {:<16} {:>12}",
            item.id,
            crate::ui::util::truncate(&item.name, 40),
            crate::ui::util::truncate(&item.category, 16),
            price
        );
    }
    println!("{} item(s)", items.len());
    Ok(())
}

fn cli_categories(client: &SearchClient) -> Result<()> {
    let categories = client.categories()?;
    if categories.is_empty() {
        println!("No categories");
        return Ok(());
    }
    for name in &categories {
        println!("{name}");
    }
    Ok(())
}
