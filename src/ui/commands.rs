use std::collections::HashMap;
use std::sync::LazyLock;

use rust_decimal::Decimal;

use super::app::{App, EditTarget, InputMode, Screen};
use crate::catalog::SearchClient;
use crate::money::format_money;
use crate::planner::CartCommand;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &SearchClient) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit GearPlan", cmd_quit, r);
    register_command!("quit", "Quit GearPlan", cmd_quit, r);
    register_command!("results", "Go to search results", cmd_results, r);
    register_command!("r", "Go to search results", cmd_results, r);
    register_command!("planner", "Go to the budget planner", cmd_planner, r);
    register_command!("p", "Go to the budget planner", cmd_planner, r);
    register_command!(
        "search",
        "Search the catalog (e.g. :search blue sofa)",
        cmd_search,
        r
    );
    register_command!("s", "Search the catalog (e.g. :s blue sofa)", cmd_search, r);
    register_command!(
        "category",
        "Browse one category (e.g. :category Seating)",
        cmd_category,
        r
    );
    register_command!(
        "add",
        "Add a result to the cart by id (e.g. :add 42)",
        cmd_add,
        r
    );
    register_command!(
        "qty",
        "Set a cart quantity (e.g. :qty 42 3)",
        cmd_qty,
        r
    );
    register_command!(
        "remove",
        "Remove a cart entry by id (e.g. :remove 42)",
        cmd_remove,
        r
    );
    register_command!("days", "Set the rental duration (e.g. :days 3)", cmd_days, r);
    register_command!(
        "budget",
        "Set the budget target (e.g. :budget 1500)",
        cmd_budget,
        r
    );
    register_command!(
        "export",
        "Export the cart to CSV (e.g. :export ~/plan.csv)",
        cmd_export,
        r
    );
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);

    r
});

pub(crate) fn handle_command(
    input: &str,
    app: &mut App,
    client: &SearchClient,
) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app, client)?;
    } else {
        // Try fuzzy match
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _client: &SearchClient) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_results(_args: &str, app: &mut App, _client: &SearchClient) -> anyhow::Result<()> {
    app.switch_screen(Screen::Results);
    Ok(())
}

fn cmd_planner(_args: &str, app: &mut App, _client: &SearchClient) -> anyhow::Result<()> {
    app.switch_screen(Screen::Planner);
    Ok(())
}

fn cmd_search(args: &str, app: &mut App, client: &SearchClient) -> anyhow::Result<()> {
    app.search_input = args.to_string();
    app.switch_screen(Screen::Results);
    app.run_search(client);
    Ok(())
}

fn cmd_category(args: &str, app: &mut App, client: &SearchClient) -> anyhow::Result<()> {
    if args.is_empty() {
        match client.categories() {
            Ok(names) if names.is_empty() => app.set_status("No categories in the catalog"),
            Ok(names) => app.set_status(format!("Categories: {}", names.join(", "))),
            Err(e) => app.set_status(format!("Category listing failed: {e}")),
        }
        return Ok(());
    }
    app.switch_screen(Screen::Results);
    app.run_category(client, args);
    app.set_status(format!("Browsing category: {args}"));
    Ok(())
}

fn cmd_add(args: &str, app: &mut App, _client: &SearchClient) -> anyhow::Result<()> {
    let Ok(id) = args.parse::<i64>() else {
        app.set_status("Usage: :add <item-id>");
        return Ok(());
    };
    let known = app.planner.index().resolve(id).map(|i| i.name.clone());
    app.planner.apply(CartCommand::AddById(id));
    match known {
        Some(name) => app.set_status(format!("Added: {name}")),
        None if app.planner.index().is_empty() => {
            app.set_status("No results loaded; search first");
        }
        None => app.set_status(format!("No item {id} in the current results")),
    }
    Ok(())
}

fn cmd_qty(args: &str, app: &mut App, _client: &SearchClient) -> anyhow::Result<()> {
    let mut parts = args.splitn(2, ' ');
    let id = parts.next().unwrap_or("").parse::<i64>();
    let raw = parts.next().unwrap_or("").trim();
    let Ok(id) = id else {
        app.set_status("Usage: :qty <item-id> <count>");
        return Ok(());
    };
    app.planner
        .apply(CartCommand::SetQuantity(id, raw.to_string()));
    match app.planner.cart().get(id) {
        Some(entry) => app.set_status(format!("{} × {}", entry.quantity, entry.item.name)),
        None => app.set_status(format!("Item {id} is not in the cart")),
    }
    Ok(())
}

fn cmd_remove(args: &str, app: &mut App, _client: &SearchClient) -> anyhow::Result<()> {
    let Ok(id) = args.parse::<i64>() else {
        app.set_status("Usage: :remove <item-id>");
        return Ok(());
    };
    let name = app.planner.cart().get(id).map(|e| e.item.name.clone());
    app.planner.apply(CartCommand::Remove(id));
    app.clamp_cart_cursor();
    match name {
        Some(name) => app.set_status(format!("Removed: {name}")),
        None => app.set_status(format!("Item {id} is not in the cart")),
    }
    Ok(())
}

fn cmd_days(args: &str, app: &mut App, _client: &SearchClient) -> anyhow::Result<()> {
    app.days_input = args.to_string();
    app.planner.set_days_raw(args);
    app.set_status(format!("Duration: {} day(s)", app.planner.inputs().days));
    Ok(())
}

fn cmd_budget(args: &str, app: &mut App, _client: &SearchClient) -> anyhow::Result<()> {
    app.budget_input = args.to_string();
    app.planner.set_budget_raw(args);
    let target = app.planner.inputs().budget_target;
    if target <= Decimal::ZERO {
        app.set_status("Budget target unset");
    } else {
        app.set_status(format!("Budget target: {}", format_money(target)));
    }
    Ok(())
}

fn cmd_export(args: &str, app: &mut App, _client: &SearchClient) -> anyhow::Result<()> {
    let path = if args.is_empty() {
        crate::planner::default_export_path()
    } else {
        std::path::PathBuf::from(crate::run::shellexpand(args))
    };

    let days = app.planner.inputs().days;
    match crate::planner::export_to_path(app.planner.cart(), days, &path) {
        Ok(()) => app.set_status(format!(
            "Exported {} item(s) to {}",
            app.planner.cart().len(),
            path.display()
        )),
        Err(e) => app.alert = Some(e.to_string()),
    }
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _client: &SearchClient) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

pub(crate) fn start_edit(app: &mut App, target: EditTarget) {
    app.edit_target = Some(target);
    app.command_input = match target {
        EditTarget::Days => app.days_input.clone(),
        EditTarget::Budget => app.budget_input.clone(),
        EditTarget::Quantity(id) => app
            .planner
            .cart()
            .get(id)
            .map(|e| e.quantity.to_string())
            .unwrap_or_default(),
    };
    app.input_mode = InputMode::Editing;
}

/// Push the in-progress edit buffer into the planner so totals track every
/// keystroke, the same way the web inputs recompute on `input` events.
pub(crate) fn apply_edit(app: &mut App) {
    let raw = app.command_input.clone();
    match app.edit_target {
        Some(EditTarget::Days) => {
            app.days_input = raw.clone();
            app.planner.set_days_raw(&raw);
        }
        Some(EditTarget::Budget) => {
            app.budget_input = raw.clone();
            app.planner.set_budget_raw(&raw);
        }
        Some(EditTarget::Quantity(id)) => {
            app.planner.apply(CartCommand::SetQuantity(id, raw));
        }
        None => {}
    }
}
