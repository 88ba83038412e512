use std::time::{Duration, Instant};

use crate::catalog::SearchClient;
use crate::models::CatalogItem;
use crate::planner::Planner;

/// Quiet period after the last search keystroke before a request fires.
pub(crate) const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Upper bound on results per search request.
pub(crate) const RESULT_LIMIT: usize = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Results,
    Planner,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Results, Self::Planner]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Results => write!(f, "Results"),
            Self::Planner => write!(f, "Planner"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Search,
    Editing,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Search => write!(f, "SEARCH"),
            Self::Editing => write!(f, "EDIT"),
        }
    }
}

/// Which free-text field an edit session is writing into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EditTarget {
    Days,
    Budget,
    Quantity(i64),
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) search_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    /// Blocking notification; rendered as a modal and dismissed by any key.
    pub(crate) alert: Option<String>,

    // Planning session
    pub(crate) planner: Planner,
    pub(crate) days_input: String,
    pub(crate) budget_input: String,
    pub(crate) edit_target: Option<EditTarget>,

    // Search results
    pub(crate) results: Vec<CatalogItem>,
    pub(crate) result_index: usize,
    pub(crate) result_scroll: usize,
    pub(crate) search_error: Option<String>,
    /// When the debounced search should fire; re-stamped on every keystroke.
    pub(crate) search_due: Option<Instant>,

    // Cart list cursor
    pub(crate) cart_index: usize,
    pub(crate) cart_scroll: usize,

    /// Item id picked up from the results list, awaiting a drop.
    pub(crate) grabbed: Option<i64>,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new() -> Self {
        Self {
            running: true,
            screen: Screen::Results,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            search_input: String::new(),
            status_message: String::new(),
            show_help: false,
            alert: None,

            planner: Planner::new(),
            days_input: "1".into(),
            budget_input: String::new(),
            edit_target: None,

            results: Vec::new(),
            result_index: 0,
            result_scroll: 0,
            search_error: None,
            search_due: None,

            cart_index: 0,
            cart_scroll: 0,

            grabbed: None,

            visible_rows: 20,
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    /// Change screens, mirroring the drag affordance: with an item picked
    /// up, landing on the planner arms the drop zone and leaving it disarms
    /// it. Every navigation path goes through here so a grabbed item is
    /// never stranded over a disarmed drop zone.
    pub(crate) fn switch_screen(&mut self, screen: Screen) {
        self.screen = screen;
        if self.grabbed.is_some() {
            match screen {
                Screen::Planner => self.planner.drag_enter(),
                Screen::Results => self.planner.drag_leave(),
            }
        }
    }

    /// Stamp the debounce deadline. A newer keystroke replaces the pending
    /// search outright; it is never issued.
    pub(crate) fn schedule_search(&mut self) {
        self.search_due = Some(Instant::now() + SEARCH_DEBOUNCE);
    }

    /// Fire the pending search if its quiet period has elapsed.
    pub(crate) fn poll_search(&mut self, client: &SearchClient) {
        if self.search_due.is_some_and(|due| Instant::now() >= due) {
            self.run_search(client);
        }
    }

    /// Issue the search immediately, replacing the result snapshot. A failed
    /// request becomes an inline message; the cart and totals are untouched.
    pub(crate) fn run_search(&mut self, client: &SearchClient) {
        self.search_due = None;
        match client.search(self.search_input.trim(), RESULT_LIMIT) {
            Ok(items) => self.install_results(items),
            Err(e) => self.install_search_error(e),
        }
    }

    /// Fill the results pane from a category listing instead of a query.
    pub(crate) fn run_category(&mut self, client: &SearchClient, category: &str) {
        self.search_due = None;
        match client.by_category(category, RESULT_LIMIT) {
            Ok(items) => self.install_results(items),
            Err(e) => self.install_search_error(e),
        }
    }

    fn install_results(&mut self, items: Vec<CatalogItem>) {
        self.planner.set_results(&items);
        self.results = items;
        self.result_index = 0;
        self.result_scroll = 0;
        self.search_error = None;
    }

    fn install_search_error(&mut self, err: anyhow::Error) {
        self.planner.set_results(&[]);
        self.results.clear();
        self.result_index = 0;
        self.result_scroll = 0;
        self.search_error = Some(format!("Search error: {err}"));
    }

    /// Keep the cart cursor on a real row after removals.
    pub(crate) fn clamp_cart_cursor(&mut self) {
        let len = self.planner.cart().len();
        if self.cart_index >= len {
            self.cart_index = len.saturating_sub(1);
        }
        if self.cart_scroll > self.cart_index {
            self.cart_scroll = self.cart_index;
        }
    }

    pub(crate) fn selected_result(&self) -> Option<&CatalogItem> {
        self.results.get(self.result_index)
    }

    pub(crate) fn selected_cart_id(&self) -> Option<i64> {
        self.planner
            .cart()
            .iter()
            .nth(self.cart_index)
            .map(|e| e.item.id)
    }
}
