use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use rust_decimal::Decimal;

use crate::models::BudgetStatus;
use crate::money::format_money;
use crate::ui::app::{App, EditTarget, InputMode};
use crate::ui::theme;
use crate::ui::util::truncate;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // days / budget inputs
            Constraint::Min(4),    // cart rows
            Constraint::Length(5), // totals + status
        ])
        .split(area);

    render_inputs(f, chunks[0], app);
    render_cart(f, chunks[1], app);
    render_totals(f, chunks[2], app);
}

fn render_inputs(f: &mut Frame, area: Rect, app: &App) {
    let editing = |target| {
        app.input_mode == InputMode::Editing && app.edit_target == Some(target)
    };

    let field = |label: &str, value: &str, active: bool| -> Vec<Span<'static>> {
        let value_style = if active {
            Style::default()
                .fg(theme::HEADER_BG)
                .bg(theme::YELLOW)
                .add_modifier(Modifier::BOLD)
        } else {
            theme::normal_style()
        };
        let shown = if value.is_empty() { " " } else { value };
        vec![
            Span::styled(format!(" {label}: "), theme::dim_style()),
            Span::styled(format!("[{shown}]"), value_style),
        ]
    };

    let mut spans = field("Days", &app.days_input, editing(EditTarget::Days));
    spans.extend(field("Budget", &app.budget_input, editing(EditTarget::Budget)));
    spans.push(Span::styled(
        "   (d edit days, b edit budget)",
        theme::dim_style(),
    ));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            " Plan ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        ));
    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_cart(f: &mut Frame, area: Rect, app: &App) {
    let cart = app.planner.cart();
    let drop_ready = app.grabbed.is_some();

    if cart.is_empty() {
        let msg = if drop_ready {
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Press p to drop the picked-up item here",
                    Style::default().fg(theme::YELLOW),
                )),
            ]
        } else {
            vec![
                Line::from(""),
                Line::from(Span::styled("The cart is empty", theme::dim_style())),
                Line::from(""),
                Line::from(Span::styled(
                    "Add items from the Results tab with a, or pick up with Space",
                    theme::dim_style(),
                )),
            ]
        };
        let block = cart_block(0, drop_ready);
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header_cells = ["Item", "Qty", "Price / Day", "Line Total"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let days = Decimal::from(app.planner.inputs().days);
    let name_width = area.width.saturating_sub(36).max(16) as usize;

    let rows: Vec<Row> = cart
        .iter()
        .enumerate()
        .skip(app.cart_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, entry)| {
            let qty_cell = if app.input_mode == InputMode::Editing
                && app.edit_target == Some(EditTarget::Quantity(entry.item.id))
            {
                Cell::from(format!("[{}]", app.command_input)).style(
                    Style::default()
                        .fg(theme::HEADER_BG)
                        .bg(theme::YELLOW)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Cell::from(entry.quantity.to_string())
            };

            let style = if i == app.cart_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            Row::new(vec![
                Cell::from(truncate(&entry.item.name, name_width)),
                qty_cell,
                Cell::from(format_money(entry.item.price_per_day())),
                Cell::from(format_money(entry.line_per_day() * days)),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(16),
            Constraint::Length(6),
            Constraint::Length(12),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .block(cart_block(cart.len(), drop_ready));

    f.render_widget(table, area);
}

fn cart_block(count: usize, drop_ready: bool) -> Block<'static> {
    let border = if drop_ready {
        // Visual affordance while a drag payload is hovering.
        Style::default().fg(theme::YELLOW)
    } else {
        Style::default().fg(theme::OVERLAY)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(Span::styled(
            format!(" Cart ({count}) "),
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        ))
}

fn render_totals(f: &mut Frame, area: Rect, app: &App) {
    let totals = app.planner.totals();
    let days = app.planner.inputs().days;

    let (status_text, status_style) = match &totals.status {
        BudgetStatus::Unset => ("No budget target set.".to_string(), theme::dim_style()),
        BudgetStatus::OnBudget { remaining } => (
            format!("On budget - {} remaining", format_money(*remaining)),
            theme::on_budget_style(),
        ),
        BudgetStatus::NearBudget { remaining } => (
            format!("Near budget - {} remaining", format_money(*remaining)),
            theme::near_budget_style(),
        ),
        BudgetStatus::OverBudget { overage } => (
            format!("Over budget by {}", format_money(*overage)),
            theme::over_budget_style(),
        ),
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(" Subtotal / day: ", theme::dim_style()),
            Span::styled(format_money(totals.subtotal_per_day), theme::normal_style()),
        ]),
        Line::from(vec![
            Span::styled(format!(" Grand total ({days} day(s)): "), theme::dim_style()),
            Span::styled(
                format_money(totals.grand_total),
                Style::default()
                    .fg(theme::TEXT)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(format!(" {status_text}"), status_style)),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            " Totals ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        ));
    f.render_widget(Paragraph::new(lines).block(block), area);
}
