use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::money::format_money;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::truncate;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(3)])
        .split(area);

    render_table(f, chunks[0], app);
    render_detail(f, chunks[1], app);
}

fn render_table(f: &mut Frame, area: Rect, app: &App) {
    if app.results.is_empty() {
        let msg = if let Some(err) = &app.search_error {
            vec![
                Line::from(""),
                Line::from(Span::styled(err.clone(), theme::over_budget_style())),
                Line::from(""),
                Line::from(Span::styled(
                    "The cart and totals are unaffected; try again with /",
                    theme::dim_style(),
                )),
            ]
        } else if !app.search_input.is_empty() {
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("No items matching '{}'", app.search_input),
                    theme::dim_style(),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Press / to refine the search",
                    theme::dim_style(),
                )),
            ]
        } else {
            vec![
                Line::from(""),
                Line::from(Span::styled("The catalog came back empty", theme::dim_style())),
                Line::from(""),
                Line::from(Span::styled(
                    "Press / to search or :category to browse",
                    theme::dim_style(),
                )),
            ]
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                " Results (0) ",
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            ));
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header_cells = ["Item", "Category", "Price / Day", "Img"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let name_width = area.width.saturating_sub(34).max(16) as usize;

    let rows: Vec<Row> = app
        .results
        .iter()
        .enumerate()
        .skip(app.result_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, item)| {
            let grabbed = app.grabbed == Some(item.id);
            let name = if grabbed {
                format!("⇅ {}", truncate(&item.name, name_width.saturating_sub(2)))
            } else {
                truncate(&item.name, name_width)
            };
            let price = match item.price_per_day {
                Some(p) => format_money(p),
                None => "—".to_string(),
            };
            let img = if item.thumb_file.is_some() { "✓" } else { "" };

            let style = if i == app.result_index {
                theme::selected_style()
            } else if grabbed {
                Style::default().fg(theme::YELLOW)
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            Row::new(vec![
                Cell::from(name),
                Cell::from(truncate(&item.category, 14)),
                Cell::from(price),
                Cell::from(img),
            ])
            .style(style)
        })
        .collect();

    let title = if app.search_input.is_empty() {
        format!(" Results ({}) ", app.results.len())
    } else {
        format!(" Results ({}) — '{}' ", app.results.len(), app.search_input)
    };

    let table = Table::new(
        rows,
        [
            Constraint::Min(16),
            Constraint::Length(14),
            Constraint::Length(12),
            Constraint::Length(3),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                title,
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            )),
    );

    f.render_widget(table, area);
}

/// One-line detail for the highlighted result: price plus whatever extra
/// attributes the catalog record carried.
fn render_detail(f: &mut Frame, area: Rect, app: &App) {
    let line = match app.selected_result() {
        Some(item) => {
            let mut spans = vec![Span::styled(
                format!(" {} ", item.name),
                Style::default()
                    .fg(theme::TEXT)
                    .add_modifier(Modifier::BOLD),
            )];
            match item.price_per_day {
                Some(p) => spans.push(Span::styled(
                    format!("{} / day", format_money(p)),
                    Style::default().fg(theme::GREEN),
                )),
                None => spans.push(Span::styled("no price listed", theme::dim_style())),
            }
            for (key, value) in &item.attributes {
                spans.push(Span::styled(
                    format!("  |  {key}: {value}"),
                    theme::dim_style(),
                ));
            }
            Line::from(spans)
        }
        None => Line::from(Span::styled(" No item selected", theme::dim_style())),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            " Detail ",
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));
    f.render_widget(Paragraph::new(line).block(block), area);
}
