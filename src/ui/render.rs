use anyhow::Result;
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::info;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};
use std::{io, time::Duration};

use crate::app::{AppState, display_width};
use crate::ui::handlers::handle_key_event;
use crate::utils::index_to_col_name;

const ROW_NUMBER_WIDTH: usize = 5;

pub fn run_app(mut app_state: AppState) -> Result<()> {
    let mut terminal = setup_terminal()?;
    info!("Interactive view of '{}' started", app_state.table.name);

    // Draw errors are returned only after the terminal is restored
    let result = event_loop(&mut terminal, &mut app_state);

    restore_terminal(&mut terminal)?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app_state: &mut AppState,
) -> Result<()> {
    while !app_state.should_quit {
        terminal.draw(|f| ui(f, app_state))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key_event(app_state, key);
                }
            }
        }
    }

    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn update_visible_area(app_state: &mut AppState, area: Rect) {
    // Borders and the header row
    app_state.visible_rows = (area.height as usize).saturating_sub(3).max(1);

    let available_width = (area.width as usize).saturating_sub(ROW_NUMBER_WIDTH + 2);

    let mut visible_cols = 0;
    let mut width_used = 0;

    for col_idx in app_state.start_col..app_state.table.width() {
        let col_width = app_state.get_column_width(col_idx) + 1;

        if visible_cols > 0 && width_used + col_width > available_width {
            break;
        }

        width_used += col_width;
        visible_cols += 1;
    }

    app_state.visible_cols = visible_cols.max(1);
    app_state.ensure_column_visible(app_state.selected_col);
}

fn ui(f: &mut Frame, app_state: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(1),    // Table
            Constraint::Length(1), // Status
            Constraint::Length(1), // Key help
        ])
        .split(f.size());

    let title = format!(
        " {} - {} | strategy: {} ",
        app_state.file_path.display(),
        app_state.table.name,
        app_state.strategy
    );
    let title_widget =
        Paragraph::new(title).style(Style::default().bg(Color::Blue).fg(Color::White));
    f.render_widget(title_widget, chunks[0]);

    update_visible_area(app_state, chunks[1]);
    draw_table(f, app_state, chunks[1]);
    draw_status_bar(f, app_state, chunks[2]);

    let help = Paragraph::new(
        " h/l=select column j/k=scroll s/Enter=sort t=strategy w=save xlsx q=quit",
    )
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

fn truncate_to_width(content: &str, col_width: usize) -> String {
    if display_width(content) <= col_width {
        return content.to_string();
    }

    let mut result = String::with_capacity(col_width);
    let mut current_width = 0;

    for c in content.chars() {
        let char_width = if c.is_ascii() { 1 } else { 2 };
        if current_width + char_width < col_width {
            result.push(c);
            current_width += char_width;
        } else {
            break;
        }
    }

    result.push('…');
    result
}

fn draw_table(f: &mut Frame, app_state: &AppState, area: Rect) {
    let start_col = app_state.start_col;
    let end_col = (start_col + app_state.visible_cols).min(app_state.table.width());

    let mut constraints = Vec::with_capacity(app_state.visible_cols + 1);
    constraints.push(Constraint::Length(ROW_NUMBER_WIDTH as u16));
    for col in start_col..end_col {
        constraints.push(Constraint::Length(app_state.get_column_width(col) as u16));
    }

    let header_style = Style::default().bg(Color::DarkGray).fg(Color::Gray);
    let selected_header_style = Style::default()
        .bg(Color::LightCyan)
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD);

    let mut header_cells = Vec::with_capacity(app_state.visible_cols + 1);
    header_cells.push(Cell::from("").style(header_style));

    for col in start_col..end_col {
        let name = match app_state.get_cell_content(0, col) {
            "" => index_to_col_name(col),
            text => text.to_string(),
        };
        let label = match app_state.sort_indicator(col) {
            Some(symbol) => format!("{} {}", name, symbol),
            None => name,
        };
        let style = if col == app_state.selected_col {
            selected_header_style
        } else {
            header_style
        };
        header_cells.push(
            Cell::from(truncate_to_width(&label, app_state.get_column_width(col))).style(style),
        );
    }

    let header = Row::new(header_cells).height(1);

    let first_row = app_state.start_row + 1;
    let last_row = (first_row + app_state.visible_rows).min(app_state.table.rows.len());

    let rows = (first_row..last_row).map(|row| {
        let mut cells = Vec::with_capacity(app_state.visible_cols + 1);
        cells.push(Cell::from(row.to_string()).style(header_style));

        for col in start_col..end_col {
            let content = truncate_to_width(
                app_state.get_cell_content(row, col),
                app_state.get_column_width(col),
            );
            let style = if col == app_state.selected_col {
                Style::default().fg(Color::LightCyan)
            } else {
                Style::default()
            };
            cells.push(Cell::from(content).style(style));
        }

        Row::new(cells)
    });

    let table = Table::new(std::iter::once(header).chain(rows))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::LightCyan)),
        )
        .widths(&constraints);

    f.render_widget(table, area);
}

fn draw_status_bar(f: &mut Frame, app_state: &AppState, area: Rect) {
    let status = if app_state.status_message.is_empty() {
        format!(
            " Column {} | {} rows",
            index_to_col_name(app_state.selected_col),
            app_state.table.data_row_count()
        )
    } else {
        format!(" {}", app_state.status_message)
    };

    let status_widget =
        Paragraph::new(status).style(Style::default().bg(Color::Green).fg(Color::White));
    f.render_widget(status_widget, area);
}
