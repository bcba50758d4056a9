//! Drawing functions - a pure function of [`RenderState`]

use ratatui::{prelude::*, widgets::*};

use crate::constants::{APP_NAME, APP_VERSION};
use crate::error::FetchError;
use crate::messages::render::FetchStatus;
use crate::messages::ui_events::AppsTab;
use crate::messages::RenderState;
use crate::models::{ApiResponse, InstalledApp};
use crate::view::{self, format_date};

const CARD_HEIGHT: u16 = 7;
const SKELETON: &str = "░";

pub fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_header(f, state, main_chunks[0]);

    match &state.status {
        FetchStatus::Failed(error) => draw_error(f, error, main_chunks[1]),
        status => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(CARD_HEIGHT), Constraint::Min(0)])
                .split(main_chunks[1]);

            let data = match status {
                FetchStatus::Loaded(data) => Some(data.as_ref()),
                _ => None,
            };
            draw_cards(f, data, chunks[0]);
            draw_apps_panel(f, state, data, chunks[1]);
        }
    }

    draw_status_bar(f, state, main_chunks[2]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_header(f: &mut Frame, state: &RenderState, area: Rect) {
    let mut subtitle = vec![Span::styled(
        "Displaying data collected from osquery on your local system",
        Style::default().fg(Color::DarkGray),
    )];
    if let FetchStatus::Loaded(data) = &state.status {
        if let Some(updated) = &data.last_updated {
            subtitle.push(Span::styled(
                format!("  (last updated {})", updated),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    let header = Paragraph::new(vec![
        Line::from(Span::styled(APP_NAME, Style::default().bold())),
        Line::from(subtitle),
    ]);
    f.render_widget(header, area);
}

fn draw_error(f: &mut Frame, error: &FetchError, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(Span::styled(" ⚠ Error ", Style::default().fg(Color::Red).bold()));

    let text = Paragraph::new(format!("Failed to fetch system data: {}", error))
        .style(Style::default().fg(Color::Red))
        .block(block)
        .wrap(Wrap { trim: true });

    // Banner sized to its content, pinned to the top
    let banner = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area)[0];
    f.render_widget(text, banner);
}

// ============================================================================
// Summary cards
// ============================================================================

fn draw_cards(f: &mut Frame, data: Option<&ApiResponse>, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    let Some(data) = data else {
        for column in columns.iter() {
            draw_skeleton(f, *column, Block::default().borders(Borders::ALL));
        }
        return;
    };

    let or_unknown = |s: &str| {
        if s.is_empty() {
            String::from("Unknown")
        } else {
            s.to_string()
        }
    };

    let os = &data.os_version;
    draw_card(
        f,
        columns[0],
        " 💻 Operating System ",
        or_unknown(&os.name),
        vec![
            detail_line("Version", or_unknown(&os.version)),
            detail_line("Platform", or_unknown(&os.platform)),
        ],
    );

    draw_card(
        f,
        columns[1],
        " 🗄 Osquery Version ",
        or_unknown(&data.osquery_version),
        vec![Line::from(vec![
            Span::styled("✔ ", Style::default().fg(Color::Green)),
            Span::styled("Active and running", Style::default().fg(Color::DarkGray)),
        ])],
    );

    draw_card(
        f,
        columns[2],
        " 📦 Applications ",
        data.installed_apps.len().to_string(),
        vec![Line::from(Span::styled(
            "Total installed applications detected on this system",
            Style::default().fg(Color::DarkGray),
        ))],
    );
}

fn draw_card(f: &mut Frame, area: Rect, title: &str, main_value: String, details: Vec<Line>) {
    let block = Block::default().borders(Borders::ALL).title(title);

    let mut lines = vec![
        Line::from(Span::styled(main_value, Style::default().fg(Color::Cyan).bold())),
        Line::default(),
    ];
    lines.extend(details);

    let card = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(card, area);
}

fn detail_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<10}", label), Style::default().fg(Color::DarkGray)),
        Span::styled(format!("[{}]", value), Style::default().fg(Color::Yellow)),
    ])
}

/// Placeholder shape shown while the fetch is in flight
fn draw_skeleton(f: &mut Frame, area: Rect, block: Block) {
    let inner = block.inner(area);
    f.render_widget(block, area);

    let bar = SKELETON.repeat(inner.width as usize);
    let lines: Vec<Line> = (0..inner.height)
        .map(|row| {
            if row % 2 == 0 {
                Line::from(Span::styled(bar.clone(), Style::default().fg(Color::DarkGray)))
            } else {
                Line::default()
            }
        })
        .collect();
    f.render_widget(Paragraph::new(lines), inner);
}

// ============================================================================
// Applications table
// ============================================================================

fn draw_apps_panel(f: &mut Frame, state: &RenderState, data: Option<&ApiResponse>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Installed Applications ")
        .title_bottom(
            Line::from(" Applications installed on this system as reported by osquery ")
                .right_aligned(),
        );
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Tabs
            Constraint::Min(0),    // Table
        ])
        .split(inner);

    let titles: Vec<&str> = AppsTab::ALL.iter().map(|t| t.title()).collect();
    f.render_widget(render_tabs(&titles, state.active_tab.index()), chunks[0]);

    let Some(data) = data else {
        let rows = Rect {
            height: chunks[1].height.min(10),
            ..chunks[1]
        };
        draw_skeleton(f, rows, Block::default());
        return;
    };

    let apps = &data.installed_apps;
    match state.active_tab {
        AppsTab::All => {
            if apps.is_empty() {
                draw_empty_state(f, chunks[1], "There are no applications installed on this system.");
            } else {
                let rows: Vec<&InstalledApp> = apps.iter().collect();
                draw_apps_table(f, state, AppsTab::All, &rows, chunks[1]);
            }
        }
        AppsTab::Recent => {
            if !view::has_recent_activity(apps) {
                draw_empty_state(f, chunks[1], "No applications have been opened recently.");
            } else {
                draw_apps_table(f, state, AppsTab::Recent, &view::recent_apps(apps), chunks[1]);
            }
        }
        AppsTab::Deleted => {
            let deleted = view::deleted_apps(apps);
            if deleted.is_empty() {
                draw_empty_state(f, chunks[1], "There are no deleted applications to display.");
            } else {
                draw_apps_table(f, state, AppsTab::Deleted, &deleted, chunks[1]);
            }
        }
    }
}

fn draw_apps_table(
    f: &mut Frame,
    state: &RenderState,
    tab: AppsTab,
    apps: &[&InstalledApp],
    area: Rect,
) {
    let mut header = vec!["Name", "Bundle ID", "Version"];
    let mut widths = vec![
        Constraint::Fill(2),
        Constraint::Fill(2),
        Constraint::Length(12),
    ];
    match tab {
        AppsTab::All => {
            header.extend(["Path", "Last Opened"]);
            widths.extend([Constraint::Fill(3), Constraint::Length(19)]);
        }
        AppsTab::Recent => {
            header.push("Last Opened");
            widths.push(Constraint::Length(19));
        }
        AppsTab::Deleted => {
            header.extend(["Last Opened", "Deleted At"]);
            widths.extend([Constraint::Length(19), Constraint::Length(19)]);
        }
    }

    let rows = apps.iter().map(|app| {
        let mut cells = vec![
            Cell::from(view::display_name(app)).style(Style::default().bold()),
            Cell::from(app.bundle_identifier.as_str()),
            Cell::from(view::version_label(app)),
        ];
        if tab == AppsTab::All {
            cells.push(Cell::from(app.path.as_str()).style(Style::default().fg(Color::DarkGray)));
        }
        cells.push(Cell::from(format_date(Some(app.last_opened_time))));
        if tab == AppsTab::Deleted {
            cells.push(Cell::from(format_date(app.end_time)).style(Style::default().fg(Color::Red)));
        }
        Row::new(cells)
    });

    let table = Table::new(rows, widths)
        .header(
            Row::new(header)
                .style(Style::default().fg(Color::Yellow).bold())
                .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▶ ");

    let mut table_state = TableState::default().with_selected(Some(state.selected_row));
    f.render_stateful_widget(table, area, &mut table_state);
}

fn draw_empty_state(f: &mut Frame, area: Rect, message: &str) {
    let lines = vec![
        Line::default(),
        Line::from("📦"),
        Line::default(),
        Line::from(Span::styled("No Applications Found", Style::default().bold())),
        Line::from(Span::styled(message, Style::default().fg(Color::DarkGray))),
    ];
    let empty = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(empty, area);
}

/// Renders tabs
pub fn render_tabs<'a>(titles: &[&'a str], selected: usize) -> Tabs<'a> {
    let titles: Vec<Line> = titles.iter().map(|t| Line::from(*t)).collect();

    Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Yellow).bold())
        .divider("|")
}

// ============================================================================
// Chrome
// ============================================================================

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let hints = match state.status {
        FetchStatus::Loading => " Loading... | q:quit ",
        FetchStatus::Failed(_) => " ?:help | q:quit ",
        FetchStatus::Loaded(_) => " 1-3/Tab:switch tab | ↑/↓:select | ?:help | q:quit ",
    };

    let bar = Paragraph::new(Line::from(vec![
        Span::raw(hints),
        Span::styled(format!(" {} ", state.api_url), Style::default().fg(Color::Cyan)),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = r#"
 SYSTEM INFORMATION DASHBOARD - Keyboard Shortcuts

 TABS
   1 / 2 / 3          All / Recently used / Deleted
   Tab / → / l        Next tab
   Shift+Tab / ← / h  Previous tab

 ROWS
   ↑ / k, ↓ / j       Move selection
   Home / g, End / G  First / last row

 GENERAL
   ?                  Toggle this help
   q / Esc / Ctrl+C   Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Help - v{} ", APP_VERSION))
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
