//! UI Rendering
//!
//! Layout shell and page rendering for the TUI.

use crate::router::Route;
use crate::tui::app::{App, ListingsStatus, Page, View};
use crate::tui::theme::{Icons, Theme};
use crate::tui::widgets;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the main UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Navbar
            Constraint::Min(10),   // Page
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_navbar(frame, chunks[0], app);
    render_page(frame, chunks[1], app);
    render_status_bar(frame, chunks[2], app);

    widgets::render_notifications(frame, frame.area(), &app.notifications);

    // Render modal overlays
    match app.view {
        View::Help => render_help(frame),
        View::ConfirmDelete => render_confirm_delete(frame),
        View::GoTo => render_goto(frame, app),
        View::Page => {}
    }
}

/// Render the navigation bar, highlighting the active entry
fn render_navbar(frame: &mut Frame, area: Rect, app: &App) {
    let active = app.navbar.active(&app.route).map(|item| item.path);

    let mut spans = vec![
        Span::styled(app.navbar.brand, Theme::title()),
        Span::raw("   "),
    ];
    for item in app.navbar.items() {
        let style = if Some(item.path) == active {
            Theme::nav_active()
        } else {
            Theme::text_secondary()
        };
        spans.push(Span::styled(format!("F{}", item.key), Theme::shortcut_key()));
        spans.push(Span::styled(format!(" {} ", item.label), style));
        spans.push(Span::raw("  "));
    }

    let navbar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::border())
            .title_bottom(Line::from(Span::styled(
                format!(" {} ", app.route),
                Theme::text_dim(),
            ))),
    );

    frame.render_widget(navbar, area);
}

/// Render the mounted page
fn render_page(frame: &mut Frame, area: Rect, app: &App) {
    let spinner = Icons::SPINNER[(app.ticks as usize) % Icons::SPINNER.len()];

    match &app.page {
        Page::Home(status) => render_home(frame, area, status, spinner),
        Page::Jobs(status) => {
            widgets::render_listings(frame, area, "Browse Jobs", status, spinner)
        }
        Page::AddJob(form) => widgets::render_form(frame, area, "Add Job", form, app.pending),
        Page::EditJob { form, .. } => {
            widgets::render_form(frame, area, "Edit Job", form, app.pending)
        }
        Page::Job(job) => widgets::render_detail(frame, area, job, app.pending),
        Page::Loading(route) => {
            let loading = Paragraph::new(Line::from(vec![
                Span::styled(spinner, Theme::title()),
                Span::styled(format!(" Loading {}...", route), Theme::text_secondary()),
            ]))
            .alignment(Alignment::Center);
            frame.render_widget(loading, centered_rect(60, 20, area));
        }
        Page::NotFound { notice, .. } => render_not_found(frame, area, notice.as_deref()),
        Page::LoadFailed { route, message } => render_load_failed(frame, area, route, message),
    }
}

fn render_home(frame: &mut Frame, area: Rect, status: &ListingsStatus, spinner: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Hero
            Constraint::Length(5), // Cards
            Constraint::Min(6),    // Recent jobs
            Constraint::Length(1), // View all
        ])
        .split(area);

    let hero = Paragraph::new(vec![
        Line::from(Span::styled("Become a Rust Developer", Theme::heading())),
        Line::from(Span::styled(
            "Find the Rust job that fits your skills and needs",
            Theme::text_secondary(),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::BOTTOM).border_style(Theme::border()));
    frame.render_widget(hero, chunks[0]);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    render_home_card(
        frame,
        cards[0],
        "For Developers",
        "Browse our Rust jobs and start your career today",
        "[v] Browse Jobs",
    );
    render_home_card(
        frame,
        cards[1],
        "For Employers",
        "List your job to find the perfect developer for the role",
        "[F4] Add Job",
    );

    widgets::render_listings(frame, chunks[2], "Recent Jobs", status, spinner);

    let view_all = Paragraph::new(Line::from(vec![
        Span::styled("[v] ", Theme::shortcut_key()),
        Span::styled("View All Jobs", Theme::text()),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(view_all, chunks[3]);
}

fn render_home_card(frame: &mut Frame, area: Rect, title: &str, body: &str, action: &str) {
    let card = Paragraph::new(vec![
        Line::from(Span::styled(body.to_string(), Theme::text_secondary())),
        Line::from(Span::styled(action.to_string(), Theme::shortcut_key())),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(Span::styled(format!(" {} ", title), Theme::heading()))
            .borders(Borders::ALL)
            .border_style(Theme::border()),
    );
    frame.render_widget(card, area);
}

fn render_not_found(frame: &mut Frame, area: Rect, notice: Option<&str>) {
    let mut lines = vec![
        Line::from(Span::styled("404 Not Found", Theme::heading())),
        Line::from(Span::styled("This page does not exist", Theme::text_secondary())),
    ];
    if let Some(notice) = notice {
        lines.push(Line::from(Span::styled(notice.to_string(), Theme::text_dim())));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("[Enter] ", Theme::shortcut_key()),
        Span::styled("Go Back", Theme::text()),
    ]));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, centered_rect(60, 40, area));
}

fn render_load_failed(frame: &mut Frame, area: Rect, route: &Route, message: &str) {
    let lines = vec![
        Line::from(Span::styled(
            format!("{} Could not load {}", Icons::ERROR, route),
            Theme::error(),
        )),
        Line::from(Span::styled(message.to_string(), Theme::text_dim())),
        Line::from(""),
        Line::from(vec![
            Span::styled("[r] ", Theme::shortcut_key()),
            Span::styled("Retry  ", Theme::text()),
            Span::styled("[Ctrl+B] ", Theme::shortcut_key()),
            Span::styled("Back", Theme::text()),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, centered_rect(70, 40, area));
}

/// Render the status bar with hints for the mounted page
fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let hints: &[(&str, &str)] = match &app.page {
        Page::Home(_) | Page::Jobs(_) => &[
            ("↑/↓", "Select"),
            ("Space", "Show More/Less"),
            ("Enter", "Read More"),
        ],
        Page::AddJob(_) | Page::EditJob { .. } => &[
            ("Tab", "Next field"),
            ("←/→", "Change option"),
            ("Enter", "Submit"),
            ("Esc", "Cancel"),
        ],
        Page::Job(_) => &[("e", "Edit"), ("d", "Delete"), ("Esc", "Back to Job Listings")],
        Page::NotFound { .. } => &[("Enter", "Go Back")],
        Page::Loading(_) | Page::LoadFailed { .. } => &[],
    };

    let mut spans = Vec::new();
    for (key, desc) in hints
        .iter()
        .chain(&[("Ctrl+G", "Go to"), ("Ctrl+Q", "Quit"), ("F1", "Help")])
    {
        spans.push(Span::styled(format!(" [{}]", key), Theme::shortcut_key()));
        spans.push(Span::styled(format!(" {}", desc), Theme::shortcut_desc()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the help modal
fn render_help(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());
    frame.render_widget(Clear, area);

    let shortcuts = [
        ("F2 / F3 / F4", "Home / Jobs / Add Job"),
        ("Ctrl+G", "Go to a path"),
        ("Ctrl+B", "Back to previous page"),
        ("↑/↓", "Select card / field"),
        ("Space", "Show more or less of a description"),
        ("Enter", "Open job / Submit form"),
        ("Tab", "Next form field"),
        ("e / d", "Edit / Delete job"),
        ("Esc", "Close modal / Leave page"),
        ("Ctrl+Q", "Quit application"),
        ("Ctrl+C", "Force quit"),
        ("F1 / ?", "Show this help"),
    ];

    let mut help_lines = vec![
        Line::from(Span::styled("Keyboard Shortcuts", Theme::heading())),
        Line::from(""),
    ];
    help_lines.extend(shortcuts.iter().map(|(key, desc)| {
        Line::from(vec![
            Span::styled(format!("{:<14}", key), Theme::shortcut_key()),
            Span::styled(*desc, Theme::text()),
        ])
    }));
    help_lines.push(Line::from(""));
    help_lines.push(Line::from(Span::styled(
        "Press any key to close",
        Theme::text_dim(),
    )));

    let paragraph = Paragraph::new(help_lines).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Theme::border_focused()),
    );

    frame.render_widget(paragraph, area);
}

fn render_confirm_delete(frame: &mut Frame) {
    let area = centered_rect(40, 20, frame.area());
    frame.render_widget(Clear, area);

    let paragraph = Paragraph::new(vec![
        Line::from(Span::styled(
            "Are you sure you want to delete this listing?",
            Theme::text(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y] ", Theme::shortcut_key()),
            Span::styled("Delete  ", Theme::error()),
            Span::styled("[n] ", Theme::shortcut_key()),
            Span::styled("Cancel", Theme::text()),
        ]),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(" Delete Job ")
            .borders(Borders::ALL)
            .border_style(Theme::error()),
    );

    frame.render_widget(paragraph, area);
}

fn render_goto(frame: &mut Frame, app: &App) {
    let area = centered_rect(50, 20, frame.area());
    let area = Rect::new(area.x, area.y, area.width, area.height.min(3));
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Go to path ")
        .borders(Borders::ALL)
        .border_style(Theme::border_focused());
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(&app.goto_input, inner);
}

/// Helper to create a centered rect
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
