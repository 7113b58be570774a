//! Detail Widget
//!
//! Full view of one job: description, salary, company contact and the
//! edit/delete actions.

use super::wrap_text;
use crate::models::Job;
use crate::tui::theme::{Icons, Theme};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_detail(frame: &mut Frame, area: Rect, job: &Job, pending: bool) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    render_overview(frame, columns[0], job);

    let sidebar = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(5)])
        .split(columns[1]);

    render_company(frame, sidebar[0], job);
    render_manage(frame, sidebar[1], pending);
}

fn render_overview(frame: &mut Frame, area: Rect, job: &Job) {
    let block = Block::default()
        .title(" Job ")
        .borders(Borders::ALL)
        .border_style(Theme::border_focused());
    let width = block.inner(area).width as usize;

    let mut lines = vec![
        Line::from(Span::styled(job.job_type.clone(), Theme::text_secondary())),
        Line::from(Span::styled(job.title.clone(), Theme::heading())),
        Line::from(Span::styled(
            format!("{} {}", Icons::LOCATION, job.location),
            Theme::location(),
        )),
        Line::from(""),
        Line::from(Span::styled("Job Description", Theme::title())),
    ];
    lines.extend(
        wrap_text(&job.description, width)
            .into_iter()
            .map(|line| Line::from(Span::styled(line, Theme::text()))),
    );
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Salary", Theme::title())));
    lines.push(Line::from(Span::styled(
        format!("{} / Year", job.salary),
        Theme::salary(),
    )));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_company(frame: &mut Frame, area: Rect, job: &Job) {
    let company = &job.company;
    let block = Block::default()
        .title(" Company Info ")
        .borders(Borders::ALL)
        .border_style(Theme::border());
    let width = block.inner(area).width as usize;

    let mut lines = vec![Line::from(Span::styled(company.name.clone(), Theme::heading()))];
    lines.extend(
        wrap_text(&company.description, width)
            .into_iter()
            .map(|line| Line::from(Span::styled(line, Theme::text_secondary()))),
    );
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Contact Email:", Theme::text_dim())));
    lines.push(Line::from(Span::styled(company.contact_email.clone(), Theme::text())));
    lines.push(Line::from(Span::styled("Contact Phone:", Theme::text_dim())));
    lines.push(Line::from(Span::styled(company.contact_phone.clone(), Theme::text())));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_manage(frame: &mut Frame, area: Rect, pending: bool) {
    let lines = if pending {
        vec![Line::from(Span::styled("Working...", Theme::text_dim()))]
    } else {
        vec![
            Line::from(vec![
                Span::styled("[e] ", Theme::shortcut_key()),
                Span::styled("Edit Job", Theme::text()),
            ]),
            Line::from(vec![
                Span::styled("[d] ", Theme::shortcut_key()),
                Span::styled("Delete Job", Theme::error()),
            ]),
        ]
    };

    let block = Block::default()
        .title(" Manage Job ")
        .borders(Borders::ALL)
        .border_style(Theme::border());

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
