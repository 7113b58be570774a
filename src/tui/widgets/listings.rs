//! Listings Widget
//!
//! Renders listing cards with truncated descriptions and the per-card
//! "Show More..." toggle.

use super::wrap_text;
use crate::listing::{JobListings, ListingCard};
use crate::tui::app::ListingsStatus;
use crate::tui::theme::{Icons, Theme};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render a listing page body
pub fn render_listings(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    status: &ListingsStatus,
    spinner: &str,
) {
    let block = Block::default()
        .title(Span::styled(format!(" {} ", title), Theme::title()))
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    match status {
        ListingsStatus::Loading => {
            let loading = Paragraph::new(Line::from(vec![
                Span::styled(spinner.to_string(), Theme::title()),
                Span::styled(" Loading jobs...", Theme::text_secondary()),
            ]))
            .alignment(Alignment::Center);
            frame.render_widget(loading, inner);
        }
        ListingsStatus::Failed(message) => {
            let failed = Paragraph::new(vec![
                Line::from(Span::styled(
                    format!("{} Could not load jobs", Icons::ERROR),
                    Theme::error(),
                )),
                Line::from(Span::styled(message.clone(), Theme::text_dim())),
            ])
            .alignment(Alignment::Center);
            frame.render_widget(failed, inner);
        }
        ListingsStatus::Loaded(listings) if listings.is_empty() => {
            let empty = Paragraph::new(Span::styled("No jobs posted yet", Theme::text_dim()))
                .alignment(Alignment::Center);
            frame.render_widget(empty, inner);
        }
        ListingsStatus::Loaded(listings) => render_cards(frame, inner, listings),
    }
}

fn render_cards(frame: &mut Frame, area: Rect, listings: &JobListings) {
    let text_width = area.width.saturating_sub(4) as usize;
    let cards: Vec<Vec<Line>> = listings
        .cards()
        .iter()
        .map(|card| card_lines(card, text_width))
        .collect();
    let heights: Vec<usize> = cards.iter().map(|lines| lines.len() + 2).collect();

    let selected = listings.selected_index();
    let first = first_visible(&heights, selected, area.height as usize);

    let mut y = area.y;
    for (index, lines) in cards.into_iter().enumerate().skip(first) {
        let remaining = area.bottom().saturating_sub(y);
        if remaining < 3 {
            break;
        }
        let height = heights[index].min(remaining as usize) as u16;
        let card_area = Rect::new(area.x, y, area.width, height);

        let is_selected = index == selected;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if is_selected {
                Theme::border_focused()
            } else {
                Theme::border()
            })
            .title(if is_selected {
                Span::styled(format!(" {} ", Icons::SELECTED), Theme::selected())
            } else {
                Span::raw("")
            });

        frame.render_widget(Paragraph::new(lines).block(block), card_area);
        y += height;
    }
}

/// First card to draw so that the selected one fits on screen, skipping
/// leading cards as needed
fn first_visible(heights: &[usize], selected: usize, height: usize) -> usize {
    let mut first = 0;
    while first < selected && heights[first..=selected].iter().sum::<usize>() > height {
        first += 1;
    }
    first
}

fn card_lines(card: &ListingCard, width: usize) -> Vec<Line<'static>> {
    let job = &card.job;
    let mut lines = vec![
        Line::from(Span::styled(job.job_type.clone(), Theme::text_secondary())),
        Line::from(Span::styled(job.title.clone(), Theme::heading())),
    ];

    lines.extend(
        wrap_text(&card.description(), width)
            .into_iter()
            .map(|line| Line::from(Span::styled(line, Theme::text()))),
    );

    lines.push(Line::from(vec![
        Span::styled("[Space] ", Theme::shortcut_key()),
        Span::styled(card.toggle_label(), Theme::title()),
    ]));
    lines.push(Line::from(Span::styled(card.salary_line(), Theme::salary())));
    lines.push(Line::from(vec![
        Span::styled(format!("{} {}", Icons::LOCATION, job.location), Theme::location()),
        Span::raw("  "),
        Span::styled("[Enter] ", Theme::shortcut_key()),
        Span::styled("Read More", Theme::shortcut_desc()),
    ]));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::job;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_first_visible_handles_very_tall_cards() {
        let heights = vec![70_000, 70_000, 5];
        assert_eq!(first_visible(&heights, 2, 20), 2);
        assert_eq!(first_visible(&heights, 0, 20), 0);
        assert_eq!(first_visible(&[4, 4, 4], 2, 12), 0);
    }

    #[test]
    fn test_expanded_cards_render_in_a_narrow_terminal() {
        let jobs = (0..70)
            .map(|i| {
                let mut job = job(&i.to_string(), "Tall");
                job.description = "ab ".repeat(1000);
                job
            })
            .collect();
        let mut listings = JobListings::new("Browse Jobs", jobs);
        for _ in 0..listings.cards().len() {
            listings.toggle_selected();
            listings.select_next();
        }
        listings.select_prev();

        let mut terminal = Terminal::new(TestBackend::new(8, 12)).unwrap();
        let status = ListingsStatus::Loaded(listings);
        terminal
            .draw(|frame| render_listings(frame, frame.area(), "Browse Jobs", &status, "*"))
            .unwrap();
    }
}
