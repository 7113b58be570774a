//! Listing display state
//!
//! Summary cards show a truncated description with a per-card
//! "Show More..." toggle. Expansion state lives in each card and is
//! rebuilt on every mount.

use crate::models::Job;

/// Characters of description shown on a collapsed card
pub const PREVIEW_CHARS: usize = 90;

const ELLIPSIS: &str = "...";

/// Collapsed description: the first 90 characters plus an ellipsis when the
/// description has at least 90 characters, otherwise the description as is.
pub fn truncate_description(description: &str) -> String {
    if description.chars().count() < PREVIEW_CHARS {
        return description.to_string();
    }

    let mut preview: String = description.chars().take(PREVIEW_CHARS).collect();
    preview.push_str(ELLIPSIS);
    preview
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListingCard {
    pub job: Job,
    expanded: bool,
}

impl ListingCard {
    pub fn new(job: Job) -> Self {
        Self {
            job,
            expanded: false,
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Description as currently shown
    pub fn description(&self) -> String {
        if self.expanded {
            self.job.description.clone()
        } else {
            truncate_description(&self.job.description)
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.expanded {
            "Show Less..."
        } else {
            "Show More..."
        }
    }

    pub fn salary_line(&self) -> String {
        format!("{} / Year", self.job.salary)
    }

    /// Where "Read More" leads
    pub fn detail_path(&self) -> String {
        format!("/jobs/{}", self.job.id)
    }
}

/// A titled, selectable collection of listing cards
#[derive(Debug, Clone, PartialEq)]
pub struct JobListings {
    pub title: String,
    cards: Vec<ListingCard>,
    selected: usize,
}

impl JobListings {
    pub fn new(title: impl Into<String>, jobs: Vec<Job>) -> Self {
        Self {
            title: title.into(),
            cards: jobs.into_iter().map(ListingCard::new).collect(),
            selected: 0,
        }
    }

    pub fn cards(&self) -> &[ListingCard] {
        &self.cards
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Option<&ListingCard> {
        self.cards.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if !self.cards.is_empty() {
            self.selected = (self.selected + 1) % self.cards.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.cards.is_empty() {
            self.selected = if self.selected == 0 {
                self.cards.len() - 1
            } else {
                self.selected - 1
            };
        }
    }

    /// Toggle the expansion of the selected card only
    pub fn toggle_selected(&mut self) {
        if let Some(card) = self.cards.get_mut(self.selected) {
            card.toggle();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::job;

    fn with_description(id: &str, description: &str) -> Job {
        let mut job = job(id, "Listing");
        job.description = description.to_string();
        job
    }

    #[test]
    fn test_long_description_is_cut_at_ninety_chars() {
        let description = "x".repeat(150);
        let preview = truncate_description(&description);
        assert_eq!(preview, format!("{}...", "x".repeat(90)));
    }

    #[test]
    fn test_exactly_ninety_chars_gets_ellipsis() {
        let description = "y".repeat(90);
        assert_eq!(truncate_description(&description), format!("{}...", description));
    }

    #[test]
    fn test_short_description_is_untouched() {
        assert_eq!(truncate_description("Short and sweet."), "Short and sweet.");
        assert_eq!(truncate_description(""), "");
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let description = "é".repeat(100);
        let preview = truncate_description(&description);
        assert_eq!(preview.chars().count(), 93);
        assert!(preview.starts_with(&"é".repeat(90)));
    }

    #[test]
    fn test_card_toggle_switches_text_and_label() {
        let long = "z".repeat(120);
        let mut card = ListingCard::new(with_description("1", &long));

        assert_eq!(card.toggle_label(), "Show More...");
        assert_eq!(card.description().chars().count(), 93);

        card.toggle();
        assert_eq!(card.toggle_label(), "Show Less...");
        assert_eq!(card.description(), long);
        assert_eq!(card.detail_path(), "/jobs/1");
    }

    #[test]
    fn test_toggling_one_card_leaves_others_alone() {
        let long = "w".repeat(120);
        let mut listings = JobListings::new(
            "Browse Jobs",
            vec![
                with_description("1", &long),
                with_description("2", &long),
                with_description("3", &long),
            ],
        );

        listings.select_next();
        listings.toggle_selected();

        let expanded: Vec<bool> = listings.cards().iter().map(|c| c.is_expanded()).collect();
        assert_eq!(expanded, vec![false, true, false]);
    }

    #[test]
    fn test_selection_wraps() {
        let mut listings = JobListings::new(
            "Recent Jobs",
            vec![with_description("1", "a"), with_description("2", "b")],
        );
        listings.select_prev();
        assert_eq!(listings.selected_index(), 1);
        listings.select_next();
        assert_eq!(listings.selected().unwrap().job.id, "1");

        let mut empty = JobListings::new("Recent Jobs", Vec::new());
        empty.select_next();
        empty.toggle_selected();
        assert!(empty.selected().is_none());
    }
}
