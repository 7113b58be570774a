//! TUI Widgets
//!
//! Page bodies and overlays for the job board.

mod detail;
mod form;
mod listings;
mod notifications;

pub use detail::render_detail;
pub use form::render_form;
pub use listings::render_listings;
pub use notifications::render_notifications;

/// Wrap `text` to lines of at most `width` characters, breaking on
/// whitespace where possible. Blank input lines are kept.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        for word in line.split_whitespace() {
            let needed = if current.is_empty() {
                word.chars().count()
            } else {
                current.chars().count() + 1 + word.chars().count()
            };

            if needed > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }

            // Words longer than a whole line are split at char boundaries
            let mut word = word;
            while word.chars().count() > width {
                let split = word
                    .char_indices()
                    .nth(width)
                    .map(|(i, _)| i)
                    .unwrap_or(word.len());
                lines.push(word[..split].to_string());
                word = &word[split..];
            }

            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }

        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}
