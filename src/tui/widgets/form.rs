//! Form Widget
//!
//! Renders the job form used by the add and edit pages.

use crate::tui::form::{FieldInput, JobForm};
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const FIELD_HEIGHT: u16 = 3;

pub fn render_form(frame: &mut Frame, area: Rect, title: &str, form: &JobForm, pending: bool) {
    let block = Block::default()
        .title(Span::styled(format!(" {} ", title), Theme::title()))
        .title_bottom(Line::from(if pending {
            Span::styled(" Saving... ", Theme::text_dim())
        } else {
            Span::styled(" [Enter] Submit ", Theme::shortcut_key())
        }))
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Keep a window of fields around the focused one
    let visible = (inner.height / FIELD_HEIGHT).max(1) as usize;
    let fields = form.fields();
    let first = form.focus().saturating_sub(visible - 1);

    for (slot, (index, field)) in fields.iter().enumerate().skip(first).take(visible).enumerate() {
        let focused = index == form.focus();
        let field_area = Rect::new(
            inner.x,
            inner.y + slot as u16 * FIELD_HEIGHT,
            inner.width,
            FIELD_HEIGHT.min(inner.height),
        );

        let block = Block::default()
            .title(format!(" {} ", field.id.label()))
            .borders(Borders::ALL)
            .border_style(if focused {
                Theme::border_focused()
            } else {
                Theme::border()
            });
        let field_inner = block.inner(field_area);
        frame.render_widget(block, field_area);

        match &field.input {
            FieldInput::Text(textarea) => frame.render_widget(textarea, field_inner),
            FieldInput::Select { options, choice } => {
                let option = &options[*choice];
                let label = if option.is_empty() {
                    Span::styled("Not set", Theme::text_dim())
                } else if focused {
                    Span::styled(option.clone(), Theme::selected())
                } else {
                    Span::styled(option.clone(), Theme::text())
                };
                let line = Line::from(vec![
                    Span::styled("◀ ", Theme::text_dim()),
                    label,
                    Span::styled(" ▶", Theme::text_dim()),
                ]);
                frame.render_widget(Paragraph::new(line), field_inner);
            }
        }
    }
}
