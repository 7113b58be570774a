//! Toast overlay in the top-right corner

use crate::shell::Notifications;
use crate::tui::theme::{Icons, Theme};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 3;

pub fn render_notifications(frame: &mut Frame, area: Rect, notifications: &Notifications) {
    let width = TOAST_WIDTH.min(area.width);
    let x = area.right().saturating_sub(width + 1);
    let mut y = area.y + 1;

    // Newest on top
    let toasts: Vec<_> = notifications.visible().collect();
    for toast in toasts.into_iter().rev() {
        if y + TOAST_HEIGHT > area.bottom() {
            break;
        }
        let toast_area = Rect::new(x, y, width, TOAST_HEIGHT);
        let style = Theme::toast(toast.level);

        let line = Line::from(vec![
            Span::styled(format!("{} ", Icons::for_level(toast.level)), style),
            Span::styled(toast.message.clone(), Theme::text()),
        ]);
        let paragraph = Paragraph::new(line)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(style)
                    .title_bottom(
                        Line::from(Span::styled(
                            toast
                                .created_at
                                .with_timezone(&chrono::Local)
                                .format(" %H:%M:%S ")
                                .to_string(),
                            Theme::text_dim(),
                        ))
                        .right_aligned(),
                    ),
            );

        frame.render_widget(Clear, toast_area);
        frame.render_widget(paragraph, toast_area);
        y += TOAST_HEIGHT;
    }
}
