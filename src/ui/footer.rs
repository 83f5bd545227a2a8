use crate::ui::app::{Mode, Screen};
use crate::ui::theme::{Theme, HEADER_SEPARATOR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer {
    screen: Screen,
    mode: Mode,
    theme: Theme,
}

impl Footer {
    pub fn new(screen: Screen, mode: Mode, theme: Theme) -> Self {
        Self {
            screen,
            mode,
            theme,
        }
    }

    pub fn hints(&self) -> &'static str {
        match (self.mode, self.screen) {
            (Mode::Compose(_), _) => " Tab: Next field │ ←/→: Label │ Enter: Create │ Esc: Close",
            (Mode::Edit(_), _) => " Tab: Next field │ ←/→: Label │ Enter: Save │ Esc: Discard",
            (Mode::Browse, Screen::Notes) => {
                " n: New │ e: Edit │ d: Delete │ f: Favorite │ t: Theme │ Tab: Groceries │ q: Quit"
            }
            (Mode::Browse, Screen::Grocery) => {
                " Space: Toggle │ t: Theme │ Tab: Notes │ q: Quit"
            }
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hints();
        let version = format!("v{} ", VERSION);

        // Pad by char count, not byte count
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let palette = self.theme.palette();
        let text_style = Style::default()
            .fg(palette.foreground)
            .add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style.bg(palette.background))
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(HEADER_SEPARATOR)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::app::FormField;

    #[test]
    fn hints_follow_mode() {
        let browse = Footer::new(Screen::Grocery, Mode::Browse, Theme::Light);
        assert!(browse.hints().contains("Space: Toggle"));
        let edit = Footer::new(Screen::Notes, Mode::Edit(FormField::Title), Theme::Light);
        assert!(edit.hints().contains("Esc: Discard"));
    }
}
