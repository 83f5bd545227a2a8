use crate::ui::app::Screen;
use crate::ui::theme::{Theme, ACCENT, HEADER_SEPARATOR};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header {
    screen: Screen,
    theme: Theme,
}

impl Header {
    pub fn new(screen: Screen, theme: Theme) -> Self {
        Self { screen, theme }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let palette = self.theme.palette();
        let text_style = Style::default().fg(palette.foreground);
        let active_style = Style::default()
            .fg(ACCENT)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let tab = |label: &'static str, screen: Screen| {
            if screen == self.screen {
                Span::styled(label, active_style)
            } else {
                Span::styled(label, text_style)
            }
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            tab("Sticky Notes", Screen::Notes),
            Span::styled("  │  ", separator_style),
            tab("Groceries", Screen::Grocery),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("theme: {}", self.theme.name()), text_style),
        ]);

        Paragraph::new(line)
            .style(Style::default().bg(palette.background))
            .block(
                Block::default()
                    .borders(Borders::TOP | Borders::BOTTOM)
                    .border_style(separator_style),
            )
    }
}
