use crate::board::{Label, Note};
use crate::ui::app::{App, FormField, Mode, Screen};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{grocery_rows, layout_regions, notes_columns};
use crate::ui::theme::{Palette, ACCENT, FAVORITE, HEADER_SEPARATOR};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let palette = app.theme().palette();

    frame.render_widget(Header::new(app.screen(), app.theme()).widget(), header);
    frame.render_widget(Clear, body);
    match app.screen() {
        Screen::Notes => draw_notes(frame, app, body, palette),
        Screen::Grocery => draw_grocery(frame, app, body, palette),
    }
    let footer_widget = Footer::new(app.screen(), app.mode(), app.theme());
    frame.render_widget(footer_widget.widget(footer), footer);
}

fn panel<'a>(title: &'a str, palette: &Palette) -> Block<'a> {
    Block::default()
        .title(Span::styled(title, Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(HEADER_SEPARATOR))
        .style(Style::default().fg(palette.foreground).bg(palette.background))
}

fn draw_notes(frame: &mut Frame<'_>, app: &App, body: Rect, palette: &Palette) {
    let (form_area, grid_area, favorites_area) = notes_columns(body);
    let state = app.notes();

    let (form_title, lines) = match (app.mode(), state.edit.working()) {
        (Mode::Edit(focus), Some(working)) => (
            "Edit Note",
            form_lines(&working.title, &working.content, working.label, focus, palette),
        ),
        (Mode::Compose(focus), _) => (
            "New Note",
            form_lines(
                &state.draft.title,
                &state.draft.content,
                state.draft.label,
                focus,
                palette,
            ),
        ),
        _ => (
            "New Note",
            vec![Line::from("Press n to write a note.")],
        ),
    };
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(panel(form_title, palette)),
        form_area,
    );

    let items: Vec<ListItem> = state
        .notes()
        .iter()
        .map(|note| {
            let favorite = state.book.is_favorite(note.id);
            let editing = state.edit.target() == Some(note.id);
            note_item(note, favorite, editing, palette)
        })
        .collect();
    let highlight = Style::default()
        .bg(palette.button_background)
        .fg(palette.button_color);
    let list = List::new(items)
        .block(panel("Notes", palette))
        .highlight_style(highlight);
    let mut list_state = ListState::default().with_selected(Some(app.note_cursor()));
    frame.render_stateful_widget(list, grid_area, &mut list_state);

    let favorites: Vec<ListItem> = state
        .favorites()
        .into_iter()
        .map(|note| ListItem::new(Line::from(format!("• {}", note.title))))
        .collect();
    frame.render_widget(
        List::new(favorites).block(panel("List of favorites", palette)),
        favorites_area,
    );
}

fn form_lines(
    title: &str,
    content: &str,
    label: Label,
    focus: FormField,
    palette: &Palette,
) -> Vec<Line<'static>> {
    let field = |name: &'static str, value: String, field: FormField| {
        let style = if field == focus {
            Style::default()
                .fg(palette.button_color)
                .bg(palette.button_background)
        } else {
            Style::default().fg(palette.foreground)
        };
        vec![
            Line::from(Span::styled(name, Style::default().add_modifier(Modifier::BOLD))),
            Line::from(Span::styled(value, style)),
            Line::from(""),
        ]
    };

    let mut lines = Vec::new();
    lines.extend(field("Title", title.to_string(), FormField::Title));
    lines.extend(field("Content", content.to_string(), FormField::Content));
    lines.extend(field("Label", format!("‹ {} ›", label), FormField::Label));
    lines
}

fn note_item(note: &Note, favorite: bool, editing: bool, palette: &Palette) -> ListItem<'static> {
    let heart = if favorite {
        Span::styled("♥ ", Style::default().fg(FAVORITE))
    } else {
        Span::styled("♡ ", Style::default().fg(palette.foreground))
    };
    let mut title = vec![
        heart,
        Span::styled(
            note.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  [{}]", note.label),
            Style::default().fg(HEADER_SEPARATOR),
        ),
    ];
    if editing {
        title.push(Span::styled("  (editing)", Style::default().fg(ACCENT)));
    }
    ListItem::new(vec![
        Line::from(title),
        Line::from(format!("  {}", note.content)),
        Line::from(""),
    ])
    .style(Style::default().bg(palette.note_background))
}

fn draw_grocery(frame: &mut Frame<'_>, app: &App, body: Rect, palette: &Palette) {
    let state = app.grocery();
    let title = state.title();
    let block = panel(&title, palette);
    let inner = block.inner(body);
    frame.render_widget(block, body);

    let (summary_area, items_area) = grocery_rows(inner);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            state.bought_line(),
            Style::default().add_modifier(Modifier::BOLD),
        ))),
        summary_area,
    );

    let items: Vec<ListItem> = state
        .items()
        .map(|item| {
            let checkbox = if item.is_purchased { "[x]" } else { "[ ]" };
            let mut style = Style::default().fg(palette.foreground);
            if item.is_purchased {
                style = style.add_modifier(Modifier::CROSSED_OUT | Modifier::DIM);
            }
            ListItem::new(Line::from(format!(" {} {}", checkbox, item.name))).style(style)
        })
        .collect();
    let highlight = Style::default()
        .bg(palette.button_background)
        .fg(palette.button_color);
    let list = List::new(items).highlight_style(highlight);
    let mut list_state = ListState::default().with_selected(Some(app.grocery_cursor()));
    frame.render_stateful_widget(list, items_area, &mut list_state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::GroceryItem;
    use crate::config::Config;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn selected_grocery_item_stays_visible_in_long_list() {
        let config = Config {
            groceries: (0..30)
                .map(|i| GroceryItem::new(format!("item {i:02}")))
                .collect(),
            ..Config::default()
        };
        let mut app = App::from_config(&config);
        app.switch_screen();
        app.move_selection(-1);
        assert_eq!(app.grocery_cursor(), 29);

        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("item 29"), "{text}");
        assert!(!text.contains("item 00"), "{text}");
        assert!(text.contains("Items bought: 0"), "{text}");
    }
}
