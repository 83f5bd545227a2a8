use crate::board::{GroceryList, Label, Note, NoteList};
use crate::config::Config;
use crate::ui::grocery::{GroceryIntent, GroceryReducer, GroceryState};
use crate::ui::mvi::Reducer;
use crate::ui::notes::{NoteField, NotesIntent, NotesReducer, NotesState};
use crate::ui::theme::Theme;
use serde_json::json;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    Notes,
    Grocery,
}

/// Field of the note form that receives typed text.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormField {
    Title,
    Content,
    Label,
}

impl FormField {
    fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Content,
            FormField::Content => FormField::Label,
            FormField::Label => FormField::Title,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    Browse,
    /// Filling in the new-note form.
    Compose(FormField),
    /// Editing the selected note in place.
    Edit(FormField),
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    screen: Screen,
    mode: Mode,
    /// Passed down to rendering; no widget state depends on it.
    theme: Theme,
    /// Sticky notes board (MVI pattern).
    notes: NotesState,
    /// Grocery list (MVI pattern).
    grocery: GroceryState,
    note_cursor: usize,
    grocery_cursor: usize,
}

impl App {
    pub fn new(notes: NotesState, grocery: GroceryState, theme: Theme) -> Self {
        Self {
            should_quit: false,
            screen: Screen::Notes,
            mode: Mode::Browse,
            theme,
            notes,
            grocery,
            note_cursor: 0,
            grocery_cursor: 0,
        }
    }

    /// Build the app from seed data and UI settings.
    pub fn from_config(config: &Config) -> Self {
        let notes = NotesState::new(NoteList::from_notes(config.notes.clone()));
        let grocery = GroceryState::new(
            config.ui.owner.clone(),
            GroceryList::from_items(config.groceries.clone()),
        );
        Self::new(notes, grocery, config.ui.theme)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn notes(&self) -> &NotesState {
        &self.notes
    }

    pub fn grocery(&self) -> &GroceryState {
        &self.grocery
    }

    pub fn note_cursor(&self) -> usize {
        self.note_cursor
    }

    pub fn grocery_cursor(&self) -> usize {
        self.grocery_cursor
    }

    pub fn selected_note(&self) -> Option<&Note> {
        self.notes.notes().get(self.note_cursor)
    }

    /// Current board contents as JSON.
    pub fn snapshot(&self) -> serde_json::Value {
        json!({
            "theme": self.theme,
            "notes": self.notes.notes(),
            "favorites": self.notes.book.favorite_ids(),
            "grocery": {
                "title": self.grocery.title(),
                "list": &self.grocery.list,
            },
        })
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        tracing::debug!(theme = self.theme.name(), "Theme toggled");
    }

    pub fn switch_screen(&mut self) {
        if self.mode != Mode::Browse {
            return;
        }
        self.screen = match self.screen {
            Screen::Notes => Screen::Grocery,
            Screen::Grocery => Screen::Notes,
        };
    }

    /// Move the selection on the current screen. Leaving a note that is
    /// being edited drops the unsaved edits.
    pub fn move_selection(&mut self, direction: i32) {
        match self.screen {
            Screen::Notes => {
                if matches!(self.mode, Mode::Edit(_)) {
                    self.dispatch_notes(NotesIntent::CancelEdit);
                    self.mode = Mode::Browse;
                }
                self.note_cursor = step(self.note_cursor, self.notes.notes().len(), direction);
            }
            Screen::Grocery => {
                self.grocery_cursor = step(self.grocery_cursor, self.grocery.list.len(), direction);
            }
        }
    }

    // ========================================================================
    // Notes board (MVI pattern)
    // ========================================================================

    /// Dispatch an intent to the notes reducer.
    pub fn dispatch_notes(&mut self, intent: NotesIntent) {
        dispatch_mvi!(self, notes, NotesReducer, intent);
        self.clamp_note_cursor();
    }

    pub fn start_compose(&mut self) {
        self.screen = Screen::Notes;
        self.mode = Mode::Compose(FormField::Title);
    }

    pub fn begin_edit_selected(&mut self) {
        let Some(id) = self.selected_note().map(|n| n.id) else {
            return;
        };
        self.dispatch_notes(NotesIntent::BeginEdit { id });
        if self.notes.edit.is_editing() {
            self.mode = Mode::Edit(FormField::Title);
        }
    }

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_note().map(|n| n.id) {
            self.dispatch_notes(NotesIntent::Delete { id });
        }
    }

    pub fn toggle_favorite_selected(&mut self) {
        if let Some(id) = self.selected_note().map(|n| n.id) {
            self.dispatch_notes(NotesIntent::ToggleFavorite { id });
        }
    }

    /// Append a character to the focused form field.
    pub fn type_char(&mut self, ch: char) {
        self.edit_text(|text| text.push(ch));
    }

    pub fn backspace(&mut self) {
        self.edit_text(|text| {
            text.pop();
        });
    }

    pub fn next_field(&mut self) {
        self.mode = match self.mode {
            Mode::Compose(field) => Mode::Compose(field.next()),
            Mode::Edit(field) => Mode::Edit(field.next()),
            Mode::Browse => Mode::Browse,
        };
    }

    /// Cycle the label when the label field has focus.
    pub fn cycle_label(&mut self, direction: i32) {
        let turn = |label: Label| {
            if direction.is_negative() {
                label.prev()
            } else {
                label.next()
            }
        };
        match self.mode {
            Mode::Compose(FormField::Label) => {
                let label = turn(self.notes.draft.label);
                self.dispatch_notes(NotesIntent::DraftField(NoteField::Label(label)));
            }
            Mode::Edit(FormField::Label) => {
                if let Some(label) = self.notes.edit.working().map(|w| turn(w.label)) {
                    self.dispatch_notes(NotesIntent::EditField(NoteField::Label(label)));
                }
            }
            _ => {}
        }
    }

    /// Submit the new-note form or save the edit session.
    pub fn submit_form(&mut self) {
        match self.mode {
            Mode::Compose(_) => {
                self.dispatch_notes(NotesIntent::Submit);
                self.note_cursor = self.notes.notes().len().saturating_sub(1);
            }
            Mode::Edit(_) => self.dispatch_notes(NotesIntent::CommitEdit),
            Mode::Browse => return,
        }
        self.mode = Mode::Browse;
    }

    /// Leave the form. The new-note draft is kept; edits are discarded.
    pub fn cancel_form(&mut self) {
        if matches!(self.mode, Mode::Edit(_)) {
            self.dispatch_notes(NotesIntent::CancelEdit);
        }
        self.mode = Mode::Browse;
    }

    fn edit_text(&mut self, change: impl FnOnce(&mut String)) {
        let intent = match self.mode {
            Mode::Compose(FormField::Title) => {
                let mut title = self.notes.draft.title.clone();
                change(&mut title);
                NotesIntent::DraftField(NoteField::Title(title))
            }
            Mode::Compose(FormField::Content) => {
                let mut content = self.notes.draft.content.clone();
                change(&mut content);
                NotesIntent::DraftField(NoteField::Content(content))
            }
            Mode::Edit(FormField::Title) => {
                let Some(working) = self.notes.edit.working() else {
                    return;
                };
                let mut title = working.title.clone();
                change(&mut title);
                NotesIntent::EditField(NoteField::Title(title))
            }
            Mode::Edit(FormField::Content) => {
                let Some(working) = self.notes.edit.working() else {
                    return;
                };
                let mut content = working.content.clone();
                change(&mut content);
                NotesIntent::EditField(NoteField::Content(content))
            }
            _ => return,
        };
        self.dispatch_notes(intent);
    }

    fn clamp_note_cursor(&mut self) {
        let len = self.notes.notes().len();
        if self.note_cursor >= len {
            self.note_cursor = len.saturating_sub(1);
        }
    }

    // ========================================================================
    // Grocery list (MVI pattern)
    // ========================================================================

    /// Dispatch an intent to the grocery reducer.
    pub fn dispatch_grocery(&mut self, intent: GroceryIntent) {
        dispatch_mvi!(self, grocery, GroceryReducer, intent);
    }

    /// Toggle the selected item. The cursor follows the item to its new row.
    pub fn toggle_selected_item(&mut self) {
        let Some(name) = self
            .grocery
            .items()
            .nth(self.grocery_cursor)
            .map(|item| item.name.clone())
        else {
            return;
        };
        self.dispatch_grocery(GroceryIntent::Toggle { name: name.clone() });
        if let Some(row) = self.grocery.items().position(|item| item.name == name) {
            self.grocery_cursor = row;
        }
    }
}

fn step(current: usize, len: usize, direction: i32) -> usize {
    if len == 0 {
        return 0;
    }
    let current = current.min(len - 1);
    if direction.is_negative() {
        if current == 0 {
            len - 1
        } else {
            current - 1
        }
    } else if current + 1 >= len {
        0
    } else {
        current + 1
    }
}
