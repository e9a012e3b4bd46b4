use crate::catalog::{GameRecord, filter_catalog};

/// Named events driving the search/selection state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// The catalog snapshot finished loading (fires at most once per mount).
    CatalogLoaded(Vec<GameRecord>),
    /// The user edited the query text.
    Type(String),
    /// The user clicked a result row.
    SelectItem(GameRecord),
    /// The query input gained focus.
    Focus,
    /// A pointer-down landed outside the search container.
    ClickOutside,
}

/// What the dropdown panel should show for the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownView {
    Hidden,
    /// Open with an empty query: invite the user to type rather than
    /// claiming "no games found" when nothing was searched yet.
    Prompt,
    NoMatches,
    Matches,
}

/// High-level phase of the machine, useful for assertions and debugging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    FocusedEmpty,
    Typing,
    Selected,
}

/// The whole search state as one value: catalog snapshot, query, derived
/// results, selection, and dropdown visibility. Fields are private so the
/// only way to move the state is [`SearchState::apply`], which keeps query,
/// results, selection, and visibility mutually consistent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    catalog: Vec<GameRecord>,
    query: String,
    results: Vec<GameRecord>,
    selected: Option<GameRecord>,
    dropdown_open: bool,
}

impl SearchState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn catalog(&self) -> &[GameRecord] {
        &self.catalog
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn results(&self) -> &[GameRecord] {
        &self.results
    }

    #[must_use]
    pub fn selected(&self) -> Option<&GameRecord> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    #[must_use]
    pub fn dropdown_view(&self) -> DropdownView {
        if !self.dropdown_open {
            DropdownView::Hidden
        } else if self.query.is_empty() {
            DropdownView::Prompt
        } else if self.results.is_empty() {
            DropdownView::NoMatches
        } else {
            DropdownView::Matches
        }
    }

    #[must_use]
    pub fn phase(&self) -> SearchPhase {
        if self.selected.is_some() {
            SearchPhase::Selected
        } else if !self.query.is_empty() {
            SearchPhase::Typing
        } else if self.dropdown_open {
            SearchPhase::FocusedEmpty
        } else {
            SearchPhase::Idle
        }
    }

    /// Advance the machine by one event, returning the next state.
    #[must_use]
    pub fn apply(&self, event: SearchEvent) -> Self {
        let mut next = self.clone();
        match event {
            SearchEvent::CatalogLoaded(catalog) => {
                next.results = if next.query.is_empty() {
                    Vec::new()
                } else {
                    filter_catalog(&catalog, &next.query)
                };
                next.catalog = catalog;
            }
            SearchEvent::Type(text) => {
                next.results = if text.is_empty() {
                    Vec::new()
                } else {
                    filter_catalog(&next.catalog, &text)
                };
                next.query = text;
                // Editing the query abandons any prior selection.
                next.selected = None;
                // Typing implies the input holds focus.
                next.dropdown_open = true;
            }
            SearchEvent::SelectItem(game) => {
                next.query = game.title.clone();
                next.results = Vec::new();
                next.selected = Some(game);
                next.dropdown_open = false;
            }
            SearchEvent::Focus => {
                next.dropdown_open = true;
            }
            SearchEvent::ClickOutside => {
                next.dropdown_open = false;
            }
        }
        next
    }
}
