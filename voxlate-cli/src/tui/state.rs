use voxlate_core::{controller::Status, Language};

/// A one-line message shown in the status bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

pub struct TuiState {
    /// Languages offered by the selector, in selector order.
    pub languages: Vec<Language>,

    /// Index into `languages` of the selected target.
    pub selected: usize,

    /// Mirrors the actor's status.
    pub status: Status,

    /// Contents of the translated-text area: a translation or a failure text.
    pub display: String,

    /// Whether `display` holds a failure text.
    pub display_is_error: bool,

    /// Language of the translation in `display`, if it holds one.
    pub display_language: Option<Language>,

    /// Whether the Play Pronunciation control is enabled, as last reported by
    /// the actor.
    pub can_play: bool,

    pub notice: Option<Notice>,

    /// Spinner animation frame counter.
    pub spinner_frame: usize,

    /// Whether the app should exit.
    pub should_quit: bool,
}

impl TuiState {
    pub fn new(default_language: Language) -> Self {
        let languages: Vec<Language> = Language::ordered().collect();
        let selected = languages
            .iter()
            .position(|language| *language == default_language)
            .unwrap_or(0);

        Self {
            languages,
            selected,
            status: Status::Idle,
            display: String::new(),
            display_is_error: false,
            display_language: None,
            can_play: false,
            notice: None,
            spinner_frame: 0,
            should_quit: false,
        }
    }

    pub fn selected_language(&self) -> Option<Language> {
        self.languages.get(self.selected).copied()
    }

    /// Replace the selector entries, keeping the current selection if it is
    /// still offered.
    pub fn set_languages(&mut self, languages: Vec<Language>) {
        let current = self.selected_language();
        self.selected = current
            .and_then(|current| languages.iter().position(|l| *l == current))
            .unwrap_or(0);
        self.languages = languages;
    }

    pub fn next_language(&mut self) {
        if !self.languages.is_empty() {
            self.selected = (self.selected + 1) % self.languages.len();
        }
    }

    pub fn previous_language(&mut self) {
        if !self.languages.is_empty() {
            self.selected = (self.selected + self.languages.len() - 1) % self.languages.len();
        }
    }

    pub fn is_translating(&self) -> bool {
        self.status == Status::AwaitingResult
    }
}
