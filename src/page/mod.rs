//! Page element handles.
//!
//! Components never look elements up by id. Each one is handed the handles it
//! writes to at construction; a handle that is `None` means the page does not
//! render that element and the corresponding update is skipped.

use crate::i18n::Strings;
use std::cell::RefCell;
use std::rc::Rc;

/// Writable piece of rendered page state.
pub trait Element<T> {
    fn set(&self, value: T);
    fn update(&self, f: &mut dyn FnMut(&mut T));
}

pub type Handle<T> = Rc<dyn Element<T>>;

impl<T> Element<T> for RefCell<T> {
    fn set(&self, value: T) {
        *self.borrow_mut() = value;
    }

    fn update(&self, f: &mut dyn FnMut(&mut T)) {
        f(&mut self.borrow_mut());
    }
}

/// Writes to a signal whose owner has been dropped are ignored.
impl<T: 'static> Element<T> for dioxus::prelude::Signal<T> {
    fn set(&self, value: T) {
        use dioxus::prelude::Writable;
        let mut signal = *self;
        if let Ok(mut current) = signal.try_write() {
            *current = value;
        };
    }

    fn update(&self, f: &mut dyn FnMut(&mut T)) {
        use dioxus::prelude::Writable;
        let mut signal = *self;
        if let Ok(mut current) = signal.try_write() {
            f(&mut current);
        };
    }
}

/// Harvester state as mirrored by the start/stop buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Stopped,
    Running,
}

impl From<bool> for RunState {
    fn from(running: bool) -> Self {
        if running {
            RunState::Running
        } else {
            RunState::Stopped
        }
    }
}

/// The `startBtn` / `stopBtn` pair. Each handle holds the button's enabled flag.
#[derive(Clone, Default)]
pub struct ControlButtons {
    pub start: Option<Handle<bool>>,
    pub stop: Option<Handle<bool>>,
}

impl ControlButtons {
    /// Enable exactly the button that makes sense in `state`.
    pub fn show(&self, state: RunState) {
        let running = state == RunState::Running;
        if let Some(start) = &self.start {
            start.set(!running);
        }
        if let Some(stop) = &self.stop {
            stop.set(running);
        }
    }
}

/// Content of the `status-text` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusBadge {
    #[default]
    Unknown,
    Active,
    Stopped,
}

impl StatusBadge {
    pub fn css_class(self) -> &'static str {
        match self {
            StatusBadge::Unknown => "text-muted",
            StatusBadge::Active => "text-success",
            StatusBadge::Stopped => "text-secondary",
        }
    }

    pub fn label(self, strings: &Strings) -> &'static str {
        match self {
            StatusBadge::Unknown => strings.status_unknown,
            StatusBadge::Active => strings.status_active,
            StatusBadge::Stopped => strings.status_stopped,
        }
    }
}

impl From<RunState> for StatusBadge {
    fn from(state: RunState) -> Self {
        match state {
            RunState::Running => StatusBadge::Active,
            RunState::Stopped => StatusBadge::Stopped,
        }
    }
}

/// Number of columns in the candidates table.
pub const CANDIDATE_COLUMNS: usize = 3;

/// One row of `candidates-tbody`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    Candidate {
        pair: String,
        token: String,
        surplus: String,
    },
    /// Single cell spanning `colspan` columns.
    Placeholder { colspan: usize, message: String },
}

impl TableRow {
    /// Cell texts in display order.
    pub fn cells(&self) -> Vec<&str> {
        match self {
            TableRow::Candidate {
                pair,
                token,
                surplus,
            } => vec![pair.as_str(), token.as_str(), surplus.as_str()],
            TableRow::Placeholder { message, .. } => vec![message.as_str()],
        }
    }
}

/// Handles for every element the status view writes to.
#[derive(Clone, Default)]
pub struct StatusElements {
    pub status_text: Option<Handle<StatusBadge>>,
    pub candidates_count: Option<Handle<String>>,
    pub transactions_count: Option<Handle<String>>,
    pub last_run: Option<Handle<String>>,
    pub dry_run: Option<Handle<Option<bool>>>,
}
