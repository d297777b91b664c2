//! Interaction state for the project modal.
//!
//! The poster can be enlarged on top of the open modal. Escape peels layers
//! off from the top: first the enlarged poster, then the modal itself.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModalState {
    #[default]
    Closed,
    Open,
    PosterZoomed,
}

/// What an Escape keypress did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeOutcome {
    PosterClosed,
    ModalClosed,
    Ignored,
}

impl ModalState {
    pub fn open(self) -> Self {
        match self {
            ModalState::Closed => ModalState::Open,
            other => other,
        }
    }

    /// Enlarge the poster. Only possible while the modal is open.
    pub fn zoom_poster(self) -> Self {
        match self {
            ModalState::Open => ModalState::PosterZoomed,
            other => other,
        }
    }

    pub fn close(self) -> Self {
        ModalState::Closed
    }

    pub fn is_open(self) -> bool {
        self != ModalState::Closed
    }

    pub fn on_escape(&mut self) -> EscapeOutcome {
        match *self {
            ModalState::PosterZoomed => {
                *self = ModalState::Open;
                EscapeOutcome::PosterClosed
            }
            ModalState::Open => {
                *self = ModalState::Closed;
                EscapeOutcome::ModalClosed
            }
            ModalState::Closed => EscapeOutcome::Ignored,
        }
    }
}
