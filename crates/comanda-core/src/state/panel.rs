//! The single shared render target and its stale-response guard.
//!
//! Every request that wants to draw into the panel first takes a
//! [`RequestTicket`]. Foreground requests (a user asked for a view) bump the
//! generation, which invalidates every ticket issued before them. Background
//! refreshes only get a ticket when the panel already shows their view, and
//! they commit only if nothing newer has been drawn since.

use serde::Serialize;

use crate::state::view::{Panel, ViewKind};

/// How a committed render should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// User-initiated: bring the panel into view.
    Focus,
    /// Timer-driven: repaint in place.
    Passive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    view: ViewKind,
    generation: u64,
    refresh_seq: u64,
    mode: RenderMode,
}

impl RequestTicket {
    pub fn view(&self) -> &ViewKind {
        &self.view
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultPanel {
    view: ViewKind,
    panel: Panel,
    generation: u64,
    refresh_seq: u64,
    committed_refresh: u64,
    /// Bumped on every accepted commit.
    revision: u64,
    #[serde(skip)]
    focus_pending: bool,
}

impl Default for ResultPanel {
    fn default() -> Self {
        Self {
            view: ViewKind::Empty,
            panel: Panel::new("Results"),
            generation: 0,
            refresh_seq: 0,
            committed_refresh: 0,
            revision: 0,
            focus_pending: false,
        }
    }
}

impl ResultPanel {
    pub fn view(&self) -> &ViewKind {
        &self.view
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_showing(&self, view: &ViewKind) -> bool {
        &self.view == view
    }

    /// Start a foreground request. Any response still in flight for an
    /// earlier ticket will be discarded, even if this request later fails.
    pub fn begin(&mut self, view: ViewKind) -> RequestTicket {
        self.generation += 1;
        RequestTicket {
            view,
            generation: self.generation,
            refresh_seq: self.refresh_seq,
            mode: RenderMode::Focus,
        }
    }

    /// Start a background refresh of `view`, or `None` if the panel shows
    /// something else.
    pub fn begin_refresh(&mut self, view: &ViewKind) -> Option<RequestTicket> {
        if !self.is_showing(view) {
            return None;
        }
        self.refresh_seq += 1;
        Some(RequestTicket {
            view: view.clone(),
            generation: self.generation,
            refresh_seq: self.refresh_seq,
            mode: RenderMode::Passive,
        })
    }

    /// Draw `panel` if `ticket` is still current. Returns whether it was drawn.
    pub fn commit(&mut self, ticket: RequestTicket, panel: Panel) -> bool {
        if ticket.generation != self.generation {
            return false;
        }

        match ticket.mode {
            RenderMode::Focus => {
                self.committed_refresh = self.refresh_seq;
                self.focus_pending = true;
            }
            RenderMode::Passive => {
                if ticket.view != self.view || ticket.refresh_seq <= self.committed_refresh {
                    return false;
                }
                self.committed_refresh = ticket.refresh_seq;
            }
        }

        self.view = ticket.view;
        self.panel = panel;
        self.revision += 1;
        true
    }

    /// Replace the panel immediately, outside the request protocol.
    pub fn show(&mut self, view: ViewKind, panel: Panel) {
        let ticket = self.begin(view);
        self.commit(ticket, panel);
    }

    /// Whether a focus render happened since the last call.
    pub fn take_focus(&mut self) -> bool {
        std::mem::take(&mut self.focus_pending)
    }
}
