//! Debounced delivery of map idle events to the grid redraw loop.

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::debug;

use crate::grid::{Debouncer, Viewport, IDLE_DEBOUNCE};

/// Viewport and zoom captured at the moment the map went idle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridRequest {
    pub viewport: Viewport,
    pub zoom: u8,
}

/// Coalesces bursts of idle events into one [`GridRequest`].
///
/// The UI loop owns the receiver and feeds each request to
/// `MapSession::update_grid`.
pub struct IdleGrid {
    debouncer: Debouncer,
    tx: mpsc::UnboundedSender<GridRequest>,
}

impl IdleGrid {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<GridRequest>) {
        Self::with_delay(IDLE_DEBOUNCE)
    }

    pub fn with_delay(delay: Duration) -> (Self, mpsc::UnboundedReceiver<GridRequest>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let idle = Self {
            debouncer: Debouncer::new(delay),
            tx,
        };
        (idle, rx)
    }

    /// Record an idle event; only the last one in a burst is delivered
    pub fn on_idle(&mut self, viewport: Viewport, zoom: u8) {
        let tx = self.tx.clone();
        self.debouncer.call(async move {
            if tx.send(GridRequest { viewport, zoom }).is_err() {
                debug!("Grid request dropped, receiver closed");
            }
        });
    }
}
