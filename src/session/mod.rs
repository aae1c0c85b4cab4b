//! Map session: the click and idle workflows over the encoder and resolver.
//!
//! The UI layer owns a [`MapSession`] and passes it by reference; the core
//! functions it calls stay stateless.

mod idle;
mod renderer;
mod sequencer;

pub use idle::{GridRequest, IdleGrid};
pub use renderer::{NullRenderer, Renderer};
pub use sequencer::{RequestSequencer, Ticket};

use serde::Deserialize;
use tracing::{debug, info};

use crate::grid::{encode, grid_lines, nested_cells, snap, spacing_for_zoom, Viewport};
use crate::models::{AddressLabel, Coordinate, GridCode};
use crate::resolver::{AddressResolver, Geocoder, PlaceSearch};

/// Zoom applied when centering on the user's reported position
pub const GEOLOCATE_ZOOM: u8 = 18;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SessionOptions {
    /// Append the encoder's locality digits to the label's third line
    pub show_locality_suffix: bool,
    /// Drop labels that arrive after a newer click has started.
    ///
    /// Off by default: every resolved label is rendered in arrival order,
    /// so a slow earlier lookup can overwrite a newer label.
    pub discard_stale_labels: bool,
}

/// Synchronous half of a click, waiting for its label
#[derive(Debug, Clone, PartialEq)]
pub struct PendingClick {
    pub ticket: Ticket,
    pub snapped: Coordinate,
    pub code: GridCode,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClickOutcome {
    pub snapped: Coordinate,
    pub code: GridCode,
    pub label: AddressLabel,
    /// `false` when the label was discarded as stale
    pub label_applied: bool,
}

/// Click and idle workflow state for one map.
///
/// `center` and `zoom` are the view the session asks the UI layer to show;
/// the session only writes them.
pub struct MapSession<G, P, R> {
    resolver: AddressResolver<G, P>,
    renderer: R,
    options: SessionOptions,
    sequencer: RequestSequencer,
    center: Option<Coordinate>,
    zoom: u8,
}

impl<G, P, R> MapSession<G, P, R>
where
    G: Geocoder,
    P: PlaceSearch,
    R: Renderer,
{
    pub fn new(resolver: AddressResolver<G, P>, renderer: R, options: SessionOptions) -> Self {
        Self {
            resolver,
            renderer,
            options,
            sequencer: RequestSequencer::new(),
            center: None,
            zoom: 0,
        }
    }

    pub fn resolver(&self) -> &AddressResolver<G, P> {
        &self.resolver
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn options(&self) -> SessionOptions {
        self.options
    }

    /// Requested map center, if the session has moved the view
    pub fn center(&self) -> Option<Coordinate> {
        self.center
    }

    pub fn set_center(&mut self, center: Coordinate) {
        self.center = Some(center);
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn set_zoom(&mut self, zoom: u8) {
        self.zoom = zoom;
    }

    /// Clear the previous click, then snap, encode and draw the cells
    pub fn begin_click(&mut self, raw: Coordinate) -> PendingClick {
        self.renderer.clear();

        let snapped = snap(raw);
        let code = encode(snapped);
        self.renderer.draw_code(&code, snapped);
        for (precision, cell) in nested_cells(snapped) {
            self.renderer.draw_cell(&cell, precision);
        }

        let ticket = self.sequencer.issue();
        debug!("Click #{} at ({}) -> {}", ticket.value(), snapped, code);

        PendingClick {
            ticket,
            snapped,
            code,
        }
    }

    /// Deliver the label for an earlier [`begin_click`](Self::begin_click)
    pub fn finish_click(&mut self, pending: PendingClick, label: AddressLabel) -> ClickOutcome {
        let label = if self.options.show_locality_suffix {
            label.with_suffix(pending.code.locality_suffix.clone())
        } else {
            label
        };

        let stale = !self.sequencer.is_current(pending.ticket);
        let label_applied = !(stale && self.options.discard_stale_labels);

        if label_applied {
            if stale {
                debug!("Rendering label for superseded click #{}", pending.ticket.value());
            }
            self.renderer.draw_label(&label);
        } else {
            debug!("Discarding label for superseded click #{}", pending.ticket.value());
        }

        ClickOutcome {
            snapped: pending.snapped,
            code: pending.code,
            label,
            label_applied,
        }
    }

    /// Full click cycle: draw the code and cells, resolve, draw the label
    pub async fn handle_click(&mut self, raw: Coordinate) -> ClickOutcome {
        let pending = self.begin_click(raw);
        let label = self.resolver.resolve(pending.snapped).await;
        let outcome = self.finish_click(pending, label);
        info!("Registered {} at ({})", outcome.code, outcome.snapped);
        outcome
    }

    /// Center and zoom in on a reported device position, then treat it as a
    /// click
    pub async fn locate_user(&mut self, at: Coordinate) -> ClickOutcome {
        self.center = Some(at);
        self.zoom = GEOLOCATE_ZOOM;
        self.handle_click(at).await
    }

    /// Redraw the reference grid for the visible area; returns lines drawn
    pub fn update_grid(&mut self, viewport: Viewport, zoom: u8) -> usize {
        self.zoom = zoom;
        self.renderer.clear_grid();

        let Some(spacing) = spacing_for_zoom(zoom) else {
            debug!("No reference grid at zoom {}", zoom);
            return 0;
        };

        let lines = grid_lines(viewport, spacing);
        self.renderer.draw_grid(&lines);
        lines.len()
    }
}
