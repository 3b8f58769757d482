//! Demo page fixtures
//!
//! A stand-in for the host document: named card rows, each tagged with a
//! class the engine's selector matches against. Rows log their grab marker
//! transitions so a demo run shows the whole interaction lifecycle.

use std::sync::{Arc, Mutex};

use drift_carousel::SurfaceQuery;
use drift_core::{SharedSurface, Surface};

/// One horizontally overflowing row of cards
pub struct CardRow {
    name: String,
    offset: f32,
}

impl CardRow {
    pub fn new(name: impl Into<String>, offset: f32) -> Self {
        Self {
            name: name.into(),
            offset,
        }
    }
}

impl Surface for CardRow {
    fn scroll_x(&self) -> f32 {
        self.offset
    }

    fn set_scroll_x(&mut self, offset: f32) {
        self.offset = offset;
    }

    fn set_grabbed(&mut self, grabbed: bool) {
        tracing::debug!(row = %self.name, grabbed, "grab marker");
    }
}

/// The fake document the demo drives
#[derive(Default)]
pub struct DemoPage {
    rows: Vec<Row>,
}

struct Row {
    class: String,
    name: String,
    surface: SharedSurface,
}

impl DemoPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named row under a class and return its surface handle
    pub fn add_row(&mut self, class: &str, name: &str, offset: f32) -> SharedSurface {
        let surface: SharedSurface = Arc::new(Mutex::new(CardRow::new(name, offset)));
        self.rows.push(Row {
            class: class.to_string(),
            name: name.to_string(),
            surface: Arc::clone(&surface),
        });
        surface
    }

    /// Snapshot of every row's name and current offset, in document order
    pub fn offsets(&self) -> Vec<(String, f32)> {
        self.rows
            .iter()
            .map(|row| (row.name.clone(), row.surface.lock().unwrap().scroll_x()))
            .collect()
    }
}

impl SurfaceQuery for DemoPage {
    fn select(&self, selector: &str) -> Vec<SharedSurface> {
        let class = selector.trim_start_matches('.');
        self.rows
            .iter()
            .filter(|row| row.class == class)
            .map(|row| Arc::clone(&row.surface))
            .collect()
    }
}
