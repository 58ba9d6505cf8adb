//! Location state store
//!
//! Single source of truth for the coordinate texts and the derived map
//! position. Text is authoritative for what the user is typing; the map
//! position is authoritative for what the map shows. One derivation rule
//! reconciles them: the position is overwritten only when both texts are
//! simultaneously valid, and keeps its last valid value otherwise, so the
//! map never jumps to a meaningless location mid-edit.

use crate::config::defaults::{DEFAULT_LATITUDE_TEXT, DEFAULT_LONGITUDE_TEXT};
use crate::coord::{validate, Coordinates};

/// Editable coordinate texts plus the derived map center/marker position
#[derive(Debug, Clone)]
pub struct LocationStore {
    latitude_text: String,
    longitude_text: String,
    offset_text: String,
    map_position: Coordinates,
}

impl LocationStore {
    /// Create a store with the built-in default location
    pub fn new() -> Self {
        Self::with_texts(DEFAULT_LATITUDE_TEXT, DEFAULT_LONGITUDE_TEXT)
    }

    /// Create a store seeded with the given coordinate texts
    ///
    /// The position derives from the seed texts when they parse, and
    /// falls back to the built-in default location otherwise.
    pub fn with_texts(latitude_text: &str, longitude_text: &str) -> Self {
        let map_position = validate::pair(latitude_text, longitude_text)
            .or_else(|| validate::pair(DEFAULT_LATITUDE_TEXT, DEFAULT_LONGITUDE_TEXT))
            .expect("built-in default coordinates parse");

        Self {
            latitude_text: latitude_text.to_string(),
            longitude_text: longitude_text.to_string(),
            offset_text: String::new(),
            map_position,
        }
    }

    /// Current latitude input text
    pub fn latitude_text(&self) -> &str {
        &self.latitude_text
    }

    /// Current longitude input text
    pub fn longitude_text(&self) -> &str {
        &self.longitude_text
    }

    /// Current offset angle input text (empty means no offset)
    pub fn offset_text(&self) -> &str {
        &self.offset_text
    }

    /// The derived map center/marker position (always a valid pair)
    pub fn map_position(&self) -> Coordinates {
        self.map_position
    }

    /// Replace the latitude text and re-derive the position
    pub fn set_latitude_text(&mut self, text: impl Into<String>) {
        self.latitude_text = text.into();
        self.derive_position();
    }

    /// Replace the longitude text and re-derive the position
    pub fn set_longitude_text(&mut self, text: impl Into<String>) {
        self.longitude_text = text.into();
        self.derive_position();
    }

    /// Replace the offset angle text
    ///
    /// The offset plays no part in the map position.
    pub fn set_offset_text(&mut self, text: impl Into<String>) {
        self.offset_text = text.into();
    }

    /// Apply a map click: both texts take the clicked pair's display
    /// form, then the position re-derives from that same text. Click
    /// coordinates are already valid, so the derivation always succeeds;
    /// re-applying the same click is a no-op.
    pub fn apply_map_click(&mut self, coords: Coordinates) {
        self.latitude_text = coords.lat.to_string();
        self.longitude_text = coords.lng.to_string();
        self.derive_position();
    }

    /// Overwrite the position directly, bypassing the texts
    ///
    /// Used when a submission succeeds: the map recenters to exactly the
    /// submitted pair without touching what the user typed since.
    pub(crate) fn set_map_position(&mut self, coords: Coordinates) {
        self.map_position = coords;
    }

    /// Re-derive the position; both texts must be valid at once or the
    /// previous position stays
    fn derive_position(&mut self) {
        if let Some(coords) = validate::pair(&self.latitude_text, &self.longitude_text) {
            self.map_position = coords;
        }
    }
}

impl Default for LocationStore {
    fn default() -> Self {
        Self::new()
    }
}
