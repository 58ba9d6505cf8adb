//! Map adapter
//!
//! Bridges the location store and the external map widget. The widget
//! itself is a collaborator behind the `MapWidget` trait so tests (and
//! alternative frontends) can substitute their own. The adapter owns the
//! credential policy: with no API key configured the widget is never
//! constructed and an inline fallback notice is exposed instead.

use crate::coord::Coordinates;
use crate::error::Error;
use crate::session::LocationStore;

/// Everything the widget needs to draw one frame of the map
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapProps {
    /// Visual center of the map
    pub center: Coordinates,

    /// Marker position; follows the center here
    pub marker: Option<Coordinates>,

    /// Zoom level
    pub zoom: u8,
}

/// External map widget boundary
pub trait MapWidget {
    /// Push a new center/marker/zoom to the widget
    fn set_view(&mut self, props: &MapProps);

    /// Next pending click, as the clicked coordinate pair
    fn take_click(&mut self) -> Option<Coordinates>;
}

/// Adapter between the location store and a map widget
pub struct MapAdapter<W> {
    widget: Option<W>,
    zoom: u8,
}

impl<W: MapWidget> MapAdapter<W> {
    /// Build the adapter
    ///
    /// The widget is constructed only when a non-empty credential is
    /// present; its absence is a handled configuration state, never an
    /// error.
    pub fn new(api_key: Option<&str>, zoom: u8, make_widget: impl FnOnce(&str) -> W) -> Self {
        let widget = match api_key {
            Some(key) if !key.is_empty() => Some(make_widget(key)),
            _ => None,
        };
        Self { widget, zoom }
    }

    /// True when the widget is live (credential present)
    pub fn is_active(&self) -> bool {
        self.widget.is_some()
    }

    /// The persistent inline notice shown in place of the widget
    pub fn fallback_notice(&self) -> Option<String> {
        if self.is_active() {
            None
        } else {
            Some(Error::MissingCredential.to_string())
        }
    }

    /// Widget props derived from the store's position
    pub fn props(&self, store: &LocationStore) -> MapProps {
        let position = store.map_position();
        MapProps {
            center: position,
            marker: Some(position),
            zoom: self.zoom,
        }
    }

    /// Push the store's current position to the widget
    pub fn sync(&mut self, store: &LocationStore) {
        let props = self.props(store);
        if let Some(widget) = &mut self.widget {
            widget.set_view(&props);
        }
    }

    /// Drain pending widget clicks into the store
    pub fn pump(&mut self, store: &mut LocationStore) {
        let Some(widget) = &mut self.widget else {
            return;
        };
        while let Some(coords) = widget.take_click() {
            store.apply_map_click(coords);
        }
    }
}
