//! solar-orient: Optimal Solar Panel Orientation Planner
//!
//! A library and CLI tool for finding the optimal pitch and azimuth for a
//! solar panel at a given location, using an external calculation service.
//!
//! ## Features
//!
//! - Coordinate text validation with fixed user-facing messages
//! - Location session state (text inputs + derived map position)
//! - Submission lifecycle with stale-response protection
//! - Map adapter with credential fallback
//! - HTTP API + CLI interface
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use solar_orient::calc::http::HttpCalculationService;
//! use solar_orient::session::Session;
//!
//! # async fn demo() {
//! let service = HttpCalculationService::new("http://127.0.0.1:8000", 30);
//! let mut session = Session::new();
//!
//! session.set_latitude_text("51.5");
//! session.set_longitude_text("-0.1");
//! session.submit(&service).await;
//!
//! if let Some(result) = session.result() {
//!     println!("pvlib pitch: {}", result.pvlib.optimal_pitch);
//! }
//! # }
//! ```

pub mod calc;
pub mod cli;
pub mod config;
pub mod constants;
pub mod coord;
pub mod error;
pub mod format;
pub mod map;
pub mod server;
pub mod session;

// Re-export commonly used types
pub use calc::{CalculationRequest, CalculationResult, OrientationAngles};
pub use config::Config;
pub use coord::Coordinates;
pub use error::{Error, Result};
pub use session::{Lifecycle, Session};
