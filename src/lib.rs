//! Two-finger pinch-to-zoom for an element inside a scrollable container.
//!
//! Raw touch events are turned into a scale-about-center transform that is
//! re-applied on every display frame, while the container's scroll offsets
//! are adjusted so the zoomed region stays under the fingers.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Gesture handlers and per-frame rendering against a [`controller::ZoomTarget`] |
//! | [`render`] | Pure scale / translate / scroll-compensation math |
//! | [`state`] | Pinch input record and the transform it produces |
//! | [`config`] | Options, JSON merge and validation |
//! | [`dom`] | `web-sys` binding: listeners, animation-frame loop, [`dom::PinchZoom`] |
//! | [`components`] | yew wrapper component and the demo app |

pub mod components;
pub mod config;
pub mod consts;
pub mod controller;
pub mod dom;
pub mod error;
pub mod geometry;
pub mod render;
pub mod state;

pub use config::{ScrollCompensation, ZoomOptions};
pub use controller::{GestureZoomController, TouchResponse, ZoomTarget};
pub use dom::PinchZoom;
pub use error::ZoomError;
