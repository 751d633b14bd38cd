//! Media element abstraction and its rodio-backed implementation.
//!
//! The playback controller talks to exactly one media element. The trait in
//! `media::element` keeps the controller testable without an audio device;
//! `media::backend` provides the real output-stream implementation.

mod backend;
mod element;

pub use backend::RodioMedia;
pub use element::{MediaElement, MediaError};
