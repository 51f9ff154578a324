//! Platform-independent core of the lens menu.
//!
//! Everything here is free of browser APIs: the web front-end feeds pointer
//! and viewport samples into a [`LensController`], delivers animation frames
//! through a [`FrameScheduler`], and renders the returned [`FrameOutput`].

pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod hover;
pub mod links;
pub mod pointer;
pub mod scheduler;
pub mod smoothing;
pub mod transform;
pub mod viewport;

pub use config::*;
pub use constants::*;
pub use controller::*;
pub use error::*;
pub use geometry::*;
pub use hover::*;
pub use links::*;
pub use pointer::*;
pub use scheduler::*;
pub use smoothing::*;
pub use transform::*;
pub use viewport::*;
