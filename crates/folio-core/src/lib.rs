pub mod config;
pub mod constants;
pub mod controller;
pub mod embed;
pub mod geometry;
pub mod gesture;
pub mod media;
pub mod scroll_lock;
pub mod spring;
pub mod style;
pub mod viewport;

pub use config::*;
pub use controller::*;
pub use geometry::*;
pub use gesture::{TouchPoint, TouchPoints};
pub use media::*;
pub use viewport::*;
