pub mod loading_indicator;

pub use loading_indicator::*;
