pub mod geo;
pub mod ranking;
pub mod recommendations;
pub mod text_index;

pub use recommendations::RecommendationEngine;
