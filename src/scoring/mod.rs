pub mod engine;
pub mod ranking;
pub mod weights;
