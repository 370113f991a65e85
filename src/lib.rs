//! Order, payment and checkout pipelines built from small, injectable parts.

pub mod config;
pub mod domain;
pub mod demo;

pub use config::PipelineConfig;
