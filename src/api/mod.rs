pub mod client;
pub mod models;

pub use client::{AnalysisService, AnalysisServiceManager, HttpAnalysisService, ServiceError};
