// src/presentation/http/middleware/mod.rs
pub mod deadline;

pub use deadline::deadline_middleware;
