// src/domain/mod.rs
pub mod account;
pub mod article;
pub mod errors;
