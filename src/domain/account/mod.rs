// src/domain/account/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Account, NewAccount};
pub use repository::AccountRepository;
pub use value_objects::{AccountEmail, AccountId, PasswordHash, PersonName};
