pub mod accounts;
pub mod articles;
