pub mod bovary;
pub mod discord;
pub mod error;

pub use error::{ Error, Result };
