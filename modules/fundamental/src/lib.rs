pub mod build;
pub mod db;
pub mod endpoints;
pub mod error;
pub mod part;

mod common;

pub use error::Error;

#[cfg(test)]
pub mod test;
