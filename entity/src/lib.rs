pub mod build;
pub mod build_part;
pub mod part;
pub mod supplier;
