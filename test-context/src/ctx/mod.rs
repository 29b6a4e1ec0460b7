mod default;
mod read_only;

pub use default::*;
pub use read_only::*;
