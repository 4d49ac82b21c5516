pub mod asset;
pub mod definition;

pub use asset::*;
pub use definition::*;
