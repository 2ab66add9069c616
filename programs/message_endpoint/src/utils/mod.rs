pub mod bitmap;
pub mod universal_address;

pub use bitmap::*;
pub use universal_address::*;
