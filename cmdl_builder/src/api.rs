mod capture;
mod core;
mod field;
mod tuple;

pub use self::capture::*;
pub use self::core::*;
pub use self::field::*;
