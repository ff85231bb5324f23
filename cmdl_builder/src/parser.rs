mod base;
mod interface;
mod printer;
mod registry;
mod stream;

pub use self::base::*;
pub(crate) use self::interface::*;
pub(crate) use self::printer::*;
pub use self::registry::*;
pub use self::stream::*;
