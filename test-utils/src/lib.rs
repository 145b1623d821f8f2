mod gen;
mod mock;
mod pda;

pub use gen::*;
pub use mock::*;
pub use pda::*;
