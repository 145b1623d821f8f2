mod common;
mod create_pool;

pub use common::*;
pub use create_pool::*;
