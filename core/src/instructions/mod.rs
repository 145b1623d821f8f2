//! Account layouts and data of every instruction the create-pool transaction contains,
//! grouped by the program that processes them

pub mod ata;
pub mod pool;
pub mod system;
pub mod token;
