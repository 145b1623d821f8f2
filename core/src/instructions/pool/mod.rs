//! Instructions of the external bonding curve pool program.
//!
//! The program is an anchor program: ix data starts with an 8-byte
//! discriminator, `sha256("global:<ix_name>")[..8]`, followed by the borsh-encoded args.

pub mod init_target_config;
pub mod new_pool;

pub const ANCHOR_DISCM_LEN: usize = 8;
