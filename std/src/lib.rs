// Re-exports
pub use bcpool_core::*;

pub mod config;
pub mod create_pool;
pub mod err;
pub mod form;
pub mod instruction;
pub mod pda;
pub mod status;
pub mod submit;
pub mod tx;
pub mod update;
pub mod view;

pub use config::{PoolCreatorConfig, SendOpts};
pub use create_pool::{create_pool_ixs, CreatePoolAddrs, CreatePoolIxArgs, Vault, VaultKind};
pub use form::PoolCreatorForm;
pub use submit::{create_pool, Cluster, CreatePoolReceipt, Wallet};
pub use tx::{compile_message, mint_signed_tx, wire_bytes};

// solana types in this crate's public API
pub use solana_keypair::Keypair;
pub use solana_signature::Signature;
pub use solana_transaction::Transaction;
