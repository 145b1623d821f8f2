//! Driving the create-pool flow against a cluster and a wallet.
//!
//! Both traits are synchronous. Browser hosts, where every call is a
//! promise, run the same steps from JS through the wasm bindings instead.

use std::fmt::Display;

use bcpool_core::{amount::TargetAmount, instructions::token::MINT_LEN};
use solana_keypair::Keypair;
use solana_signature::Signature;
use solana_signer::Signer;
use solana_transaction::Transaction;

use crate::{
    config::{Commitment, PoolCreatorConfig, SendOpts, CONFIRM_COMMITMENT},
    create_pool::{create_pool_ixs, CreatePoolAddrs, CreatePoolIxArgs, Vault, VAULTS_LEN},
    err::CreatePoolErr,
    tx::{mint_signed_tx, wire_bytes},
};

pub trait Cluster {
    type Error;

    /// `res[i]` is whether `pks[i]` has an account on-chain.
    /// Must be a single batched request.
    fn get_multiple_accounts_exist(&self, pks: &[[u8; 32]]) -> Result<Vec<bool>, Self::Error>;

    fn get_minimum_balance_for_rent_exemption(&self, data_len: usize)
        -> Result<u64, Self::Error>;

    fn get_latest_blockhash(&self, commitment: Commitment) -> Result<[u8; 32], Self::Error>;

    /// Broadcasts a serialized, fully signed transaction, returning its signature
    fn send_transaction(&self, wire: &[u8], opts: &SendOpts) -> Result<Signature, Self::Error>;

    /// Blocks until `sig` reaches `commitment`
    fn confirm_transaction(&self, sig: &Signature, commitment: Commitment)
        -> Result<(), Self::Error>;
}

pub trait Wallet {
    type Error;

    /// `None` if disconnected
    fn pubkey(&self) -> Option<[u8; 32]>;

    #[inline]
    fn connected(&self) -> bool {
        self.pubkey().is_some()
    }

    /// Fills in the wallet's signature, leaving any other signatures intact
    fn sign_transaction(&self, tx: Transaction) -> Result<Transaction, Self::Error>;

    /// Signs then broadcasts through `cluster`
    fn send_transaction<C: Cluster<Error = Self::Error>>(
        &self,
        tx: Transaction,
        cluster: &C,
        opts: &SendOpts,
    ) -> Result<Signature, CreatePoolErr<Self::Error>> {
        let tx = self.sign_transaction(tx).map_err(CreatePoolErr::Wallet)?;
        let wire = wire_bytes(&tx)?;
        cluster
            .send_transaction(&wire, opts)
            .map_err(CreatePoolErr::Cluster)
    }
}

/// Progress through [`create_pool`], each with a loading message to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Start,
    Preparing,
    Sending,
}

impl Stage {
    #[inline]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Start => "Creating entire pool in a single transaction...",
            Self::Preparing => "Preparing transaction...",
            Self::Sending => "Executing transaction...",
        }
    }
}

pub const SUCCESS_MSG: &str = "Pool created in a single transaction!";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CreatePoolReceipt {
    pub signature: Signature,
    pub addrs: CreatePoolAddrs,

    /// Vaults that did not exist and were created by the transaction
    pub created_vaults: Vec<Vault>,
    pub ix_count: usize,
}

impl Display for CreatePoolReceipt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Transaction signature: {}", self.signature)?;
        Display::fmt(&self.addrs, f)?;
        self.created_vaults
            .iter()
            .try_for_each(|v| writeln!(f, "Created {v}"))?;
        write!(f, "Total instructions in transaction: {}", self.ix_count)
    }
}

/// Runs the whole flow: derive addresses, check vault presence, build,
/// sign with `mint`, send through `wallet`, confirm.
///
/// Any failure aborts immediately. Nothing is rolled back since nothing
/// lands on-chain unless the single transaction succeeds.
pub fn create_pool<C, W>(
    cluster: &C,
    wallet: &W,
    cfg: &PoolCreatorConfig,
    target: TargetAmount,
    mint: &Keypair,
    mut on_stage: impl FnMut(Stage),
) -> Result<CreatePoolReceipt, CreatePoolErr<C::Error>>
where
    C: Cluster,
    W: Wallet<Error = C::Error>,
{
    let signer = wallet.pubkey().ok_or(CreatePoolErr::WalletNotConnected)?;

    on_stage(Stage::Preparing);

    let addrs =
        CreatePoolAddrs::find(cfg, mint.pubkey().to_bytes()).ok_or(CreatePoolErr::NoValidPda)?;
    let exists = cluster
        .get_multiple_accounts_exist(&addrs.accounts_to_check())
        .map_err(CreatePoolErr::Cluster)?;
    let existing_vaults: [bool; VAULTS_LEN] =
        core::array::from_fn(|i| exists.get(i).copied().unwrap_or(false));
    let mint_rent_lamports = cluster
        .get_minimum_balance_for_rent_exemption(MINT_LEN)
        .map_err(CreatePoolErr::Cluster)?;

    let created_vaults: Vec<_> = addrs.missing_vaults(cfg, existing_vaults).collect();

    let ixs = create_pool_ixs(CreatePoolIxArgs {
        cfg,
        addrs: &addrs,
        signer,
        target,
        mint_rent_lamports,
        existing_vaults,
    });

    let blockhash = cluster
        .get_latest_blockhash(CONFIRM_COMMITMENT)
        .map_err(CreatePoolErr::Cluster)?;
    let tx = mint_signed_tx(&ixs, &signer, mint, blockhash)?;
    // fail before prompting the wallet
    wire_bytes(&tx)?;

    on_stage(Stage::Sending);

    let signature = wallet.send_transaction(tx, cluster, &SendOpts::DEFAULT)?;
    cluster
        .confirm_transaction(&signature, CONFIRM_COMMITMENT)
        .map_err(CreatePoolErr::Cluster)?;

    Ok(CreatePoolReceipt {
        signature,
        addrs,
        created_vaults,
        ix_count: ixs.len(),
    })
}
