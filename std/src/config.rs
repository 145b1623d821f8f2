use std::{borrow::Cow, fmt::Display};

use bcpool_core::{
    keys::{ATOKEN_ID, FEE_RECIPIENT_ID, QUOTE_MINT_ID, TOKEN_PROGRAM_ID},
    ID,
};

pub const DEVNET_URL: &str = "https://api.devnet.solana.com";

/// External identities the create-pool transaction references,
/// and the cluster they live on.
///
/// [`Default`] is the deployment the pool program was published with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PoolCreatorConfig {
    /// JSON RPC endpoint hosts should connect their [`crate::submit::Cluster`] to
    pub cluster_url: Cow<'static, str>,

    /// The bonding curve pool program
    pub program_id: [u8; 32],
    pub quote_mint: [u8; 32],

    /// Owner of the fee quote vault
    pub fee_recipient: [u8; 32],
    pub token_program: [u8; 32],
    pub associated_token_program: [u8; 32],
}

impl PoolCreatorConfig {
    pub const DEFAULT: Self = Self {
        cluster_url: Cow::Borrowed(DEVNET_URL),
        program_id: ID,
        quote_mint: QUOTE_MINT_ID,
        fee_recipient: FEE_RECIPIENT_ID,
        token_program: TOKEN_PROGRAM_ID,
        associated_token_program: ATOKEN_ID,
    };
}

impl Default for PoolCreatorConfig {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Commitment {
    Processed,
    #[default]
    Confirmed,
    Finalized,
}

impl Commitment {
    /// The string the JSON RPC API expects
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Processed => "processed",
            Self::Confirmed => "confirmed",
            Self::Finalized => "finalized",
        }
    }
}

impl Display for Commitment {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const MAX_SEND_RETRIES: usize = 3;

/// Commitment level the transaction is confirmed at
pub const CONFIRM_COMMITMENT: Commitment = Commitment::Confirmed;

/// `sendTransaction` options. Retrying is left entirely to the RPC node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SendOpts {
    pub skip_preflight: bool,
    pub preflight_commitment: Commitment,
    pub max_retries: Option<usize>,
}

impl SendOpts {
    pub const DEFAULT: Self = Self {
        skip_preflight: false,
        preflight_commitment: Commitment::Confirmed,
        max_retries: Some(MAX_SEND_RETRIES),
    };
}

impl Default for SendOpts {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}
