//! Types to bridge the wasm serde interface

use std::{borrow::Cow, collections::HashMap};

use bcpool_std::update::UpdateMap;
use bs58_fixed_wasm::Bs58Array;
use serde::{Deserialize, Serialize};
use serde_bytes::ByteBuf;
use tsify_next::{declare, Tsify};

#[declare]
pub type B58PK = Bs58Array<32, 44>;

#[derive(Debug, Default, Clone, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct AccountMap(pub HashMap<B58PK, Account>);

impl bcpool_std::update::Account for Account {
    #[inline]
    fn data(&self) -> &[u8] {
        &self.data
    }
}

impl UpdateMap for AccountMap {
    type Account<'a> = &'a Account;

    #[inline]
    fn get_account(&self, pk: &[u8; 32]) -> Option<Self::Account<'_>> {
        self.0.get(&Bs58Array(*pk))
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi, large_number_types_as_bigints)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub data: ByteBuf,
    pub owner: B58PK,
}

/// External identities the create-pool transaction references,
/// and the cluster they live on.
///
/// See {@link defaultConfig}
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// JSON RPC endpoint to create the `Connection` with
    pub cluster_url: String,

    pub program_id: B58PK,
    pub quote_mint: B58PK,
    pub fee_recipient: B58PK,
    pub token_program: B58PK,
    pub associated_token_program: B58PK,
}

impl Config {
    pub(crate) fn from_std(
        bcpool_std::PoolCreatorConfig {
            cluster_url,
            program_id,
            quote_mint,
            fee_recipient,
            token_program,
            associated_token_program,
        }: bcpool_std::PoolCreatorConfig,
    ) -> Self {
        Self {
            cluster_url: cluster_url.into_owned(),
            program_id: B58PK::new(program_id),
            quote_mint: B58PK::new(quote_mint),
            fee_recipient: B58PK::new(fee_recipient),
            token_program: B58PK::new(token_program),
            associated_token_program: B58PK::new(associated_token_program),
        }
    }

    pub(crate) fn to_std(&self) -> bcpool_std::PoolCreatorConfig {
        let Self {
            cluster_url,
            program_id: Bs58Array(program_id),
            quote_mint: Bs58Array(quote_mint),
            fee_recipient: Bs58Array(fee_recipient),
            token_program: Bs58Array(token_program),
            associated_token_program: Bs58Array(associated_token_program),
        } = self;
        bcpool_std::PoolCreatorConfig {
            cluster_url: Cow::Owned(cluster_url.clone()),
            program_id: *program_id,
            quote_mint: *quote_mint,
            fee_recipient: *fee_recipient,
            token_program: *token_program,
            associated_token_program: *associated_token_program,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct CreatePoolAddrs {
    pub meme_mint: B58PK,
    pub target_config: B58PK,
    pub pool: B58PK,
    pub pool_signer: B58PK,
    pub quote_vault: B58PK,
    pub meme_vault: B58PK,
    pub fee_quote_vault: B58PK,
}

impl CreatePoolAddrs {
    pub(crate) fn from_std(
        bcpool_std::CreatePoolAddrs {
            meme_mint,
            target_config,
            pool,
            pool_signer,
            quote_vault,
            meme_vault,
            fee_quote_vault,
        }: bcpool_std::CreatePoolAddrs,
    ) -> Self {
        Self {
            meme_mint: B58PK::new(meme_mint),
            target_config: B58PK::new(target_config),
            pool: B58PK::new(pool),
            pool_signer: B58PK::new(pool_signer),
            quote_vault: B58PK::new(quote_vault),
            meme_vault: B58PK::new(meme_vault),
            fee_quote_vault: B58PK::new(fee_quote_vault),
        }
    }

    pub(crate) const fn to_std(&self) -> bcpool_std::CreatePoolAddrs {
        bcpool_std::CreatePoolAddrs {
            meme_mint: self.meme_mint.0,
            target_config: self.target_config.0,
            pool: self.pool.0,
            pool_signer: self.pool_signer.0,
            quote_vault: self.quote_vault.0,
            meme_vault: self.meme_vault.0,
            fee_quote_vault: self.fee_quote_vault.0,
        }
    }
}

/// Options to pass to `sendTransaction`
#[derive(Debug, Clone, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct SendOpts {
    pub skip_preflight: bool,

    #[tsify(type = "\"processed\" | \"confirmed\" | \"finalized\"")]
    pub preflight_commitment: String,

    #[tsify(optional)]
    pub max_retries: Option<u32>,

    /// Commitment to `confirmTransaction` at
    #[tsify(type = "\"processed\" | \"confirmed\" | \"finalized\"")]
    pub confirm_commitment: String,
}
