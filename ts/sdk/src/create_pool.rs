use bcpool_std::{
    amount::TargetAmount,
    create_pool::{create_pool_ixs, CreatePoolIxArgs, Vault},
    instructions::token::MINT_LEN,
    rent::default_min_balance,
};
use bs58_fixed_wasm::Bs58Array;
use serde::{Deserialize, Serialize};
use tsify_next::Tsify;
use wasm_bindgen::prelude::*;

use crate::{
    err::{amount_err, no_valid_pda_err},
    instruction::Instruction,
    interface::{AccountMap, Config, B58PK},
};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi, large_number_types_as_bigints)]
#[serde(rename_all = "camelCase")]
pub struct CreatePoolArgs {
    /// The connected wallet
    pub signer: B58PK,

    /// See {@link parseTargetAmount}
    pub target_lamports: u64,

    /// `getMinimumBalanceForRentExemption(82)`.
    /// Defaults to the value for the default rent parameters if omitted.
    #[tsify(optional)]
    pub mint_rent_lamports: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct VaultToCreate {
    /// "quote vault", "meme vault" or "fee vault"
    pub name: String,
    pub address: B58PK,
}

impl VaultToCreate {
    pub(crate) fn from_std(Vault { kind, addr, .. }: Vault) -> Self {
        Self {
            name: kind.name().to_owned(),
            address: B58PK::new(addr),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct CreatePoolIxs {
    pub ixs: Box<[Instruction]>,

    /// Vaults absent from `fetched`, whose create instructions are in `ixs`
    pub vaults_to_create: Box<[VaultToCreate]>,
}

/// Returns the create-pool instructions in the order they must appear in the transaction.
///
/// `memeMint` is the pubkey of a freshly generated keypair that must also sign the transaction.
///
/// `fetched` is the result of fetching {@link accountsToCheck}.
/// Accounts absent from it are assumed not to exist.
///
/// @throws
#[wasm_bindgen(js_name = createPoolIxs)]
pub fn create_pool_ixs_js(
    Bs58Array(meme_mint): &B58PK,
    CreatePoolArgs {
        signer: Bs58Array(signer),
        target_lamports,
        mint_rent_lamports,
    }: &CreatePoolArgs,
    config: &Config,
    fetched: &AccountMap,
) -> Result<CreatePoolIxs, JsError> {
    let cfg = config.to_std();
    let target = TargetAmount::new(*target_lamports).map_err(amount_err)?;
    let addrs =
        bcpool_std::CreatePoolAddrs::find(&cfg, *meme_mint).ok_or_else(no_valid_pda_err)?;
    let existing_vaults = addrs.existing_vaults(fetched);

    let ixs = create_pool_ixs(CreatePoolIxArgs {
        cfg: &cfg,
        addrs: &addrs,
        signer: *signer,
        target,
        mint_rent_lamports: mint_rent_lamports.unwrap_or(default_min_balance(MINT_LEN)),
        existing_vaults,
    });

    Ok(CreatePoolIxs {
        ixs: ixs.into_iter().map(Instruction::from_std).collect(),
        vaults_to_create: addrs
            .missing_vaults(&cfg, existing_vaults)
            .map(VaultToCreate::from_std)
            .collect(),
    })
}
