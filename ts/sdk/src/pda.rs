use bs58_fixed_wasm::Bs58Array;
use wasm_bindgen::prelude::*;

use crate::{
    err::no_valid_pda_err,
    interface::{Config, CreatePoolAddrs, B58PK},
};

/// Derives every address the create-pool transaction for `memeMint` references.
///
/// Use {@link defaultConfig} for `config` unless targeting another deployment
///
/// @throws
#[wasm_bindgen(js_name = findCreatePoolAddrs)]
pub fn find_create_pool_addrs(
    Bs58Array(meme_mint): &B58PK,
    config: &Config,
) -> Result<CreatePoolAddrs, JsError> {
    bcpool_std::CreatePoolAddrs::find(&config.to_std(), *meme_mint)
        .map(CreatePoolAddrs::from_std)
        .ok_or_else(no_valid_pda_err)
}

/// Returns the vault accounts to fetch, in a single `getMultipleAccounts` call,
/// before calling {@link createPoolIxs}
#[wasm_bindgen(js_name = accountsToCheck)]
pub fn accounts_to_check(addrs: &CreatePoolAddrs) -> Box<[B58PK]> {
    addrs.to_std().accounts_to_check().map(B58PK::new).into()
}
