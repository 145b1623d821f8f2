use generic_array_struct::generic_array_struct;

use crate::instructions::pool::ANCHOR_DISCM_LEN;

// Accounts

#[generic_array_struct(builder pub)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct NewPoolIxAccs<T> {
    /// Pool creator, pays for the pool account
    pub sender: T,

    /// The bound pool PDA to create. PDA ["bound_pool", meme_mint, quote_mint]
    pub pool: T,

    /// Mint of the new token. Its mint authority must already be `pool_signer`
    pub meme_mint: T,

    /// `pool_signer`'s quote mint ATA
    pub quote_vault: T,

    pub quote_mint: T,

    /// Fee recipient's quote mint ATA
    pub fee_quote_vault: T,

    /// `pool_signer`'s meme mint ATA. The program mints the meme supply here.
    pub meme_vault: T,

    /// PDA ["config", quote_mint, meme_mint]
    pub target_config: T,

    /// PDA ["signer", pool]
    pub pool_signer: T,

    pub system_program: T,

    pub token_program: T,
}

impl<T: Copy> NewPoolIxAccs<T> {
    #[inline]
    pub const fn memset(val: T) -> Self {
        Self([val; NEW_POOL_IX_ACCS_LEN])
    }
}

pub type NewPoolIxKeys<'a> = NewPoolIxAccs<&'a [u8; 32]>;

pub type NewPoolIxKeysOwned = NewPoolIxAccs<[u8; 32]>;

pub type NewPoolIxAccFlags = NewPoolIxAccs<bool>;

pub const NEW_POOL_IX_IS_WRITER: NewPoolIxAccFlags = NewPoolIxAccFlags::memset(false)
    .const_with_sender(true)
    .const_with_pool(true)
    .const_with_meme_mint(true)
    .const_with_quote_vault(true)
    .const_with_fee_quote_vault(true)
    .const_with_meme_vault(true);

pub const NEW_POOL_IX_IS_SIGNER: NewPoolIxAccFlags =
    NewPoolIxAccFlags::memset(false).const_with_sender(true);

// Data

/// `sha256("global:new_pool")[..8]`
pub const NEW_POOL_IX_DISCM: [u8; ANCHOR_DISCM_LEN] = [38, 63, 210, 32, 246, 20, 239, 112];

pub const NEW_POOL_IX_DATA_LEN: usize = ANCHOR_DISCM_LEN;

/// `new_pool` takes no args
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NewPoolIxData;

impl NewPoolIxData {
    pub const DATA_LEN: usize = NEW_POOL_IX_DATA_LEN;

    #[inline]
    pub const fn as_buf() -> &'static [u8; NEW_POOL_IX_DATA_LEN] {
        &NEW_POOL_IX_DISCM
    }
}
