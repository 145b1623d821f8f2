use generic_array_struct::generic_array_struct;

use crate::{
    instructions::pool::ANCHOR_DISCM_LEN,
    internal_utils::{caba, csba},
};

// Accounts

#[generic_array_struct(builder pub)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct InitTargetConfigIxAccs<T> {
    /// Pays for the target config account
    pub creator: T,

    /// The target config PDA to initialize. PDA ["config", token_mint, pair_token_mint]
    pub target_config: T,

    /// Quote mint
    pub token_mint: T,

    /// Meme mint
    pub pair_token_mint: T,

    pub system_program: T,
}

impl<T: Copy> InitTargetConfigIxAccs<T> {
    #[inline]
    pub const fn memset(val: T) -> Self {
        Self([val; INIT_TARGET_CONFIG_IX_ACCS_LEN])
    }
}

pub type InitTargetConfigIxKeys<'a> = InitTargetConfigIxAccs<&'a [u8; 32]>;

pub type InitTargetConfigIxKeysOwned = InitTargetConfigIxAccs<[u8; 32]>;

pub type InitTargetConfigIxAccFlags = InitTargetConfigIxAccs<bool>;

pub const INIT_TARGET_CONFIG_IX_IS_WRITER: InitTargetConfigIxAccFlags =
    InitTargetConfigIxAccFlags::memset(false)
        .const_with_creator(true)
        .const_with_target_config(true);

pub const INIT_TARGET_CONFIG_IX_IS_SIGNER: InitTargetConfigIxAccFlags =
    InitTargetConfigIxAccFlags::memset(false).const_with_creator(true);

// Data

/// `sha256("global:init_target_config")[..8]`
pub const INIT_TARGET_CONFIG_IX_DISCM: [u8; ANCHOR_DISCM_LEN] = [7, 211, 172, 243, 19, 147, 55, 43];

pub const INIT_TARGET_CONFIG_IX_DATA_LEN: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct InitTargetConfigIxData([u8; INIT_TARGET_CONFIG_IX_DATA_LEN]);

impl InitTargetConfigIxData {
    /// `token_target_amount` is in the quote mint's atomics (lamports for wSOL)
    #[inline]
    pub const fn new(token_target_amount: u64) -> Self {
        const A: usize = INIT_TARGET_CONFIG_IX_DATA_LEN;

        let mut d = [0u8; A];

        d = caba::<A, 0, ANCHOR_DISCM_LEN>(d, &INIT_TARGET_CONFIG_IX_DISCM);
        d = caba::<A, ANCHOR_DISCM_LEN, 8>(d, &token_target_amount.to_le_bytes());

        Self(d)
    }

    #[inline]
    pub const fn as_buf(&self) -> &[u8; INIT_TARGET_CONFIG_IX_DATA_LEN] {
        &self.0
    }

    /// Returns (discm, token_target_amount)
    #[inline]
    pub const fn parse(data: &[u8; INIT_TARGET_CONFIG_IX_DATA_LEN]) -> (&[u8; 8], u64) {
        let (discm, amt) = csba::<INIT_TARGET_CONFIG_IX_DATA_LEN, ANCHOR_DISCM_LEN, 8>(data);
        (discm, u64::from_le_bytes(*amt))
    }
}
