use generic_array_struct::generic_array_struct;

use crate::{
    instructions::token::{COPTION_NONE, COPTION_SOME},
    internal_utils::caba,
};

// Accounts

#[generic_array_struct(builder pub)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct InitializeMintIxAccs<T> {
    /// The uninitialized mint account, already allocated with [`super::MINT_LEN`] bytes
    pub mint: T,

    /// Rent sysvar
    pub rent: T,
}

impl<T: Copy> InitializeMintIxAccs<T> {
    #[inline]
    pub const fn memset(val: T) -> Self {
        Self([val; INITIALIZE_MINT_IX_ACCS_LEN])
    }
}

pub type InitializeMintIxKeys<'a> = InitializeMintIxAccs<&'a [u8; 32]>;

pub type InitializeMintIxKeysOwned = InitializeMintIxAccs<[u8; 32]>;

pub type InitializeMintIxAccFlags = InitializeMintIxAccs<bool>;

pub const INITIALIZE_MINT_IX_IS_WRITER: InitializeMintIxAccFlags =
    InitializeMintIxAccFlags::memset(false).const_with_mint(true);

pub const INITIALIZE_MINT_IX_IS_SIGNER: InitializeMintIxAccFlags =
    InitializeMintIxAccFlags::memset(false);

// Data

pub const INITIALIZE_MINT_IX_DISCM: u8 = 0;

/// Freeze authority is always encoded as a fixed-size COption,
/// like the web3 token library does, even when `None`.
pub const INITIALIZE_MINT_IX_DATA_LEN: usize = 67;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InitializeMintIxArgs {
    pub decimals: u8,
    pub mint_authority: [u8; 32],
    pub freeze_authority: Option<[u8; 32]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct InitializeMintIxData([u8; INITIALIZE_MINT_IX_DATA_LEN]);

impl InitializeMintIxData {
    #[inline]
    pub const fn new(
        InitializeMintIxArgs {
            decimals,
            mint_authority,
            freeze_authority,
        }: InitializeMintIxArgs,
    ) -> Self {
        const A: usize = INITIALIZE_MINT_IX_DATA_LEN;

        let (freeze_discm, freeze_authority) = match freeze_authority {
            None => (COPTION_NONE, [0u8; 32]),
            Some(pk) => (COPTION_SOME, pk),
        };

        let mut d = [0u8; A];

        d = caba::<A, 0, 1>(d, &[INITIALIZE_MINT_IX_DISCM]);
        d = caba::<A, 1, 1>(d, &[decimals]);
        d = caba::<A, 2, 32>(d, &mint_authority);
        d = caba::<A, 34, 1>(d, &[freeze_discm]);
        d = caba::<A, 35, 32>(d, &freeze_authority);

        Self(d)
    }

    #[inline]
    pub const fn as_buf(&self) -> &[u8; INITIALIZE_MINT_IX_DATA_LEN] {
        &self.0
    }
}
