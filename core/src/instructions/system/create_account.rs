use generic_array_struct::generic_array_struct;

use crate::internal_utils::{caba, csba};

// Accounts

#[generic_array_struct(builder pub)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct CreateAccountIxAccs<T> {
    /// Funding account, pays for the new account's lamports
    pub from: T,

    /// The new account. Must sign.
    pub to: T,
}

impl<T: Copy> CreateAccountIxAccs<T> {
    #[inline]
    pub const fn memset(val: T) -> Self {
        Self([val; CREATE_ACCOUNT_IX_ACCS_LEN])
    }
}

pub type CreateAccountIxKeys<'a> = CreateAccountIxAccs<&'a [u8; 32]>;

pub type CreateAccountIxKeysOwned = CreateAccountIxAccs<[u8; 32]>;

pub type CreateAccountIxAccFlags = CreateAccountIxAccs<bool>;

pub const CREATE_ACCOUNT_IX_IS_WRITER: CreateAccountIxAccFlags =
    CreateAccountIxAccFlags::memset(true);

pub const CREATE_ACCOUNT_IX_IS_SIGNER: CreateAccountIxAccFlags =
    CreateAccountIxAccFlags::memset(true);

// Data

/// System program instructions are bincode-serialized enums with a u32 variant index
pub const CREATE_ACCOUNT_IX_DISCM: u32 = 0;

pub const CREATE_ACCOUNT_IX_DATA_LEN: usize = 52;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CreateAccountIxArgs {
    pub lamports: u64,
    pub space: u64,

    /// Program that will own the new account
    pub owner: [u8; 32],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct CreateAccountIxData([u8; CREATE_ACCOUNT_IX_DATA_LEN]);

impl CreateAccountIxData {
    #[inline]
    pub const fn new(
        CreateAccountIxArgs {
            lamports,
            space,
            owner,
        }: CreateAccountIxArgs,
    ) -> Self {
        const A: usize = CREATE_ACCOUNT_IX_DATA_LEN;

        let mut d = [0u8; A];

        d = caba::<A, 0, 4>(d, &CREATE_ACCOUNT_IX_DISCM.to_le_bytes());
        d = caba::<A, 4, 8>(d, &lamports.to_le_bytes());
        d = caba::<A, 12, 8>(d, &space.to_le_bytes());
        d = caba::<A, 20, 32>(d, &owner);

        Self(d)
    }

    #[inline]
    pub const fn as_buf(&self) -> &[u8; CREATE_ACCOUNT_IX_DATA_LEN] {
        &self.0
    }

    #[inline]
    pub const fn parse_no_discm(data: &[u8; 48]) -> CreateAccountIxArgs {
        let (lamports, rest) = csba::<48, 8, 40>(data);
        let (space, owner) = csba::<40, 8, 32>(rest);

        CreateAccountIxArgs {
            lamports: u64::from_le_bytes(*lamports),
            space: u64::from_le_bytes(*space),
            owner: *owner,
        }
    }
}
