use generic_array_struct::generic_array_struct;

use crate::{
    instructions::token::{COPTION_NONE, COPTION_SOME},
    internal_utils::caba,
};

// Accounts

#[generic_array_struct(builder pub)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct SetAuthorityIxAccs<T> {
    /// Mint or token account to change the authority of
    pub target: T,

    /// The current authority
    pub curr: T,
}

impl<T: Copy> SetAuthorityIxAccs<T> {
    #[inline]
    pub const fn memset(val: T) -> Self {
        Self([val; SET_AUTHORITY_IX_ACCS_LEN])
    }
}

pub type SetAuthorityIxKeys<'a> = SetAuthorityIxAccs<&'a [u8; 32]>;

pub type SetAuthorityIxKeysOwned = SetAuthorityIxAccs<[u8; 32]>;

pub type SetAuthorityIxAccFlags = SetAuthorityIxAccs<bool>;

pub const SET_AUTHORITY_IX_IS_WRITER: SetAuthorityIxAccFlags =
    SetAuthorityIxAccFlags::memset(false).const_with_target(true);

pub const SET_AUTHORITY_IX_IS_SIGNER: SetAuthorityIxAccFlags =
    SetAuthorityIxAccFlags::memset(false).const_with_curr(true);

// Data

pub const SET_AUTHORITY_IX_DISCM: u8 = 6;

pub const SET_AUTHORITY_IX_DATA_LEN: usize = 35;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AuthorityType {
    #[default]
    MintTokens = 0,
    FreezeAccount = 1,
    AccountOwner = 2,
    CloseAccount = 3,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SetAuthorityIxArgs {
    pub authority_type: AuthorityType,

    /// `None` removes the authority permanently
    pub new_authority: Option<[u8; 32]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct SetAuthorityIxData([u8; SET_AUTHORITY_IX_DATA_LEN]);

impl SetAuthorityIxData {
    #[inline]
    pub const fn new(
        SetAuthorityIxArgs {
            authority_type,
            new_authority,
        }: SetAuthorityIxArgs,
    ) -> Self {
        const A: usize = SET_AUTHORITY_IX_DATA_LEN;

        let (new_discm, new_authority) = match new_authority {
            None => (COPTION_NONE, [0u8; 32]),
            Some(pk) => (COPTION_SOME, pk),
        };

        let mut d = [0u8; A];

        d = caba::<A, 0, 1>(d, &[SET_AUTHORITY_IX_DISCM]);
        d = caba::<A, 1, 1>(d, &[authority_type as u8]);
        d = caba::<A, 2, 1>(d, &[new_discm]);
        d = caba::<A, 3, 32>(d, &new_authority);

        Self(d)
    }

    #[inline]
    pub const fn as_buf(&self) -> &[u8; SET_AUTHORITY_IX_DATA_LEN] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mint_tokens_to_new_auth() {
        let data = SetAuthorityIxData::new(SetAuthorityIxArgs {
            authority_type: AuthorityType::MintTokens,
            new_authority: Some([3; 32]),
        });
        assert_eq!(data.as_buf()[..3], [6, 0, 1]);
        assert_eq!(data.as_buf()[3..], [3; 32]);
    }
}
