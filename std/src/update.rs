//! Feeding fetched on-chain accounts back in.
//!
//! Nothing is cached between submissions: hosts fetch
//! [`crate::CreatePoolAddrs::accounts_to_check`] with one
//! `getMultipleAccounts` call per submission and hand the result back through [`UpdateMap`].

use std::collections::HashMap;

pub trait Account {
    fn data(&self) -> &[u8];
}

impl<T: Account + ?Sized> Account for &T {
    #[inline]
    fn data(&self) -> &[u8] {
        (*self).data()
    }
}

/// A map of fetched accounts. An account missing from the map does not exist on-chain.
pub trait UpdateMap {
    type Account<'a>: Account
    where
        Self: 'a;

    fn get_account(&self, pk: &[u8; 32]) -> Option<Self::Account<'_>>;

    #[inline]
    fn contains_account(&self, pk: &[u8; 32]) -> bool {
        self.get_account(pk).is_some()
    }
}

impl<T: UpdateMap + ?Sized> UpdateMap for &T {
    type Account<'a>
        = T::Account<'a>
    where
        Self: 'a;

    #[inline]
    fn get_account(&self, pk: &[u8; 32]) -> Option<Self::Account<'_>> {
        (*self).get_account(pk)
    }
}

impl Account for Vec<u8> {
    #[inline]
    fn data(&self) -> &[u8] {
        self
    }
}

impl<A: Account> UpdateMap for HashMap<[u8; 32], A> {
    type Account<'a>
        = &'a A
    where
        Self: 'a;

    #[inline]
    fn get_account(&self, pk: &[u8; 32]) -> Option<Self::Account<'_>> {
        self.get(pk)
    }
}
