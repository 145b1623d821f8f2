#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Instruction {
    pub program_id: [u8; 32],
    pub accounts: Vec<AccountMeta>,
    pub data: Vec<u8>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AccountMeta {
    pub pubkey: [u8; 32],
    pub role: Role,
}

impl AccountMeta {
    #[inline]
    pub const fn new(pubkey: [u8; 32], role: Role) -> Self {
        Self { pubkey, role }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Readonly,
    Writable,
    ReadonlySigner,
    WritableSigner,
}

impl Role {
    #[inline]
    pub const fn from_signer_writable(signer: bool, writable: bool) -> Self {
        match (signer, writable) {
            (true, true) => Self::WritableSigner,
            (true, false) => Self::ReadonlySigner,
            (false, true) => Self::Writable,
            (false, false) => Self::Readonly,
        }
    }

    #[inline]
    pub const fn is_signer(&self) -> bool {
        matches!(self, Self::ReadonlySigner | Self::WritableSigner)
    }

    #[inline]
    pub const fn is_writable(&self) -> bool {
        matches!(self, Self::Writable | Self::WritableSigner)
    }

    /// Same encoding as `@solana/kit`'s `AccountRole`
    #[inline]
    pub const fn to_u8(self) -> u8 {
        match self {
            Self::Readonly => 0,
            Self::Writable => 1,
            Self::ReadonlySigner => 2,
            Self::WritableSigner => 3,
        }
    }
}

/// All 3 iterators must have the same length
pub fn keys_signer_writable_to_metas<'a>(
    keys: impl Iterator<Item = &'a [u8; 32]>,
    signer: impl Iterator<Item = &'a bool>,
    writable: impl Iterator<Item = &'a bool>,
) -> Vec<AccountMeta> {
    keys.zip(signer)
        .zip(writable)
        .map(|((key, signer), writable)| {
            AccountMeta::new(*key, Role::from_signer_writable(*signer, *writable))
        })
        .collect()
}
