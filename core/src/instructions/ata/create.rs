use generic_array_struct::generic_array_struct;

// Accounts

#[generic_array_struct(builder pub)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct CreateAtaIxAccs<T> {
    /// Pays for the new token account's rent
    pub payer: T,

    /// The associated token account to create
    pub ata: T,

    /// Wallet or PDA that will own the token account
    pub owner: T,

    pub mint: T,

    pub system_program: T,

    pub token_program: T,
}

impl<T: Copy> CreateAtaIxAccs<T> {
    #[inline]
    pub const fn memset(val: T) -> Self {
        Self([val; CREATE_ATA_IX_ACCS_LEN])
    }
}

pub type CreateAtaIxKeys<'a> = CreateAtaIxAccs<&'a [u8; 32]>;

pub type CreateAtaIxKeysOwned = CreateAtaIxAccs<[u8; 32]>;

pub type CreateAtaIxAccFlags = CreateAtaIxAccs<bool>;

pub const CREATE_ATA_IX_IS_WRITER: CreateAtaIxAccFlags = CreateAtaIxAccFlags::memset(false)
    .const_with_payer(true)
    .const_with_ata(true);

pub const CREATE_ATA_IX_IS_SIGNER: CreateAtaIxAccFlags =
    CreateAtaIxAccFlags::memset(false).const_with_payer(true);

// Data

/// The legacy `Create` instruction has empty ix data.
/// It fails if the account already exists, which is why callers
/// check for existence first instead of using `CreateIdempotent`.
pub const CREATE_ATA_IX_DATA: [u8; 0] = [];
