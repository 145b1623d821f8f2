//! Tokenkeg instructions

pub mod initialize_mint;
pub mod set_authority;

/// Size of a tokenkeg mint account
pub const MINT_LEN: usize = 82;

/// Decimals of every meme mint created for a new pool
pub const MEME_MINT_DECIMALS: u8 = 9;

pub(crate) const COPTION_NONE: u8 = 0;
pub(crate) const COPTION_SOME: u8 = 1;
