//! PDA seed layouts.
//!
//! The search over bump seeds is not done here, see `bcpool-std::pda`

pub const TARGET_CONFIG_SEED: [u8; 6] = *b"config";

pub const POOL_SEED: [u8; 10] = *b"bound_pool";

pub const POOL_SIGNER_SEED: [u8; 6] = *b"signer";

/// PDA seeds to use with the pool program to find a meme mint's target config
pub const fn target_config_seeds<'a>(
    quote_mint: &'a [u8; 32],
    meme_mint: &'a [u8; 32],
) -> (&'static [u8; 6], &'a [u8; 32], &'a [u8; 32]) {
    (&TARGET_CONFIG_SEED, quote_mint, meme_mint)
}

/// PDA seeds to use with the pool program to find a meme mint's bound pool.
///
/// Note the mint order is the reverse of [`target_config_seeds`]
pub const fn pool_seeds<'a>(
    meme_mint: &'a [u8; 32],
    quote_mint: &'a [u8; 32],
) -> (&'static [u8; 10], &'a [u8; 32], &'a [u8; 32]) {
    (&POOL_SEED, meme_mint, quote_mint)
}

/// PDA seeds to use with the pool program to find the authority of a pool's
/// vaults and, after pool creation, its meme mint
pub const fn pool_signer_seeds(pool: &[u8; 32]) -> (&'static [u8; 6], &[u8; 32]) {
    (&POOL_SIGNER_SEED, pool)
}

/// PDA seeds to use with the associated token account program
pub const fn ata_seeds<'a>(
    owner: &'a [u8; 32],
    token_program: &'a [u8; 32],
    mint: &'a [u8; 32],
) -> [&'a [u8; 32]; 3] {
    [owner, token_program, mint]
}
