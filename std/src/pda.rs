use solana_pubkey::Pubkey;

use crate::config::PoolCreatorConfig;

// Re-exports to maintain -core compat
pub use bcpool_core::pda::*;

/// Returns `None` if no bump in 1..=255 gives an off-curve address
/// or if the seeds are invalid
#[inline]
pub fn find_pda(seeds: &[&[u8]], program_id: &[u8; 32]) -> Option<([u8; 32], u8)> {
    Pubkey::try_find_program_address(seeds, &Pubkey::new_from_array(*program_id))
        .map(|(pk, bump)| (pk.to_bytes(), bump))
}

/// `seeds` must include the bump
#[inline]
pub fn create_pda(seeds: &[&[u8]], program_id: &[u8; 32]) -> Option<[u8; 32]> {
    Pubkey::create_program_address(seeds, &Pubkey::new_from_array(*program_id))
        .ok()
        .map(|pk| pk.to_bytes())
}

#[inline]
pub fn find_target_config(
    PoolCreatorConfig {
        program_id,
        quote_mint,
        ..
    }: &PoolCreatorConfig,
    meme_mint: &[u8; 32],
) -> Option<([u8; 32], u8)> {
    let (s1, s2, s3) = target_config_seeds(quote_mint, meme_mint);
    find_pda(&[s1.as_slice(), s2, s3], program_id)
}

#[inline]
pub fn find_pool(
    PoolCreatorConfig {
        program_id,
        quote_mint,
        ..
    }: &PoolCreatorConfig,
    meme_mint: &[u8; 32],
) -> Option<([u8; 32], u8)> {
    let (s1, s2, s3) = pool_seeds(meme_mint, quote_mint);
    find_pda(&[s1.as_slice(), s2, s3], program_id)
}

#[inline]
pub fn find_pool_signer(
    PoolCreatorConfig { program_id, .. }: &PoolCreatorConfig,
    pool: &[u8; 32],
) -> Option<([u8; 32], u8)> {
    let (s1, s2) = pool_signer_seeds(pool);
    find_pda(&[s1.as_slice(), s2], program_id)
}

/// Off-curve owners (PDAs) are allowed
#[inline]
pub fn find_ata(
    PoolCreatorConfig {
        token_program,
        associated_token_program,
        ..
    }: &PoolCreatorConfig,
    owner: &[u8; 32],
    mint: &[u8; 32],
) -> Option<([u8; 32], u8)> {
    let [s1, s2, s3] = ata_seeds(owner, token_program, mint);
    find_pda(&[s1.as_slice(), s2, s3], associated_token_program)
}
