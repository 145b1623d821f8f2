use bcpool_std::{
    pda::{ata_seeds, pool_seeds, pool_signer_seeds, target_config_seeds},
    PoolCreatorConfig,
};
use solana_pubkey::Pubkey;

// Reference derivations straight from the raw seeds,
// to check the seed layouts used by bcpool-std

pub fn find_target_config_sol(cfg: &PoolCreatorConfig, meme_mint: &[u8; 32]) -> (Pubkey, u8) {
    let (s0, s1, s2) = target_config_seeds(&cfg.quote_mint, meme_mint);
    Pubkey::find_program_address(&[s0, s1, s2], &Pubkey::new_from_array(cfg.program_id))
}

pub fn find_pool_sol(cfg: &PoolCreatorConfig, meme_mint: &[u8; 32]) -> (Pubkey, u8) {
    let (s0, s1, s2) = pool_seeds(meme_mint, &cfg.quote_mint);
    Pubkey::find_program_address(&[s0, s1, s2], &Pubkey::new_from_array(cfg.program_id))
}

pub fn find_pool_signer_sol(cfg: &PoolCreatorConfig, pool: &[u8; 32]) -> (Pubkey, u8) {
    let (s0, s1) = pool_signer_seeds(pool);
    Pubkey::find_program_address(&[s0, s1], &Pubkey::new_from_array(cfg.program_id))
}

pub fn find_ata_sol(cfg: &PoolCreatorConfig, owner: &[u8; 32], mint: &[u8; 32]) -> (Pubkey, u8) {
    let [s0, s1, s2] = ata_seeds(owner, &cfg.token_program, mint);
    Pubkey::find_program_address(
        &[s0, s1, s2],
        &Pubkey::new_from_array(cfg.associated_token_program),
    )
}
