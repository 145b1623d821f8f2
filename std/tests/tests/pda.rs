use bcpool_std::{
    pda::{create_pda, find_pool, pool_seeds},
    CreatePoolAddrs, PoolCreatorConfig,
};
use bcpool_test_utils::{
    config_strat, find_ata_sol, find_pool_signer_sol, find_pool_sol, find_target_config_sol,
    pk_strat,
};
use proptest::prelude::*;
use solana_pubkey::Pubkey;

fn assert_addrs_match_sol(cfg: &PoolCreatorConfig, meme_mint: [u8; 32]) {
    let ours = CreatePoolAddrs::find(cfg, meme_mint).unwrap();

    assert_eq!(
        ours.target_config,
        find_target_config_sol(cfg, &meme_mint).0.to_bytes()
    );
    let (pool, _) = find_pool_sol(cfg, &meme_mint);
    assert_eq!(ours.pool, pool.to_bytes());
    let (pool_signer, _) = find_pool_signer_sol(cfg, &ours.pool);
    assert_eq!(ours.pool_signer, pool_signer.to_bytes());
    assert_eq!(
        ours.quote_vault,
        find_ata_sol(cfg, &ours.pool_signer, &cfg.quote_mint).0.to_bytes()
    );
    assert_eq!(
        ours.meme_vault,
        find_ata_sol(cfg, &ours.pool_signer, &meme_mint).0.to_bytes()
    );
    assert_eq!(
        ours.fee_quote_vault,
        find_ata_sol(cfg, &cfg.fee_recipient, &cfg.quote_mint)
            .0
            .to_bytes()
    );
}

#[test]
fn default_config_matches_sol() {
    assert_addrs_match_sol(&PoolCreatorConfig::DEFAULT, [0x22; 32]);
}

proptest! {
    #[test]
    fn default_config_any_mint_matches_sol(meme_mint in pk_strat(None)) {
        assert_addrs_match_sol(&PoolCreatorConfig::DEFAULT, meme_mint);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn any_config_matches_sol(cfg in config_strat(), meme_mint in pk_strat(None)) {
        assert_addrs_match_sol(&cfg, meme_mint);
    }
}

proptest! {
    #[test]
    fn found_pool_recreatable_off_curve(meme_mint in pk_strat(None)) {
        let cfg = PoolCreatorConfig::DEFAULT;
        let (pool, bump) = find_pool(&cfg, &meme_mint).unwrap();
        let (s1, s2, s3) = pool_seeds(&meme_mint, &cfg.quote_mint);
        prop_assert_eq!(
            create_pda(&[s1.as_slice(), s2, s3, &[bump]], &cfg.program_id),
            Some(pool)
        );
        prop_assert!(!Pubkey::new_from_array(pool).is_on_curve());
    }
}
