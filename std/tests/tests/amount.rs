use bcpool_std::{
    amount::TargetAmount,
    create_pool::{create_pool_ixs, CreatePoolIxArgs, CREATE_POOL_MIN_IXS},
    instructions::{pool::init_target_config::INIT_TARGET_CONFIG_IX_DISCM, token::MINT_LEN},
    rent::default_min_balance,
    PoolCreatorConfig, PoolCreatorForm,
};
use bcpool_test_utils::{existing_vaults_strat, sol_str_strat, target_amount_strat};
use proptest::prelude::*;

use crate::common::{addrs_for_mint_seed, wallet_pk, MINT_SEED};

proptest! {
    #[test]
    fn decimal_sol_parses_exactly((s, lamports) in sol_str_strat()) {
        prop_assert_eq!(TargetAmount::parse_sol(&s).map(|t| t.lamports()), Ok(lamports));

        let mut form = PoolCreatorForm::new();
        form.set_amount(s);
        let (_, target) = form.begin_submit(Some(wallet_pk()), 0).unwrap();
        prop_assert_eq!(target.lamports(), lamports);
    }
}

proptest! {
    #[test]
    fn target_written_to_config_ix(
        target in target_amount_strat(),
        existing_vaults in existing_vaults_strat(),
    ) {
        let cfg = PoolCreatorConfig::DEFAULT;
        let addrs = addrs_for_mint_seed(&cfg, MINT_SEED);
        let ixs = create_pool_ixs(CreatePoolIxArgs {
            cfg: &cfg,
            addrs: &addrs,
            signer: wallet_pk(),
            target,
            mint_rent_lamports: default_min_balance(MINT_LEN),
            existing_vaults,
        });
        let n_missing = existing_vaults.iter().filter(|e| !**e).count();
        prop_assert_eq!(ixs.len(), CREATE_POOL_MIN_IXS + n_missing);

        let cfg_ix = &ixs[ixs.len() - 3];
        prop_assert_eq!(&cfg_ix.data[..8], &INIT_TARGET_CONFIG_IX_DISCM);
        prop_assert_eq!(&cfg_ix.data[8..], &target.lamports().to_le_bytes());
    }
}
