use std::borrow::Cow;

use bcpool_std::{
    amount::TargetAmount,
    config::DEVNET_URL,
    create_pool::VAULTS_LEN,
    PoolCreatorConfig,
};
use proptest::prelude::*;

use crate::{bool_strat, pk_strat};

pub fn existing_vaults_strat() -> impl Strategy<Value = [bool; VAULTS_LEN]> {
    [bool_strat(None), bool_strat(None), bool_strat(None)]
}

pub fn target_amount_strat() -> impl Strategy<Value = TargetAmount> {
    (1..=u64::MAX).prop_map(|l| TargetAmount::new(l).unwrap())
}

/// Generates `(decimal SOL string, lamports it parses to)`,
/// always with at most 9 decimal places and lamports > 0
pub fn sol_str_strat() -> impl Strategy<Value = (String, u64)> {
    (0..=18_000_000_000u64, 0..=999_999_999u64, 0..=9usize)
        .prop_filter("zero", |(int, frac, n)| *int > 0 || (*n > 0 && *frac > 0))
        .prop_map(|(int, frac, n_decimals)| {
            let frac_str = format!("{frac:09}");
            let frac_str = &frac_str[..n_decimals];
            let frac_lamports = format!("{frac_str:0<9}").parse::<u64>().unwrap();
            let s = if n_decimals == 0 {
                int.to_string()
            } else {
                format!("{int}.{frac_str}")
            };
            (s, int * 1_000_000_000 + frac_lamports)
        })
        .prop_filter("zero after truncation", |(_, l)| *l > 0)
}

/// Arbitrary external identities. Used to check address derivation
/// does not depend on the default deployment.
pub fn config_strat() -> impl Strategy<Value = PoolCreatorConfig> {
    (
        pk_strat(None),
        pk_strat(None),
        pk_strat(None),
        pk_strat(None),
        pk_strat(None),
    )
        .prop_map(
            |(program_id, quote_mint, fee_recipient, token_program, associated_token_program)| {
                PoolCreatorConfig {
                    cluster_url: Cow::Borrowed(DEVNET_URL),
                    program_id,
                    quote_mint,
                    fee_recipient,
                    token_program,
                    associated_token_program,
                }
            },
        )
}
