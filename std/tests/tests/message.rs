use bcpool_std::{
    create_pool::{CREATE_POOL_MAX_IXS, CREATE_POOL_MIN_IXS},
    tx::{compile_message, mint_signed_tx, wire_bytes, PACKET_DATA_SIZE},
    Keypair, PoolCreatorConfig, Transaction,
};
use bcpool_test_utils::{existing_vaults_strat, seed_strat};
use proptest::prelude::*;
use solana_hash::Hash;
use solana_pubkey::Pubkey;
use solana_signature::Signature;
use solana_signer::Signer;

use crate::common::{addrs_for_mint_seed, ixs_for_test, mint_pk, wallet_pk, MINT_SEED};

const BLOCKHASH: [u8; 32] = [0xbb; 32];

proptest! {
    #[test]
    fn create_pool_message_signers(
        mint_seed in seed_strat(),
        existing_vaults in existing_vaults_strat(),
    ) {
        let cfg = PoolCreatorConfig::DEFAULT;
        let addrs = addrs_for_mint_seed(&cfg, mint_seed);
        let payer = wallet_pk();
        let ixs = ixs_for_test(&cfg, &addrs, payer, existing_vaults);
        prop_assert!((CREATE_POOL_MIN_IXS..=CREATE_POOL_MAX_IXS).contains(&ixs.len()));

        let msg = compile_message(&ixs, &payer, BLOCKHASH);
        // payer + mint
        prop_assert_eq!(msg.header.num_required_signatures, 2);
        prop_assert_eq!(msg.account_keys[0], Pubkey::new_from_array(payer));
        prop_assert_eq!(msg.account_keys[1], Pubkey::new_from_array(mint_pk(mint_seed)));
        prop_assert_eq!(msg.recent_blockhash, Hash::new_from_array(BLOCKHASH));
        prop_assert_eq!(msg.instructions.len(), ixs.len());
    }
}

#[test]
fn largest_create_pool_tx_fits_in_packet() {
    let cfg = PoolCreatorConfig::DEFAULT;
    let addrs = addrs_for_mint_seed(&cfg, MINT_SEED);
    let payer = wallet_pk();
    let ixs = ixs_for_test(&cfg, &addrs, payer, [false; 3]);
    assert_eq!(ixs.len(), CREATE_POOL_MAX_IXS);

    let tx = Transaction::new_unsigned(compile_message(&ixs, &payer, BLOCKHASH));
    let wire = wire_bytes(&tx).unwrap();
    assert!(wire.len() <= PACKET_DATA_SIZE);
}

#[test]
fn mint_signature_verifies() {
    let cfg = PoolCreatorConfig::DEFAULT;
    let mint = Keypair::new_from_array(MINT_SEED);
    let addrs = addrs_for_mint_seed(&cfg, MINT_SEED);
    assert_eq!(addrs.meme_mint, mint.pubkey().to_bytes());

    let payer = wallet_pk();
    let ixs = ixs_for_test(&cfg, &addrs, payer, [true; 3]);
    let tx = mint_signed_tx(&ixs, &payer, &mint, BLOCKHASH).unwrap();

    assert_eq!(tx.signatures[0], Signature::default());
    assert_eq!(tx.verify_with_results(), [false, true]);
}

#[test]
fn wire_bytes_decode_to_same_tx() {
    let cfg = PoolCreatorConfig::DEFAULT;
    let mint = Keypair::new_from_array(MINT_SEED);
    let addrs = addrs_for_mint_seed(&cfg, MINT_SEED);
    let payer = wallet_pk();
    let ixs = ixs_for_test(&cfg, &addrs, payer, [false, true, false]);
    let tx = mint_signed_tx(&ixs, &payer, &mint, BLOCKHASH).unwrap();

    let decoded: Transaction = bincode::deserialize(&wire_bytes(&tx).unwrap()).unwrap();
    assert_eq!(decoded, tx);
}
