use bcpool_std::{
    amount::TargetAmount,
    create_pool::{create_pool_ixs, CreatePoolAddrs, CreatePoolIxArgs, VAULTS_LEN},
    instruction::Instruction,
    instructions::token::MINT_LEN,
    rent::default_min_balance,
    Keypair, PoolCreatorConfig,
};
use bcpool_test_utils::MockWallet;
use solana_signer::Signer;

pub const WALLET_SEED: [u8; 32] = [0x11; 32];

pub const MINT_SEED: [u8; 32] = [0x22; 32];

pub fn wallet() -> MockWallet {
    MockWallet::from_seed(WALLET_SEED)
}

pub fn wallet_pk() -> [u8; 32] {
    Keypair::new_from_array(WALLET_SEED).pubkey().to_bytes()
}

pub fn mint_pk(mint_seed: [u8; 32]) -> [u8; 32] {
    Keypair::new_from_array(mint_seed).pubkey().to_bytes()
}

pub fn addrs_for_mint_seed(cfg: &PoolCreatorConfig, mint_seed: [u8; 32]) -> CreatePoolAddrs {
    CreatePoolAddrs::find(cfg, mint_pk(mint_seed)).unwrap()
}

pub fn ixs_for_test(
    cfg: &PoolCreatorConfig,
    addrs: &CreatePoolAddrs,
    signer: [u8; 32],
    existing_vaults: [bool; VAULTS_LEN],
) -> Vec<Instruction> {
    create_pool_ixs(CreatePoolIxArgs {
        cfg,
        addrs,
        signer,
        target: TargetAmount::new(1_500_000_000).unwrap(),
        mint_rent_lamports: default_min_balance(MINT_LEN),
        existing_vaults,
    })
}
