//! The create-pool instruction sequence.
//!
//! Everything goes into a single transaction so that the mint, its vaults,
//! the target config and the pool are either all created or none are.

use std::fmt::Display;

use bcpool_core::{
    amount::TargetAmount,
    instructions::{
        ata::create::{
            NewCreateAtaIxAccsBuilder, CREATE_ATA_IX_DATA, CREATE_ATA_IX_IS_SIGNER,
            CREATE_ATA_IX_IS_WRITER,
        },
        pool::{
            init_target_config::{
                InitTargetConfigIxData, NewInitTargetConfigIxAccsBuilder,
                INIT_TARGET_CONFIG_IX_IS_SIGNER, INIT_TARGET_CONFIG_IX_IS_WRITER,
            },
            new_pool::{
                NewNewPoolIxAccsBuilder, NewPoolIxData, NEW_POOL_IX_IS_SIGNER,
                NEW_POOL_IX_IS_WRITER,
            },
        },
        system::create_account::{
            CreateAccountIxArgs, CreateAccountIxData, NewCreateAccountIxAccsBuilder,
            CREATE_ACCOUNT_IX_IS_SIGNER, CREATE_ACCOUNT_IX_IS_WRITER,
        },
        token::{
            initialize_mint::{
                InitializeMintIxArgs, InitializeMintIxData, NewInitializeMintIxAccsBuilder,
                INITIALIZE_MINT_IX_IS_SIGNER, INITIALIZE_MINT_IX_IS_WRITER,
            },
            set_authority::{
                AuthorityType, NewSetAuthorityIxAccsBuilder, SetAuthorityIxArgs,
                SetAuthorityIxData, SET_AUTHORITY_IX_IS_SIGNER, SET_AUTHORITY_IX_IS_WRITER,
            },
            MEME_MINT_DECIMALS, MINT_LEN,
        },
    },
    keys::{SYSTEM_PROGRAM_ID, SYSVAR_RENT_ID},
};
use bs58_fixed::Bs58String;

use crate::{
    config::PoolCreatorConfig,
    instruction::{keys_signer_writable_to_metas, Instruction},
    pda::{find_ata, find_pool, find_pool_signer, find_target_config},
    update::UpdateMap,
};

type Bs58PkString = Bs58String<44>;

/// Min number of instructions in the create-pool transaction,
/// when all vaults already exist
pub const CREATE_POOL_MIN_IXS: usize = 5;

/// Max number of instructions in the create-pool transaction,
/// when no vault exists yet
pub const CREATE_POOL_MAX_IXS: usize = CREATE_POOL_MIN_IXS + VAULTS_LEN;

pub const VAULTS_LEN: usize = 3;

/// Every address the create-pool transaction references
/// apart from the signer and the config's fixed identities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CreatePoolAddrs {
    pub meme_mint: [u8; 32],

    /// PDA ["config", quote_mint, meme_mint]
    pub target_config: [u8; 32],

    /// PDA ["bound_pool", meme_mint, quote_mint]
    pub pool: [u8; 32],

    /// PDA ["signer", pool]
    pub pool_signer: [u8; 32],

    pub quote_vault: [u8; 32],
    pub meme_vault: [u8; 32],
    pub fee_quote_vault: [u8; 32],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VaultKind {
    Quote,
    Meme,
    FeeQuote,
}

impl VaultKind {
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Quote => "quote vault",
            Self::Meme => "meme vault",
            Self::FeeQuote => "fee vault",
        }
    }
}

/// An associated token account the pool needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vault {
    pub kind: VaultKind,
    pub addr: [u8; 32],
    pub owner: [u8; 32],
    pub mint: [u8; 32],
}

/// `quote vault: <base58 addr>`
impl Display for Vault {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.kind.name(),
            Bs58PkString::encode(&self.addr)
        )
    }
}

impl CreatePoolAddrs {
    /// Returns `None` if any of the PDAs has no valid bump
    pub fn find(cfg: &PoolCreatorConfig, meme_mint: [u8; 32]) -> Option<Self> {
        let (target_config, _) = find_target_config(cfg, &meme_mint)?;
        let (pool, _) = find_pool(cfg, &meme_mint)?;
        let (pool_signer, _) = find_pool_signer(cfg, &pool)?;
        let (quote_vault, _) = find_ata(cfg, &pool_signer, &cfg.quote_mint)?;
        let (meme_vault, _) = find_ata(cfg, &pool_signer, &meme_mint)?;
        let (fee_quote_vault, _) = find_ata(cfg, &cfg.fee_recipient, &cfg.quote_mint)?;
        Some(Self {
            meme_mint,
            target_config,
            pool,
            pool_signer,
            quote_vault,
            meme_vault,
            fee_quote_vault,
        })
    }

    /// In the order their create instructions are appended
    #[inline]
    pub const fn vaults(&self, cfg: &PoolCreatorConfig) -> [Vault; VAULTS_LEN] {
        [
            Vault {
                kind: VaultKind::Quote,
                addr: self.quote_vault,
                owner: self.pool_signer,
                mint: cfg.quote_mint,
            },
            Vault {
                kind: VaultKind::Meme,
                addr: self.meme_vault,
                owner: self.pool_signer,
                mint: self.meme_mint,
            },
            Vault {
                kind: VaultKind::FeeQuote,
                addr: self.fee_quote_vault,
                owner: cfg.fee_recipient,
                mint: cfg.quote_mint,
            },
        ]
    }

    /// Accounts to fetch in a single batch to determine which vaults need creating
    #[inline]
    pub const fn accounts_to_check(&self) -> [[u8; 32]; VAULTS_LEN] {
        [self.quote_vault, self.meme_vault, self.fee_quote_vault]
    }

    /// `res[i]` is whether `self.accounts_to_check()[i]` exists
    #[inline]
    pub fn existing_vaults(&self, fetched: impl UpdateMap) -> [bool; VAULTS_LEN] {
        self.accounts_to_check()
            .map(|pk| fetched.contains_account(&pk))
    }

    /// The vaults that need creating, in [`Self::vaults`] order
    #[inline]
    pub fn missing_vaults(
        &self,
        cfg: &PoolCreatorConfig,
        existing_vaults: [bool; VAULTS_LEN],
    ) -> impl Iterator<Item = Vault> {
        self.vaults(cfg)
            .into_iter()
            .zip(existing_vaults)
            .filter_map(|(vault, exists)| (!exists).then_some(vault))
    }
}

/// One `<label>: <base58 addr>` line per derived address
impl Display for CreatePoolAddrs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        [
            ("Meme mint", &self.meme_mint),
            ("Target Config PDA", &self.target_config),
            ("Pool PDA", &self.pool),
            ("Pool Signer", &self.pool_signer),
            ("Quote vault", &self.quote_vault),
            ("Meme vault", &self.meme_vault),
            ("Fee vault", &self.fee_quote_vault),
        ]
        .into_iter()
        .try_for_each(|(label, pk)| writeln!(f, "{label}: {}", Bs58PkString::encode(pk)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CreatePoolIxArgs<'a> {
    pub cfg: &'a PoolCreatorConfig,
    pub addrs: &'a CreatePoolAddrs,

    /// The connected wallet. Fee payer, temporary mint authority and pool creator.
    pub signer: [u8; 32],
    pub target: TargetAmount,

    /// Rent-exempt minimum for a [`MINT_LEN`] account
    pub mint_rent_lamports: u64,

    /// See [`CreatePoolAddrs::existing_vaults`]
    pub existing_vaults: [bool; VAULTS_LEN],
}

/// Returns, in order:
/// 1. create mint account
/// 2. initialize mint
/// 3. create each vault that does not yet exist (0-3)
/// 4. initialize target config
/// 5. set mint authority to pool signer
/// 6. create pool
///
/// Must not be reordered: init mint needs the account, pool creation needs
/// the vaults, the config, and the pool signer as mint authority.
pub fn create_pool_ixs(
    CreatePoolIxArgs {
        cfg,
        addrs,
        signer,
        target,
        mint_rent_lamports,
        existing_vaults,
    }: CreatePoolIxArgs,
) -> Vec<Instruction> {
    let mut res = Vec::with_capacity(CREATE_POOL_MAX_IXS);
    res.push(create_mint_account_ix(cfg, &signer, &addrs.meme_mint, mint_rent_lamports));
    res.push(initialize_mint_ix(cfg, &signer, &addrs.meme_mint));
    res.extend(
        addrs
            .missing_vaults(cfg, existing_vaults)
            .map(|vault| create_ata_ix(cfg, &signer, &vault)),
    );
    res.push(init_target_config_ix(cfg, &signer, addrs, target));
    res.push(set_mint_authority_ix(cfg, &signer, addrs));
    res.push(new_pool_ix(cfg, &signer, addrs));
    res
}

pub fn create_mint_account_ix(
    cfg: &PoolCreatorConfig,
    payer: &[u8; 32],
    mint: &[u8; 32],
    lamports: u64,
) -> Instruction {
    let keys = NewCreateAccountIxAccsBuilder::start()
        .with_from(*payer)
        .with_to(*mint)
        .build();
    Instruction {
        program_id: SYSTEM_PROGRAM_ID,
        accounts: keys_signer_writable_to_metas(
            keys.0.iter(),
            CREATE_ACCOUNT_IX_IS_SIGNER.0.iter(),
            CREATE_ACCOUNT_IX_IS_WRITER.0.iter(),
        ),
        data: CreateAccountIxData::new(CreateAccountIxArgs {
            lamports,
            // as-safety: MINT_LEN is 82
            space: MINT_LEN as u64,
            owner: cfg.token_program,
        })
        .as_buf()
        .to_vec(),
    }
}

/// Signer is the temporary mint authority, no freeze authority
pub fn initialize_mint_ix(
    cfg: &PoolCreatorConfig,
    signer: &[u8; 32],
    mint: &[u8; 32],
) -> Instruction {
    let keys = NewInitializeMintIxAccsBuilder::start()
        .with_mint(*mint)
        .with_rent(SYSVAR_RENT_ID)
        .build();
    Instruction {
        program_id: cfg.token_program,
        accounts: keys_signer_writable_to_metas(
            keys.0.iter(),
            INITIALIZE_MINT_IX_IS_SIGNER.0.iter(),
            INITIALIZE_MINT_IX_IS_WRITER.0.iter(),
        ),
        data: InitializeMintIxData::new(InitializeMintIxArgs {
            decimals: MEME_MINT_DECIMALS,
            mint_authority: *signer,
            freeze_authority: None,
        })
        .as_buf()
        .to_vec(),
    }
}

pub fn create_ata_ix(
    cfg: &PoolCreatorConfig,
    payer: &[u8; 32],
    Vault {
        addr, owner, mint, ..
    }: &Vault,
) -> Instruction {
    let keys = NewCreateAtaIxAccsBuilder::start()
        .with_payer(*payer)
        .with_ata(*addr)
        .with_owner(*owner)
        .with_mint(*mint)
        .with_system_program(SYSTEM_PROGRAM_ID)
        .with_token_program(cfg.token_program)
        .build();
    Instruction {
        program_id: cfg.associated_token_program,
        accounts: keys_signer_writable_to_metas(
            keys.0.iter(),
            CREATE_ATA_IX_IS_SIGNER.0.iter(),
            CREATE_ATA_IX_IS_WRITER.0.iter(),
        ),
        data: CREATE_ATA_IX_DATA.to_vec(),
    }
}

pub fn init_target_config_ix(
    cfg: &PoolCreatorConfig,
    creator: &[u8; 32],
    addrs: &CreatePoolAddrs,
    target: TargetAmount,
) -> Instruction {
    let keys = NewInitTargetConfigIxAccsBuilder::start()
        .with_creator(*creator)
        .with_target_config(addrs.target_config)
        .with_token_mint(cfg.quote_mint)
        .with_pair_token_mint(addrs.meme_mint)
        .with_system_program(SYSTEM_PROGRAM_ID)
        .build();
    Instruction {
        program_id: cfg.program_id,
        accounts: keys_signer_writable_to_metas(
            keys.0.iter(),
            INIT_TARGET_CONFIG_IX_IS_SIGNER.0.iter(),
            INIT_TARGET_CONFIG_IX_IS_WRITER.0.iter(),
        ),
        data: InitTargetConfigIxData::new(target.lamports())
            .as_buf()
            .to_vec(),
    }
}

/// Hands the meme mint's mint authority from the signer to the pool signer PDA
pub fn set_mint_authority_ix(
    cfg: &PoolCreatorConfig,
    curr: &[u8; 32],
    addrs: &CreatePoolAddrs,
) -> Instruction {
    let keys = NewSetAuthorityIxAccsBuilder::start()
        .with_target(addrs.meme_mint)
        .with_curr(*curr)
        .build();
    Instruction {
        program_id: cfg.token_program,
        accounts: keys_signer_writable_to_metas(
            keys.0.iter(),
            SET_AUTHORITY_IX_IS_SIGNER.0.iter(),
            SET_AUTHORITY_IX_IS_WRITER.0.iter(),
        ),
        data: SetAuthorityIxData::new(SetAuthorityIxArgs {
            authority_type: AuthorityType::MintTokens,
            new_authority: Some(addrs.pool_signer),
        })
        .as_buf()
        .to_vec(),
    }
}

pub fn new_pool_ix(
    cfg: &PoolCreatorConfig,
    sender: &[u8; 32],
    addrs: &CreatePoolAddrs,
) -> Instruction {
    let keys = NewNewPoolIxAccsBuilder::start()
        .with_sender(*sender)
        .with_pool(addrs.pool)
        .with_meme_mint(addrs.meme_mint)
        .with_quote_vault(addrs.quote_vault)
        .with_quote_mint(cfg.quote_mint)
        .with_fee_quote_vault(addrs.fee_quote_vault)
        .with_meme_vault(addrs.meme_vault)
        .with_target_config(addrs.target_config)
        .with_pool_signer(addrs.pool_signer)
        .with_system_program(SYSTEM_PROGRAM_ID)
        .with_token_program(cfg.token_program)
        .build();
    Instruction {
        program_id: cfg.program_id,
        accounts: keys_signer_writable_to_metas(
            keys.0.iter(),
            NEW_POOL_IX_IS_SIGNER.0.iter(),
            NEW_POOL_IX_IS_WRITER.0.iter(),
        ),
        data: NewPoolIxData::as_buf().to_vec(),
    }
}
