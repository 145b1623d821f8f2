use std::fmt::Display;

use bcpool_core::amount::TargetAmount;
use solana_keypair::Keypair;

use crate::{
    config::PoolCreatorConfig,
    err::{user_message, CreatePoolErr, TxLogs, INVALID_AMOUNT_MSG, WALLET_NOT_CONNECTED_MSG},
    status::{Status, StatusBoard, StatusKind},
    submit::{create_pool, Cluster, CreatePoolReceipt, Stage, Wallet, SUCCESS_MSG},
};

/// State of the pool-creation form.
///
/// At most one submission is in flight per form: [`Self::begin_submit`]
/// refuses to start while [`Self::is_creating`].
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct PoolCreatorForm {
    amount: String,
    status: StatusBoard,
    is_creating: bool,
}

impl PoolCreatorForm {
    #[inline]
    pub const fn new() -> Self {
        Self {
            amount: String::new(),
            status: StatusBoard::new(),
            is_creating: false,
        }
    }

    #[inline]
    pub fn amount(&self) -> &str {
        &self.amount
    }

    /// Free text, validated only on submit
    #[inline]
    pub fn set_amount(&mut self, amount: impl Into<String>) {
        self.amount = amount.into();
    }

    #[inline]
    pub fn status(&self) -> &Status {
        self.status.status()
    }

    #[inline]
    pub fn status_board(&self) -> &StatusBoard {
        &self.status
    }

    #[inline]
    pub const fn is_creating(&self) -> bool {
        self.is_creating
    }

    #[inline]
    pub const fn input_disabled(&self, wallet_connected: bool) -> bool {
        !wallet_connected || self.is_creating
    }

    #[inline]
    pub fn can_submit(&self, wallet_connected: bool) -> bool {
        !self.input_disabled(wallet_connected) && !self.amount.is_empty()
    }

    /// Validates the form and marks it as creating.
    ///
    /// Returns `None` without any further action if validation failed
    /// (the failure is shown as an error status) or if a submission is
    /// already in flight (status untouched).
    pub fn begin_submit(
        &mut self,
        signer: Option<[u8; 32]>,
        now_ms: u64,
    ) -> Option<([u8; 32], TargetAmount)> {
        if self.is_creating {
            return None;
        }
        let Some(signer) = signer else {
            self.status
                .show(WALLET_NOT_CONNECTED_MSG, StatusKind::Error, now_ms);
            return None;
        };
        let Ok(target) = TargetAmount::parse_sol(&self.amount) else {
            self.status
                .show(INVALID_AMOUNT_MSG, StatusKind::Error, now_ms);
            return None;
        };
        self.is_creating = true;
        self.progress(Stage::Start.message(), now_ms);
        Some((signer, target))
    }

    #[inline]
    pub fn progress(&mut self, message: &str, now_ms: u64) {
        self.status.show(message, StatusKind::Loading, now_ms);
    }

    pub fn finish_ok(&mut self, now_ms: u64) {
        self.status.show(SUCCESS_MSG, StatusKind::Success, now_ms);
        self.amount.clear();
        self.is_creating = false;
    }

    /// `err_msg` is the raw error text, rewritten by [`user_message`] for display
    pub fn finish_err(&mut self, err_msg: &str, has_logs: bool, now_ms: u64) {
        self.status
            .show(user_message(err_msg, has_logs), StatusKind::Error, now_ms);
        self.is_creating = false;
    }

    /// See [`StatusBoard::tick`]
    #[inline]
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.status.tick(now_ms)
    }

    /// Runs a full submission with a mint key pair generated from `mint_seed`.
    ///
    /// `clock` returns the current time in milliseconds.
    ///
    /// Returns `None` if [`Self::begin_submit`] refused to start.
    pub fn submit<C, W>(
        &mut self,
        wallet: &W,
        cluster: &C,
        cfg: &PoolCreatorConfig,
        mint_seed: [u8; 32],
        clock: impl Fn() -> u64,
    ) -> Option<Result<CreatePoolReceipt, CreatePoolErr<C::Error>>>
    where
        C: Cluster,
        C::Error: Display + TxLogs,
        W: Wallet<Error = C::Error>,
    {
        let (_signer, target) = self.begin_submit(wallet.pubkey(), clock())?;
        let mint = Keypair::new_from_array(mint_seed);
        let res = create_pool(cluster, wallet, cfg, target, &mint, |stage| {
            self.progress(stage.message(), clock())
        });
        match &res {
            Ok(_) => self.finish_ok(clock()),
            Err(e) => self.finish_err(&e.to_string(), e.logs().is_some(), clock()),
        }
        Some(res)
    }
}
