use bs58_fixed_wasm::Bs58Array;
use serde::{Deserialize, Serialize};
use tsify_next::Tsify;
use wasm_bindgen::prelude::*;

use crate::{
    interface::B58PK,
    view::{PoolCreatorPanel, Status},
};

/// `Date.now()`
///
/// as-safety: float to int casts saturate, and `Date.now()` is always a non-negative integer
const fn ms(now_ms: f64) -> u64 {
    now_ms as u64
}

/// State of the pool-creation form. One per rendered form.
///
/// Drive a submission with:
/// 1. {@link PoolCreatorForm.beginSubmit}
/// 2. generate the mint keypair, {@link findCreatePoolAddrs}, fetch {@link accountsToCheck},
///    {@link createPoolIxs}
/// 3. build the transaction, sign it with the mint keypair, have the wallet sign and send
///    with {@link sendOpts}, confirm
/// 4. {@link PoolCreatorForm.finishOk} or {@link PoolCreatorForm.finishErr}
///
/// and call {@link PoolCreatorForm.tick} periodically to auto-clear the status.
#[wasm_bindgen]
#[derive(Debug, Default, Clone)]
pub struct PoolCreatorForm(pub(crate) bcpool_std::PoolCreatorForm);

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct BeginSubmitArgs {
    /// `undefined` if wallet not connected
    #[tsify(optional)]
    pub signer: Option<B58PK>,

    pub now_ms: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi, large_number_types_as_bigints)]
#[serde(rename_all = "camelCase")]
pub struct SubmitStart {
    pub signer: B58PK,
    pub target_lamports: u64,
}

#[wasm_bindgen]
impl PoolCreatorForm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self(bcpool_std::PoolCreatorForm::new())
    }

    #[wasm_bindgen(getter)]
    pub fn amount(&self) -> String {
        self.0.amount().to_owned()
    }

    #[wasm_bindgen(js_name = setAmount)]
    pub fn set_amount(&mut self, amount: String) {
        self.0.set_amount(amount);
    }

    #[wasm_bindgen(getter, js_name = isCreating)]
    pub fn is_creating(&self) -> bool {
        self.0.is_creating()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> Status {
        Status::from_std(self.0.status())
    }

    /// Milliseconds timestamp the current status will be cleared at
    #[wasm_bindgen(getter, js_name = clearAt)]
    pub fn clear_at(&self) -> Option<f64> {
        // as-safety: timestamps are well within f64's exact integer range
        self.0.status_board().clear_at().map(|t| t as f64)
    }

    #[wasm_bindgen(js_name = canSubmit)]
    pub fn can_submit(&self, wallet_connected: bool) -> bool {
        self.0.can_submit(wallet_connected)
    }

    pub fn panel(&self, wallet_connected: bool) -> PoolCreatorPanel {
        PoolCreatorPanel::from_std(bcpool_std::view::PoolCreatorPanel::new(
            &self.0,
            wallet_connected,
        ))
    }

    /// Validates the form. Returns `undefined` if no submission should be made,
    /// in which case the reason, if any, has been set as the status.
    #[wasm_bindgen(js_name = beginSubmit)]
    pub fn begin_submit(
        &mut self,
        BeginSubmitArgs { signer, now_ms }: &BeginSubmitArgs,
    ) -> Option<SubmitStart> {
        self.0
            .begin_submit(signer.as_ref().map(|Bs58Array(pk)| *pk), ms(*now_ms))
            .map(|(signer, target)| SubmitStart {
                signer: B58PK::new(signer),
                target_lamports: target.lamports(),
            })
    }

    /// Shows a loading message
    pub fn progress(&mut self, message: &str, now_ms: f64) {
        self.0.progress(message, ms(now_ms));
    }

    #[wasm_bindgen(js_name = finishOk)]
    pub fn finish_ok(&mut self, now_ms: f64) {
        self.0.finish_ok(ms(now_ms));
    }

    /// See {@link userErrorMessage} for `errMsg` and `hasLogs`
    #[wasm_bindgen(js_name = finishErr)]
    pub fn finish_err(&mut self, err_msg: &str, has_logs: bool, now_ms: f64) {
        self.0.finish_err(err_msg, has_logs, ms(now_ms));
    }

    /// Returns true if the status was just cleared
    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.0.tick(ms(now_ms))
    }
}
