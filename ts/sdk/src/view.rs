use bcpool_std::{
    amount::TargetAmount,
    config::{SendOpts as StdSendOpts, CONFIRM_COMMITMENT},
    err::user_message,
    status::StatusKind as StdStatusKind,
    view::{
        format_balance_in_millions, AMOUNT_LABEL, AMOUNT_PLACEHOLDER, FORM_HEADING, PAGE_HEADING,
        PAGE_SUBTITLE, STEPS,
    },
    PoolCreatorConfig,
};
use bs58_fixed_wasm::Bs58Array;
use serde::{Deserialize, Serialize};
use tsify_next::Tsify;
use wasm_bindgen::prelude::*;

use crate::{
    err::amount_err,
    interface::{Config, SendOpts, B58PK},
};

#[wasm_bindgen(js_name = defaultConfig)]
pub fn default_config() -> Config {
    Config::from_std(PoolCreatorConfig::DEFAULT)
}

#[wasm_bindgen(js_name = sendOpts)]
pub fn send_opts() -> SendOpts {
    let StdSendOpts {
        skip_preflight,
        preflight_commitment,
        max_retries,
    } = StdSendOpts::DEFAULT;
    SendOpts {
        skip_preflight,
        preflight_commitment: preflight_commitment.as_str().to_owned(),
        max_retries: max_retries.and_then(|r| u32::try_from(r).ok()),
        confirm_commitment: CONFIRM_COMMITMENT.as_str().to_owned(),
    }
}

/// Parses a decimal SOL amount into lamports.
///
/// @throws if not a positive decimal number
#[wasm_bindgen(js_name = parseTargetAmount)]
pub fn parse_target_amount(amount: &str) -> Result<u64, JsError> {
    TargetAmount::parse_sol(amount)
        .map(|t| t.lamports())
        .map_err(amount_err)
}

/// The text to show for a failed submission.
///
/// `errMsg` is the raw error message, `""` if none.
/// `hasLogs` is whether the error carried transaction logs.
#[wasm_bindgen(js_name = userErrorMessage)]
pub fn user_error_message(err_msg: &str, has_logs: bool) -> String {
    user_message(err_msg, has_logs)
}

/// e.g. `1M`, `1.5M`, `0.3M`
#[wasm_bindgen(js_name = formatBalanceInMillions)]
pub fn format_balance_in_millions_js(balance: u64) -> String {
    format_balance_in_millions(balance)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct WalletPanelArgs {
    pub connected: bool,

    #[tsify(optional)]
    pub pubkey: Option<B58PK>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct WalletPanel {
    pub connected: bool,
    pub heading: String,

    /// base58, only if connected
    #[tsify(optional)]
    pub address: Option<String>,
}

#[wasm_bindgen(js_name = walletPanel)]
pub fn wallet_panel(WalletPanelArgs { connected, pubkey }: &WalletPanelArgs) -> WalletPanel {
    let bcpool_std::view::WalletPanel {
        connected,
        heading,
        address,
    } = bcpool_std::view::WalletPanel::new(*connected, pubkey.as_ref().map(|Bs58Array(pk)| pk));
    WalletPanel {
        connected,
        heading: heading.to_owned(),
        address,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct PageText {
    pub heading: String,
    pub subtitle: String,
    pub form_heading: String,
    pub amount_label: String,
    pub amount_placeholder: String,
    pub steps: Vec<String>,
}

#[wasm_bindgen(js_name = pageText)]
pub fn page_text() -> PageText {
    PageText {
        heading: PAGE_HEADING.to_owned(),
        subtitle: PAGE_SUBTITLE.to_owned(),
        form_heading: FORM_HEADING.to_owned(),
        amount_label: AMOUNT_LABEL.to_owned(),
        amount_placeholder: AMOUNT_PLACEHOLDER.to_owned(),
        steps: STEPS.map(str::to_owned).into(),
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub enum StatusKind {
    #[default]
    None,
    Loading,
    Success,
    Error,
}

impl StatusKind {
    pub(crate) const fn from_std(k: StdStatusKind) -> Self {
        match k {
            StdStatusKind::None => Self::None,
            StdStatusKind::Loading => Self::Loading,
            StdStatusKind::Success => Self::Success,
            StdStatusKind::Error => Self::Error,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    pub message: String,
    pub kind: StatusKind,
}

impl Status {
    pub(crate) fn from_std(
        bcpool_std::status::Status { message, kind }: &bcpool_std::status::Status,
    ) -> Self {
        Self {
            message: message.clone(),
            kind: StatusKind::from_std(*kind),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct PoolCreatorPanel {
    pub input_disabled: bool,
    pub button_disabled: bool,
    pub button_label: String,

    /// Not rendered if kind is `none`
    pub status: Status,
}

impl PoolCreatorPanel {
    pub(crate) fn from_std(
        bcpool_std::view::PoolCreatorPanel {
            input_disabled,
            button_disabled,
            button_label,
            status,
        }: bcpool_std::view::PoolCreatorPanel,
    ) -> Self {
        Self {
            input_disabled,
            button_disabled,
            button_label: button_label.to_owned(),
            status: Status::from_std(&status),
        }
    }
}
