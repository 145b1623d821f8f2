//! View models for the page. Rendering is left to the host.

use bs58_fixed::Bs58String;

use crate::{form::PoolCreatorForm, status::Status};

type Bs58PkString = Bs58String<44>;

pub const PAGE_HEADING: &str = "Bonding Curve Pool Creator";

pub const PAGE_SUBTITLE: &str =
    "Create your own bonding curve pools on Solana with just a few clicks";

pub const WALLET_PANEL_HEADING: &str = "Step 1: Connect Your Wallet";

pub const FORM_HEADING: &str = "Pool Creator";

pub const AMOUNT_LABEL: &str = "Target Amount (SOL):";

pub const AMOUNT_PLACEHOLDER: &str = "Enter amount in SOL (e.g., 1.5)";

pub const SUBMIT_LABEL: &str = "Create Pool";

pub const SUBMITTING_LABEL: &str = "Creating Pool...";

/// Describes what the single transaction does, shown below the form
pub const STEPS: [&str; 6] = [
    "Create mint account",
    "Initialize mint",
    "Create token vaults (if needed)",
    "Initialize target configuration",
    "Set mint authority to pool signer",
    "Create bonding curve pool",
];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WalletPanel {
    pub connected: bool,
    pub heading: &'static str,

    /// base58, only if connected and the key is known
    pub address: Option<String>,
}

impl WalletPanel {
    pub fn new(connected: bool, pubkey: Option<&[u8; 32]>) -> Self {
        Self {
            connected,
            heading: WALLET_PANEL_HEADING,
            address: pubkey
                .filter(|_| connected)
                .map(|pk| Bs58PkString::encode(pk).to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PoolCreatorPanel {
    pub input_disabled: bool,
    pub button_disabled: bool,
    pub button_label: &'static str,

    /// Not rendered if empty
    pub status: Status,
}

impl PoolCreatorPanel {
    pub fn new(form: &PoolCreatorForm, wallet_connected: bool) -> Self {
        Self {
            input_disabled: form.input_disabled(wallet_connected),
            button_disabled: !form.can_submit(wallet_connected),
            button_label: if form.is_creating() {
                SUBMITTING_LABEL
            } else {
                SUBMIT_LABEL
            },
            status: form.status().clone(),
        }
    }
}

const MILLION: u64 = 1_000_000;

/// `1M` for whole millions, else millions to one decimal place, rounding
/// half up: `1.5M`, `0.3M`, `0.0M`
pub fn format_balance_in_millions(balance: u64) -> String {
    if balance >= MILLION && balance % MILLION == 0 {
        return format!("{}M", balance / MILLION);
    }
    let tenths = (u128::from(balance) + u128::from(MILLION / 20)) / u128::from(MILLION / 10);
    format!("{}.{}M", tenths / 10, tenths % 10)
}

#[cfg(test)]
mod tests {
    use bcpool_core::keys::QUOTE_MINT_ID;

    use super::*;

    #[test]
    fn wallet_panel_address_only_when_connected() {
        assert_eq!(WalletPanel::new(false, Some(&QUOTE_MINT_ID)).address, None);
        assert_eq!(WalletPanel::new(true, None).address, None);
        assert_eq!(
            WalletPanel::new(true, Some(&QUOTE_MINT_ID)).address.as_deref(),
            Some("So11111111111111111111111111111111111111112")
        );
    }

    #[test]
    fn panel_while_creating() {
        let mut form = PoolCreatorForm::new();
        form.set_amount("1");
        let idle = PoolCreatorPanel::new(&form, true);
        assert!(!idle.button_disabled);
        assert_eq!(idle.button_label, SUBMIT_LABEL);

        form.begin_submit(Some([1; 32]), 0).unwrap();
        let busy = PoolCreatorPanel::new(&form, true);
        assert!(busy.input_disabled);
        assert!(busy.button_disabled);
        assert_eq!(busy.button_label, SUBMITTING_LABEL);
    }

    #[test]
    fn balance_in_millions() {
        for (balance, expected) in [
            (0, "0.0M"),
            (49_999, "0.0M"),
            (50_000, "0.1M"),
            (250_000, "0.3M"),
            (999_999, "1.0M"),
            (1_000_000, "1M"),
            (1_500_000, "1.5M"),
            (1_960_000, "2.0M"),
            (42_000_000, "42M"),
            (u64::MAX, "18446744073709.6M"),
        ] {
            assert_eq!(format_balance_in_millions(balance), expected, "{balance}");
        }
    }
}
