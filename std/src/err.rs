use std::{error::Error, fmt::Display};

// Re-exports to maintain -core compat
pub use bcpool_core::err::*;

use crate::tx::PACKET_DATA_SIZE;

pub const WALLET_NOT_CONNECTED_MSG: &str = "Please connect your wallet first";

pub const INVALID_AMOUNT_MSG: &str = "Please enter a valid amount greater than 0";

pub const TX_TOO_LARGE_MSG: &str = "Transaction too large";

/// Shown instead of the raw error text whenever the raw text indicates a size overflow
pub const TX_TOO_LARGE_FALLBACK_MSG: &str =
    "Transaction too large. This happens rarely - please try again or contact support.";

pub const UNKNOWN_ERR_MSG: &str = "Unknown error occurred";

/// Shown when a failed transaction left program logs but no message
pub const LOGS_ONLY_MSG: &str = "Mega-transaction failed. Check console for details.";

const SIZE_OVERFLOW_MARKERS: [&str; 2] = [TX_TOO_LARGE_MSG, "exceeds maximum"];

/// The text shown in the status area for a failed submission.
///
/// `has_logs` is whether the error carried program logs.
pub fn user_message(err_msg: &str, has_logs: bool) -> String {
    let msg = if SIZE_OVERFLOW_MARKERS.iter().any(|m| err_msg.contains(m)) {
        TX_TOO_LARGE_FALLBACK_MSG
    } else if !err_msg.is_empty() {
        err_msg
    } else if has_logs {
        LOGS_ONLY_MSG
    } else {
        UNKNOWN_ERR_MSG
    };
    format!("Error: {msg}")
}

/// Errors that may carry the program logs of a failed transaction
pub trait TxLogs {
    fn logs(&self) -> Option<&[String]>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TxErr {
    NotSigner { pk: [u8; 32] },
    Serialize,
    Signing,
    TooLarge { len: usize },
}

impl Display for TxErr {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotSigner { .. } => f.write_str("NotSigner"),
            Self::Serialize => f.write_str("SerializeErr"),
            Self::Signing => f.write_str("SigningErr"),
            Self::TooLarge { len } => write!(
                f,
                "{TX_TOO_LARGE_MSG}: {len} bytes > {PACKET_DATA_SIZE} bytes"
            ),
        }
    }
}

impl Error for TxErr {}

/// `E` is the error type of the host's [`crate::submit::Cluster`] and [`crate::submit::Wallet`]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CreatePoolErr<E> {
    Amount(AmountErr),
    Cluster(E),
    NoValidPda,
    Tx(TxErr),
    Wallet(E),
    WalletNotConnected,
}

impl<E> From<TxErr> for CreatePoolErr<E> {
    #[inline]
    fn from(value: TxErr) -> Self {
        Self::Tx(value)
    }
}

impl<E> From<AmountErr> for CreatePoolErr<E> {
    #[inline]
    fn from(value: AmountErr) -> Self {
        Self::Amount(value)
    }
}

impl<E: Display> Display for CreatePoolErr<E> {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Amount(_) => f.write_str(INVALID_AMOUNT_MSG),
            Self::Cluster(e) | Self::Wallet(e) => e.fmt(f),
            Self::NoValidPda => f.write_str("NoValidPdaErr"),
            Self::Tx(e) => e.fmt(f),
            Self::WalletNotConnected => f.write_str(WALLET_NOT_CONNECTED_MSG),
        }
    }
}

impl<E: Error> Error for CreatePoolErr<E> {}

impl<E: TxLogs> CreatePoolErr<E> {
    /// Only errors raised by the cluster or the wallet carry logs
    #[inline]
    pub fn logs(&self) -> Option<&[String]> {
        match self {
            Self::Cluster(e) | Self::Wallet(e) => e.logs(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use expect_test::expect;

    use super::*;

    #[derive(Debug)]
    struct LogsErr(Option<Vec<String>>);

    impl TxLogs for LogsErr {
        fn logs(&self) -> Option<&[String]> {
            self.0.as_deref()
        }
    }

    #[test]
    fn user_message_prefixes_raw_text() {
        expect!["Error: User rejected the request."]
            .assert_eq(&user_message("User rejected the request.", false));
    }

    #[test]
    fn user_message_empty() {
        expect!["Error: Unknown error occurred"].assert_eq(&user_message("", false));
    }

    #[test]
    fn user_message_logs_only() {
        expect!["Error: Mega-transaction failed. Check console for details."]
            .assert_eq(&user_message("", true));
        expect!["Error: custom program error: 0x1"]
            .assert_eq(&user_message("custom program error: 0x1", true));
    }

    #[test]
    fn user_message_size_overflow() {
        for raw in [
            "Transaction too large: 1300 bytes > 1232 bytes",
            "encoding overruns Uint8Array: exceeds maximum",
        ] {
            for has_logs in [false, true] {
                expect!["Error: Transaction too large. This happens rarely - please try again or contact support."]
                    .assert_eq(&user_message(raw, has_logs));
            }
        }
    }

    #[test]
    fn too_large_display_triggers_fallback() {
        let e = CreatePoolErr::<TxErr>::Tx(TxErr::TooLarge { len: 1300 });
        expect!["Transaction too large: 1300 bytes > 1232 bytes"].assert_eq(&e.to_string());
        assert_eq!(
            user_message(&e.to_string(), false),
            format!("Error: {TX_TOO_LARGE_FALLBACK_MSG}")
        );
    }

    #[test]
    fn logs_only_from_cluster_and_wallet() {
        let logs = vec!["Program log: AnchorError".to_owned()];
        let with = || LogsErr(Some(logs.clone()));
        assert_eq!(
            CreatePoolErr::Cluster(with()).logs(),
            Some(logs.as_slice())
        );
        assert_eq!(CreatePoolErr::Wallet(with()).logs(), Some(logs.as_slice()));
        assert_eq!(CreatePoolErr::<LogsErr>::NoValidPda.logs(), None);
        assert_eq!(CreatePoolErr::Cluster(LogsErr(None)).logs(), None);
    }
}
