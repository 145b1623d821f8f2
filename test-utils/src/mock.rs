use std::{cell::RefCell, collections::HashSet, error::Error, fmt::Display};

use bcpool_std::{
    config::{Commitment, SendOpts},
    err::TxLogs,
    rent::default_min_balance,
    submit::{Cluster, Wallet},
};
use solana_keypair::Keypair;
use solana_signature::Signature;
use solana_signer::Signer;
use solana_transaction::Transaction;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MockErr {
    pub msg: String,

    /// Program logs of a failed transaction
    pub logs: Option<Vec<String>>,
}

impl MockErr {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            logs: None,
        }
    }

    pub fn with_logs(self, logs: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            logs: Some(logs.into_iter().map(Into::into).collect()),
            ..self
        }
    }
}

impl Display for MockErr {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.msg)
    }
}

impl Error for MockErr {}

impl TxLogs for MockErr {
    #[inline]
    fn logs(&self) -> Option<&[String]> {
        self.logs.as_deref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MockCall {
    GetMultipleAccounts,
    GetMinimumBalance,
    GetLatestBlockhash,
    SendTransaction,
    ConfirmTransaction,
}

/// An in-memory cluster that records every call made to it
#[derive(Debug, Default)]
pub struct MockCluster {
    pub existing: HashSet<[u8; 32]>,
    pub blockhash: [u8; 32],

    /// Calls to this method return the contained error
    pub fail_on: Option<(MockCall, MockErr)>,

    pub calls: RefCell<Vec<MockCall>>,

    /// Wire bytes of every transaction sent
    pub sent: RefCell<Vec<Vec<u8>>>,

    /// Args to every `send_transaction` call
    pub send_opts: RefCell<Vec<SendOpts>>,

    /// Args to every `confirm_transaction` call
    pub confirms: RefCell<Vec<(Signature, Commitment)>>,
}

impl MockCluster {
    pub fn with_existing(existing: impl IntoIterator<Item = [u8; 32]>) -> Self {
        Self {
            existing: existing.into_iter().collect(),
            blockhash: [0xbb; 32],
            ..Default::default()
        }
    }

    pub fn failing_on(self, call: MockCall, err: MockErr) -> Self {
        Self {
            fail_on: Some((call, err)),
            ..self
        }
    }

    fn call(&self, call: MockCall) -> Result<(), MockErr> {
        self.calls.borrow_mut().push(call);
        match &self.fail_on {
            Some((c, err)) if *c == call => Err(err.clone()),
            _ => Ok(()),
        }
    }
}

impl Cluster for MockCluster {
    type Error = MockErr;

    fn get_multiple_accounts_exist(&self, pks: &[[u8; 32]]) -> Result<Vec<bool>, Self::Error> {
        self.call(MockCall::GetMultipleAccounts)?;
        Ok(pks.iter().map(|pk| self.existing.contains(pk)).collect())
    }

    fn get_minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> Result<u64, Self::Error> {
        self.call(MockCall::GetMinimumBalance)?;
        Ok(default_min_balance(data_len))
    }

    fn get_latest_blockhash(&self, _commitment: Commitment) -> Result<[u8; 32], Self::Error> {
        self.call(MockCall::GetLatestBlockhash)?;
        Ok(self.blockhash)
    }

    fn send_transaction(&self, wire: &[u8], opts: &SendOpts) -> Result<Signature, Self::Error> {
        self.call(MockCall::SendTransaction)?;
        self.sent.borrow_mut().push(wire.to_vec());
        self.send_opts.borrow_mut().push(*opts);
        let tx: Transaction =
            bincode::deserialize(wire).map_err(|e| MockErr::new(e.to_string()))?;
        tx.signatures
            .first()
            .copied()
            .ok_or_else(|| MockErr::new("transaction has no signatures"))
    }

    fn confirm_transaction(
        &self,
        sig: &Signature,
        commitment: Commitment,
    ) -> Result<(), Self::Error> {
        self.call(MockCall::ConfirmTransaction)?;
        self.confirms.borrow_mut().push((*sig, commitment));
        Ok(())
    }
}

/// A wallet that signs with a fixed key pair, or is disconnected if `None`
#[derive(Debug)]
pub struct MockWallet {
    pub keypair: Option<Keypair>,

    /// `Some(msg)` to reject signing requests with `msg`
    pub reject: Option<String>,
}

impl MockWallet {
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            keypair: Some(Keypair::new_from_array(seed)),
            reject: None,
        }
    }

    pub const fn disconnected() -> Self {
        Self {
            keypair: None,
            reject: None,
        }
    }
}

impl Wallet for MockWallet {
    type Error = MockErr;

    fn pubkey(&self) -> Option<[u8; 32]> {
        self.keypair.as_ref().map(|kp| kp.pubkey().to_bytes())
    }

    fn sign_transaction(&self, mut tx: Transaction) -> Result<Transaction, Self::Error> {
        if let Some(msg) = &self.reject {
            return Err(MockErr::new(msg.clone()));
        }
        let kp = self
            .keypair
            .as_ref()
            .ok_or_else(|| MockErr::new("wallet not connected"))?;
        let blockhash = tx.message.recent_blockhash;
        tx.try_partial_sign(&[kp], blockhash)
            .map_err(|e| MockErr::new(e.to_string()))?;
        Ok(tx)
    }
}
