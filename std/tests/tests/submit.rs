use bcpool_std::{
    config::{Commitment, SendOpts},
    create_pool,
    create_pool::VaultKind,
    err::{
        CreatePoolErr, INVALID_AMOUNT_MSG, LOGS_ONLY_MSG, TX_TOO_LARGE_FALLBACK_MSG,
        WALLET_NOT_CONNECTED_MSG,
    },
    status::StatusKind,
    submit::{Stage, SUCCESS_MSG},
    Keypair, PoolCreatorConfig, PoolCreatorForm, Transaction,
};
use bcpool_test_utils::{MockCall, MockCluster, MockErr, MockWallet};
use proptest::prelude::*;
use solana_pubkey::Pubkey;
use solana_signer::Signer;

use crate::common::{addrs_for_mint_seed, wallet, wallet_pk, MINT_SEED};

const ALL_CALLS: [MockCall; 5] = [
    MockCall::GetMultipleAccounts,
    MockCall::GetMinimumBalance,
    MockCall::GetLatestBlockhash,
    MockCall::SendTransaction,
    MockCall::ConfirmTransaction,
];

fn form_with_amount(amt: &str) -> PoolCreatorForm {
    let mut f = PoolCreatorForm::new();
    f.set_amount(amt);
    f
}

#[test]
fn fresh_pool_full_flow() {
    let cfg = PoolCreatorConfig::DEFAULT;
    let cluster = MockCluster::with_existing([]);
    let wallet = wallet();
    let mut form = form_with_amount("1.5");

    let receipt = form
        .submit(&wallet, &cluster, &cfg, MINT_SEED, || 1_000)
        .unwrap()
        .unwrap();

    assert_eq!(receipt.ix_count, 8);
    assert_eq!(receipt.addrs, addrs_for_mint_seed(&cfg, MINT_SEED));
    assert_eq!(
        receipt
            .created_vaults
            .iter()
            .map(|v| v.kind)
            .collect::<Vec<_>>(),
        [VaultKind::Quote, VaultKind::Meme, VaultKind::FeeQuote]
    );
    assert_eq!(*cluster.calls.borrow(), ALL_CALLS);
    assert_eq!(*cluster.send_opts.borrow(), [SendOpts::DEFAULT]);
    assert_eq!(
        *cluster.confirms.borrow(),
        [(receipt.signature, Commitment::Confirmed)]
    );

    assert!(!form.is_creating());
    assert_eq!(form.amount(), "");
    assert_eq!(form.status().kind, StatusKind::Success);
    assert_eq!(form.status().message, SUCCESS_MSG);
    assert_eq!(form.status_board().clear_at(), Some(6_000));
}

#[test]
fn sent_tx_fully_signed() {
    let cfg = PoolCreatorConfig::DEFAULT;
    let cluster = MockCluster::with_existing([]);
    let wallet = wallet();
    let mint = Keypair::new_from_array(MINT_SEED);

    let receipt = create_pool(
        &cluster,
        &wallet,
        &cfg,
        "2".parse().unwrap(),
        &mint,
        |_| {},
    )
    .unwrap();

    let sent = cluster.sent.borrow();
    let tx: Transaction = bincode::deserialize(&sent[0]).unwrap();
    assert_eq!(
        tx.message.signer_keys(),
        [
            &Pubkey::new_from_array(wallet_pk()),
            &mint.pubkey()
        ]
    );
    assert_eq!(tx.signatures[0], receipt.signature);
    assert!(tx.verify().is_ok());
}

#[test]
fn receipt_reports_addrs_and_created_vaults() {
    let cfg = PoolCreatorConfig::DEFAULT;
    let addrs = addrs_for_mint_seed(&cfg, MINT_SEED);
    let cluster = MockCluster::with_existing([addrs.quote_vault]);

    let receipt = create_pool(
        &cluster,
        &wallet(),
        &cfg,
        "1".parse().unwrap(),
        &Keypair::new_from_array(MINT_SEED),
        |_| {},
    )
    .unwrap();

    let report = receipt.to_string();
    let lines: Vec<_> = report.lines().collect();
    assert_eq!(
        lines[0],
        format!("Transaction signature: {}", receipt.signature)
    );
    assert_eq!(lines[1..8].join("\n"), addrs.to_string().trim_end());
    assert_eq!(
        lines[8..10],
        [
            format!("Created meme vault: {}", Pubkey::new_from_array(addrs.meme_vault)),
            format!("Created fee vault: {}", Pubkey::new_from_array(addrs.fee_quote_vault)),
        ]
    );
    assert_eq!(lines[10], "Total instructions in transaction: 7");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn only_missing_vaults_created(existing in any::<[bool; 3]>()) {
        let cfg = PoolCreatorConfig::DEFAULT;
        let addrs = addrs_for_mint_seed(&cfg, MINT_SEED);
        let cluster = MockCluster::with_existing(
            addrs
                .accounts_to_check()
                .into_iter()
                .zip(existing)
                .filter_map(|(pk, e)| e.then_some(pk)),
        );
        let receipt = create_pool(
            &cluster,
            &wallet(),
            &cfg,
            "0.5".parse().unwrap(),
            &Keypair::new_from_array(MINT_SEED),
            |_| {},
        )
        .unwrap();
        let n_missing = existing.iter().filter(|e| !**e).count();
        prop_assert_eq!(receipt.ix_count, 5 + n_missing);
    }
}

#[test]
fn disconnected_wallet_no_network() {
    let cluster = MockCluster::with_existing([]);
    let mut form = form_with_amount("1");

    let res = form.submit(
        &MockWallet::disconnected(),
        &cluster,
        &PoolCreatorConfig::DEFAULT,
        MINT_SEED,
        || 0,
    );

    assert!(res.is_none());
    assert!(cluster.calls.borrow().is_empty());
    assert_eq!(form.status().message, WALLET_NOT_CONNECTED_MSG);
    assert_eq!(form.status().kind, StatusKind::Error);
}

#[test]
fn driver_disconnected_wallet_errs() {
    let cluster = MockCluster::with_existing([]);
    let res = create_pool(
        &cluster,
        &MockWallet::disconnected(),
        &PoolCreatorConfig::DEFAULT,
        "1".parse().unwrap(),
        &Keypair::new_from_array(MINT_SEED),
        |_| {},
    );
    assert_eq!(res, Err(CreatePoolErr::WalletNotConnected));
    assert!(cluster.calls.borrow().is_empty());
}

#[test]
fn invalid_amount_no_network() {
    for amt in ["0", "-3", "abc", "1e9"] {
        let cluster = MockCluster::with_existing([]);
        let mut form = form_with_amount(amt);
        let res = form.submit(
            &wallet(),
            &cluster,
            &PoolCreatorConfig::DEFAULT,
            MINT_SEED,
            || 0,
        );
        assert!(res.is_none(), "{amt}");
        assert!(cluster.calls.borrow().is_empty(), "{amt}");
        assert_eq!(form.status().message, INVALID_AMOUNT_MSG, "{amt}");
    }
}

#[test]
fn cluster_failure_aborts_and_reports() {
    for (i, fail_call) in ALL_CALLS.into_iter().enumerate() {
        let cluster = MockCluster::with_existing([])
            .failing_on(fail_call, MockErr::new("blockhash not found"));
        let mut form = form_with_amount("1");

        let res = form
            .submit(
                &wallet(),
                &cluster,
                &PoolCreatorConfig::DEFAULT,
                MINT_SEED,
                || 0,
            )
            .unwrap();

        assert_eq!(
            res,
            Err(CreatePoolErr::Cluster(MockErr::new("blockhash not found")))
        );
        assert_eq!(*cluster.calls.borrow(), ALL_CALLS[..=i]);
        assert!(!form.is_creating());
        assert_eq!(form.amount(), "1");
        assert_eq!(form.status().message, "Error: blockhash not found");
        assert_eq!(form.status().kind, StatusKind::Error);
    }
}

#[test]
fn wallet_rejection_reported() {
    let cluster = MockCluster::with_existing([]);
    let mut wallet = wallet();
    wallet.reject = Some("User rejected the request.".to_owned());
    let mut form = form_with_amount("1");

    let res = form
        .submit(
            &wallet,
            &cluster,
            &PoolCreatorConfig::DEFAULT,
            MINT_SEED,
            || 0,
        )
        .unwrap();

    assert!(matches!(res, Err(CreatePoolErr::Wallet(_))));
    assert!(!cluster.calls.borrow().contains(&MockCall::SendTransaction));
    assert_eq!(form.status().message, "Error: User rejected the request.");
}

#[test]
fn progress_shown_in_order() {
    let cluster = MockCluster::with_existing([]);
    let mut stages = vec![];
    create_pool(
        &cluster,
        &wallet(),
        &PoolCreatorConfig::DEFAULT,
        "1".parse().unwrap(),
        &Keypair::new_from_array(MINT_SEED),
        |s| stages.push(s),
    )
    .unwrap();
    assert_eq!(stages, [Stage::Preparing, Stage::Sending]);
}

#[test]
fn rpc_size_rejection_shows_fallback() {
    let cluster = MockCluster::with_existing([]).failing_on(
        MockCall::SendTransaction,
        MockErr::new("Transaction size 1300 exceeds maximum 1232"),
    );
    let mut form = form_with_amount("1");

    let res = form
        .submit(
            &wallet(),
            &cluster,
            &PoolCreatorConfig::DEFAULT,
            MINT_SEED,
            || 0,
        )
        .unwrap();

    assert!(matches!(res, Err(CreatePoolErr::Cluster(_))));
    assert!(!form.is_creating());
    assert_eq!(form.amount(), "1");
    assert_eq!(
        form.status().message,
        format!("Error: {TX_TOO_LARGE_FALLBACK_MSG}")
    );
    assert_eq!(form.status().kind, StatusKind::Error);
}

#[test]
fn logs_without_message_shows_logs_fallback() {
    let cluster = MockCluster::with_existing([]).failing_on(
        MockCall::ConfirmTransaction,
        MockErr::new("").with_logs(["Program log: Error: insufficient funds"]),
    );
    let mut form = form_with_amount("1");

    let res = form
        .submit(
            &wallet(),
            &cluster,
            &PoolCreatorConfig::DEFAULT,
            MINT_SEED,
            || 0,
        )
        .unwrap();

    let err = res.unwrap_err();
    assert_eq!(
        err.logs(),
        Some(["Program log: Error: insufficient funds".to_owned()].as_slice())
    );
    assert_eq!(form.status().message, format!("Error: {LOGS_ONLY_MSG}"));
}
