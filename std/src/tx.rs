//! Legacy transaction compile, mint signing and wire serialization.

use solana_hash::Hash;
use solana_instruction::AccountMeta as SolAccountMeta;
use solana_keypair::Keypair;
use solana_message::Message;
use solana_pubkey::Pubkey;
use solana_signer::{Signer, SignerError};
use solana_transaction::Transaction;

use crate::{
    err::TxErr,
    instruction::{AccountMeta, Instruction},
};

/// Max size of a serialized transaction
pub const PACKET_DATA_SIZE: usize = 1232;

pub fn to_sol_ix(
    Instruction {
        program_id,
        accounts,
        data,
    }: &Instruction,
) -> solana_instruction::Instruction {
    solana_instruction::Instruction {
        program_id: Pubkey::new_from_array(*program_id),
        accounts: accounts
            .iter()
            .map(|AccountMeta { pubkey, role }| SolAccountMeta {
                pubkey: Pubkey::new_from_array(*pubkey),
                is_signer: role.is_signer(),
                is_writable: role.is_writable(),
            })
            .collect(),
        data: data.clone(),
    }
}

/// Fee payer first, then writable signers, readonly signers,
/// writable non-signers, readonly non-signers
pub fn compile_message(
    ixs: &[Instruction],
    payer: &[u8; 32],
    recent_blockhash: [u8; 32],
) -> Message {
    let ixs: Vec<_> = ixs.iter().map(to_sol_ix).collect();
    Message::new_with_blockhash(
        &ixs,
        Some(&Pubkey::new_from_array(*payer)),
        &Hash::new_from_array(recent_blockhash),
    )
}

/// Compiles `ixs` and signs with `mint` only, leaving the payer's
/// signature slot zeroed for the wallet
pub fn mint_signed_tx(
    ixs: &[Instruction],
    payer: &[u8; 32],
    mint: &Keypair,
    recent_blockhash: [u8; 32],
) -> Result<Transaction, TxErr> {
    let mut tx = Transaction::new_unsigned(compile_message(ixs, payer, recent_blockhash));
    tx.try_partial_sign(&[mint], Hash::new_from_array(recent_blockhash))
        .map_err(|e| match e {
            SignerError::KeypairPubkeyMismatch => TxErr::NotSigner {
                pk: mint.pubkey().to_bytes(),
            },
            _ => TxErr::Signing,
        })?;
    Ok(tx)
}

/// Errors if the serialized transaction does not fit in a single packet
pub fn wire_bytes(tx: &Transaction) -> Result<Vec<u8>, TxErr> {
    let res = bincode::serialize(tx).map_err(|_| TxErr::Serialize)?;
    match res.len() {
        len if len > PACKET_DATA_SIZE => Err(TxErr::TooLarge { len }),
        _ => Ok(res),
    }
}

#[cfg(test)]
mod tests {
    use solana_signature::Signature;

    use crate::instruction::Role;

    use super::*;

    const PAYER: [u8; 32] = [9; 32];

    fn ix(program_id: u8, accs: &[([u8; 32], Role)]) -> Instruction {
        Instruction {
            program_id: [program_id; 32],
            accounts: accs
                .iter()
                .map(|(k, r)| AccountMeta::new(*k, *r))
                .collect(),
            data: vec![program_id],
        }
    }

    #[test]
    fn payer_first_and_signer_count() {
        let msg = compile_message(
            &[
                ix(1, &[([5; 32], Role::Readonly), ([4; 32], Role::ReadonlySigner)]),
                ix(2, &[([6; 32], Role::WritableSigner), (PAYER, Role::Readonly)]),
            ],
            &PAYER,
            [0; 32],
        );
        assert_eq!(msg.account_keys[0], Pubkey::new_from_array(PAYER));
        assert_eq!(msg.header.num_required_signatures, 3);
        assert_eq!(msg.header.num_readonly_signed_accounts, 1);
        assert!(msg.is_signer(0));
    }

    #[test]
    fn mint_signs_only_own_slot() {
        let mint = Keypair::new_from_array([7; 32]);
        let tx = mint_signed_tx(
            &[ix(1, &[(mint.pubkey().to_bytes(), Role::WritableSigner)])],
            &PAYER,
            &mint,
            [3; 32],
        )
        .unwrap();
        assert_eq!(tx.signatures.len(), 2);
        assert_eq!(tx.signatures[0], Signature::default());
        assert_eq!(tx.verify_with_results(), [false, true]);
    }

    #[test]
    fn mint_not_in_tx_errs() {
        let mint = Keypair::new_from_array([1; 32]);
        assert_eq!(
            mint_signed_tx(&[ix(1, &[])], &PAYER, &mint, [0; 32]).err(),
            Some(TxErr::NotSigner {
                pk: mint.pubkey().to_bytes()
            })
        );
    }

    #[test]
    fn oversized_tx_rejected() {
        let big = Instruction {
            program_id: [1; 32],
            accounts: vec![],
            data: vec![0; PACKET_DATA_SIZE],
        };
        let tx = Transaction::new_unsigned(compile_message(&[big], &PAYER, [0; 32]));
        let len = bincode::serialize(&tx).unwrap().len();
        assert!(len > PACKET_DATA_SIZE);
        assert_eq!(wire_bytes(&tx), Err(TxErr::TooLarge { len }));
    }
}
