use serde::{Deserialize, Serialize};
use tsify_next::Tsify;

use crate::interface::B58PK;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct Instruction {
    #[tsify(type = "Uint8Array")] // Instead of number[]
    pub data: Box<[u8]>,
    pub accounts: Box<[AccountMeta]>,
    pub program_address: B58PK,
}

impl Instruction {
    pub(crate) fn from_std(
        bcpool_std::instruction::Instruction {
            program_id,
            accounts,
            data,
        }: bcpool_std::instruction::Instruction,
    ) -> Self {
        Self {
            data: data.into_boxed_slice(),
            accounts: accounts
                .into_iter()
                .map(|m| AccountMeta {
                    address: B58PK::new(m.pubkey),
                    role: m.role.to_u8(),
                })
                .collect(),
            program_address: B58PK::new(program_id),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct AccountMeta {
    pub address: B58PK,

    /// Represents the role of an account in a transaction:
    /// - Readonly: 0
    /// - Writable: 1
    /// - ReadonlySigner: 2
    /// - WritableSigner: 3
    #[tsify(type = "0 | 1 | 2 | 3")]
    pub role: u8,
}
