macro_rules! id_str {
    ($ID_STR:ident, $ID:ident, $pkstr:expr) => {
        pub const $ID_STR: &str = $pkstr;
        pub const $ID: [u8; 32] = const_crypto::bs58::decode_pubkey($ID_STR);
    };
}
pub(crate) use id_str;

id_str!(
    SYSTEM_PROGRAM_ID_STR,
    SYSTEM_PROGRAM_ID,
    "11111111111111111111111111111111"
);

id_str!(
    TOKEN_PROGRAM_ID_STR,
    TOKEN_PROGRAM_ID,
    "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA"
);

id_str!(
    ATOKEN_ID_STR,
    ATOKEN_ID,
    "ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL"
);

id_str!(
    SYSVAR_RENT_ID_STR,
    SYSVAR_RENT_ID,
    "SysvarRent111111111111111111111111111111111"
);

// wSOL
id_str!(
    QUOTE_MINT_ID_STR,
    QUOTE_MINT_ID,
    "So11111111111111111111111111111111111111112"
);

/// Owner of the fee quote vault
id_str!(
    FEE_RECIPIENT_ID_STR,
    FEE_RECIPIENT_ID,
    "7Z4GK4ouyzkqDcZU44FNBAGLfQTKkp6fwCUuzQcTKtJW"
);
