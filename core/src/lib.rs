#![cfg_attr(not(test), no_std)]

mod internal_utils;

pub mod amount;
pub mod err;
pub mod instructions;
pub mod keys;
pub mod pda;
pub mod rent;

keys::id_str!(ID_STR, ID, "BzUWmCR33ez1LvDfF2K9USe3Ra1Ws47WQ2ETCzebBkS6");
