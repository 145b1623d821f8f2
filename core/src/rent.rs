//! Default rent parameters, for hosts that do not query the cluster for
//! `getMinimumBalanceForRentExemption`

pub const ACCOUNT_STORAGE_OVERHEAD: u64 = 128;

pub const DEFAULT_LAMPORTS_PER_BYTE_YEAR: u64 = 3480;

pub const DEFAULT_EXEMPTION_THRESHOLD_YEARS: u64 = 2;

#[inline]
pub const fn default_min_balance(data_len: usize) -> u64 {
    // as-safety: account data len is at most 10MiB
    (ACCOUNT_STORAGE_OVERHEAD + data_len as u64)
        * DEFAULT_LAMPORTS_PER_BYTE_YEAR
        * DEFAULT_EXEMPTION_THRESHOLD_YEARS
}
