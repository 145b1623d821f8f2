use core::str::FromStr;

use crate::err::AmountErr;

pub const SOL_DECIMALS: usize = 9;

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// A pool's SOL target, in lamports. Always > 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TargetAmount(u64);

impl TargetAmount {
    #[inline]
    pub const fn new(lamports: u64) -> Result<Self, AmountErr> {
        match lamports {
            0 => Err(AmountErr::NotPositive),
            l => Ok(Self(l)),
        }
    }

    #[inline]
    pub const fn lamports(&self) -> u64 {
        self.0
    }

    /// Parses a decimal amount of SOL, e.g. `"1.5"`, `".25"`, `"3."`.
    ///
    /// Surrounding whitespace and a leading `+` are accepted.
    /// Digits past the 9th decimal place are truncated.
    /// Exponent notation, `inf` and `NaN` are rejected.
    pub fn parse_sol(s: &str) -> Result<Self, AmountErr> {
        let s = s.trim();
        let (negative, s) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        let (int, frac) = s.split_once('.').unwrap_or((s, ""));
        if int.is_empty() && frac.is_empty() {
            return Err(AmountErr::Malformed);
        }
        if !int.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(AmountErr::Malformed);
        }

        let int_lamports = int
            .bytes()
            .try_fold(0u64, |acc, b| {
                acc.checked_mul(10)?.checked_add(u64::from(b - b'0'))
            })
            .and_then(|sol| sol.checked_mul(LAMPORTS_PER_SOL))
            .ok_or(AmountErr::Overflow)?;

        // pad/truncate to exactly SOL_DECIMALS digits
        let frac_lamports = frac
            .bytes()
            .chain(core::iter::repeat(b'0'))
            .take(SOL_DECIMALS)
            .fold(0u64, |acc, b| acc * 10 + u64::from(b - b'0'));

        let lamports = int_lamports
            .checked_add(frac_lamports)
            .ok_or(AmountErr::Overflow)?;

        if negative {
            return Err(AmountErr::NotPositive);
        }
        Self::new(lamports)
    }
}

impl FromStr for TargetAmount {
    type Err = AmountErr;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_sol(s)
    }
}
