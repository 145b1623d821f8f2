use core::{error::Error, fmt::Display};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AmountErr {
    /// Input is not a plain decimal number
    Malformed,

    /// Input is zero, negative, or rounds down to 0 lamports
    NotPositive,

    /// Input does not fit in a u64 of lamports
    Overflow,
}

impl Display for AmountErr {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::Malformed => "amount is not a decimal number",
            Self::NotPositive => "amount must be greater than 0",
            Self::Overflow => "amount too large",
        })
    }
}

impl Error for AmountErr {}
