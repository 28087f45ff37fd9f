use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreasuryError {
    #[error("treasury spend expiry {0} does not encode a valid voting window")]
    InvalidTSpendExpiry(u32),
}

pub type TreasuryResult<T> = std::result::Result<T, TreasuryError>;
