/// Errors raised while assembling the inputs of an analysis.
///
/// Everything is validated eagerly at construction of the offending value.
/// The counting engine itself is pure arithmetic and has no failure modes of
/// its own, so a value that constructs successfully always analyzes.
#[derive(Debug, Clone)]
pub enum Error {
    InvalidHand(String),
    InvalidPayoutTable(String),
    InvalidHeldPartition(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidHand(s) => write!(f, "invalid hand: {}", s),
            Self::InvalidPayoutTable(s) => write!(f, "invalid payout table: {}", s),
            Self::InvalidHeldPartition(s) => write!(f, "invalid held partition: {}", s),
        }
    }
}

impl std::error::Error for Error {}
