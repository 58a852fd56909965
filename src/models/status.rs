//! Stock status token.

use std::fmt;

/// The two-valued stock state persisted between runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    InStock,
    OutOfStock,
}

impl StockStatus {
    /// The exact token written to the status file.
    ///
    /// Comparison across runs is plain string equality, so this must
    /// round-trip through storage byte-for-byte.
    pub fn as_token(&self) -> &'static str {
        match self {
            StockStatus::InStock => "IN STOCK",
            StockStatus::OutOfStock => "OUT OF STOCK",
        }
    }

    /// Parse a stored token.
    ///
    /// Leading/trailing whitespace is ignored. An empty or unrecognized
    /// token means "no prior status", not an error.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim() {
            "IN STOCK" => Some(StockStatus::InStock),
            "OUT OF STOCK" => Some(StockStatus::OutOfStock),
            _ => None,
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}
