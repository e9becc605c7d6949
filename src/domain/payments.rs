// src/domain/payments.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::money::Amount;
use super::core::AuctionId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    #[serde(rename = "auctionId")]
    pub auction_id: AuctionId,
    pub amount: Amount,
    #[serde(rename = "dueOn")]
    pub due_on: NaiveDate,
}

/// Which date a payment's due date is derived from before it is moved off a
/// weekend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DueDateBasis {
    /// The auction's own closing date.
    #[default]
    ClosingDate,
    /// The day the run happens, as reported by the clock.
    Today,
}

impl fmt::Display for DueDateBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DueDateBasis::ClosingDate => write!(f, "closing-date"),
            DueDateBasis::Today => write!(f, "today"),
        }
    }
}

impl FromStr for DueDateBasis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "closing-date" => Ok(DueDateBasis::ClosingDate),
            "today" => Ok(DueDateBasis::Today),
            _ => Err(format!("Unknown due date basis: {}", s)),
        }
    }
}
