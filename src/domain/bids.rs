// src/domain/bids.rs
use serde::{Deserialize, Serialize};
use crate::money::AmountValue;
use super::core::User;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bid {
    pub bidder: User,
    pub amount: AmountValue,
}

impl Bid {
    pub fn new(bidder: User, amount: AmountValue) -> Self {
        Bid { bidder, amount }
    }
}
