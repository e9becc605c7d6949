// src/domain/evaluator.rs
use crate::money::AmountValue;
use super::bids::Bid;

/// Tracks the highest and lowest bid amounts seen so far.
///
/// Before any bid has been evaluated the highest amount is negative infinity
/// and the lowest is positive infinity. Evaluating an empty list of bids leaves
/// those sentinels in place, so a payment built from a bid-less auction carries
/// a negative infinite amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluator {
    highest: AmountValue,
    lowest: AmountValue,
    bids_seen: usize,
}

impl Default for Evaluator {
    fn default() -> Self {
        Evaluator {
            highest: AmountValue::NEG_INFINITY,
            lowest: AmountValue::INFINITY,
            bids_seen: 0,
        }
    }
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn evaluate(&mut self, bids: &[Bid]) {
        for bid in bids {
            if bid.amount > self.highest {
                self.highest = bid.amount;
            }
            if bid.amount < self.lowest {
                self.lowest = bid.amount;
            }
        }
        self.bids_seen += bids.len();
    }

    pub fn highest(&self) -> AmountValue {
        self.highest
    }

    pub fn lowest(&self) -> AmountValue {
        self.lowest
    }

    pub fn has_evaluated_bids(&self) -> bool {
        self.bids_seen > 0
    }
}
