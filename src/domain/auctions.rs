// src/domain/auctions.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::money::Currency;
use super::bids::Bid;
use super::core::AuctionId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Auction {
    #[serde(rename = "id")]
    pub auction_id: AuctionId,
    pub title: String,
    #[serde(rename = "closesOn")]
    pub closes_on: NaiveDate,
    pub currency: Currency,
    /// Insertion order is the order the bids were placed in.
    #[serde(default)]
    pub bids: Vec<Bid>,
    #[serde(default)]
    pub closed: bool,
}

impl Auction {
    pub fn new(auction_id: AuctionId, title: &str, closes_on: NaiveDate, currency: Currency) -> Self {
        Auction {
            auction_id,
            title: title.to_string(),
            closes_on,
            currency,
            bids: Vec::new(),
            closed: false,
        }
    }

    pub fn with_bid(mut self, bid: Bid) -> Self {
        self.bids.push(bid);
        self
    }

    pub fn close(mut self) -> Self {
        self.closed = true;
        self
    }
}
