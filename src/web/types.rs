use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::domain::{Auction, AuctionId, Bid, Clock, DueDateBasis};
use crate::money::Currency;
use crate::persistence::{InMemoryAuctions, InMemoryPayments};

#[derive(Clone)]
pub struct AppState {
    pub auctions: Arc<Mutex<InMemoryAuctions>>,
    pub payments: Arc<Mutex<InMemoryPayments>>,
    pub clock: Arc<dyn Clock + Send + Sync>,
    pub due_date_basis: DueDateBasis,
    pub payments_file: Option<PathBuf>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddAuctionRequest {
    pub id: AuctionId,
    pub title: String,
    #[serde(rename = "closesOn")]
    pub closes_on: NaiveDate,
    pub currency: Option<Currency>,
    #[serde(default)]
    pub bids: Vec<Bid>,
    #[serde(default)]
    pub closed: bool,
}

impl AddAuctionRequest {
    pub fn to_auction(&self) -> Auction {
        Auction {
            auction_id: self.id,
            title: self.title.clone(),
            closes_on: self.closes_on,
            currency: self.currency.unwrap_or(Currency::VAC),
            bids: self.bids.clone(),
            closed: self.closed,
        }
    }
}
