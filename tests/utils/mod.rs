use auction_payments::domain::{
    Auction, AuctionSource, Bid, Errors, Payment, PaymentSink, User,
};
use auction_payments::money::Currency;
use chrono::NaiveDate;
// See https://users.rust-lang.org/t/sharing-code-and-macros-in-tests-directory/3098/7

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn sample_closing_date() -> NaiveDate {
    date(2020, 6, 1) // Monday
}

pub fn buyer_1() -> User {
    User::BuyerOrSeller {
        user_id: "Buyer_1".to_string(),
        name: "Gabriel".to_string(),
    }
}

pub fn buyer_2() -> User {
    User::BuyerOrSeller {
        user_id: "Buyer_2".to_string(),
        name: "Maria".to_string(),
    }
}

pub fn support() -> User {
    User::Support {
        user_id: "Support_1".to_string(),
    }
}

pub fn closed_auction(id: i64, title: &str, closes_on: NaiveDate, amounts: &[f64]) -> Auction {
    let bidders = [buyer_1(), buyer_2()];
    amounts
        .iter()
        .enumerate()
        .fold(
            Auction::new(id, title, closes_on, Currency::BRL),
            |auction, (i, amount)| auction.with_bid(Bid::new(bidders[i % 2].clone(), *amount)),
        )
        .close()
}

pub fn quadro(amounts: &[f64]) -> Auction {
    closed_auction(1, "Quadro", sample_closing_date(), amounts)
}

pub fn carro(amounts: &[f64]) -> Auction {
    closed_auction(2, "Carro", sample_closing_date(), amounts)
}

/// An auction source that always fails.
pub struct FailingAuctions;

impl AuctionSource for FailingAuctions {
    fn closed_auctions(&self) -> Result<Vec<Auction>, Errors> {
        Err(Errors::AuctionSourceUnavailable("connection refused".to_string()))
    }
}

/// A payment sink that accepts `capacity` payments and fails on the next one.
pub struct FailingPayments {
    pub capacity: usize,
    pub saved: Vec<Payment>,
}

impl FailingPayments {
    pub fn new(capacity: usize) -> Self {
        FailingPayments { capacity, saved: Vec::new() }
    }
}

impl PaymentSink for FailingPayments {
    fn save(&mut self, payment: Payment) -> Result<(), Errors> {
        if self.saved.len() >= self.capacity {
            return Err(Errors::PaymentNotSaved(payment.auction_id, "disk full".to_string()));
        }
        self.saved.push(payment);
        Ok(())
    }
}
