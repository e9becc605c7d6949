use crate::domain::{Auction, AuctionId, AuctionSource, Errors, Payment, PaymentSink};

/// Auctions kept in insertion order; closed ones are handed out in that order.
#[derive(Debug, Default, Clone)]
pub struct InMemoryAuctions {
    auctions: Vec<Auction>,
}

impl InMemoryAuctions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_auctions(auctions: Vec<Auction>) -> Result<Self, Errors> {
        let mut repository = Self::new();
        for auction in auctions {
            repository.add(auction)?;
        }
        Ok(repository)
    }

    pub fn add(&mut self, auction: Auction) -> Result<(), Errors> {
        if self.get(auction.auction_id).is_some() {
            return Err(Errors::AuctionAlreadyExists(auction.auction_id));
        }
        self.auctions.push(auction);
        Ok(())
    }

    pub fn get(&self, auction_id: AuctionId) -> Option<&Auction> {
        self.auctions.iter().find(|a| a.auction_id == auction_id)
    }

    pub fn all(&self) -> &[Auction] {
        &self.auctions
    }
}

impl AuctionSource for InMemoryAuctions {
    fn closed_auctions(&self) -> Result<Vec<Auction>, Errors> {
        Ok(self.auctions.iter().filter(|a| a.closed).cloned().collect())
    }
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryPayments {
    payments: Vec<Payment>,
}

impl InMemoryPayments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_payments(payments: Vec<Payment>) -> Self {
        InMemoryPayments { payments }
    }

    pub fn all(&self) -> &[Payment] {
        &self.payments
    }

    pub fn len(&self) -> usize {
        self.payments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payments.is_empty()
    }
}

impl PaymentSink for InMemoryPayments {
    fn save(&mut self, payment: Payment) -> Result<(), Errors> {
        self.payments.push(payment);
        Ok(())
    }
}
