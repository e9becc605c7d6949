// src/domain/ports.rs
use chrono::{Local, NaiveDate};
use std::sync::Arc;
use super::auctions::Auction;
use super::core::Errors;
use super::payments::Payment;

pub trait AuctionSource {
    /// Closed auctions in the order they should be settled.
    fn closed_auctions(&self) -> Result<Vec<Auction>, Errors>;
}

pub trait PaymentSink {
    fn save(&mut self, payment: Payment) -> Result<(), Errors>;
}

pub trait Clock {
    fn today(&self) -> NaiveDate;
}

impl<A: AuctionSource + ?Sized> AuctionSource for &A {
    fn closed_auctions(&self) -> Result<Vec<Auction>, Errors> {
        (**self).closed_auctions()
    }
}

impl<P: PaymentSink + ?Sized> PaymentSink for &mut P {
    fn save(&mut self, payment: Payment) -> Result<(), Errors> {
        (**self).save(payment)
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
