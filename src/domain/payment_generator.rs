// src/domain/payment_generator.rs
use log::{debug, info, warn};
use crate::money::Amount;
use super::auctions::Auction;
use super::business_days::next_business_day;
use super::core::Errors;
use super::evaluator::Evaluator;
use super::payments::{DueDateBasis, Payment};
use super::ports::{AuctionSource, Clock, PaymentSink, SystemClock};

/// Settles closed auctions: one payment per closed auction, for the highest
/// bid, due on the next business day.
pub struct PaymentGenerator<A, P> {
    auctions: A,
    payments: P,
    clock: Box<dyn Clock>,
    basis: DueDateBasis,
    run_evaluator: Evaluator,
}

impl<A: AuctionSource, P: PaymentSink> PaymentGenerator<A, P> {
    pub fn new(auctions: A, payments: P) -> Self {
        PaymentGenerator {
            auctions,
            payments,
            clock: Box::new(SystemClock),
            basis: DueDateBasis::default(),
            run_evaluator: Evaluator::new(),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_due_date_basis(mut self, basis: DueDateBasis) -> Self {
        self.basis = basis;
        self
    }

    /// Every bid seen by this generator across all of its runs. Payment
    /// amounts never come from here; each auction is evaluated on its own.
    pub fn run_evaluator(&self) -> &Evaluator {
        &self.run_evaluator
    }

    pub fn payments(&self) -> &P {
        &self.payments
    }

    pub fn into_payments(self) -> P {
        self.payments
    }

    /// Runs once over the current closed auctions. The first collaborator
    /// fault stops the run; payments saved before it stay saved.
    pub fn generate(&mut self) -> Result<(), Errors> {
        let closed = self.auctions.closed_auctions()?;
        info!("Generating payments for {} closed auctions", closed.len());

        for auction in &closed {
            let payment = self.payment_for(auction);
            debug!(
                "Auction {} settles at {} due {}",
                auction.auction_id, payment.amount, payment.due_on
            );
            self.payments.save(payment)?;
        }

        info!("Saved {} payments", closed.len());
        Ok(())
    }

    fn payment_for(&mut self, auction: &Auction) -> Payment {
        let mut evaluator = Evaluator::new();
        evaluator.evaluate(&auction.bids);
        self.run_evaluator.evaluate(&auction.bids);

        if !evaluator.has_evaluated_bids() {
            warn!("Auction {} closed without bids", auction.auction_id);
        }

        let base = match self.basis {
            DueDateBasis::ClosingDate => auction.closes_on,
            DueDateBasis::Today => self.clock.today(),
        };

        Payment {
            auction_id: auction.auction_id,
            amount: Amount::new(auction.currency, evaluator.highest()),
            due_on: next_business_day(base),
        }
    }
}
