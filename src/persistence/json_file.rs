use std::fs::{File, OpenOptions};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};
use serde_json::{from_reader, to_string_pretty};
use crate::domain::{Auction, AuctionSource, Errors, Payment, PaymentSink};
use super::in_memory::InMemoryPayments;

pub fn read_auctions<P: AsRef<Path>>(path: P) -> Result<Vec<Auction>, String> {
    let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
    let reader = BufReader::new(file);

    from_reader(reader).map_err(|e| format!("Failed to parse auctions: {}", e))
}

pub fn read_payments<P: AsRef<Path>>(path: P) -> Result<Vec<Payment>, String> {
    let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
    let reader = BufReader::new(file);

    from_reader(reader).map_err(|e| format!("Failed to parse payments: {}", e))
}

pub fn write_payments<P: AsRef<Path>>(path: P, payments: &[Payment]) -> Result<(), String> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| format!("Failed to open file for writing: {}", e))?;

    let json = to_string_pretty(payments).map_err(|e| format!("Failed to serialize payments: {}", e))?;

    file.write_all(json.as_bytes())
        .map_err(|e| format!("Failed to write to file: {}", e))?;

    Ok(())
}

/// Reads the auctions file on every request, so edits between runs are seen.
#[derive(Debug, Clone)]
pub struct JsonFileAuctions {
    path: PathBuf,
}

impl JsonFileAuctions {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        JsonFileAuctions { path: path.into() }
    }
}

impl AuctionSource for JsonFileAuctions {
    fn closed_auctions(&self) -> Result<Vec<Auction>, Errors> {
        let auctions = read_auctions(&self.path).map_err(Errors::AuctionSourceUnavailable)?;
        Ok(auctions.into_iter().filter(|a| a.closed).collect())
    }
}

/// Keeps a payments file in step with an in-memory store. Each payment is
/// written to the file before it is committed in memory, so a failed write
/// leaves both unchanged.
pub struct JsonFilePayments<'a> {
    payments: &'a mut InMemoryPayments,
    path: &'a Path,
}

impl<'a> JsonFilePayments<'a> {
    pub fn new(payments: &'a mut InMemoryPayments, path: &'a Path) -> Self {
        JsonFilePayments { payments, path }
    }
}

impl PaymentSink for JsonFilePayments<'_> {
    fn save(&mut self, payment: Payment) -> Result<(), Errors> {
        let mut all = self.payments.all().to_vec();
        all.push(payment.clone());
        write_payments(self.path, &all)
            .map_err(|e| Errors::PaymentNotSaved(payment.auction_id, e))?;
        self.payments.save(payment)
    }
}
