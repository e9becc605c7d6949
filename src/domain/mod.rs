// src/domain/mod.rs
pub mod auctions;
pub mod bids;
pub mod business_days;
pub mod core;
pub mod evaluator;
pub mod payment_generator;
pub mod payments;
pub mod ports;

pub use self::auctions::*;
pub use self::bids::*;
pub use self::business_days::*;
pub use self::core::*;
pub use self::evaluator::*;
pub use self::payment_generator::*;
pub use self::payments::*;
pub use self::ports::*;
