//! Multiverse species as non-fungible tokens

mod token;
mod ledger;

pub use token::SpeciesToken;
pub use ledger::{LedgerStats, SpeciesLedger};
