use crate::kernel::{Principal, Timestamp};
use serde::{Deserialize, Serialize};

/// Metadata of a discovered species, fixed at mint.
///
/// Ownership lives in a separate mapping on the ledger; the `creator`
/// here never changes even after the token is transferred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesToken {
    pub id: u64,
    pub creator: Principal,
    pub name: String,
    pub description: String,
    pub universe_id: i64,
    pub rarity: i64,
    pub discovered_at: Timestamp,
    pub image_url: String,
}
