//! Ledger TTL and id configuration for the voting registry.

/// Id handed to the first proposal.
pub const FIRST_PROPOSAL_ID: u64 = 1;

// ===== Ledger TTL (at ~5s per ledger) =====

/// Ledgers closed in one day
pub const DAY_IN_LEDGERS: u32 = 17_280;

/// Proposals and ballots are extended to 30 days on every write
pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// The proposal counter lives with the contract instance
pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
