use soroban_sdk::{contracttype, String};

/// A single votable item with a description and a bounded voting window.
///
/// Counters only ever grow; the record itself is never removed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub id: u64,
    pub description: String,
    pub created_at: u64,
    /// Voting closes once the ledger timestamp reaches this value.
    pub expiration_time: u64,
    pub votes_for: u64,
    pub votes_against: u64,
}

impl Proposal {
    pub fn is_open(&self, now: u64) -> bool {
        now < self.expiration_time
    }

    pub fn status(&self, now: u64) -> ProposalStatus {
        if self.is_open(now) {
            ProposalStatus::Open
        } else {
            ProposalStatus::Closed
        }
    }

    pub fn tally(&self) -> Tally {
        Tally {
            votes_for: self.votes_for,
            votes_against: self.votes_against,
        }
    }
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Tally {
    pub votes_for: u64,
    pub votes_against: u64,
}

/// Ballot cast by one address on one proposal.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VoteRecord {
    pub support: bool,
    pub timestamp: u64,
}

/// Derived from the ledger clock, never stored.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProposalStatus {
    Open,
    Closed,
}
