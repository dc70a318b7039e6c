use soroban_sdk::{log, Address, Env, String, Vec};

use crate::constants::FIRST_PROPOSAL_ID;
use crate::errors::VotingError;
use crate::events;
use crate::storage;
use crate::types::{Proposal, ProposalStatus, Tally, VoteRecord};
use crate::validation::expiration_for;

/// Proposal and ballot logic over the host's storage.
///
/// Each mutating call runs as one host invocation: checks and writes happen
/// with no suspension point in between, and an `Err` discards every write.
/// Callers outside Soroban must give the same all-or-nothing guarantee.
pub struct VotingRegistry;

impl VotingRegistry {
    // -------------------------------
    // Proposal Creation
    // -------------------------------
    pub fn create_proposal(
        env: &Env,
        description: String,
        duration: u64,
    ) -> Result<u64, VotingError> {
        let now = env.ledger().timestamp();
        let expiration_time = expiration_for(now, duration)?;

        let count = storage::get_proposal_count(env);
        let id = FIRST_PROPOSAL_ID + count;

        let proposal = Proposal {
            id,
            description,
            created_at: now,
            expiration_time,
            votes_for: 0,
            votes_against: 0,
        };

        storage::save_proposal(env, &proposal);
        storage::set_proposal_count(env, count + 1);
        storage::bump_instance(env);

        events::proposal_created(env, &proposal);
        log!(env, "proposal created", id, expiration_time);

        Ok(id)
    }

    // -------------------------------
    // Voting
    // -------------------------------
    pub fn vote(
        env: &Env,
        proposal_id: u64,
        voter: Address,
        support: bool,
    ) -> Result<(), VotingError> {
        voter.require_auth();

        let mut proposal = Self::load(env, proposal_id)?;

        let now = env.ledger().timestamp();
        if !proposal.is_open(now) {
            return Err(VotingError::VotingExpired);
        }

        if storage::has_voted(env, proposal_id, &voter) {
            return Err(VotingError::AlreadyVoted);
        }

        if support {
            proposal.votes_for += 1;
        } else {
            proposal.votes_against += 1;
        }

        storage::save_vote(
            env,
            proposal_id,
            &voter,
            &VoteRecord {
                support,
                timestamp: now,
            },
        );
        storage::save_proposal(env, &proposal);
        storage::bump_instance(env);

        events::vote_cast(env, &proposal, &voter, support);

        Ok(())
    }

    // -------------------------------
    // Read-only Queries
    // -------------------------------
    pub fn get_proposal(env: &Env, proposal_id: u64) -> Result<Proposal, VotingError> {
        Self::load(env, proposal_id)
    }

    pub fn get_vote_count(env: &Env, proposal_id: u64) -> Result<Tally, VotingError> {
        Ok(Self::load(env, proposal_id)?.tally())
    }

    pub fn proposal_status(env: &Env, proposal_id: u64) -> Result<ProposalStatus, VotingError> {
        let proposal = Self::load(env, proposal_id)?;
        Ok(proposal.status(env.ledger().timestamp()))
    }

    pub fn has_voted(env: &Env, proposal_id: u64, voter: Address) -> Result<bool, VotingError> {
        Self::require_exists(env, proposal_id)?;
        Ok(storage::has_voted(env, proposal_id, &voter))
    }

    pub fn get_vote(
        env: &Env,
        proposal_id: u64,
        voter: Address,
    ) -> Result<Option<VoteRecord>, VotingError> {
        Self::require_exists(env, proposal_id)?;
        Ok(storage::get_vote(env, proposal_id, &voter))
    }

    pub fn proposal_count(env: &Env) -> u64 {
        storage::get_proposal_count(env)
    }

    /// Ids of every proposal still accepting votes, in ascending order.
    pub fn active_proposals(env: &Env) -> Vec<u64> {
        let now = env.ledger().timestamp();
        let count = storage::get_proposal_count(env);
        let mut active = Vec::new(env);

        for id in FIRST_PROPOSAL_ID..FIRST_PROPOSAL_ID + count {
            if let Some(proposal) = storage::get_proposal(env, id) {
                if proposal.is_open(now) {
                    active.push_back(id);
                }
            }
        }

        active
    }

    fn load(env: &Env, proposal_id: u64) -> Result<Proposal, VotingError> {
        let proposal =
            storage::get_proposal(env, proposal_id).ok_or(VotingError::ProposalNotFound)?;
        storage::bump_proposal_ttl(env, proposal_id);
        Ok(proposal)
    }

    fn require_exists(env: &Env, proposal_id: u64) -> Result<(), VotingError> {
        if proposal_id < FIRST_PROPOSAL_ID
            || proposal_id >= FIRST_PROPOSAL_ID + storage::get_proposal_count(env)
        {
            return Err(VotingError::ProposalNotFound);
        }
        Ok(())
    }
}
