#![no_std]
//! # Voting DAO
//!
//! A registry of yes/no proposals. Each proposal accepts ballots until its
//! expiration timestamp, and every address may vote at most once per
//! proposal.
//!
//! Ids start at 1. Failures are reported as [`VotingError`] codes and abort
//! the invocation.

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

mod constants;
mod contract;
mod errors;
mod events;
mod storage;
mod types;
mod validation;

use contract::VotingRegistry;

pub use errors::VotingError;
pub use types::{Proposal, ProposalStatus, Tally, VoteRecord};

#[contract]
pub struct VotingDao;

#[contractimpl]
impl VotingDao {
    /// Open a new proposal for `duration` seconds from the current ledger time.
    pub fn create_proposal(
        env: Env,
        description: String,
        duration: u64,
    ) -> Result<u64, VotingError> {
        VotingRegistry::create_proposal(&env, description, duration)
    }

    /// Cast `voter`'s ballot. Requires authorization from `voter`.
    pub fn vote(
        env: Env,
        proposal_id: u64,
        voter: Address,
        support: bool,
    ) -> Result<(), VotingError> {
        VotingRegistry::vote(&env, proposal_id, voter, support)
    }

    pub fn get_proposal(env: Env, proposal_id: u64) -> Result<Proposal, VotingError> {
        VotingRegistry::get_proposal(&env, proposal_id)
    }

    pub fn get_vote_count(env: Env, proposal_id: u64) -> Result<Tally, VotingError> {
        VotingRegistry::get_vote_count(&env, proposal_id)
    }

    pub fn proposal_status(env: Env, proposal_id: u64) -> Result<ProposalStatus, VotingError> {
        VotingRegistry::proposal_status(&env, proposal_id)
    }

    pub fn has_voted(env: Env, proposal_id: u64, voter: Address) -> Result<bool, VotingError> {
        VotingRegistry::has_voted(&env, proposal_id, voter)
    }

    pub fn get_vote(
        env: Env,
        proposal_id: u64,
        voter: Address,
    ) -> Result<Option<VoteRecord>, VotingError> {
        VotingRegistry::get_vote(&env, proposal_id, voter)
    }

    pub fn proposal_count(env: Env) -> u64 {
        VotingRegistry::proposal_count(&env)
    }

    pub fn active_proposals(env: Env) -> Vec<u64> {
        VotingRegistry::active_proposals(&env)
    }
}
