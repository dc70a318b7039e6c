use soroban_sdk::{contractevent, Address, Env, String};

use crate::types::Proposal;

/// Topics `("created", proposal_id)`, data `(description, expiration_time)`.
#[contractevent(topics = ["created"], data_format = "vec")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalCreated {
    #[topic]
    pub proposal_id: u64,
    pub description: String,
    pub expiration_time: u64,
}

/// Topics `("voted", proposal_id)`, data carries the tally after the ballot.
#[contractevent(topics = ["voted"], data_format = "vec")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteCast {
    #[topic]
    pub proposal_id: u64,
    pub voter: Address,
    pub support: bool,
    pub votes_for: u64,
    pub votes_against: u64,
}

pub fn proposal_created(env: &Env, proposal: &Proposal) {
    ProposalCreated {
        proposal_id: proposal.id,
        description: proposal.description.clone(),
        expiration_time: proposal.expiration_time,
    }
    .publish(env);
}

pub fn vote_cast(env: &Env, proposal: &Proposal, voter: &Address, support: bool) {
    VoteCast {
        proposal_id: proposal.id,
        voter: voter.clone(),
        support,
        votes_for: proposal.votes_for,
        votes_against: proposal.votes_against,
    }
    .publish(env);
}
