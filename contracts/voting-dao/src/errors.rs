use soroban_sdk::contracterror;

/// Failures surfaced to the invoker. Returning any of them aborts the
/// invocation, so no partial state survives a failed call.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VotingError {
    /// Duration is zero or the resulting expiration overflows
    InvalidDuration = 1,

    /// No proposal was ever created with this id
    ProposalNotFound = 2,

    /// The proposal's voting window has closed
    VotingExpired = 3,

    /// The address already cast a ballot on this proposal
    AlreadyVoted = 4,
}
