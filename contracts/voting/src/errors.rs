//! Error codes for the voting workflow contract
//!
//! Every guard failure maps to exactly one variant so that clients and
//! tests can assert on the cause. Codes are stable and must not be reused.
//! - 1-9: access control, phase and ballot errors
//! - 10-12: participation thresholds
//! - 13-16: lifecycle and input validation

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VotingError {
    // ===== Access control, phase and ballot errors (1-9) =====
    /// Caller is not the administrator
    Unauthorized = 1,

    /// Caller is not a whitelisted voter
    NotAuthorizedVoter = 2,

    /// Current phase does not permit this action
    ActionNotAllowed = 3,

    /// Current phase is not the predecessor required by this transition
    InvalidPhaseTransition = 4,

    /// Identity is already whitelisted
    DuplicateVoter = 5,

    /// Proposal description is empty or blank
    EmptyProposal = 6,

    /// Referenced proposal id does not exist
    InvalidProposal = 7,

    /// Voter has already cast a ballot
    AlreadyVoted = 8,

    /// Winner requested before votes were tallied
    TallyNotReady = 9,

    // ===== Participation thresholds (10-12) =====
    /// Whitelist is smaller than the configured minimum
    NotEnoughVoters = 10,

    /// Fewer proposals than the configured minimum
    NotEnoughProposals = 11,

    /// Fewer ballots than the configured minimum
    NotEnoughVotes = 12,

    // ===== Lifecycle and validation (13-16) =====
    /// Contract has not been initialized
    NotInitialized = 13,

    /// Contract was already initialized
    AlreadyInitialized = 14,

    /// Configuration has a zero threshold
    InvalidConfig = 15,

    /// Proposal description exceeds the maximum length
    ProposalTooLong = 16,
}
