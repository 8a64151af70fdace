use soroban_sdk::{contracttype, Address, String};

use crate::constants::{
    DEFAULT_MIN_PROPOSALS, DEFAULT_MIN_VOTERS, DEFAULT_MIN_VOTES, DEFAULT_VOTER_WEIGHT,
};

/// Stage of the voting workflow. Only ever advances to `next()`.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Phase {
    RegisteringVoters = 0,
    ProposalsRegistrationStarted = 1,
    ProposalsRegistrationEnded = 2,
    VotingSessionStarted = 3,
    VotingSessionEnded = 4,
    VotesTallied = 5,
}

impl Phase {
    /// The phase that follows this one, or `None` once votes are tallied.
    pub fn next(self) -> Option<Phase> {
        match self {
            Phase::RegisteringVoters => Some(Phase::ProposalsRegistrationStarted),
            Phase::ProposalsRegistrationStarted => Some(Phase::ProposalsRegistrationEnded),
            Phase::ProposalsRegistrationEnded => Some(Phase::VotingSessionStarted),
            Phase::VotingSessionStarted => Some(Phase::VotingSessionEnded),
            Phase::VotingSessionEnded => Some(Phase::VotesTallied),
            Phase::VotesTallied => None,
        }
    }
}

/// A whitelisted participant
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Voter {
    pub has_voted: bool,
    /// Set once the ballot is cast
    pub voted_proposal_id: Option<u32>,
    /// Always `DEFAULT_VOTER_WEIGHT`; not used by the tally
    pub weight: u32,
}

impl Voter {
    pub fn registered() -> Self {
        Voter {
            has_voted: false,
            voted_proposal_id: None,
            weight: DEFAULT_VOTER_WEIGHT,
        }
    }
}

/// A submitted proposal, identified by its position in the proposal log
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub description: String,
    pub vote_count: u32,
}

/// Participation thresholds gating the closing transitions
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VotingConfig {
    /// Whitelist size required to open proposal registration
    pub min_voters: u32,
    /// Proposals required to close proposal registration
    pub min_proposals: u32,
    /// Ballots required to close the voting session
    pub min_votes: u32,
}

impl Default for VotingConfig {
    fn default() -> Self {
        VotingConfig {
            min_voters: DEFAULT_MIN_VOTERS,
            min_proposals: DEFAULT_MIN_PROPOSALS,
            min_votes: DEFAULT_MIN_VOTES,
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PhaseChange {
    pub previous: Phase,
    pub current: Phase,
}

/// Observable side effect of a successful action.
/// Appended to the notification log and published as a contract event.
/// Each entry is stored under its own index, never as one growing list.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Notification {
    VoterRegistered(Address),
    ProposalRegistered(u32),
    ProposalsRegistrationStarted(PhaseChange),
    ProposalsRegistrationEnded(PhaseChange),
    VotingSessionStarted(PhaseChange),
    VotingSessionEnded(PhaseChange),
    VotesTallied(PhaseChange),
    Voted(Address, u32),
}

/// Storage keys
#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    // Instance storage
    Admin,
    Config,
    Phase,
    ProposalCount,
    BallotCount,
    VoterCount,
    NotificationCount,
    // Persistent storage
    Voter(Address),
    // Whitelist order: registration index -> voter
    VoterAt(u32),
    Proposal(u32),
    // Ballot box: voter -> chosen proposal id
    Ballot(Address),
    Notification(u32),
}
