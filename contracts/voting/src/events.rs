use soroban_sdk::{contractevent, Address, Env};

use crate::storage;
use crate::types::{Notification, Phase, PhaseChange};

// ── Contract events ──────────────────────────────────────────────────────────
// Topic is the snake_case struct name, plus the proposal id where one applies.

#[contractevent(data_format = "single-value")]
pub struct VoterRegistered {
    pub voter: Address,
}

#[contractevent(data_format = "single-value")]
pub struct ProposalRegistered {
    #[topic]
    pub proposal_id: u32,
}

#[contractevent(data_format = "single-value")]
pub struct Voted {
    #[topic]
    pub proposal_id: u32,
    pub voter: Address,
}

#[contractevent(data_format = "vec")]
pub struct ProposalsRegistrationStarted {
    pub previous: Phase,
    pub current: Phase,
}

#[contractevent(data_format = "vec")]
pub struct ProposalsRegistrationEnded {
    pub previous: Phase,
    pub current: Phase,
}

#[contractevent(data_format = "vec")]
pub struct VotingSessionStarted {
    pub previous: Phase,
    pub current: Phase,
}

#[contractevent(data_format = "vec")]
pub struct VotingSessionEnded {
    pub previous: Phase,
    pub current: Phase,
}

#[contractevent(data_format = "vec")]
pub struct VotesTallied {
    pub previous: Phase,
    pub current: Phase,
}

impl Notification {
    /// Notification fired when the workflow moves from `previous` to `current`.
    /// `None` for the initial phase, which no transition enters.
    pub fn for_transition(previous: Phase, current: Phase) -> Option<Notification> {
        let change = PhaseChange { previous, current };
        let notification = match current {
            Phase::RegisteringVoters => return None,
            Phase::ProposalsRegistrationStarted => {
                Notification::ProposalsRegistrationStarted(change)
            }
            Phase::ProposalsRegistrationEnded => Notification::ProposalsRegistrationEnded(change),
            Phase::VotingSessionStarted => Notification::VotingSessionStarted(change),
            Phase::VotingSessionEnded => Notification::VotingSessionEnded(change),
            Phase::VotesTallied => Notification::VotesTallied(change),
        };
        Some(notification)
    }
}

/// Record a notification in the log and publish the matching contract event.
/// Callers invoke this only after every state write of the action succeeded.
pub fn emit(env: &Env, notification: Notification) {
    storage::append_notification(env, &notification);

    match notification {
        Notification::VoterRegistered(voter) => VoterRegistered { voter }.publish(env),
        Notification::ProposalRegistered(proposal_id) => {
            ProposalRegistered { proposal_id }.publish(env)
        }
        Notification::Voted(voter, proposal_id) => Voted { proposal_id, voter }.publish(env),
        Notification::ProposalsRegistrationStarted(PhaseChange { previous, current }) => {
            ProposalsRegistrationStarted { previous, current }.publish(env)
        }
        Notification::ProposalsRegistrationEnded(PhaseChange { previous, current }) => {
            ProposalsRegistrationEnded { previous, current }.publish(env)
        }
        Notification::VotingSessionStarted(PhaseChange { previous, current }) => {
            VotingSessionStarted { previous, current }.publish(env)
        }
        Notification::VotingSessionEnded(PhaseChange { previous, current }) => {
            VotingSessionEnded { previous, current }.publish(env)
        }
        Notification::VotesTallied(PhaseChange { previous, current }) => {
            VotesTallied { previous, current }.publish(env)
        }
    }
}
