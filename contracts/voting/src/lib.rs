#![no_std]
//! # Voting Workflow Contract
//!
//! A governed, single-round voting workflow. The administrator whitelists
//! voters, opens and closes proposal registration, opens and closes the
//! voting session, then tallies. The winner is the proposal with the most
//! votes, lowest id on a tie.
//!
//! | Phase                          | Entry Point(s)                                   |
//! |--------------------------------|--------------------------------------------------|
//! | Bootstrap                      | `initialize`, `update_config`                    |
//! | `RegisteringVoters`            | `add_voter`, `start_proposal_session`            |
//! | `ProposalsRegistrationStarted` | `submit_proposal`, `end_proposal_session`        |
//! | `ProposalsRegistrationEnded`   | `start_voting_session`                           |
//! | `VotingSessionStarted`         | `cast_vote`, `end_voting_session`                |
//! | `VotingSessionEnded`           | `tally_votes`                                    |
//! | `VotesTallied`                 | `get_winner`, `get_winning_proposal`             |
//!
//! Read-only queries (`state`, `get_whitelisted_voters`, `get_proposals`, ...)
//! are available in every phase.
//!
//! Authorization lives in [`access`], the phase machine in [`workflow`],
//! storage access in [`storage`]. Every successful action appends one
//! [`Notification`] to the on-chain log and publishes it as an event.
//!
//! ## Deployment
//!
//! `initialize` is first-caller-wins: whoever initializes an uninitialized
//! instance becomes its administrator. Deploy and initialize in the same
//! transaction so no other account can claim the instance in between.

mod access;
mod constants;
mod contract;
mod errors;
mod events;
mod storage;
mod tally;
mod types;
mod validation;
mod workflow;

pub use constants::{DEFAULT_VOTER_WEIGHT, MAX_DESCRIPTION_LEN};
pub use contract::{VotingContract, VotingContractClient};
pub use errors::VotingError;
pub use types::{Notification, Phase, PhaseChange, Proposal, Voter, VotingConfig};
