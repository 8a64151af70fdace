use soroban_sdk::{Address, Env, Vec};

use crate::constants::{
    INSTANCE_TTL_LEDGERS, INSTANCE_TTL_THRESHOLD, PERSISTENT_TTL_LEDGERS,
    PERSISTENT_TTL_THRESHOLD,
};
use crate::errors::VotingError;
use crate::types::{DataKey, Notification, Phase, Proposal, Voter, VotingConfig};

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_LEDGERS);
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_LEDGERS);
}

// ── Admin & Config ───────────────────────────────────────────────────────────

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_admin(env: &Env) -> Result<Address, VotingError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(VotingError::NotInitialized)
}

pub fn set_config(env: &Env, config: &VotingConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_config(env: &Env) -> Result<VotingConfig, VotingError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(VotingError::NotInitialized)
}

// ── Phase ────────────────────────────────────────────────────────────────────

pub fn set_phase(env: &Env, phase: Phase) {
    env.storage().instance().set(&DataKey::Phase, &phase);
}

pub fn get_phase(env: &Env) -> Result<Phase, VotingError> {
    env.storage()
        .instance()
        .get(&DataKey::Phase)
        .ok_or(VotingError::NotInitialized)
}

// ── Whitelist ────────────────────────────────────────────────────────────────

pub fn get_voter(env: &Env, voter: &Address) -> Option<Voter> {
    env.storage()
        .persistent()
        .get(&DataKey::Voter(voter.clone()))
}

pub fn has_voter(env: &Env, voter: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Voter(voter.clone()))
}

pub fn save_voter(env: &Env, address: &Address, voter: &Voter) {
    let key = DataKey::Voter(address.clone());
    env.storage().persistent().set(&key, voter);
    bump_persistent(env, &key);
}

pub fn get_voter_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::VoterCount)
        .unwrap_or(0u32)
}

pub fn get_voter_at(env: &Env, index: u32) -> Option<Address> {
    env.storage().persistent().get(&DataKey::VoterAt(index))
}

/// Appends to the registration order and returns the new whitelist size.
pub fn push_voter(env: &Env, voter: &Address) -> u32 {
    let index = get_voter_count(env);
    let key = DataKey::VoterAt(index);
    env.storage().persistent().set(&key, voter);
    bump_persistent(env, &key);

    env.storage()
        .instance()
        .set(&DataKey::VoterCount, &(index + 1));
    index + 1
}

pub fn get_voter_list(env: &Env) -> Vec<Address> {
    let mut voters = Vec::new(env);
    for index in 0..get_voter_count(env) {
        if let Some(voter) = get_voter_at(env, index) {
            voters.push_back(voter);
        }
    }
    voters
}

// ── Proposal log ─────────────────────────────────────────────────────────────

pub fn get_proposal_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0u32)
}

pub fn get_proposal(env: &Env, proposal_id: u32) -> Option<Proposal> {
    env.storage()
        .persistent()
        .get(&DataKey::Proposal(proposal_id))
}

pub fn save_proposal(env: &Env, proposal_id: u32, proposal: &Proposal) {
    let key = DataKey::Proposal(proposal_id);
    env.storage().persistent().set(&key, proposal);
    bump_persistent(env, &key);
}

/// Appends to the proposal log and returns the new proposal's id.
pub fn push_proposal(env: &Env, proposal: &Proposal) -> u32 {
    let proposal_id = get_proposal_count(env);
    save_proposal(env, proposal_id, proposal);
    env.storage()
        .instance()
        .set(&DataKey::ProposalCount, &(proposal_id + 1));
    proposal_id
}

pub fn get_proposals(env: &Env) -> Vec<Proposal> {
    let mut proposals = Vec::new(env);
    for proposal_id in 0..get_proposal_count(env) {
        if let Some(proposal) = get_proposal(env, proposal_id) {
            proposals.push_back(proposal);
        }
    }
    proposals
}

// ── Ballot box ───────────────────────────────────────────────────────────────

pub fn get_ballot(env: &Env, voter: &Address) -> Option<u32> {
    env.storage()
        .persistent()
        .get(&DataKey::Ballot(voter.clone()))
}

pub fn get_ballot_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::BallotCount)
        .unwrap_or(0u32)
}

pub fn record_ballot(env: &Env, voter: &Address, proposal_id: u32) -> u32 {
    let key = DataKey::Ballot(voter.clone());
    env.storage().persistent().set(&key, &proposal_id);
    bump_persistent(env, &key);

    let count = get_ballot_count(env) + 1;
    env.storage().instance().set(&DataKey::BallotCount, &count);
    count
}

// ── Notification log ─────────────────────────────────────────────────────────

pub fn get_notification_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::NotificationCount)
        .unwrap_or(0u32)
}

pub fn get_notification(env: &Env, index: u32) -> Option<Notification> {
    env.storage()
        .persistent()
        .get(&DataKey::Notification(index))
}

pub fn append_notification(env: &Env, notification: &Notification) {
    let index = get_notification_count(env);
    let key = DataKey::Notification(index);
    env.storage().persistent().set(&key, notification);
    bump_persistent(env, &key);

    env.storage()
        .instance()
        .set(&DataKey::NotificationCount, &(index + 1));
}

/// Up to `limit` notifications starting at index `start`, oldest first
pub fn get_notifications(env: &Env, start: u32, limit: u32) -> Vec<Notification> {
    let end = start.saturating_add(limit).min(get_notification_count(env));
    let mut log = Vec::new(env);
    for index in start..end {
        if let Some(notification) = get_notification(env, index) {
            log.push_back(notification);
        }
    }
    log
}
