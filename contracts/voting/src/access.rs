//! Access control for the voting workflow
//!
//! Two roles exist: the single administrator fixed at initialization and
//! the whitelisted voters. Every mutating entry point starts with one of
//! the guards below, which first verify the caller's identity through
//! Soroban auth and then check the role.

use soroban_sdk::{Address, Env};

use crate::errors::VotingError;
use crate::storage;
use crate::types::Voter;

/// Check whether `caller` is the administrator
pub fn is_admin(env: &Env, caller: &Address) -> Result<bool, VotingError> {
    Ok(storage::get_admin(env)? == *caller)
}

/// Verify the caller's identity and require the administrator role
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), VotingError> {
    caller.require_auth();

    if is_admin(env, caller)? {
        Ok(())
    } else {
        Err(VotingError::Unauthorized)
    }
}

/// Verify the caller's identity and require a whitelisted voter.
/// Returns the caller's voter record.
pub fn require_voter(env: &Env, caller: &Address) -> Result<Voter, VotingError> {
    caller.require_auth();
    storage::get_voter(env, caller).ok_or(VotingError::NotAuthorizedVoter)
}
