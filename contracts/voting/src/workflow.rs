//! Phase state machine
//!
//! `RegisteringVoters → ProposalsRegistrationStarted → ProposalsRegistrationEnded
//!  → VotingSessionStarted → VotingSessionEnded → VotesTallied`
//!
//! The phase only moves through [`advance`], one step at a time, and only
//! at the administrator's request.

use soroban_sdk::{log, Address, Env};

use crate::access;
use crate::errors::VotingError;
use crate::events;
use crate::storage;
use crate::types::{Notification, Phase, VotingConfig};

/// Fail with `ActionNotAllowed` unless the workflow is in `expected`.
pub fn require_phase(env: &Env, expected: Phase) -> Result<(), VotingError> {
    if storage::get_phase(env)? != expected {
        return Err(VotingError::ActionNotAllowed);
    }
    Ok(())
}

/// Move from `required` to its successor.
///
/// Checks, in order: the caller is the administrator, the current phase is
/// `required`, then the transition-specific `guard` against the stored
/// config. Only when all pass is the new phase written and the phase-change
/// notification emitted.
pub fn advance<F>(
    env: &Env,
    caller: &Address,
    required: Phase,
    guard: F,
) -> Result<Phase, VotingError>
where
    F: FnOnce(&VotingConfig) -> Result<(), VotingError>,
{
    access::require_admin(env, caller)?;

    let current = storage::get_phase(env)?;
    if current != required {
        return Err(VotingError::InvalidPhaseTransition);
    }
    let next = current.next().ok_or(VotingError::InvalidPhaseTransition)?;

    guard(&storage::get_config(env)?)?;

    let notification =
        Notification::for_transition(current, next).ok_or(VotingError::InvalidPhaseTransition)?;

    storage::set_phase(env, next);
    storage::bump_instance(env);

    log!(env, "phase changed", current as u32, next as u32);
    events::emit(env, notification);

    Ok(next)
}

/// Guard helper: `actual` must reach `minimum`, otherwise `error`.
pub fn require_at_least(actual: u32, minimum: u32, error: VotingError) -> Result<(), VotingError> {
    if actual < minimum {
        return Err(error);
    }
    Ok(())
}
