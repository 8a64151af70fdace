use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};

use crate::{
    access,
    errors::VotingError,
    events, storage, tally,
    types::{Notification, Phase, Proposal, Voter, VotingConfig},
    validation, workflow,
};

#[contract]
pub struct VotingContract;

#[contractimpl]
impl VotingContract {
    // ── Initialization ───────────────────────────────────────────────────────

    /// Initialize the workflow with its administrator and thresholds.
    /// Can only be called once; the administrator never changes afterwards.
    /// Must be submitted together with the deployment, see the crate docs.
    pub fn initialize(env: Env, admin: Address, config: VotingConfig) -> Result<(), VotingError> {
        if storage::has_admin(&env) {
            return Err(VotingError::AlreadyInitialized);
        }
        admin.require_auth();
        validation::validate_config(&config)?;

        storage::set_admin(&env, &admin);
        storage::set_config(&env, &config);
        storage::set_phase(&env, Phase::RegisteringVoters);
        storage::bump_instance(&env);

        log!(&env, "voting initialized", admin);
        Ok(())
    }

    /// Replace the participation thresholds. Only while voters are being registered.
    pub fn update_config(env: Env, caller: Address, config: VotingConfig) -> Result<(), VotingError> {
        access::require_admin(&env, &caller)?;
        workflow::require_phase(&env, Phase::RegisteringVoters)?;
        validation::validate_config(&config)?;

        storage::set_config(&env, &config);
        storage::bump_instance(&env);

        log!(
            &env,
            "config updated",
            config.min_voters,
            config.min_proposals,
            config.min_votes
        );
        Ok(())
    }

    // ── Whitelist ────────────────────────────────────────────────────────────

    /// Whitelist `voter`. Administrator only, while registering voters.
    pub fn add_voter(env: Env, caller: Address, voter: Address) -> Result<(), VotingError> {
        access::require_admin(&env, &caller)?;
        workflow::require_phase(&env, Phase::RegisteringVoters)?;

        if storage::has_voter(&env, &voter) {
            return Err(VotingError::DuplicateVoter);
        }

        storage::save_voter(&env, &voter, &Voter::registered());
        storage::push_voter(&env, &voter);
        storage::bump_instance(&env);

        events::emit(&env, Notification::VoterRegistered(voter));
        Ok(())
    }

    pub fn is_whitelisted(env: Env, identity: Address) -> bool {
        storage::has_voter(&env, &identity)
    }

    /// Whitelisted identities in registration order
    pub fn get_whitelisted_voters(env: Env) -> Vec<Address> {
        storage::get_voter_list(&env)
    }

    pub fn get_voter(env: Env, identity: Address) -> Result<Voter, VotingError> {
        storage::get_voter(&env, &identity).ok_or(VotingError::NotAuthorizedVoter)
    }

    // ── Phase transitions ────────────────────────────────────────────────────

    pub fn start_proposal_session(env: Env, caller: Address) -> Result<(), VotingError> {
        workflow::advance(&env, &caller, Phase::RegisteringVoters, |config| {
            workflow::require_at_least(
                storage::get_voter_count(&env),
                config.min_voters,
                VotingError::NotEnoughVoters,
            )
        })?;
        Ok(())
    }

    pub fn end_proposal_session(env: Env, caller: Address) -> Result<(), VotingError> {
        workflow::advance(&env, &caller, Phase::ProposalsRegistrationStarted, |config| {
            workflow::require_at_least(
                storage::get_proposal_count(&env),
                config.min_proposals,
                VotingError::NotEnoughProposals,
            )
        })?;
        Ok(())
    }

    pub fn start_voting_session(env: Env, caller: Address) -> Result<(), VotingError> {
        workflow::advance(&env, &caller, Phase::ProposalsRegistrationEnded, |_| Ok(()))?;
        Ok(())
    }

    pub fn end_voting_session(env: Env, caller: Address) -> Result<(), VotingError> {
        workflow::advance(&env, &caller, Phase::VotingSessionStarted, |config| {
            workflow::require_at_least(
                storage::get_ballot_count(&env),
                config.min_votes,
                VotingError::NotEnoughVotes,
            )
        })?;
        Ok(())
    }

    /// Freeze the vote counts. `get_winner` becomes available afterwards.
    pub fn tally_votes(env: Env, caller: Address) -> Result<(), VotingError> {
        workflow::advance(&env, &caller, Phase::VotingSessionEnded, |_| Ok(()))?;
        Ok(())
    }

    // ── Proposals ────────────────────────────────────────────────────────────

    /// Submit a proposal as a whitelisted voter. Returns its proposal id.
    pub fn submit_proposal(
        env: Env,
        caller: Address,
        description: String,
    ) -> Result<u32, VotingError> {
        workflow::require_phase(&env, Phase::ProposalsRegistrationStarted)?;
        access::require_voter(&env, &caller)?;
        validation::validate_description(&description)?;

        let proposal_id = storage::push_proposal(
            &env,
            &Proposal {
                description,
                vote_count: 0,
            },
        );
        storage::bump_instance(&env);

        events::emit(&env, Notification::ProposalRegistered(proposal_id));
        Ok(proposal_id)
    }

    /// All proposals in submission order; index is the proposal id
    pub fn get_proposals(env: Env) -> Vec<Proposal> {
        storage::get_proposals(&env)
    }

    pub fn get_proposal(env: Env, proposal_id: u32) -> Result<Proposal, VotingError> {
        storage::get_proposal(&env, proposal_id).ok_or(VotingError::InvalidProposal)
    }

    // ── Voting ───────────────────────────────────────────────────────────────

    /// Cast the caller's single ballot for `proposal_id`.
    pub fn cast_vote(env: Env, caller: Address, proposal_id: u32) -> Result<(), VotingError> {
        workflow::require_phase(&env, Phase::VotingSessionStarted)?;
        let mut voter = access::require_voter(&env, &caller)?;

        if voter.has_voted {
            return Err(VotingError::AlreadyVoted);
        }

        let mut proposal =
            storage::get_proposal(&env, proposal_id).ok_or(VotingError::InvalidProposal)?;
        proposal.vote_count += 1;

        voter.has_voted = true;
        voter.voted_proposal_id = Some(proposal_id);

        storage::save_proposal(&env, proposal_id, &proposal);
        storage::save_voter(&env, &caller, &voter);
        storage::record_ballot(&env, &caller, proposal_id);
        storage::bump_instance(&env);

        events::emit(&env, Notification::Voted(caller, proposal_id));
        Ok(())
    }

    /// Proposal id chosen by `voter`, if they voted
    pub fn get_ballot(env: Env, voter: Address) -> Option<u32> {
        storage::get_ballot(&env, &voter)
    }

    /// Number of ballots cast so far
    pub fn get_vote_total(env: Env) -> u32 {
        storage::get_ballot_count(&env)
    }

    // ── Results ──────────────────────────────────────────────────────────────

    /// Id of the proposal with the most votes; ties go to the lowest id.
    /// Available once votes are tallied.
    pub fn get_winner(env: Env) -> Result<u32, VotingError> {
        if storage::get_phase(&env)? != Phase::VotesTallied {
            return Err(VotingError::TallyNotReady);
        }
        tally::winning_proposal_id(&storage::get_proposals(&env)).ok_or(VotingError::InvalidProposal)
    }

    pub fn get_winning_proposal(env: Env) -> Result<Proposal, VotingError> {
        let winner = Self::get_winner(env.clone())?;
        storage::get_proposal(&env, winner).ok_or(VotingError::InvalidProposal)
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    pub fn state(env: Env) -> Result<Phase, VotingError> {
        storage::get_phase(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, VotingError> {
        storage::get_admin(&env)
    }

    pub fn get_config(env: Env) -> Result<VotingConfig, VotingError> {
        storage::get_config(&env)
    }

    /// Number of notifications emitted so far
    pub fn get_notification_count(env: Env) -> u32 {
        storage::get_notification_count(&env)
    }

    /// A page of the notification log, oldest first. `limit` is capped by
    /// the log length, so `(0, u32::MAX)` reads everything.
    pub fn get_notifications(env: Env, start: u32, limit: u32) -> Vec<Notification> {
        storage::get_notifications(&env, start, limit)
    }
}
