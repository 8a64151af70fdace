mod common;

use common::TestEnvironment;
use proptest::prelude::*;
use soroban_sdk::Address;
use voting_contract::{Phase, VotingError};

#[derive(Clone, Debug)]
enum Action {
    AddVoter { as_admin: bool, who: usize },
    StartProposals { as_admin: bool },
    Submit { who: usize, blank: bool },
    EndProposals { as_admin: bool },
    StartVoting { as_admin: bool },
    Vote { who: usize, proposal: u32 },
    EndVoting { as_admin: bool },
    Tally { as_admin: bool },
}

const POOL: usize = 4;

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        (any::<bool>(), 0..POOL).prop_map(|(as_admin, who)| Action::AddVoter { as_admin, who }),
        any::<bool>().prop_map(|as_admin| Action::StartProposals { as_admin }),
        (0..POOL, any::<bool>()).prop_map(|(who, blank)| Action::Submit { who, blank }),
        any::<bool>().prop_map(|as_admin| Action::EndProposals { as_admin }),
        any::<bool>().prop_map(|as_admin| Action::StartVoting { as_admin }),
        (0..POOL, 0u32..3).prop_map(|(who, proposal)| Action::Vote { who, proposal }),
        any::<bool>().prop_map(|as_admin| Action::EndVoting { as_admin }),
        any::<bool>().prop_map(|as_admin| Action::Tally { as_admin }),
    ]
}

fn apply(t: &TestEnvironment, pool: &[Address], outsider: &Address, action: &Action) -> bool {
    let caller = |as_admin: bool| if as_admin { t.admin.clone() } else { outsider.clone() };
    match action {
        Action::AddVoter { as_admin, who } => {
            t.client.try_add_voter(&caller(*as_admin), &pool[*who]).is_ok()
        }
        Action::StartProposals { as_admin } => {
            t.client.try_start_proposal_session(&caller(*as_admin)).is_ok()
        }
        Action::Submit { who, blank } => {
            let text = if *blank { t.text(" ") } else { t.text("proposal") };
            t.client.try_submit_proposal(&pool[*who], &text).is_ok()
        }
        Action::EndProposals { as_admin } => {
            t.client.try_end_proposal_session(&caller(*as_admin)).is_ok()
        }
        Action::StartVoting { as_admin } => {
            t.client.try_start_voting_session(&caller(*as_admin)).is_ok()
        }
        Action::Vote { who, proposal } => t.client.try_cast_vote(&pool[*who], proposal).is_ok(),
        Action::EndVoting { as_admin } => {
            t.client.try_end_voting_session(&caller(*as_admin)).is_ok()
        }
        Action::Tally { as_admin } => t.client.try_tally_votes(&caller(*as_admin)).is_ok(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Observed phases never go backwards and never skip a step.
    /// Rejected actions leave the phase and the notification log untouched.
    #[test]
    fn phase_walk_is_monotone(actions in prop::collection::vec(action(), 1..40)) {
        let t = TestEnvironment::new();
        let pool: std::vec::Vec<Address> = (0..POOL).map(|_| t.create_user()).collect();
        let outsider = t.create_user();

        let mut phase = t.client.state();
        let mut logged = t.client.get_notification_count();

        for action in &actions {
            let accepted = apply(&t, &pool, &outsider, action);
            let next = t.client.state();
            let now_logged = t.client.get_notification_count();

            prop_assert!(next >= phase);
            prop_assert!(next == phase || phase.next() == Some(next));
            if accepted {
                prop_assert_eq!(now_logged, logged + 1);
            } else {
                prop_assert_eq!(next, phase);
                prop_assert_eq!(now_logged, logged);
            }

            phase = next;
            logged = now_logged;
        }
    }

    /// Whitelisting an already registered identity fails and the whitelist keeps its size.
    #[test]
    fn duplicate_whitelisting_is_rejected(count in 1u32..6, repeat in 0usize..6) {
        let t = TestEnvironment::new();
        let voters = t.add_voters(count);
        let again = &voters[repeat % voters.len()];

        let result = t.client.try_add_voter(&t.admin, again);

        prop_assert_eq!(result, Err(Ok(VotingError::DuplicateVoter)));
        prop_assert_eq!(t.client.get_whitelisted_voters().len(), count);
    }

    /// The winner is the lowest proposal id among those with the most votes,
    /// and repeated queries agree.
    #[test]
    fn winner_is_lowest_among_maxima(
        proposal_count in 1u32..5,
        picks in prop::collection::vec(0u32..5, 1..8),
    ) {
        let t = TestEnvironment::new();
        let voters = t.add_voters(picks.len() as u32);
        t.client.start_proposal_session(&t.admin);
        let descriptions: std::vec::Vec<&str> =
            (0..proposal_count).map(|_| "option").collect();
        t.submit_and_open_voting(&voters[0], &descriptions);

        let mut expected = std::vec![0u32; proposal_count as usize];
        for (voter, pick) in voters.iter().zip(&picks) {
            let choice = pick % proposal_count;
            t.client.cast_vote(voter, &choice);
            expected[choice as usize] += 1;
        }
        t.close_and_tally();

        let winner = t.client.get_winner();
        let best = *expected.iter().max().unwrap();
        let lowest = expected.iter().position(|&c| c == best).unwrap() as u32;

        prop_assert_eq!(t.client.state(), Phase::VotesTallied);
        prop_assert_eq!(winner, lowest);
        prop_assert_eq!(t.client.get_winner(), winner);
    }
}
