#![allow(dead_code)]

use soroban_sdk::{testutils::Address as _, Address, Env, String};

use voting_contract::{VotingConfig, VotingContract, VotingContractClient};

pub struct TestEnvironment {
    pub env: Env,
    pub admin: Address,
    pub client: VotingContractClient<'static>,
}

impl TestEnvironment {
    pub fn new() -> Self {
        Self::with_config(VotingConfig::default())
    }

    pub fn with_config(config: VotingConfig) -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let contract_id = env.register(VotingContract, ());
        let client = VotingContractClient::new(&env, &contract_id);
        let admin = Address::generate(&env);

        client.initialize(&admin, &config);

        Self { env, admin, client }
    }

    pub fn create_user(&self) -> Address {
        Address::generate(&self.env)
    }

    pub fn text(&self, s: &str) -> String {
        String::from_str(&self.env, s)
    }

    /// Generate and whitelist `count` voters
    pub fn add_voters(&self, count: u32) -> std::vec::Vec<Address> {
        (0..count)
            .map(|_| {
                let voter = self.create_user();
                self.client.add_voter(&self.admin, &voter);
                voter
            })
            .collect()
    }

    /// Move from proposal registration into an open voting session
    pub fn submit_and_open_voting(&self, author: &Address, descriptions: &[&str]) {
        for description in descriptions {
            self.client.submit_proposal(author, &self.text(description));
        }
        self.client.end_proposal_session(&self.admin);
        self.client.start_voting_session(&self.admin);
    }

    pub fn close_and_tally(&self) {
        self.client.end_voting_session(&self.admin);
        self.client.tally_votes(&self.admin);
    }
}
