//! Constants shared by the voting workflow modules

// ===== Proposal limits =====

/// Maximum proposal description length in bytes
pub const MAX_DESCRIPTION_LEN: u32 = 256;

// ===== Voter defaults =====

/// Ballot weight given to every whitelisted voter
pub const DEFAULT_VOTER_WEIGHT: u32 = 1;

// ===== Default thresholds =====

/// Default minimum whitelist size before proposals open
pub const DEFAULT_MIN_VOTERS: u32 = 1;

/// Default minimum number of proposals before registration closes
pub const DEFAULT_MIN_PROPOSALS: u32 = 1;

/// Default minimum number of ballots before voting closes
pub const DEFAULT_MIN_VOTES: u32 = 1;

// ===== Ledger TTL =====
// A voting round stays readable for about a month after its last write.
// At ~5s per ledger: 30 days ≈ 518,400 ledgers.

pub const PERSISTENT_TTL_LEDGERS: u32 = 518_400;
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_LEDGERS / 2;

pub const INSTANCE_TTL_LEDGERS: u32 = 518_400;
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_LEDGERS / 2;
