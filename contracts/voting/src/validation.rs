//! Input validation helpers

use soroban_sdk::String;

use crate::constants::MAX_DESCRIPTION_LEN;
use crate::errors::VotingError;
use crate::types::VotingConfig;

/// Every threshold must be at least 1
pub fn validate_config(config: &VotingConfig) -> Result<(), VotingError> {
    if config.min_voters == 0 || config.min_proposals == 0 || config.min_votes == 0 {
        return Err(VotingError::InvalidConfig);
    }
    Ok(())
}

/// Reject descriptions that are too long, empty, or only whitespace
pub fn validate_description(description: &String) -> Result<(), VotingError> {
    let len = description.len();
    if len > MAX_DESCRIPTION_LEN {
        return Err(VotingError::ProposalTooLong);
    }

    let mut buf = [0u8; MAX_DESCRIPTION_LEN as usize];
    let bytes = &mut buf[..len as usize];
    description.copy_into_slice(bytes);

    if is_blank(bytes) {
        return Err(VotingError::EmptyProposal);
    }
    Ok(())
}

/// Empty, or only Unicode whitespace. Bytes that are not valid UTF-8 count as content.
fn is_blank(bytes: &[u8]) -> bool {
    match core::str::from_utf8(bytes) {
        Ok(text) => text.chars().all(char::is_whitespace),
        Err(_) => false,
    }
}
