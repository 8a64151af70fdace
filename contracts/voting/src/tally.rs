use soroban_sdk::Vec;

use crate::types::Proposal;

/// Index of the strictly greatest count. On a tie the lowest index wins.
/// Returns `None` for an empty sequence.
pub fn leading_index<I>(counts: I) -> Option<u32>
where
    I: IntoIterator<Item = u32>,
{
    let mut leader: Option<(u32, u32)> = None;

    for (index, count) in (0u32..).zip(counts) {
        match leader {
            Some((_, best)) if count <= best => {}
            _ => leader = Some((index, count)),
        }
    }

    leader.map(|(index, _)| index)
}

/// Winning proposal id for the given proposal log
pub fn winning_proposal_id(proposals: &Vec<Proposal>) -> Option<u32> {
    leading_index(proposals.iter().map(|p| p.vote_count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_has_no_leader() {
        assert_eq!(leading_index(core::iter::empty::<u32>()), None);
    }

    #[test]
    fn test_strict_maximum_wins() {
        assert_eq!(leading_index([4, 2, 0]), Some(0));
        assert_eq!(leading_index([1, 5, 3]), Some(1));
        assert_eq!(leading_index([0, 0, 7]), Some(2));
    }

    #[test]
    fn test_tie_goes_to_lowest_index() {
        assert_eq!(leading_index([2, 3, 3]), Some(1));
        assert_eq!(leading_index([0, 0, 0]), Some(0));
    }
}
