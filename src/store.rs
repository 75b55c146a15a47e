//! Card Collection Helpers
//!
//! Pure operations on the card list, kept out of the components so they
//! can be unit tested without a reactive runtime.

use crate::models::Card;

/// Remove the card with the given id. Order of the remaining cards is
/// preserved; unknown ids are a no-op.
pub fn remove_card(cards: &mut Vec<Card>, id: u32) {
    cards.retain(|card| card.id != id);
}

/// Hand out the next card identifier.
///
/// Deliberately a counter rather than `cards.len()`: a length-based id
/// repeats as soon as a card is deleted and another added.
pub fn allocate_id(next_id: &mut u32) -> u32 {
    let id = *next_id;
    *next_id += 1;
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NO_READABLE_DATA;

    fn make_cards(ids: &[u32]) -> Vec<Card> {
        ids.iter().map(|&id| Card::seed(id)).collect()
    }

    #[test]
    fn test_remove_card_keeps_order() {
        let mut cards = make_cards(&[1, 2, 3]);
        remove_card(&mut cards, 2);
        let ids: Vec<u32> = cards.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut cards = make_cards(&[1, 2]);
        remove_card(&mut cards, 99);
        assert_eq!(cards.len(), 2);
    }

    #[test]
    fn test_ids_stay_unique_after_deletion() {
        let mut next_id = 1;
        let mut cards = vec![Card::seed(allocate_id(&mut next_id))];
        cards.push(Card::scanned(allocate_id(&mut next_id), Some("a".to_string())));
        remove_card(&mut cards, 1);
        // A length-based scheme would reuse id 2 here
        cards.push(Card::scanned(allocate_id(&mut next_id), Some("b".to_string())));
        let ids: Vec<u32> = cards.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_scan_scenario() {
        // seed id=1, scan decoding "hello", delete id=1
        let mut next_id = 1;
        let mut cards = vec![Card::seed(allocate_id(&mut next_id))];

        cards.push(Card::scanned(allocate_id(&mut next_id), Some("hello".to_string())));
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].id, 1);
        assert_eq!(cards[1].id, 2);
        assert_eq!(cards[1].nfc_data.as_deref(), Some("hello"));

        remove_card(&mut cards, 1);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].id, 2);
    }

    #[test]
    fn test_zero_record_scan_uses_placeholder() {
        let mut next_id = 1;
        let mut cards = vec![Card::seed(allocate_id(&mut next_id))];
        cards.push(Card::scanned(allocate_id(&mut next_id), None));
        assert_eq!(cards[1].nfc_data.as_deref(), Some(NO_READABLE_DATA));
    }
}
