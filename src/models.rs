//! Frontend Models
//!
//! Data structures for wallet cards.

use serde::{Deserialize, Serialize};

/// Placeholder payload for a tag that carried no readable record.
pub const NO_READABLE_DATA: &str = "No readable data";

/// A single wallet card. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: u32,
    pub title: String,
    pub details: String,
    /// Decoded payload of the scanned tag, if this card came from a scan
    pub nfc_data: Option<String>,
}

impl Card {
    /// The placeholder card seeded at startup
    pub fn seed(id: u32) -> Self {
        Self {
            id,
            title: "Membership Card".to_string(),
            details: "Tap to expand. Scanned cards appear below.".to_string(),
            nfc_data: None,
        }
    }

    /// Card created from a scan. A `None` payload means the tag carried
    /// no readable record and gets the fixed placeholder text.
    pub fn scanned(id: u32, payload: Option<String>) -> Self {
        Self {
            id,
            title: format!("Scanned Card #{}", id),
            details: "Added from an NFC tag.".to_string(),
            nfc_data: Some(payload.unwrap_or_else(|| NO_READABLE_DATA.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_card_has_no_payload() {
        let card = Card::seed(1);
        assert_eq!(card.id, 1);
        assert!(card.nfc_data.is_none());
    }

    #[test]
    fn test_scanned_card_keeps_decoded_text() {
        let card = Card::scanned(2, Some("hello".to_string()));
        assert_eq!(card.nfc_data.as_deref(), Some("hello"));
    }

    #[test]
    fn test_scanned_card_without_record_gets_placeholder() {
        let card = Card::scanned(2, None);
        assert_eq!(card.nfc_data.as_deref(), Some(NO_READABLE_DATA));
    }
}
