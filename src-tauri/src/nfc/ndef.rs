//! NDEF Text Record Decoding
//!
//! Layout per the NFC Forum Text RTD: one status byte (bit 7 selects
//! UTF-16, low 6 bits give the language-code length), the language code,
//! then the text itself.

use super::NfcError;

pub fn decode_text_payload(payload: &[u8]) -> Result<String, NfcError> {
    let status = *payload
        .first()
        .ok_or_else(|| NfcError::Decode("empty payload".to_string()))?;

    let utf16 = status & 0x80 != 0;
    let lang_len = (status & 0x3F) as usize;

    let text = payload
        .get(1 + lang_len..)
        .ok_or_else(|| NfcError::Decode("payload shorter than language code".to_string()))?;

    if utf16 {
        decode_utf16(text)
    } else {
        String::from_utf8(text.to_vec())
            .map_err(|e| NfcError::Decode(format!("invalid UTF-8 text: {}", e)))
    }
}

/// UTF-16 text, big-endian unless a BOM says otherwise.
fn decode_utf16(bytes: &[u8]) -> Result<String, NfcError> {
    if bytes.len() % 2 != 0 {
        return Err(NfcError::Decode("odd UTF-16 byte length".to_string()));
    }

    let (bytes, little_endian) = match bytes {
        [0xFE, 0xFF, rest @ ..] => (rest, false),
        [0xFF, 0xFE, rest @ ..] => (rest, true),
        _ => (bytes, false),
    };

    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| {
            if little_endian {
                u16::from_le_bytes([pair[0], pair[1]])
            } else {
                u16::from_be_bytes([pair[0], pair[1]])
            }
        })
        .collect();

    String::from_utf16(&units).map_err(|e| NfcError::Decode(format!("invalid UTF-16 text: {}", e)))
}
