//! NFC Session Service
//!
//! Owns the single scan session. Requests are serialized: a second
//! `request_session` while one is active fails with `SessionBusy`, and
//! `cancel` is safe to call at any time, with or without a session.

use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

use super::{decode_text_payload, NfcAdapter, NfcError, SessionKind, TagDescriptor};

pub struct NfcService {
    adapter: Arc<dyn NfcAdapter>,
    session: Mutex<Option<SessionKind>>,
}

impl NfcService {
    pub fn new(adapter: Arc<dyn NfcAdapter>) -> Self {
        Self {
            adapter,
            session: Mutex::new(None),
        }
    }

    pub fn supported(&self) -> bool {
        self.adapter.supported()
    }

    pub async fn start(&self) -> Result<(), NfcError> {
        if !self.adapter.supported() {
            return Err(NfcError::Unsupported);
        }
        self.adapter.start().await
    }

    pub async fn request_session(&self, kind: SessionKind) -> Result<(), NfcError> {
        let mut slot = self.session.lock().await;
        if slot.is_some() {
            return Err(NfcError::SessionBusy);
        }
        self.adapter.request_session(kind).await?;
        *slot = Some(kind);
        debug!(?kind, "scan session armed");
        Ok(())
    }

    pub async fn read_tag(&self) -> Result<TagDescriptor, NfcError> {
        // Presence check only; the lock is not held across the read so a
        // cancel can still release the session while we wait for a tag.
        if self.session.lock().await.is_none() {
            return Err(NfcError::NoSession);
        }
        self.adapter.read_tag().await
    }

    pub fn decode_text(&self, payload: &[u8]) -> Result<String, NfcError> {
        decode_text_payload(payload)
    }

    /// Release the session. Never errors; redundant cancels are expected
    /// from the frontend's unconditional cleanup path.
    pub async fn cancel(&self) {
        let had_session = self.session.lock().await.take().is_some();
        self.adapter.cancel().await;
        if had_session {
            debug!("scan session released");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nfc::{MockAdapter, NdefRecord};

    fn one_record_tag(payload: &[u8]) -> TagDescriptor {
        TagDescriptor {
            records: vec![NdefRecord {
                payload: payload.to_vec(),
            }],
        }
    }

    fn service(adapter: MockAdapter) -> (NfcService, Arc<MockAdapter>) {
        let adapter = Arc::new(adapter);
        (NfcService::new(adapter.clone()), adapter)
    }

    #[tokio::test]
    async fn test_scan_round_trip() {
        let tag = one_record_tag(&[0x02, b'e', b'n', b'h', b'i']);
        let (svc, adapter) = service(MockAdapter::new(vec![Ok(tag)]));

        svc.request_session(SessionKind::Ndef).await.unwrap();
        let tag = svc.read_tag().await.unwrap();
        let text = svc.decode_text(&tag.records[0].payload).unwrap();
        svc.cancel().await;

        assert_eq!(text, "hi");
        assert_eq!(adapter.cancel_calls(), 1);
    }

    #[tokio::test]
    async fn test_second_session_is_rejected() {
        let (svc, _) = service(MockAdapter::new(vec![]));

        svc.request_session(SessionKind::Ndef).await.unwrap();
        let err = svc.request_session(SessionKind::Ndef).await.unwrap_err();
        assert!(matches!(err, NfcError::SessionBusy));
    }

    #[tokio::test]
    async fn test_session_reusable_after_cancel() {
        let (svc, adapter) = service(MockAdapter::new(vec![]));

        svc.request_session(SessionKind::Ndef).await.unwrap();
        svc.cancel().await;
        svc.request_session(SessionKind::Tag).await.unwrap();
        assert_eq!(adapter.cancel_calls(), 1);
    }

    #[tokio::test]
    async fn test_read_without_session_errors() {
        let (svc, _) = service(MockAdapter::new(vec![]));
        let err = svc.read_tag().await.unwrap_err();
        assert!(matches!(err, NfcError::NoSession));
    }

    #[tokio::test]
    async fn test_cancel_without_session_is_safe() {
        let (svc, adapter) = service(MockAdapter::new(vec![]));
        svc.cancel().await;
        svc.cancel().await;
        assert_eq!(adapter.cancel_calls(), 2);
    }

    #[tokio::test]
    async fn test_failed_session_request_leaves_no_session() {
        let (svc, _) = service(MockAdapter::failing_session(NfcError::Unsupported));

        assert!(svc.request_session(SessionKind::Ndef).await.is_err());
        // the failed request armed nothing, so a read still errors
        let err = svc.read_tag().await.unwrap_err();
        assert!(matches!(err, NfcError::NoSession));
    }

    #[tokio::test]
    async fn test_failed_read_then_cancel_releases_once() {
        let (svc, adapter) = service(MockAdapter::new(vec![Err(NfcError::Adapter(
            "tag lost".to_string(),
        ))]));

        svc.request_session(SessionKind::Ndef).await.unwrap();
        assert!(svc.read_tag().await.is_err());
        svc.cancel().await;
        assert_eq!(adapter.cancel_calls(), 1);
    }

    #[tokio::test]
    async fn test_unsupported_adapter_reports_capability() {
        use crate::nfc::UnsupportedAdapter;
        let svc = NfcService::new(Arc::new(UnsupportedAdapter));
        assert!(!svc.supported());
        assert!(matches!(svc.start().await.unwrap_err(), NfcError::Unsupported));
    }
}
