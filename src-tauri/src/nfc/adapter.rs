//! NFC Adapter Trait
//!
//! Seam between the session service and the platform NFC stack.

use async_trait::async_trait;

use super::{NfcError, SessionKind, TagDescriptor};

/// Platform NFC operations. `cancel` must tolerate being called with no
/// pending session.
#[async_trait]
pub trait NfcAdapter: Send + Sync {
    /// Hardware capability query
    fn supported(&self) -> bool;

    /// Idempotent initialization of the NFC stack
    async fn start(&self) -> Result<(), NfcError>;

    /// Request a technology session; resolves when the reader is armed
    async fn request_session(&self, kind: SessionKind) -> Result<(), NfcError>;

    /// Wait for a tag to be presented
    async fn read_tag(&self) -> Result<TagDescriptor, NfcError>;

    /// Release any pending session
    async fn cancel(&self);
}

/// Adapter for platforms without an NFC stack (desktop builds). The
/// capability check reports unsupported and the UI degrades gracefully.
pub struct UnsupportedAdapter;

#[async_trait]
impl NfcAdapter for UnsupportedAdapter {
    fn supported(&self) -> bool {
        false
    }

    async fn start(&self) -> Result<(), NfcError> {
        Err(NfcError::Unsupported)
    }

    async fn request_session(&self, _kind: SessionKind) -> Result<(), NfcError> {
        Err(NfcError::Unsupported)
    }

    async fn read_tag(&self) -> Result<TagDescriptor, NfcError> {
        Err(NfcError::Unsupported)
    }

    async fn cancel(&self) {}
}

#[cfg(test)]
pub use mock::MockAdapter;

#[cfg(test)]
mod mock {
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Mutex;

    use super::*;

    /// Scripted adapter for tests: pops one read outcome per `read_tag`
    /// and counts `cancel` invocations.
    pub struct MockAdapter {
        reads: Mutex<VecDeque<Result<TagDescriptor, NfcError>>>,
        session_failure: Option<NfcError>,
        cancel_calls: AtomicUsize,
    }

    impl MockAdapter {
        pub fn new(reads: Vec<Result<TagDescriptor, NfcError>>) -> Self {
            Self {
                reads: Mutex::new(reads.into()),
                session_failure: None,
                cancel_calls: AtomicUsize::new(0),
            }
        }

        /// Adapter whose session request fails outright
        pub fn failing_session(err: NfcError) -> Self {
            Self {
                reads: Mutex::new(VecDeque::new()),
                session_failure: Some(err),
                cancel_calls: AtomicUsize::new(0),
            }
        }

        pub fn cancel_calls(&self) -> usize {
            self.cancel_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl NfcAdapter for MockAdapter {
        fn supported(&self) -> bool {
            true
        }

        async fn start(&self) -> Result<(), NfcError> {
            Ok(())
        }

        async fn request_session(&self, _kind: SessionKind) -> Result<(), NfcError> {
            match &self.session_failure {
                Some(err) => Err(NfcError::Adapter(err.to_string())),
                None => Ok(()),
            }
        }

        async fn read_tag(&self) -> Result<TagDescriptor, NfcError> {
            self.reads
                .lock()
                .await
                .pop_front()
                .unwrap_or(Err(NfcError::Adapter("no tag presented".to_string())))
        }

        async fn cancel(&self) {
            self.cancel_calls.fetch_add(1, Ordering::SeqCst);
        }
    }
}
