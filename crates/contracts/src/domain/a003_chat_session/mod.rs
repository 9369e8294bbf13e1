//! Chat session: settings-gated UI mode plus the send/response lifecycle
//!
//! Structure:
//! - session.rs: ChatSession state machine
//! - transport.rs: GenerateTransport seam for the outbound POST

pub mod session;
pub mod transport;

pub use session::{ChatSession, Notice, NoticeKind, PendingSend};
pub use transport::GenerateTransport;
