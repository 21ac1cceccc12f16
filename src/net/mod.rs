//! Outbound chat transport.
//!
//! DESIGN
//! ======
//! The composer only ever emits. `Transport` is the seam: `SocketTransport`
//! queues JSON envelopes on a channel that `socket_client` drains over a
//! WebSocket in the browser, and tests substitute their own recorder.

pub mod socket_client;
pub mod transport;
pub mod types;
