//! Transport-agnostic JSON-RPC client for the Gridcoin wallet.
//!
//! The crate supplies everything except the network: request construction,
//! response interpretation, and typed error reporting. The caller injects the
//! piece that actually moves bytes — a [`Transport`] (async) or a
//! [`BlockingTransport`] (sync) — and both client flavors run the same
//! dispatch logic over it. Ready-made `reqwest` transports live in
//! [`transport::http`] for callers who do not bring their own.
//!
//! The command set and the error-code taxonomy are generated artifacts,
//! versioned against a specific wallet release (currently Gridcoin 5.4.5).

pub mod blocking;
pub mod commands;
pub mod endpoint;
pub mod error;
pub mod transport;

mod client;
mod codec;
mod error_codes;

pub use blocking::BlockingWalletClient;
pub use client::WalletClient;
pub use commands::COMMANDS;
pub use endpoint::{Endpoint, EndpointError, Network};
pub use error::{Error, WalletRpcError};
pub use error_codes::RpcErrorKind;
pub use transport::{BlockingTransport, Transport, TransportError};
