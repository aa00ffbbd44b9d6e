use crate::error_codes::RpcErrorKind;
use crate::transport::TransportError;

/// Failure of a single dispatched wallet call.
///
/// The variants are disjoint by origin: [`Error::UnknownCommand`] never
/// touches the network, [`Error::Transport`] comes from below the protocol
/// layer, [`Error::Protocol`] means the response itself was malformed, and
/// [`Error::Wallet`] is the wallet's own RPC layer rejecting the call.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The command name is not in the generated command set for the targeted
    /// wallet release. Reported before any transport interaction.
    #[error("unknown wallet command `{0}`")]
    UnknownCommand(String),

    /// The transport failed: connection, timeout, or a body that was not
    /// JSON. Never wrapped in the wallet taxonomy.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response violated the JSON-RPC shape — neither `result` nor
    /// `error` populated, or a non-object body where an object was expected.
    #[error("invalid JSON-RPC response: {0}")]
    Protocol(String),

    /// The wallet reported an RPC-layer error.
    #[error(transparent)]
    Wallet(#[from] WalletRpcError),
}

/// An error reported by the wallet's RPC layer.
///
/// Every wallet-reported failure resolves to this one shape; `kind` carries
/// the taxonomy classification for narrow matching, while `code` and
/// `message` preserve the raw response even when the code is newer than the
/// generated table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} (code {code}): {message}")]
pub struct WalletRpcError {
    pub kind: RpcErrorKind,
    pub code: i64,
    pub message: String,
}

impl WalletRpcError {
    /// Resolve a raw `(code, message)` pair against the generated taxonomy.
    ///
    /// Codes absent from the table classify as
    /// [`RpcErrorKind::Unrecognized`] rather than failing, so a client paired
    /// with a newer wallet degrades gracefully.
    pub fn resolve(code: i64, message: impl Into<String>) -> Self {
        Self {
            kind: RpcErrorKind::from_code(code),
            code,
            message: message.into(),
        }
    }
}
