//! Error-code taxonomy of the wallet's RPC layer.
//!
//! Generated for Gridcoin 5.4.5 from the wallet's `RPCErrorCode`
//! enumeration. Variant names are derived from the wallet's constant names
//! by a best-effort rename (prefix strip plus case conversion); validate the
//! table against the target release when regenerating.

macro_rules! rpc_error_kinds {
    ($($(#[$doc:meta])* $kind:ident = $code:literal,)+) => {
        /// Classification of a wallet-reported RPC error.
        ///
        /// One variant per error code of the targeted wallet release, plus
        /// [`RpcErrorKind::Unrecognized`] for codes the generated table does
        /// not know.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum RpcErrorKind {
            $($(#[$doc])* $kind,)+
            /// Code absent from the generated table; the wallet is newer
            /// than the release this client was generated against.
            Unrecognized,
        }

        impl RpcErrorKind {
            /// Every generated `(code, kind)` pair.
            pub const TABLE: &'static [(i64, RpcErrorKind)] =
                &[$(($code, RpcErrorKind::$kind),)+];

            /// Classify a raw error code. Codes outside the table map to
            /// [`RpcErrorKind::Unrecognized`].
            pub fn from_code(code: i64) -> Self {
                match code {
                    $($code => RpcErrorKind::$kind,)+
                    _ => RpcErrorKind::Unrecognized,
                }
            }

            /// The wire code for generated kinds; `None` for
            /// [`RpcErrorKind::Unrecognized`], which has no code of its own.
            pub fn code(self) -> Option<i64> {
                match self {
                    $(RpcErrorKind::$kind => Some($code),)+
                    RpcErrorKind::Unrecognized => None,
                }
            }
        }

        impl std::fmt::Display for RpcErrorKind {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let name = match self {
                    $(RpcErrorKind::$kind => stringify!($kind),)+
                    RpcErrorKind::Unrecognized => "Unrecognized",
                };
                f.write_str(name)
            }
        }
    };
}

rpc_error_kinds! {
    /// `RPC_INVALID_REQUEST`
    InvalidRequest = -32600,
    /// `RPC_METHOD_NOT_FOUND`
    MethodNotFound = -32601,
    /// `RPC_INVALID_PARAMS`
    InvalidParams = -32602,
    /// `RPC_INTERNAL_ERROR`
    InternalError = -32603,
    /// `RPC_PARSE_ERROR`
    ParseError = -32700,
    /// `RPC_MISC_ERROR`
    MiscError = -1,
    /// `RPC_FORBIDDEN_BY_SAFE_MODE`
    ForbiddenBySafeMode = -2,
    /// `RPC_TYPE_ERROR`
    TypeError = -3,
    /// `RPC_INVALID_ADDRESS_OR_KEY`
    InvalidAddressOrKey = -5,
    /// `RPC_OUT_OF_MEMORY`
    OutOfMemory = -7,
    /// `RPC_INVALID_PARAMETER`
    InvalidParameter = -8,
    /// `RPC_DATABASE_ERROR`
    DatabaseError = -20,
    /// `RPC_DESERIALIZATION_ERROR`
    DeserializationError = -22,
    /// `RPC_CLIENT_NOT_CONNECTED`
    ClientNotConnected = -9,
    /// `RPC_CLIENT_IN_INITIAL_DOWNLOAD`
    ClientInInitialDownload = -10,
    /// `RPC_WALLET_ERROR`
    WalletError = -4,
    /// `RPC_WALLET_INSUFFICIENT_FUNDS`
    WalletInsufficientFunds = -6,
    /// `RPC_WALLET_INVALID_ACCOUNT_NAME`
    WalletInvalidAccountName = -11,
    /// `RPC_WALLET_KEYPOOL_RAN_OUT`
    WalletKeypoolRanOut = -12,
    /// `RPC_WALLET_UNLOCK_NEEDED`
    WalletUnlockNeeded = -13,
    /// `RPC_WALLET_PASSPHRASE_INCORRECT`
    WalletPassphraseIncorrect = -14,
    /// `RPC_WALLET_WRONG_ENC_STATE`
    WalletWrongEncState = -15,
    /// `RPC_WALLET_ENCRYPTION_FAILED`
    WalletEncryptionFailed = -16,
    /// `RPC_WALLET_ALREADY_UNLOCKED`
    WalletAlreadyUnlocked = -17,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_codes_are_unique() {
        for (i, (code, _)) in RpcErrorKind::TABLE.iter().enumerate() {
            for (other, _) in &RpcErrorKind::TABLE[i + 1..] {
                assert_ne!(code, other, "duplicate error code {code}");
            }
        }
    }

    #[test]
    fn from_code_round_trips_every_entry() {
        for &(code, kind) in RpcErrorKind::TABLE {
            assert_eq!(RpcErrorKind::from_code(code), kind);
            assert_eq!(kind.code(), Some(code));
        }
    }

    #[test]
    fn unknown_code_is_unrecognized() {
        assert_eq!(RpcErrorKind::from_code(-9999), RpcErrorKind::Unrecognized);
        assert_eq!(RpcErrorKind::Unrecognized.code(), None);
    }
}
