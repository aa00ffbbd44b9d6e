//! Blocking mirror of the async client.
//!
//! Same command set, same dispatch path, same error taxonomy; the only
//! difference is the transport trait the caller wires in at construction
//! time. Neither client branches on a mode flag per call.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, trace};

use crate::codec;
use crate::commands;
use crate::endpoint::Endpoint;
use crate::error::Error;
use crate::transport::BlockingTransport;

macro_rules! blocking_command_methods {
    ($($method:literal => $fn:ident,)+) => {
        $(
            #[doc = concat!("Dispatch the wallet's `", $method, "` command.")]
            pub fn $fn(
                &self,
                params: Vec<serde_json::Value>,
            ) -> Result<serde_json::Value, Error> {
                self.call($method, params)
            }
        )+
    };
}

/// Synchronous wallet client over an injected [`BlockingTransport`].
///
/// See [`WalletClient`](crate::WalletClient) for the dispatch semantics;
/// they are identical.
pub struct BlockingWalletClient<T> {
    transport: T,
    endpoint: Endpoint,
    next_id: AtomicU64,
}

impl<T: BlockingTransport> BlockingWalletClient<T> {
    /// Create a client bound to `endpoint`, dispatching through `transport`.
    pub fn new(endpoint: Endpoint, transport: T) -> Self {
        Self {
            transport,
            endpoint,
            next_id: AtomicU64::new(1),
        }
    }

    /// The endpoint this client dispatches to.
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Dispatch one wallet command. See
    /// [`WalletClient::call`](crate::WalletClient::call).
    pub fn call(
        &self,
        method: &str,
        params: Vec<serde_json::Value>,
    ) -> Result<serde_json::Value, Error> {
        if !commands::is_command(method) {
            return Err(Error::UnknownCommand(method.to_owned()));
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        debug!(
            rpc.id = id,
            rpc.method = method,
            rpc.params = params.len(),
            "rpc call"
        );
        let request = codec::build_request(id, method, params);

        let response = self.transport.post(&self.endpoint, request)?;
        trace!(rpc.id = id, rpc.method = method, body = %response, "rpc response");
        codec::interpret_response(response)
    }

    commands::for_each_command!(blocking_command_methods);
}
