use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, trace};

use crate::codec;
use crate::commands;
use crate::endpoint::Endpoint;
use crate::error::Error;
use crate::transport::Transport;

macro_rules! command_methods {
    ($($method:literal => $fn:ident,)+) => {
        $(
            #[doc = concat!("Dispatch the wallet's `", $method, "` command.")]
            pub async fn $fn(
                &self,
                params: Vec<serde_json::Value>,
            ) -> Result<serde_json::Value, Error> {
                self.call($method, params).await
            }
        )+
    };
}

/// Asynchronous wallet client over an injected [`Transport`].
///
/// Holds the resolved endpoint, the transport, and a request-id counter;
/// nothing else. Every call is an independent request/response cycle, so one
/// client serves any number of concurrent calls with no internal locking and
/// no bound on in-flight requests.
pub struct WalletClient<T> {
    transport: T,
    endpoint: Endpoint,
    next_id: AtomicU64,
}

impl<T: Transport> WalletClient<T> {
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

    /// Dispatch one wallet command.
    ///
    /// `method` must be in the generated [`COMMANDS`](crate::COMMANDS) set;
    /// unknown names fail before the transport is touched. `params` pass
    /// through to the wallet verbatim and the raw `result` value comes back
    /// unmodified — argument and shape validation is the wallet's contract,
    /// not the client's.
    pub async fn call(
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

        let response = self.transport.post(&self.endpoint, request).await?;
        trace!(rpc.id = id, rpc.method = method, body = %response, "rpc response");
        codec::interpret_response(response)
    }

    commands::for_each_command!(command_methods);
}
