use clap::Parser;

/// gridcoin-cli — dispatch one RPC command to a Gridcoin wallet.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Wallet RPC URL; userinfo credentials are honored. When omitted, the
    /// endpoint is resolved from the wallet's own config file.
    #[arg(long, env = "GRIDCOIN_RPC_URL")]
    pub rpc_url: Option<String>,

    /// RPC username (with --rpc-pass; overrides URL/config credentials).
    #[arg(long, env = "GRIDCOIN_RPC_USER")]
    pub rpc_user: Option<String>,

    /// RPC password.
    #[arg(long, env = "GRIDCOIN_RPC_PASS")]
    pub rpc_pass: Option<String>,

    /// Resolve the testnet wallet config instead of mainnet.
    #[arg(long)]
    pub testnet: bool,

    /// Wallet command to dispatch.
    pub command: String,

    /// Positional arguments, each parsed as JSON with bare-string fallback.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub params: Vec<String>,
}
