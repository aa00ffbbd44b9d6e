mod cli;

use clap::Parser;
use eyre::{eyre, WrapErr};

use gridcoin_rpc::transport::HttpTransport;
use gridcoin_rpc::{Endpoint, Error, Network, WalletClient};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let endpoint = resolve_endpoint(&args).wrap_err("resolve wallet RPC endpoint")?;
    tracing::debug!(url = endpoint.url(), "resolved endpoint");
    let client = WalletClient::new(endpoint, HttpTransport::new());

    let params: Vec<serde_json::Value> = args.params.iter().map(|raw| parse_param(raw)).collect();

    match client.call(&args.command, params).await {
        Ok(result) => {
            println!(
                "{}",
                serde_json::to_string_pretty(&result).wrap_err("render result")?
            );
            Ok(())
        }
        Err(Error::Wallet(err)) => {
            eprintln!("error (code {}): {}", err.code, err.message);
            std::process::exit(1);
        }
        Err(Error::UnknownCommand(name)) => {
            eprintln!("`{name}` is not a wallet command; run `gridcoin-cli help` for the list");
            std::process::exit(2);
        }
        Err(other) => Err(other).wrap_err("RPC call failed"),
    }
}

/// Endpoint precedence: explicit URL, then the wallet config file; explicit
/// --rpc-user/--rpc-pass win over credentials from either source.
fn resolve_endpoint(args: &cli::Cli) -> eyre::Result<Endpoint> {
    let network = if args.testnet {
        Network::Testnet
    } else {
        Network::Mainnet
    };

    let endpoint = match &args.rpc_url {
        Some(url) => Endpoint::new(url)?,
        None => Endpoint::from_wallet_config(network)?,
    };

    match (&args.rpc_user, &args.rpc_pass) {
        (Some(user), Some(pass)) => Ok(Endpoint::with_auth(endpoint.url(), user, pass)?),
        (None, None) => Ok(endpoint),
        _ => Err(eyre!("--rpc-user and --rpc-pass must be set together")),
    }
}

/// Interpret one positional argument: JSON if it parses, a bare string
/// otherwise, so `gridcoin-cli getblockhash 5` and
/// `gridcoin-cli validateaddress S9TBe...` both do what they look like.
fn parse_param(raw: &str) -> serde_json::Value {
    serde_json::from_str(raw).unwrap_or_else(|_| serde_json::Value::String(raw.to_owned()))
}
