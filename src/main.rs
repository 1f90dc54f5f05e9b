//! Command-line access to the token and marketplace contracts.
//!
//! Loads configuration (defaults to a local development node on 9545), builds
//! the contract bindings and runs one query against the node.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use marketplace_contracts::config::{load_config, ContractsConfig};
use marketplace_contracts::observability::logging;
use marketplace_contracts::{ContractBindings, ContractError, DeployedContract};

#[derive(Parser)]
#[command(name = "marketplace-contracts")]
#[command(about = "Inspect the token and marketplace contracts on an RPC node", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured RPC endpoint.
    #[arg(long)]
    rpc_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show endpoint, network and resolved contract addresses
    Status,
    /// List accounts managed by the node
    Accounts,
    /// List the methods a contract's ABI declares
    Methods {
        #[arg(value_enum)]
        contract: ContractKind,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ContractKind {
    Token,
    Marketplace,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ContractsConfig::default(),
    };
    if let Some(url) = cli.rpc_url {
        config.rpc.url = url;
    }

    logging::init(&config.observability.log_level);

    let bindings = ContractBindings::from_config(&config)?;

    match cli.command {
        Commands::Status => {
            let transport = bindings.transport();
            println!("endpoint:    {}", transport.endpoint());
            println!("network id:  {}", transport.net_version().await?);
            println!("block:       {}", transport.block_number().await?);
            print_resolution("token", bindings.resolve_token_contract().await);
            print_resolution("marketplace", bindings.resolve_marketplace_contract().await);
        }
        Commands::Accounts => {
            for account in bindings.transport().accounts().await? {
                println!("{}", account);
            }
        }
        Commands::Methods { contract } => {
            let factory = match contract {
                ContractKind::Token => bindings.token_factory(),
                ContractKind::Marketplace => bindings.marketplace_factory(),
            };
            for name in factory.artifact().method_names() {
                println!("{}", name);
            }
        }
    }

    Ok(())
}

fn print_resolution(label: &str, result: Result<DeployedContract, ContractError>) {
    let label = format!("{}:", label);
    match result {
        Ok(contract) => println!(
            "{:<12} {} at {}",
            label,
            contract.contract_name(),
            contract.address()
        ),
        Err(e) => println!("{:<12} unavailable ({})", label, e),
    }
}
