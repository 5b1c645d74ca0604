//! Invictus (IVC) parameter tool
//!
//! Selects a network the way the node does at startup and prints the
//! parameters it would run with.

use clap::Parser;
use ivc_params::chainparams::{current_parameters, select_network_from_command_line};
use ivc_params::config::NetworkArgs;
use std::process;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "ivc-params")]
#[command(about = "Show Invictus network parameters", long_about = None)]
struct Cli {
    #[command(flatten)]
    network: NetworkArgs,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Print parameters as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    if !select_network_from_command_line(&cli.network) {
        eprintln!(
            "Error: invalid combination of network selectors \
             (use one of --testnet, --unittest, --network)"
        );
        process::exit(1);
    }

    let params = current_parameters();
    info!(network = %params.network_id, genesis = %params.genesis_hash, "parameters ready");
    let summary = params.summary();

    if cli.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: failed to serialize parameters: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    println!("Network:        {}", summary.network);
    println!("Magic:          {}", summary.message_start);
    println!("Port:           {}", summary.default_port);
    println!("Genesis:        {}", summary.genesis_hash);
    println!("Merkle Root:    {}", summary.genesis_merkle_root);
    println!("Genesis Time:   {}", summary.genesis_time);
    println!("PoW Limit:      0x{}", summary.pow_limit_bits);
    println!("Halving:        every {} blocks", summary.subsidy_halving_interval);
    println!("Retarget:       {}s / {}s", summary.target_timespan, summary.target_spacing);
    match summary.enforce_v2_after_height {
        Some(height) => println!("V2 Enforced:    after block {}", height),
        None => println!("V2 Enforced:    by supermajority"),
    }
    println!("Prefixes:");
    for (kind, prefix) in &summary.address_prefixes {
        println!("  {:<16} {}", format!("{:?}", kind), prefix);
    }
    println!("DNS Seeds:      {}", summary.dns_seeds.len());
    for seed in &summary.dns_seeds {
        println!("  {}", seed);
    }
    println!("Fixed Seeds:    {}", summary.fixed_seeds.len());
    for seed in &summary.fixed_seeds {
        println!("  {}", seed);
    }
    println!("Checkpoints:");
    for (height, hash) in &summary.checkpoints {
        println!("  {:>8} {}", height, hash);
    }
}

fn init_logging(level: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt().with_env_filter(filter).with_target(true).init();
}
