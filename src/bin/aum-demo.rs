//! Scripted tour of the AUMChain engine: submit transactions, run mining
//! passes, validate the chain, and print the resulting ledger. This is
//! presentation glue over the engine API; nothing here affects integrity.

use clap::Parser;
use colored::Colorize;

use aumchain::blockchain::{Ledger, MineOutcome};
use aumchain::config::load_config;
use aumchain::crypto;

#[derive(Parser, Debug)]
#[command(name = "aum-demo", about = "Sharded proof-of-work ledger demo")]
struct Args {
    /// Path to the TOML configuration (defaults apply when absent)
    #[arg(long, default_value = "aum.toml")]
    config: String,

    /// Transactions submitted per mining pass
    #[arg(long, default_value_t = 5)]
    transactions: u32,

    /// Number of mining passes to run
    #[arg(long, default_value_t = 2)]
    passes: u32,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = match load_config(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            std::process::exit(1);
        }
    };

    let mut ledger = Ledger::new(config);
    println!(
        "Genesis ready: difficulty {}, shards {}, supply {}/{}",
        ledger.difficulty(),
        ledger.shard_count(),
        ledger.current_supply(),
        ledger.total_supply()
    );

    // One checked submission to exercise the collaborator path.
    let investor = crypto::derive_address("investor-secret");
    let outcome = ledger.add_transaction_checked(&investor, "investor-secret", "Akshay", 250.0);
    println!("Checked submission: {:?}", outcome);

    for pass in 1..=args.passes {
        for i in 0..args.transactions {
            ledger.add_transaction(
                format!("Investor-{}", i),
                "Akshay",
                100.0 + f64::from(i),
            );
        }
        ledger.register_asset("Akshay", format!("deed-{}", pass), "demo asset");

        match ledger.mine() {
            MineOutcome::Mined(report) => println!("Pass {}: {}", pass, report),
            MineOutcome::NothingPending => println!("Pass {}: nothing to mine", pass),
        }
    }

    if ledger.is_chain_valid() {
        println!("{}", "Chain is valid.".green());
    } else {
        println!("{}", "Chain is INVALID.".red().bold());
    }

    println!("\nLedger ({} blocks):", ledger.chain.len());
    for block in &ledger.chain {
        println!(
            "  Block {:>3} (shard {}) nonce={:>6} txs={} hash={}...",
            block.index,
            block.shard_id,
            block.nonce,
            block.transactions.len(),
            &block.hash[..16]
        );
    }
    println!(
        "\nDifficulty now {}, supply {}/{}",
        ledger.difficulty(),
        ledger.current_supply(),
        ledger.total_supply()
    );
}
