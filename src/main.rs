use chainspec_translator::chainspec::{self, ForkSchedule};
use chainspec_translator::cli::Cli;
use chainspec_translator::genesis::{self, GenesisConfig};
use chainspec_translator::output;

use clap::Parser;
use reth_tracing::tracing::{debug, info, warn};

/// Main entry point for the chain spec translator
fn main() -> eyre::Result<()> {
    // Initialize tracing
    reth_tracing::init_test_tracing();

    let cli = Cli::parse();

    let (genesis, source) = match (&cli.genesis, cli.sample) {
        (Some(path), _) => (genesis::read_genesis_file(path)?, path.display().to_string()),
        (None, true) => (GenesisConfig::sample().build(), "built-in sample".to_string()),
        (None, false) => eyre::bail!("either --genesis or --sample is required"),
    };

    output::print_banner(
        &cli.network,
        genesis.config.chain_id,
        &ForkSchedule::from_genesis(&genesis),
    );
    output::print_genesis_source(&source);
    println!();

    std::fs::create_dir_all(&cli.out_dir)?;

    let dialects = cli.selected_dialects();
    let mut written = 0;
    for dialect in &dialects {
        let document = match chainspec::translate(*dialect, &cli.network, &genesis, &cli.bootnodes)
        {
            Ok(document) => document,
            Err(err) => {
                // Other dialects may still accept this genesis
                warn!(target: "chainspec", %dialect, %err, "Failed to create chain spec");
                output::print_spec_skipped(*dialect, &err.to_string());
                continue;
            }
        };
        let path = genesis::write_spec_file(&cli.out_dir, &cli.network, &document)?;
        debug!(target: "chainspec", %dialect, path = %path.display(), "Chain spec written");
        output::print_spec_written(*dialect, &path);
        written += 1;
    }

    output::print_summary(written, dialects.len());
    info!(target: "chainspec", written, requested = dialects.len(), "Export finished");

    if written == 0 {
        eyre::bail!("genesis could not be translated into any requested dialect");
    }
    Ok(())
}
