use crate::chainspec::Dialect;
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the chain spec translator
#[derive(Parser, Debug)]
#[command(
    name = "chainspec-translator",
    about = "Export an Ethash genesis as Aleth, Parity and PyEthereum chain specs"
)]
pub struct Cli {
    /// Path to a geth-style genesis JSON file
    #[arg(long, env = "GENESIS_FILE", required_unless_present = "sample")]
    pub genesis: Option<PathBuf>,

    /// Network name, used for file names and the Parity spec name
    #[arg(long, default_value = "private", env = "NETWORK_NAME")]
    pub network: String,

    /// Directory the chain specs are written to
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Comma-separated bootnode enode URLs for the Parity spec.
    /// Example: enode://pubkey@ip:port,enode://pubkey2@ip2:port2
    #[arg(long, value_delimiter = ',')]
    pub bootnodes: Vec<String>,

    /// Comma-separated list of dialects to export (aleth, parity, python).
    /// Defaults to all of them.
    #[arg(long, value_delimiter = ',')]
    pub dialects: Vec<Dialect>,

    /// Translate a built-in sample genesis instead of reading one
    #[arg(long, conflicts_with = "genesis")]
    pub sample: bool,
}

impl Cli {
    /// Dialects selected on the command line, all of them when none were given.
    pub fn selected_dialects(&self) -> Vec<Dialect> {
        if self.dialects.is_empty() {
            return Dialect::ALL.to_vec();
        }
        let mut dialects = self.dialects.clone();
        dialects.sort();
        dialects.dedup();
        dialects
    }
}
