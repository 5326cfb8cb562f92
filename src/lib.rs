//! # chainspec-translator - Ethash genesis to client chain spec conversion
//!
//! Converts a geth-style Ethash genesis into the chain specification formats
//! of Aleth, Parity and PyEthereum, so nodes of those clients can join the
//! same network.

pub mod chainspec;
pub mod cli;
pub mod constants;
pub mod errors;
pub mod genesis;
pub mod output;
