//! # CLI Interface
//!
//! Defines the command-line argument structure for `dfns-node` using
//! `clap` derive. Supports three subcommands: `derive-address`,
//! `execution-id`, and `version`.

use clap::{Args, Parser, Subcommand, ValueEnum};
use dfns_protocol::execution::JobKind;

/// DFNS-CGGMP21 blueprint operator tooling.
///
/// Derives the identifiers an operator needs to line up with the rest of
/// its service: on-chain operator addresses and MPC execution ids.
#[derive(Parser, Debug)]
#[command(
    name = "dfns-node",
    about = "DFNS-CGGMP21 blueprint operator tooling",
    version,
    propagate_version = true
)]
pub struct DfnsNodeCli {
    /// Default log filter when `RUST_LOG` is not set.
    #[arg(
        long,
        global = true,
        env = "DFNS_LOG",
        default_value = "dfns_node=info,dfns_protocol=info"
    )]
    pub log_level: String,

    /// Log output format: `pretty` or `json`.
    #[arg(long, global = true, env = "DFNS_LOG_FORMAT", default_value = "pretty")]
    pub log_format: String,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the operator tool.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Derive an operator address from a public key.
    DeriveAddress(DeriveAddressArgs),
    /// Derive the store key and execution id for a job.
    ExecutionId(ExecutionIdArgs),
    /// Print version information and exit.
    Version,
}

/// Arguments for the `derive-address` subcommand.
#[derive(Args, Debug)]
pub struct DeriveAddressArgs {
    /// Hex-encoded public key, with or without `0x`.
    #[arg(long, short = 'k')]
    pub public_key: String,

    /// Parse the key as secp256k1 (33, 64 or 65 bytes) and hash its
    /// uncompressed `x || y` form. Without this flag the bytes are hashed
    /// exactly as given.
    #[arg(long)]
    pub normalize: bool,

    /// Print a JSON object instead of the bare address.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `execution-id` subcommand.
#[derive(Args, Debug)]
pub struct ExecutionIdArgs {
    /// The job being executed.
    #[arg(long, value_enum)]
    pub job: JobArg,

    /// Number of operators in the service.
    #[arg(long)]
    pub parties: u16,

    /// Blueprint id the service was instantiated from.
    #[arg(long)]
    pub blueprint_id: u64,

    /// Call id of this job.
    #[arg(long)]
    pub call_id: u64,

    /// Call id of the keygen a refresh or signing job operates on.
    #[arg(long)]
    pub keygen_call_id: Option<u64>,

    /// Print a JSON object instead of plain lines.
    #[arg(long)]
    pub json: bool,
}

/// Job names accepted on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum JobArg {
    Keygen,
    KeyRefresh,
    Sign,
}

impl From<JobArg> for JobKind {
    fn from(job: JobArg) -> Self {
        match job {
            JobArg::Keygen => JobKind::Keygen,
            JobArg::KeyRefresh => JobKind::KeyRefresh,
            JobArg::Sign => JobKind::Sign,
        }
    }
}
