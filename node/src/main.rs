// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # DFNS Operator Tool
//!
//! Entry point for the `dfns-node` binary. Parses CLI arguments, initializes
//! logging, and runs one derivation.
//!
//! The binary supports three subcommands:
//!
//! - `derive-address` — operator address from a public key
//! - `execution-id`   — store key and MPC execution id for a job
//! - `version`        — print build version information

mod cli;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use dfns_protocol::crypto::{derive_operator_address, Address, OperatorPublicKey};
use dfns_protocol::execution::{ExecutionParams, JobKind};

use cli::{Commands, DeriveAddressArgs, DfnsNodeCli, ExecutionIdArgs};
use logging::LogFormat;

/// JSON shape of `derive-address --json`.
#[derive(Debug, Serialize)]
struct AddressReport {
    public_key: String,
    normalized: bool,
    address: Address,
}

/// JSON shape of `execution-id --json`.
#[derive(Debug, Serialize)]
struct ExecutionReport {
    job: JobKind,
    parties: u16,
    blueprint_id: u64,
    call_id: u64,
    keygen_call_id: Option<u64>,
    store_key: String,
    execution_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    aux_info_execution_id: Option<String>,
}

fn main() -> Result<()> {
    let cli = DfnsNodeCli::parse();
    logging::init_logging(&cli.log_level, LogFormat::from_str_lossy(&cli.log_format));

    match cli.command {
        Commands::DeriveAddress(args) => derive_address(&args),
        Commands::ExecutionId(args) => execution_id(&args),
        Commands::Version => {
            print_version();
            Ok(())
        }
    }
}

/// Derives an operator address from the `derive-address` arguments.
fn address_report(args: &DeriveAddressArgs) -> Result<AddressReport> {
    let address = if args.normalize {
        let key = OperatorPublicKey::from_hex(&args.public_key)
            .context("public key is not a valid secp256k1 key")?;
        tracing::info!(key = %key, "normalized operator key");
        key.derive_address()
    } else {
        let stripped = args
            .public_key
            .strip_prefix("0x")
            .unwrap_or(&args.public_key);
        let bytes = hex::decode(stripped).context("public key is not valid hex")?;
        if bytes.is_empty() {
            tracing::warn!("deriving an address from an empty public key");
        }
        derive_operator_address(&bytes)
    };

    tracing::info!(%address, normalized = args.normalize, "derived operator address");

    Ok(AddressReport {
        public_key: args.public_key.clone(),
        normalized: args.normalize,
        address,
    })
}

/// Derives and prints an operator address.
fn derive_address(args: &DeriveAddressArgs) -> Result<()> {
    let report = address_report(args)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.address);
    }
    Ok(())
}

/// Derives the store key and execution ids from the `execution-id` arguments.
fn execution_report(args: &ExecutionIdArgs) -> Result<ExecutionReport> {
    let params = ExecutionParams {
        job: args.job.into(),
        parties: args.parties,
        blueprint_id: args.blueprint_id,
        call_id: args.call_id,
        keygen_call_id: args.keygen_call_id,
    };
    let ids = params
        .derive()
        .with_context(|| format!("failed to derive {} execution id", params.job))?;

    tracing::info!(
        job = %params.job,
        store_key = %ids.store_key,
        "derived execution id"
    );

    Ok(ExecutionReport {
        job: params.job,
        parties: params.parties,
        blueprint_id: params.blueprint_id,
        call_id: params.call_id,
        keygen_call_id: params.keygen_call_id,
        execution_id: ids.execution_id_hex(),
        aux_info_execution_id: ids.aux_info_execution_id_hex(),
        store_key: ids.store_key,
    })
}

/// Derives and prints the store key and execution ids for a job.
fn execution_id(args: &ExecutionIdArgs) -> Result<()> {
    let report = execution_report(args)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("store_key    {}", report.store_key);
        if let Some(aux_info) = &report.aux_info_execution_id {
            println!("aux_info_id  {aux_info}");
        }
        println!("execution_id {}", report.execution_id);
    }
    Ok(())
}

/// Prints version information to stdout.
fn print_version() {
    println!("dfns-node {}", env!("CARGO_PKG_VERSION"));
    println!("protocol  {}", dfns_protocol::config::PROTOCOL_VERSION);
    println!("network   {}", dfns_protocol::config::NETWORK_PROTOCOL);
}
