//! # Blueprint Lifecycle Hooks
//!
//! The service-registration framework calls into a blueprint at each step of
//! a service's life:
//!
//! 1. **Blueprint created** — the blueprint is published.
//! 2. **Register / unregister** — operators opt in or out.
//! 3. **Request → approve / reject → initialized** — a customer asks for a
//!    service instance and the chosen operators respond.
//! 4. **Job call → job result** — work is submitted and answered.
//! 5. **Slash** — misbehaving operators are penalised.
//! 6. **Termination** — the service instance ends.
//!
//! [`BlueprintServiceManager`] is that hook surface as a trait. Each method
//! has a default body that accepts (`Ok(())`), refuses membership changes
//! (`false`), or names the manager itself as the origin. A blueprint
//! overrides only the hooks it cares about, and one that overrides none is
//! still a complete blueprint.
//!
//! The chain supplies caller identity, block number and time implicitly to
//! a contract. Here they arrive explicitly as a [`HookContext`].

use chrono::{DateTime, Utc};
use dfns_protocol::crypto::{derive_operator_address, Address};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors a hook can return to abort the framework operation that called it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HookError {
    /// The caller is not allowed to invoke this hook.
    #[error("unauthorized caller: {caller}")]
    Unauthorized {
        /// The address that made the call.
        caller: Address,
    },

    /// The blueprint refused the operation.
    #[error("rejected by blueprint: {0}")]
    Rejected(String),
}

// ---------------------------------------------------------------------------
// Context
// ---------------------------------------------------------------------------

/// Execution context for a single hook invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookContext {
    /// Who invoked the hook.
    pub caller: Address,
    /// Address of the blueprint service manager being called.
    pub manager: Address,
    /// Address of the framework's master manager, the only legitimate caller
    /// of lifecycle hooks.
    pub master_manager: Address,
    /// The blueprint this manager serves.
    pub blueprint_id: u64,
    /// Block the hook executes in.
    pub block_number: u64,
    /// Timestamp of that block.
    pub timestamp: DateTime<Utc>,
}

impl HookContext {
    /// A context for a call made by the master manager itself, at block 0.
    ///
    /// The block timestamp starts at the Unix epoch; use [`at_block`](Self::at_block)
    /// to place the call in a real block.
    pub fn from_master(manager: Address, master_manager: Address, blueprint_id: u64) -> Self {
        Self {
            caller: master_manager,
            manager,
            master_manager,
            blueprint_id,
            block_number: 0,
            timestamp: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    /// Same context, different caller.
    pub fn with_caller(mut self, caller: Address) -> Self {
        self.caller = caller;
        self
    }

    /// Same context at a different block.
    pub fn at_block(mut self, block_number: u64, timestamp: DateTime<Utc>) -> Self {
        self.block_number = block_number;
        self.timestamp = timestamp;
        self
    }

    /// Whether the master manager made this call.
    pub fn is_root(&self) -> bool {
        self.caller == self.master_manager
    }

    /// Fail with [`HookError::Unauthorized`] unless the master manager made this call.
    pub fn require_root(&self) -> Result<(), HookError> {
        if self.is_root() {
            Ok(())
        } else {
            Err(HookError::Unauthorized {
                caller: self.caller,
            })
        }
    }
}

// ---------------------------------------------------------------------------
// Hook payloads
// ---------------------------------------------------------------------------

/// What an operator publishes when registering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorPreferences {
    /// The operator's ECDSA public key, in whatever encoding the framework uses.
    pub key: Vec<u8>,
    /// Where the operator's RPC endpoint can be reached.
    pub rpc_address: String,
}

impl OperatorPreferences {
    /// The operator's address, derived from [`key`](Self::key) as published.
    pub fn operator_address(&self) -> Address {
        derive_operator_address(&self.key)
    }
}

/// Per-resource prices an operator advertises, in the framework's smallest unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTargets {
    pub cpu: u64,
    pub mem: u64,
    pub storage_hdd: u64,
    pub storage_ssd: u64,
    pub storage_nvme: u64,
}

/// An asset a service can be paid in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Asset {
    /// A native runtime asset, by asset id.
    Custom(u128),
    /// An ERC-20 token, by contract address.
    Erc20(Address),
}

/// A customer's request for a new service instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRequest {
    pub request_id: u64,
    pub requester: Address,
    /// Operators asked to run the service.
    pub operators: Vec<OperatorPreferences>,
    /// Blueprint-specific request arguments, encoded by the framework.
    pub request_inputs: Vec<u8>,
    /// Accounts allowed to submit jobs to the instance.
    pub permitted_callers: Vec<Address>,
    /// Lifetime in blocks.
    pub ttl: u64,
    pub payment_asset: Asset,
    pub amount: u128,
}

/// A job submitted to a running service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobCall {
    pub service_id: u64,
    pub job: u8,
    pub call_id: u64,
    pub inputs: Vec<u8>,
}

/// An operator's answer to a job call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobResult {
    pub service_id: u64,
    pub job: u8,
    pub call_id: u64,
    pub operator: OperatorPreferences,
    pub inputs: Vec<u8>,
    pub outputs: Vec<u8>,
}

/// A slash against an operator, pending or applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slash {
    pub service_id: u64,
    /// The offending operator's key, as published in its preferences.
    pub offender: Vec<u8>,
    /// Percentage of the operator's stake to slash, `0..=100`.
    pub slash_percent: u8,
    pub total_slash: u128,
}

// ---------------------------------------------------------------------------
// BlueprintServiceManager
// ---------------------------------------------------------------------------

/// The lifecycle hook surface of a blueprint.
///
/// Every method has a default. Override selectively.
pub trait BlueprintServiceManager: Send + Sync {
    /// The blueprint was published under `blueprint_id`.
    fn on_blueprint_created(
        &self,
        _ctx: &HookContext,
        _blueprint_id: u64,
    ) -> Result<(), HookError> {
        Ok(())
    }

    /// An operator is registering for this blueprint.
    fn on_register(
        &self,
        _ctx: &HookContext,
        _operator: &OperatorPreferences,
        _registration_inputs: &[u8],
    ) -> Result<(), HookError> {
        Ok(())
    }

    /// An operator is leaving this blueprint.
    fn on_unregister(
        &self,
        _ctx: &HookContext,
        _operator: &OperatorPreferences,
    ) -> Result<(), HookError> {
        Ok(())
    }

    /// An operator changed its advertised prices.
    fn on_update_price_targets(
        &self,
        _ctx: &HookContext,
        _operator: &OperatorPreferences,
        _targets: &PriceTargets,
    ) -> Result<(), HookError> {
        Ok(())
    }

    /// A customer requested a new service instance.
    fn on_request(&self, _ctx: &HookContext, _request: &ServiceRequest) -> Result<(), HookError> {
        Ok(())
    }

    /// An operator accepted a service request.
    fn on_approve(
        &self,
        _ctx: &HookContext,
        _operator: &OperatorPreferences,
        _request_id: u64,
        _restaking_percent: u8,
    ) -> Result<(), HookError> {
        Ok(())
    }

    /// An operator declined a service request.
    fn on_reject(
        &self,
        _ctx: &HookContext,
        _operator: &OperatorPreferences,
        _request_id: u64,
    ) -> Result<(), HookError> {
        Ok(())
    }

    /// All operators approved and the instance is live.
    fn on_service_initialized(
        &self,
        _ctx: &HookContext,
        _request_id: u64,
        _service_id: u64,
        _owner: Address,
        _permitted_callers: &[Address],
        _ttl: u64,
    ) -> Result<(), HookError> {
        Ok(())
    }

    /// A job was submitted.
    fn on_job_call(&self, _ctx: &HookContext, _call: &JobCall) -> Result<(), HookError> {
        Ok(())
    }

    /// An operator submitted a job result.
    fn on_job_result(&self, _ctx: &HookContext, _result: &JobResult) -> Result<(), HookError> {
        Ok(())
    }

    /// The instance was terminated by its owner or expired.
    fn on_service_termination(
        &self,
        _ctx: &HookContext,
        _service_id: u64,
        _owner: Address,
    ) -> Result<(), HookError> {
        Ok(())
    }

    /// A slash was proposed and awaits dispute.
    fn on_unapplied_slash(&self, _ctx: &HookContext, _slash: &Slash) -> Result<(), HookError> {
        Ok(())
    }

    /// A slash was applied.
    fn on_slash(&self, _ctx: &HookContext, _slash: &Slash) -> Result<(), HookError> {
        Ok(())
    }

    /// Whether an operator may join a running instance.
    fn can_join(
        &self,
        _ctx: &HookContext,
        _service_id: u64,
        _operator: &OperatorPreferences,
    ) -> bool {
        false
    }

    /// Whether an operator may leave a running instance.
    fn can_leave(
        &self,
        _ctx: &HookContext,
        _service_id: u64,
        _operator: &OperatorPreferences,
    ) -> bool {
        false
    }

    /// The account allowed to propose slashes for an instance.
    fn query_slashing_origin(&self, ctx: &HookContext, _service_id: u64) -> Address {
        ctx.manager
    }

    /// The account allowed to dispute slashes for an instance.
    fn query_dispute_origin(&self, ctx: &HookContext, _service_id: u64) -> Address {
        ctx.manager
    }

    /// Whether an instance may be paid in `asset`.
    fn query_is_payment_asset_allowed(
        &self,
        _ctx: &HookContext,
        _service_id: u64,
        _asset: &Asset,
    ) -> bool {
        false
    }
}
