//! # DFNS Blueprint Service Managers
//!
//! On-chain side of the DFNS-CGGMP21 blueprint. The service-registration
//! framework drives a blueprint through a fixed set of lifecycle hooks;
//! this crate defines that hook surface and the two blueprints built on it:
//!
//! - **Hooks** — [`hooks::BlueprintServiceManager`], a trait whose every
//!   method has a permissive or no-op default, plus the explicit
//!   [`hooks::HookContext`] each hook receives.
//! - **Pass-through** — [`pass_through::PassThroughBlueprint`], which
//!   overrides nothing.
//! - **DFNS** — [`dfns_blueprint::DfnsBlueprint`], which overrides nothing
//!   of the hook surface and adds operator address derivation.
//!
//! ## Design Principles
//!
//! 1. Hook semantics belong to the framework. A blueprint with zero
//!    overrides is a valid blueprint.
//! 2. Context is an argument, never ambient state.
//! 3. Every blueprint is `Send + Sync` and usable as a trait object.
//! 4. Every public type is serializable (serde) for wire transport.

pub mod dfns_blueprint;
pub mod hooks;
pub mod pass_through;

pub use dfns_blueprint::DfnsBlueprint;
pub use hooks::{BlueprintServiceManager, HookContext, HookError};
pub use pass_through::PassThroughBlueprint;
