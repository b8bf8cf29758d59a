//! # Execution Ids
//!
//! Every job the blueprint runs is an MPC session between all operators of a
//! service. The operators never talk about which session they are in; each
//! one derives the same 32-byte execution id from public job parameters.
//! The keygen output is stored locally under a key derived the same way, so
//! that later refresh and signing jobs can find it again from nothing but
//! the keygen call id.
//!
//! ```text
//! meta     = SHA-256(n_be16 || blueprint_id_be64 || keygen_call_id_be64 || "dfns")
//! keygen   = SHA-256(meta || "dfns-keygen")
//! store    = hex(meta)
//!
//! keygen eid      = keygen
//! aux-info eid    = SHA-256(keygen)
//! key-refresh eid = SHA-256(SHA-256(keygen) || call_id_be64 || "dfns-key-refresh")
//! sign eid        = SHA-256(keygen || call_id_be64 || "dfns-signing")
//! ```
//!
//! A key-refresh job runs two sessions back to back: aux-info generation,
//! then the refresh itself. Only refresh has an aux-info id.
//!
//! Refresh and signing reuse the keygen meta hash (to find the stored share)
//! but mix in their own call id so two signing calls never share a session.

use crate::config::{
    KEYGEN_JOB_ID, KEYGEN_SALT, KEY_REFRESH_JOB_ID, KEY_REFRESH_SALT, META_SALT, SIGNING_SALT,
    SIGN_JOB_ID,
};
use crate::crypto::hash::{sha256, sha256_multi};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur while deriving execution ids.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExecutionError {
    /// Refresh and signing jobs operate on an earlier keygen result.
    #[error("{0} job requires the call id of the keygen it operates on")]
    MissingKeygenCallId(JobKind),

    /// The job id does not name a blueprint job.
    #[error("unknown job id: {0}")]
    UnknownJob(u8),

    /// A session needs at least one party.
    #[error("execution requires at least one party")]
    NoParties,
}

/// The jobs the blueprint exposes, by on-chain job id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobKind {
    Keygen,
    KeyRefresh,
    Sign,
}

impl JobKind {
    /// The on-chain job id.
    pub fn id(self) -> u8 {
        match self {
            JobKind::Keygen => KEYGEN_JOB_ID,
            JobKind::KeyRefresh => KEY_REFRESH_JOB_ID,
            JobKind::Sign => SIGN_JOB_ID,
        }
    }
}

impl TryFrom<u8> for JobKind {
    type Error = ExecutionError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            KEYGEN_JOB_ID => Ok(JobKind::Keygen),
            KEY_REFRESH_JOB_ID => Ok(JobKind::KeyRefresh),
            SIGN_JOB_ID => Ok(JobKind::Sign),
            other => Err(ExecutionError::UnknownJob(other)),
        }
    }
}

impl fmt::Display for JobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobKind::Keygen => write!(f, "keygen"),
            JobKind::KeyRefresh => write!(f, "key-refresh"),
            JobKind::Sign => write!(f, "sign"),
        }
    }
}

/// The meta hash and keygen hash for a keygen session.
///
/// The meta hash names the stored keygen output; the keygen hash is the
/// keygen execution id and the base for refresh and signing ids.
pub fn compute_deterministic_hashes(
    parties: u16,
    blueprint_id: u64,
    keygen_call_id: u64,
) -> ([u8; 32], [u8; 32]) {
    let meta_hash = sha256_multi(&[
        &parties.to_be_bytes(),
        &blueprint_id.to_be_bytes(),
        &keygen_call_id.to_be_bytes(),
        META_SALT.as_bytes(),
    ]);
    let keygen_hash = sha256_multi(&[&meta_hash, KEYGEN_SALT.as_bytes()]);
    (meta_hash, keygen_hash)
}

/// Public inputs to an execution id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionParams {
    /// Which job is running.
    pub job: JobKind,
    /// Number of operators in the service.
    pub parties: u16,
    /// The blueprint the service was instantiated from.
    pub blueprint_id: u64,
    /// Call id of this job.
    pub call_id: u64,
    /// Call id of the keygen a refresh or signing job operates on. Ignored
    /// for keygen, which is its own keygen call.
    pub keygen_call_id: Option<u64>,
}

/// Derived identifiers for one job execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionIds {
    /// Hex key under which the keygen output is stored.
    pub store_key: String,
    /// The 32-byte MPC execution id.
    pub execution_id: [u8; 32],
    /// Execution id of the aux-info session that precedes a key refresh.
    /// `None` for every other job.
    pub aux_info_execution_id: Option<[u8; 32]>,
}

impl ExecutionIds {
    pub fn execution_id_hex(&self) -> String {
        hex::encode(self.execution_id)
    }

    pub fn aux_info_execution_id_hex(&self) -> Option<String> {
        self.aux_info_execution_id.map(hex::encode)
    }
}

impl ExecutionParams {
    /// Derive the store key and execution id.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError::NoParties`] if `parties` is zero, and
    /// [`ExecutionError::MissingKeygenCallId`] for refresh or signing jobs
    /// without a keygen call id.
    pub fn derive(&self) -> Result<ExecutionIds, ExecutionError> {
        if self.parties == 0 {
            return Err(ExecutionError::NoParties);
        }

        let keygen_call_id = match self.job {
            JobKind::Keygen => self.call_id,
            job => self
                .keygen_call_id
                .ok_or(ExecutionError::MissingKeygenCallId(job))?,
        };

        let (meta_hash, keygen_hash) =
            compute_deterministic_hashes(self.parties, self.blueprint_id, keygen_call_id);

        let call_id = self.call_id.to_be_bytes();
        let (execution_id, aux_info_execution_id) = match self.job {
            JobKind::Keygen => (keygen_hash, None),
            JobKind::KeyRefresh => {
                let aux_info = sha256(&keygen_hash);
                let refresh = sha256_multi(&[&aux_info, &call_id, KEY_REFRESH_SALT.as_bytes()]);
                (refresh, Some(aux_info))
            }
            JobKind::Sign => (
                sha256_multi(&[&keygen_hash, &call_id, SIGNING_SALT.as_bytes()]),
                None,
            ),
        };

        let ids = ExecutionIds {
            store_key: hex::encode(meta_hash),
            execution_id,
            aux_info_execution_id,
        };
        tracing::debug!(
            job = %self.job,
            parties = self.parties,
            call_id = self.call_id,
            keygen_call_id,
            eid = %ids.execution_id_hex(),
            "derived execution id"
        );
        Ok(ids)
    }
}
