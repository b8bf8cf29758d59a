//! # Operator Set
//!
//! The ordered set of operators running a service. Every operator builds
//! the same set from chain state and then looks itself up to learn which
//! party index it plays in keygen, key refresh, and signing.

use crate::config::MAX_OPERATORS;
use crate::crypto::address::Address;
use crate::crypto::keys::OperatorPublicKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors that can occur while maintaining an operator set.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OperatorSetError {
    /// An operator with this address is already in the set.
    #[error("operator {0} is already registered")]
    AlreadyRegistered(Address),

    /// No operator with this address is in the set.
    #[error("operator {0} is not registered")]
    NotRegistered(Address),

    /// The set is full; party indices would no longer fit in a `u16`.
    #[error("operator set is full ({max} operators)")]
    TooManyOperators {
        /// The maximum number of operators.
        max: usize,
    },
}

/// Operators keyed by their derived address.
///
/// Serialized as the list of keys in party order. Deserializing registers
/// each key in turn, so a stored set is held to the same rules as a live one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<OperatorPublicKey>", into = "Vec<OperatorPublicKey>")]
pub struct OperatorSet {
    operators: BTreeMap<Address, OperatorPublicKey>,
}

impl OperatorSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an operator, returning the address it is registered under.
    ///
    /// # Errors
    ///
    /// Returns [`OperatorSetError::AlreadyRegistered`] if the key's address
    /// is already present, and [`OperatorSetError::TooManyOperators`] once
    /// the set holds [`MAX_OPERATORS`] entries.
    pub fn register(&mut self, key: OperatorPublicKey) -> Result<Address, OperatorSetError> {
        let address = key.derive_address();
        if self.operators.contains_key(&address) {
            return Err(OperatorSetError::AlreadyRegistered(address));
        }
        if self.operators.len() >= MAX_OPERATORS {
            return Err(OperatorSetError::TooManyOperators { max: MAX_OPERATORS });
        }
        self.operators.insert(address, key);
        tracing::debug!(%address, operators = self.operators.len(), "operator registered");
        Ok(address)
    }

    /// Remove an operator, returning its key.
    pub fn unregister(&mut self, address: &Address) -> Result<OperatorPublicKey, OperatorSetError> {
        let key = self
            .operators
            .remove(address)
            .ok_or(OperatorSetError::NotRegistered(*address))?;
        tracing::debug!(%address, operators = self.operators.len(), "operator unregistered");
        Ok(key)
    }

    /// The party index of an operator: its position in address order.
    pub fn party_index(&self, address: &Address) -> Option<u16> {
        // The set never exceeds MAX_OPERATORS, so the position fits.
        self.operators
            .keys()
            .position(|a| a == address)
            .map(|i| i as u16)
    }

    /// Party index to key, the form the MPC network layer consumes.
    pub fn parties(&self) -> BTreeMap<u16, OperatorPublicKey> {
        self.operators
            .values()
            .enumerate()
            .map(|(i, key)| (i as u16, key.clone()))
            .collect()
    }

    /// Look up an operator's key.
    pub fn get(&self, address: &Address) -> Option<&OperatorPublicKey> {
        self.operators.get(address)
    }

    pub fn contains(&self, address: &Address) -> bool {
        self.operators.contains_key(address)
    }

    /// Registered addresses in party order.
    pub fn addresses(&self) -> impl Iterator<Item = &Address> {
        self.operators.keys()
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}

impl TryFrom<Vec<OperatorPublicKey>> for OperatorSet {
    type Error = OperatorSetError;

    fn try_from(keys: Vec<OperatorPublicKey>) -> Result<Self, Self::Error> {
        let mut set = Self::new();
        for key in keys {
            set.register(key)?;
        }
        Ok(set)
    }
}

impl From<OperatorSet> for Vec<OperatorPublicKey> {
    fn from(set: OperatorSet) -> Self {
        set.operators.into_values().collect()
    }
}
