//! Cheatcode errors.

use feltforge_vm_core::{ContractAddress, EngineError, Selector, SyscallSelector};

/// A test-authoring mistake in how overrides were used.
///
/// These abort the current test case and are never retried.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum CheatcodeError {
    /// A caller override was added for a contract that already has one.
    #[error("contract {0} has already been pranked")]
    AlreadyPranked(ContractAddress),

    /// A caller override was cleared for a contract that has none.
    #[error("contract {0} has not been pranked")]
    NotPranked(ContractAddress),

    /// A mock was registered twice for the same contract and selector.
    #[error("selector {selector} of contract {contract} has already been mocked")]
    AlreadyMocked {
        /// The contract whose call was being mocked.
        contract: ContractAddress,
        /// The already-registered selector.
        selector: Selector,
    },

    /// A mock was removed for a contract and selector that has none.
    #[error("no mock registered for selector {selector} of contract {contract}")]
    NotMocked {
        /// The contract named in the removal.
        contract: ContractAddress,
        /// The selector no mock was registered for.
        selector: Selector,
    },

    /// The dispatcher was handed an instruction kind it does not handle.
    #[error("unsupported call variant `{0:?}`")]
    UnsupportedCallVariant(SyscallSelector),
}

/// Any failure surfaced by a cheatcode handler entry point.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// A misuse of the override surface itself.
    #[error(transparent)]
    Cheatcode(#[from] CheatcodeError),

    /// An engine failure, passed through unchanged.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Result type for cheatcode handler operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
