//! Errors originating in the execution engine.

use crate::{ClassHash, ContractAddress, Felt, Selector, SyscallSelector};

/// A failure produced by the engine while servicing the syscall layer.
///
/// The cheatcode layer surfaces these unchanged; nothing here is
/// retried.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum EngineError {
    /// No contract is deployed at the requested address.
    #[error("no contract deployed at address {0}")]
    ContractNotDeployed(ContractAddress),

    /// The requested class hash has not been declared.
    #[error("class {0} has not been declared")]
    UndeclaredClass(ClassHash),

    /// The resolved code has no entry point with the given selector.
    #[error("entry point {selector} not found in {code}")]
    EntryPointNotFound {
        /// Code identity the lookup ran against.
        code: Felt,
        /// The missing selector.
        selector: Selector,
    },

    /// The pending instruction's operands could not be decoded.
    #[error("malformed {syscall:?} request: {reason}")]
    MalformedRequest {
        /// The instruction whose operands were being decoded.
        syscall: SyscallSelector,
        /// What the decoder rejected.
        reason: String,
    },

    /// The callee started executing and failed.
    #[error("execution failed: {0}")]
    ExecutionFailed(String),
}
