//! Syscall kinds and their decoded requests.

use crate::{CallTarget, Felt, Selector};

/// The instruction kinds routed through the syscall handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SyscallSelector {
    /// Invoke an entry point on a deployed contract.
    CallContract,
    /// Run a deployed contract's code in the caller's frame.
    DelegateCall,
    /// Run a deployed contract's L1 handler in the caller's frame.
    DelegateL1Handler,
    /// Run a declared class's code in the caller's frame.
    LibraryCall,
    /// Run a declared class's L1 handler in the caller's frame.
    LibraryCallL1Handler,
    GetCallerAddress,
    GetBlockNumber,
    GetBlockTimestamp,
    EmitEvent,
}

/// Operands of a pending call instruction, decoded from engine memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallRequest {
    /// The code identity being called.
    pub target: CallTarget,
    /// The entry point selector to invoke.
    pub selector: Selector,
    /// Arguments passed to the callee.
    pub calldata: Vec<Felt>,
}

/// Operands of a pending `emit_event` instruction, decoded from engine
/// memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventRequest {
    /// The event's key segment.
    pub keys: Vec<Felt>,
    /// The event's data segment.
    pub data: Vec<Felt>,
}
