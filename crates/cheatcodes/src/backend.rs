//! The engine-side services the cheatcode layer consumes.

use crate::Cheatcodes;
use feltforge_vm_core::{
    CallEntryPoint, CallRequest, EngineError, EventRequest, ExecutionContext, Retdata,
    SyscallSelector, TransactionContext,
};

/// Engine services backing one executing frame.
///
/// The engine provides an implementor per entry-point invocation; the
/// [`CheatcodeHandler`](crate::CheatcodeHandler) wraps it and delegates
/// to it whenever no override applies.
pub trait SyscallBackend {
    /// The frame currently executing.
    fn context(&self) -> &ExecutionContext;

    /// Block number, absent any override.
    fn block_number(&self) -> u64;

    /// Block timestamp, absent any override.
    fn block_timestamp(&self) -> u64;

    /// Decodes the pending call instruction's operands from the
    /// engine's memory.
    fn read_call_request(&mut self, selector: SyscallSelector) -> Result<CallRequest, EngineError>;

    /// Decodes the pending `emit_event` instruction's operands.
    fn read_event_request(&mut self) -> Result<EventRequest, EngineError>;

    /// Runs a resolved invocation to completion and returns its output.
    ///
    /// Implementations must route every syscall the callee performs
    /// through a fresh [`CheatcodeHandler`](crate::CheatcodeHandler)
    /// wired to the same `cheats` and `tx`, so overrides set before the
    /// call remain visible to the whole nested chain.
    fn execute_entry_point(
        &mut self,
        call: CallEntryPoint,
        cheats: &mut Cheatcodes,
        tx: &mut TransactionContext,
    ) -> Result<Retdata, EngineError>;
}
