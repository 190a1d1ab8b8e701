//! The engine-facing interception layer.

use crate::{CheatcodeError, Cheatcodes, Result, SyscallBackend};
use feltforge_vm_core::{
    CallEntryPoint, CallRequest, CallTarget, CallType, ContractAddress, EngineError,
    EntryPointType, Retdata, SyscallSelector, TransactionContext,
};

/// Intercepts one frame's syscalls and substitutes test-controlled
/// values before falling back to the engine.
///
/// The engine constructs one handler per executing frame, over that
/// frame's [`SyscallBackend`]; the override store and the transaction
/// context are borrowed from the run and shared by every frame of the
/// chain. Exposes the same handler surface the engine expects from its
/// own default syscall handling, so it substitutes transparently.
pub struct CheatcodeHandler<'a, B> {
    backend: &'a mut B,
    cheats: &'a mut Cheatcodes,
    tx: &'a mut TransactionContext,
}

impl<'a, B: SyscallBackend> CheatcodeHandler<'a, B> {
    /// Wires the interception layer over `backend` for one frame.
    pub fn new(
        backend: &'a mut B,
        cheats: &'a mut Cheatcodes,
        tx: &'a mut TransactionContext,
    ) -> Self {
        Self { backend, cheats, tx }
    }

    /// Handles `get_caller_address`.
    ///
    /// Reports the spoofed caller while the executing contract is
    /// pranked, its real caller otherwise. Consulted anew on every
    /// query, so pranks started mid-run apply from the next read on.
    pub fn get_caller_address(&mut self) -> Result<ContractAddress> {
        let ctx = self.backend.context();
        if let Some(spoofed) = self.cheats.pranked_caller(ctx.contract_address) {
            trace!(target: "cheatcodes", contract = %ctx.contract_address, %spoofed, "caller spoofed");
            return Ok(spoofed);
        }
        Ok(ctx.caller_address)
    }

    /// Handles `get_block_number`.
    pub fn get_block_number(&mut self) -> Result<u64> {
        Ok(self.cheats.block_number().unwrap_or_else(|| self.backend.block_number()))
    }

    /// Handles `get_block_timestamp`.
    pub fn get_block_timestamp(&mut self) -> Result<u64> {
        Ok(self.cheats.block_timestamp().unwrap_or_else(|| self.backend.block_timestamp()))
    }

    /// Handles every external-call instruction kind.
    ///
    /// A registered mock short-circuits the call: its canned data is
    /// returned and the callee never executes, nested calls included.
    /// Everything else resolves to a real invocation and runs through
    /// the engine's entry point executor, which re-enters this layer
    /// for the callee's own syscalls.
    pub fn call_contract(&mut self, selector: SyscallSelector) -> Result<Retdata> {
        let request = self.backend.read_call_request(selector)?;

        let code_id = request.target.code_id();
        if let Some(data) = self.cheats.mocked_call(code_id, request.selector) {
            debug!(target: "cheatcodes", code = %code_id, selector = %request.selector, "returning mocked call data");
            return Ok(data.to_vec());
        }

        let call = self.resolve_call(selector, request)?;
        Ok(self.backend.execute_entry_point(call, self.cheats, self.tx)?)
    }

    /// Handles `emit_event`.
    pub fn emit_event(&mut self) -> Result<()> {
        let request = self.backend.read_event_request()?;
        let order = self.tx.record_event(request.keys, request.data);
        trace!(target: "cheatcodes", order, "event emitted");
        Ok(())
    }

    /// Resolves one of the five call variants into an invocation
    /// request.
    ///
    /// Direct calls execute against the target's own frame with the
    /// executing contract as caller; delegate and library variants run
    /// in the executing contract's frame with its caller preserved.
    fn resolve_call(
        &self,
        selector: SyscallSelector,
        request: CallRequest,
    ) -> Result<CallEntryPoint> {
        let (call_type, entry_point_type) = match selector {
            SyscallSelector::CallContract => (CallType::Call, EntryPointType::External),
            SyscallSelector::DelegateCall => (CallType::Delegate, EntryPointType::External),
            SyscallSelector::DelegateL1Handler => (CallType::Delegate, EntryPointType::L1Handler),
            SyscallSelector::LibraryCall => (CallType::Delegate, EntryPointType::External),
            SyscallSelector::LibraryCallL1Handler => {
                (CallType::Delegate, EntryPointType::L1Handler)
            }
            other => return Err(CheatcodeError::UnsupportedCallVariant(other).into()),
        };

        let (code_address, class_hash) = match request.target {
            CallTarget::Contract(address) => (Some(address), None),
            CallTarget::Class(hash) => (None, Some(hash)),
        };

        let ctx = self.backend.context();
        let contract_address = match call_type {
            CallType::Call => code_address.ok_or_else(|| EngineError::MalformedRequest {
                syscall: selector,
                reason: "direct call requires a deployed target".into(),
            })?,
            CallType::Delegate => ctx.contract_address,
        };
        let caller_address = match call_type {
            CallType::Call => ctx.contract_address,
            CallType::Delegate => ctx.caller_address,
        };

        Ok(CallEntryPoint {
            call_type,
            entry_point_type,
            code_address,
            class_hash,
            contract_address,
            caller_address,
            entry_point_selector: request.selector,
            calldata: request.calldata,
        })
    }
}
