//! Per-invocation and per-transaction execution context.

use crate::{CallType, ContractAddress, Felt};

/// Frame data for one entry-point invocation, created by the engine.
///
/// Read-only to the syscall layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExecutionContext {
    /// The contract whose frame is executing.
    pub contract_address: ContractAddress,
    /// The caller the engine resolved for this frame.
    pub caller_address: ContractAddress,
    /// How this frame was entered.
    pub call_type: CallType,
}

/// An event emitted during a transaction, tagged with its position in
/// emission order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderedEvent {
    /// Zero-based position within the transaction's event log.
    pub order: u64,
    pub keys: Vec<Felt>,
    pub data: Vec<Felt>,
}

/// Event machinery of one simulated transaction.
///
/// A single instance is threaded through every frame of the call chain,
/// so order indices stay contiguous no matter which contract emits.
#[derive(Clone, Debug, Default)]
pub struct TransactionContext {
    /// Events in emission order.
    pub events: Vec<OrderedEvent>,
    /// The order index the next event receives.
    pub n_emitted_events: u64,
}

impl TransactionContext {
    /// Appends an event and returns the order index it was assigned.
    pub fn record_event(&mut self, keys: Vec<Felt>, data: Vec<Felt>) -> u64 {
        let order = self.n_emitted_events;
        self.events.push(OrderedEvent { order, keys, data });
        self.n_emitted_events += 1;
        trace!(target: "vm", order, "event recorded");
        order
    }
}
