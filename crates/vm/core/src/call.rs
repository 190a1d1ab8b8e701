//! The call and entry-point model.

use crate::{ClassHash, ContractAddress, Felt, Selector};

/// Data returned by a completed invocation.
pub type Retdata = Vec<Felt>;

/// How a callee's frame relates to its caller's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallType {
    /// The callee executes against its own storage, with the calling
    /// contract as its caller.
    Call,
    /// The callee's code runs in the calling contract's frame: storage
    /// identity and caller are inherited.
    Delegate,
}

/// The entry point table a selector is resolved in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntryPointType {
    /// An externally invocable function.
    External,
    /// A handler for delivered L1 messages.
    L1Handler,
}

/// The code identity a call resolves against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallTarget {
    /// A deployed contract, addressed by its contract address.
    Contract(ContractAddress),
    /// A declared class, addressed by its hash; no deployed instance is
    /// involved.
    Class(ClassHash),
}

impl CallTarget {
    /// The felt identifying the code this target resolves to.
    ///
    /// Mock registrations are matched against this value, whichever
    /// variant produced it.
    pub fn code_id(&self) -> Felt {
        match *self {
            Self::Contract(address) => address,
            Self::Class(hash) => hash,
        }
    }
}

/// A fully resolved invocation request for the engine's entry point
/// executor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallEntryPoint {
    /// Frame semantics of the invocation.
    pub call_type: CallType,
    /// Which entry point table the selector is looked up in.
    pub entry_point_type: EntryPointType,
    /// The deployed contract whose code runs, for contract targets.
    pub code_address: Option<ContractAddress>,
    /// The declared class whose code runs, for library targets.
    pub class_hash: Option<ClassHash>,
    /// The storage frame the callee executes against.
    pub contract_address: ContractAddress,
    /// The caller the callee observes.
    pub caller_address: ContractAddress,
    /// The invoked entry point.
    pub entry_point_selector: Selector,
    /// Arguments passed to the entry point.
    pub calldata: Vec<Felt>,
}
