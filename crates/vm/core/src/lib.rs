//! # feltforge-vm-core
//!
//! Engine-boundary types shared between the execution engine and the
//! cheatcode layer: field elements, the call and entry-point model,
//! decoded syscall requests, execution contexts, and ordered events.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

use alloy_primitives::U256;

pub mod call;
pub mod constants;
pub mod context;
pub mod error;
pub mod syscall;

pub use call::{CallEntryPoint, CallTarget, CallType, EntryPointType, Retdata};
pub use context::{ExecutionContext, OrderedEvent, TransactionContext};
pub use error::EngineError;
pub use syscall::{CallRequest, EventRequest, SyscallSelector};

/// A field element, the engine's single value type.
pub type Felt = U256;

/// A deployed contract's address.
pub type ContractAddress = Felt;

/// An entry point selector.
pub type Selector = Felt;

/// The hash identifying a declared class.
pub type ClassHash = Felt;
