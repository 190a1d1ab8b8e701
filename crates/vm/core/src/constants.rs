//! Well-known addresses used by test harnesses.

use crate::{ContractAddress, Felt};

/// The caller address engines report for top-level test invocations.
pub const DEFAULT_CALLER: ContractAddress = Felt::from_limbs([0x1001, 0, 0, 0]);

/// The address harnesses conventionally deploy the contract under test
/// at.
pub const TEST_CONTRACT_ADDRESS: ContractAddress = Felt::from_limbs([0xc047e5, 0, 0, 0]);
