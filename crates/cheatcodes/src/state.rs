//! The override state store.

use crate::{CheatcodeError, CheatsConfig};
use feltforge_vm_core::{ContractAddress, Felt, Selector};
use std::{
    collections::{HashMap, hash_map::Entry},
    sync::Arc,
};

/// Test-scoped overrides for one simulated run.
///
/// One instance exists per test case. The harness creates it, mutates it
/// through the methods below, and lends it mutably to the dispatch chain
/// for the duration of each invocation; overrides set before a top-level
/// call are therefore visible to every nested call in that chain. The
/// store has no internal synchronization and must never be shared across
/// concurrently executing test cases.
#[derive(Clone, Debug, Default)]
pub struct Cheatcodes {
    /// Spoofed caller, per target contract.
    pranked_callers: HashMap<ContractAddress, ContractAddress>,
    /// Canned return data, per target contract and entry point selector.
    mocked_calls: HashMap<ContractAddress, HashMap<Selector, Vec<Felt>>>,
    /// Block number reported to every contract, if overridden.
    block_number: Option<u64>,
    /// Block timestamp reported to every contract, if overridden.
    block_timestamp: Option<u64>,
}

impl Cheatcodes {
    /// Creates a store seeded with the configured block context.
    pub fn new(config: Arc<CheatsConfig>) -> Self {
        Self {
            block_number: config.block_number,
            block_timestamp: config.block_timestamp,
            ..Default::default()
        }
    }

    /// Makes `target` observe `caller` as its caller until
    /// [`stop_prank`](Self::stop_prank).
    pub fn start_prank(
        &mut self,
        target: ContractAddress,
        caller: ContractAddress,
    ) -> Result<(), CheatcodeError> {
        match self.pranked_callers.entry(target) {
            Entry::Occupied(_) => Err(CheatcodeError::AlreadyPranked(target)),
            Entry::Vacant(slot) => {
                debug!(target: "cheatcodes", %target, %caller, "prank started");
                slot.insert(caller);
                Ok(())
            }
        }
    }

    /// Restores `target`'s real caller.
    pub fn stop_prank(&mut self, target: ContractAddress) -> Result<(), CheatcodeError> {
        if self.pranked_callers.remove(&target).is_none() {
            return Err(CheatcodeError::NotPranked(target));
        }
        debug!(target: "cheatcodes", %target, "prank stopped");
        Ok(())
    }

    /// Makes every call to `selector` on `target` return `ret_data`
    /// without executing any code, until
    /// [`clear_mock_call`](Self::clear_mock_call).
    pub fn mock_call(
        &mut self,
        target: ContractAddress,
        selector: Selector,
        ret_data: Vec<Felt>,
    ) -> Result<(), CheatcodeError> {
        match self.mocked_calls.entry(target).or_default().entry(selector) {
            Entry::Occupied(_) => Err(CheatcodeError::AlreadyMocked { contract: target, selector }),
            Entry::Vacant(slot) => {
                debug!(target: "cheatcodes", %target, %selector, "mock registered");
                slot.insert(ret_data);
                Ok(())
            }
        }
    }

    /// Removes the mock for `(target, selector)`, leaving the target's
    /// other mocked selectors intact.
    pub fn clear_mock_call(
        &mut self,
        target: ContractAddress,
        selector: Selector,
    ) -> Result<(), CheatcodeError> {
        let not_mocked = || CheatcodeError::NotMocked { contract: target, selector };
        let mocks = self.mocked_calls.get_mut(&target).ok_or_else(not_mocked)?;
        mocks.remove(&selector).ok_or_else(not_mocked)?;
        if mocks.is_empty() {
            self.mocked_calls.remove(&target);
        }
        debug!(target: "cheatcodes", %target, %selector, "mock cleared");
        Ok(())
    }

    /// The spoofed caller for `target`, if a prank is active.
    pub fn pranked_caller(&self, target: ContractAddress) -> Option<ContractAddress> {
        self.pranked_callers.get(&target).copied()
    }

    /// The canned return data for `(target, selector)`, if mocked.
    pub fn mocked_call(&self, target: ContractAddress, selector: Selector) -> Option<&[Felt]> {
        self.mocked_calls.get(&target)?.get(&selector).map(Vec::as_slice)
    }

    /// Overrides the block number reported to every contract.
    ///
    /// Rolling again simply replaces the previous override.
    pub fn roll(&mut self, block_number: u64) {
        debug!(target: "cheatcodes", block_number, "block number overridden");
        self.block_number = Some(block_number);
    }

    /// Overrides the block timestamp reported to every contract.
    ///
    /// Warping again simply replaces the previous override.
    pub fn warp(&mut self, timestamp: u64) {
        debug!(target: "cheatcodes", timestamp, "block timestamp overridden");
        self.block_timestamp = Some(timestamp);
    }

    /// The active block number override.
    pub fn block_number(&self) -> Option<u64> {
        self.block_number
    }

    /// The active block timestamp override.
    pub fn block_timestamp(&self) -> Option<u64> {
        self.block_timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn felt(value: u64) -> Felt {
        Felt::from(value)
    }

    #[test]
    fn prank_lifecycle() {
        let mut cheats = Cheatcodes::default();
        let target = felt(0xAA);

        assert_eq!(cheats.pranked_caller(target), None);
        cheats.start_prank(target, felt(0xBB)).unwrap();
        assert_eq!(cheats.pranked_caller(target), Some(felt(0xBB)));

        assert_eq!(
            cheats.start_prank(target, felt(0xCC)),
            Err(CheatcodeError::AlreadyPranked(target))
        );

        cheats.stop_prank(target).unwrap();
        assert_eq!(cheats.pranked_caller(target), None);
        assert_eq!(cheats.stop_prank(target), Err(CheatcodeError::NotPranked(target)));
    }

    #[test]
    fn pranks_are_per_contract() {
        let mut cheats = Cheatcodes::default();
        cheats.start_prank(felt(1), felt(10)).unwrap();
        cheats.start_prank(felt(2), felt(20)).unwrap();

        cheats.stop_prank(felt(1)).unwrap();
        assert_eq!(cheats.pranked_caller(felt(1)), None);
        assert_eq!(cheats.pranked_caller(felt(2)), Some(felt(20)));
    }

    #[test]
    fn mock_lifecycle() {
        let mut cheats = Cheatcodes::default();
        let target = felt(0xCC);
        let selector = felt(5);

        cheats.mock_call(target, selector, vec![felt(42)]).unwrap();
        assert_eq!(cheats.mocked_call(target, selector), Some(&[felt(42)][..]));

        assert_eq!(
            cheats.mock_call(target, selector, vec![felt(43)]),
            Err(CheatcodeError::AlreadyMocked { contract: target, selector })
        );

        cheats.clear_mock_call(target, selector).unwrap();
        assert_eq!(cheats.mocked_call(target, selector), None);
        assert_eq!(
            cheats.clear_mock_call(target, selector),
            Err(CheatcodeError::NotMocked { contract: target, selector })
        );
    }

    #[test]
    fn clearing_one_mock_leaves_the_rest() {
        let mut cheats = Cheatcodes::default();
        let target = felt(0xCC);
        cheats.mock_call(target, felt(5), vec![felt(1)]).unwrap();
        cheats.mock_call(target, felt(6), vec![felt(2)]).unwrap();
        cheats.mock_call(felt(0xDD), felt(5), vec![felt(3)]).unwrap();

        cheats.clear_mock_call(target, felt(5)).unwrap();

        assert_eq!(cheats.mocked_call(target, felt(5)), None);
        assert_eq!(cheats.mocked_call(target, felt(6)), Some(&[felt(2)][..]));
        assert_eq!(cheats.mocked_call(felt(0xDD), felt(5)), Some(&[felt(3)][..]));
    }

    #[test]
    fn clearing_a_mock_on_an_unmocked_contract_fails() {
        let mut cheats = Cheatcodes::default();
        assert_eq!(
            cheats.clear_mock_call(felt(9), felt(5)),
            Err(CheatcodeError::NotMocked { contract: felt(9), selector: felt(5) })
        );
    }

    #[test]
    fn block_overrides_overwrite() {
        let mut cheats = Cheatcodes::default();
        assert_eq!(cheats.block_number(), None);
        assert_eq!(cheats.block_timestamp(), None);

        cheats.roll(100);
        cheats.roll(50);
        assert_eq!(cheats.block_number(), Some(50));

        cheats.warp(1_000);
        cheats.warp(2_000);
        assert_eq!(cheats.block_timestamp(), Some(2_000));
    }

    #[test]
    fn new_store_is_seeded_from_config() {
        let config =
            Arc::new(CheatsConfig { block_number: Some(42), block_timestamp: Some(1_700) });
        let cheats = Cheatcodes::new(config);
        assert_eq!(cheats.block_number(), Some(42));
        assert_eq!(cheats.block_timestamp(), Some(1_700));
        assert_eq!(cheats.pranked_caller(felt(1)), None);
    }

    proptest! {
        #[test]
        fn prank_roundtrip(target: u64, caller: u64) {
            let mut cheats = Cheatcodes::default();
            let (target, caller) = (felt(target), felt(caller));

            cheats.start_prank(target, caller).unwrap();
            prop_assert_eq!(cheats.pranked_caller(target), Some(caller));
            cheats.stop_prank(target).unwrap();
            prop_assert_eq!(cheats.pranked_caller(target), None);
        }

        #[test]
        fn mocks_are_scoped_per_selector(target: u64, kept: u64, cleared: u64) {
            prop_assume!(kept != cleared);
            let mut cheats = Cheatcodes::default();
            let target = felt(target);

            cheats.mock_call(target, felt(kept), vec![felt(1)]).unwrap();
            cheats.mock_call(target, felt(cleared), vec![felt(2)]).unwrap();
            cheats.clear_mock_call(target, felt(cleared)).unwrap();

            prop_assert_eq!(cheats.mocked_call(target, felt(kept)), Some(&[felt(1)][..]));
            prop_assert_eq!(cheats.mocked_call(target, felt(cleared)), None);
        }
    }
}
