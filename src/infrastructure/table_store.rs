//! Swappable factor table snapshots
//!
//! Readers take an `Arc` snapshot and compute against it for as long as they
//! hold it. Writers replace the whole table in one step, so no reader ever
//! sees a table that is half old and half new.

use std::sync::{Arc, PoisonError, RwLock};

use crate::domain::entities::ImpactFactorTable;
use crate::domain::services::ImpactCalculator;

/// Shared holder for the current factor table
#[derive(Debug)]
pub struct FactorTableStore {
    current: RwLock<Arc<ImpactFactorTable>>,
}

impl FactorTableStore {
    pub fn new(table: ImpactFactorTable) -> Self {
        Self {
            current: RwLock::new(Arc::new(table)),
        }
    }

    /// Current table; unaffected by later `replace` calls
    pub fn snapshot(&self) -> Arc<ImpactFactorTable> {
        // The guarded value is a single Arc, so a poisoned lock still holds a
        // complete table.
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Calculator bound to the current snapshot
    pub fn calculator(&self) -> ImpactCalculator {
        ImpactCalculator::new(self.snapshot())
    }

    /// Install a new table and return the previous one
    pub fn replace(&self, table: ImpactFactorTable) -> Arc<ImpactFactorTable> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, Arc::new(table))
    }
}

impl Default for FactorTableStore {
    fn default() -> Self {
        Self::new(ImpactFactorTable::defaults())
    }
}
