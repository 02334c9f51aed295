//! Owned, explicitly releasable generator handle.
//!
//! `create` reserves heap storage for one generator and seeds it,
//! `destroy` releases it. Destroying twice is a no-op and drawing from a
//! destroyed handle is `Error::InvalidHandle` rather than a stale read.

use error::{Error, Result};
use mt::MT19937Rng;

#[derive(Debug)]
pub struct GeneratorHandle {
    // A Vec rather than Option<Box<_>> so the allocation can be reserved
    // fallibly with try_reserve_exact. Empty once destroyed.
    slot: Vec<MT19937Rng>,
}

impl GeneratorHandle {
    pub fn create(key: &[u32]) -> Result<GeneratorHandle> {
        let rng = MT19937Rng::new(key)?;
        let mut slot = Vec::new();
        slot.try_reserve_exact(1).map_err(|_| Error::AllocationFailure)?;
        slot.push(rng);
        Ok(GeneratorHandle { slot: slot })
    }

    pub fn destroy(&mut self) {
        self.slot = Vec::new();
    }

    pub fn is_live(&self) -> bool {
        !self.slot.is_empty()
    }

    pub fn next_u32(&mut self) -> Result<u32> {
        self.slot
            .first_mut()
            .map(MT19937Rng::next_u32)
            .ok_or(Error::InvalidHandle)
    }

    pub fn generator(&mut self) -> Result<&mut MT19937Rng> {
        self.slot.first_mut().ok_or(Error::InvalidHandle)
    }
}
