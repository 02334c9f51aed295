//! MT19937 Mersenne Twister seeded from an array of 32-bit words.
//!
//! The output stream matches the reference `init_by_array` /
//! `genrand_int32` pair word for word. It is a statistical generator and
//! must not be used where an adversary can observe its output.
//!
//! ```
//! use mt19937::MT19937Rng;
//!
//! let mut rng = MT19937Rng::new(&[0x123, 0x234, 0x345, 0x456]).unwrap();
//! assert_eq!(1067595299, rng.next_u32());
//! assert_eq!(955945823, rng.next_u32());
//! ```

#![allow(non_snake_case)]

extern crate rand;

pub mod error;
pub mod handle;
pub mod mt;

pub use error::{Error, Result};
pub use handle::GeneratorHandle;
pub use mt::{MT19937Rng, STATE_WORDS};
