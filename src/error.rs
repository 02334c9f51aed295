//! Error types for the generator and its handle.

use std::error;
use std::fmt;
use std::result;

/// Errors produced when creating, restoring, or using a generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The seed-word array was empty.
    InvalidSeed,
    /// Storage for the generator state could not be reserved.
    AllocationFailure,
    /// The handle has been destroyed.
    InvalidHandle,
    /// A restored state had an out-of-range cursor or was all zero.
    InvalidState,
}

pub type Result<T> = result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidSeed => write!(f, "seed must contain at least one word"),
            Error::AllocationFailure => write!(f, "could not allocate generator state"),
            Error::InvalidHandle => write!(f, "generator handle has been destroyed"),
            Error::InvalidState => write!(f, "generator state is not a valid MT19937 state"),
        }
    }
}

impl error::Error for Error {}

#[test]
fn test_display() {
    assert_eq!("seed must contain at least one word",
               format!("{}", Error::InvalidSeed));
    assert_eq!("generator handle has been destroyed",
               format!("{}", Error::InvalidHandle));
    assert_eq!("generator state is not a valid MT19937 state",
               Error::InvalidState.to_string());
}

#[test]
fn test_error_trait_object() {
    let err: Box<dyn error::Error> = Box::new(Error::AllocationFailure);
    assert_eq!("could not allocate generator state", err.to_string());
}
