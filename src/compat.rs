/// Compatibility layer for `std`/`no_std`
#[cfg(feature = "std")]
pub use std::{
    collections::BTreeMap,
    string::{String, ToString},
    vec::Vec,
};

#[cfg(not(feature = "std"))]
pub use alloc::{
    collections::BTreeMap,
    string::{String, ToString},
    vec::Vec,
};
