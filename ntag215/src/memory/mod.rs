// ntag215/src/memory/mod.rs

mod identity;
mod tag;

pub use identity::{IdentityBuffer, IdentityLayout};
pub use tag::TagMemory;
