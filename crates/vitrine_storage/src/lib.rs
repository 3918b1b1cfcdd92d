//! Session persistence for Vitrine.
//!
//! The dashboard mirrors its two in-memory collections — the post board and
//! the intelligence listing — into two named durable slots. Slots are read
//! once at startup and overwritten after every mutation; the stored form is a
//! direct structural serialization of the domain entities.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod filesystem;
mod memory;
mod slot;
mod store;

pub use filesystem::FileSystemStore;
pub use memory::MemoryStore;
pub use slot::Slot;
pub use store::SessionStore;
