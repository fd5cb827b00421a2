//! Public library API for reading and writing Named Binary Tag data.

/// NBT data model, binary codec, text bridge, and deep copy.
pub mod nbt;
