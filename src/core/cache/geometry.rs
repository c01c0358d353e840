//! Cache Geometry and Address Decoding.
//!
//! A 32-bit address is split into three fields, from most to least
//! significant: the tag, the set index, and the block offset. `Geometry`
//! derives the width of each field from the cache parameters and validates
//! them once at construction; `AddressDecoder` then splits addresses without
//! further checks.

use crate::common::ConfigError;

/// Width of a simulated address in bits.
pub const ADDRESS_BITS: u32 = 32;

/// Validated cache dimensions and derived bit-field widths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    /// Total data capacity in bytes.
    pub capacity: usize,
    /// Bytes per block (line).
    pub block_size: usize,
    /// Number of ways per set.
    pub associativity: usize,
    /// Number of sets.
    pub set_count: usize,
    /// `log2(block_size)`.
    pub offset_bits: u32,
    /// `log2(set_count)`. Zero for a fully associative cache.
    pub index_bits: u32,
    /// Bits left over for the tag.
    pub tag_bits: u32,
}

impl Geometry {
    /// Derives the geometry of a cache.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Total capacity in bytes.
    /// * `block_size` - Bytes per block; must be a power of two.
    /// * `associativity` - Ways per set.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if any parameter is zero, if the block size or
    /// the resulting set count is not a power of two, if the capacity is not a
    /// whole number of sets, or if offset and index bits exceed 32.
    pub fn new(capacity: usize, block_size: usize, associativity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::Zero("capacity"));
        }
        if block_size == 0 {
            return Err(ConfigError::Zero("block_size"));
        }
        if associativity == 0 {
            return Err(ConfigError::Zero("associativity"));
        }
        if !block_size.is_power_of_two() {
            return Err(ConfigError::NotPowerOfTwo {
                what: "block_size",
                value: block_size as u64,
            });
        }

        let set_bytes = block_size.checked_mul(associativity);
        let set_count = match set_bytes {
            Some(bytes) if capacity % bytes == 0 => capacity / bytes,
            _ => {
                return Err(ConfigError::UnevenCapacity {
                    capacity: capacity as u64,
                    set_bytes: set_bytes.map_or(u64::MAX, |b| b as u64),
                })
            }
        };
        if !set_count.is_power_of_two() {
            return Err(ConfigError::NotPowerOfTwo {
                what: "set_count",
                value: set_count as u64,
            });
        }

        let offset_bits = block_size.trailing_zeros();
        let index_bits = set_count.trailing_zeros();
        if offset_bits + index_bits > ADDRESS_BITS {
            return Err(ConfigError::AddressTooWide {
                offset_bits,
                index_bits,
            });
        }

        Ok(Self {
            capacity,
            block_size,
            associativity,
            set_count,
            offset_bits,
            index_bits,
            tag_bits: ADDRESS_BITS - offset_bits - index_bits,
        })
    }

    /// Total number of lines (`capacity / block_size`).
    pub fn line_count(&self) -> usize {
        self.capacity / self.block_size
    }

    /// Returns `true` when the cache has a single set.
    pub fn is_fully_associative(&self) -> bool {
        self.index_bits == 0
    }

    /// Builds the address decoder for this geometry.
    pub fn decoder(&self) -> AddressDecoder {
        AddressDecoder {
            offset_bits: self.offset_bits,
            index_bits: self.index_bits,
            index_mask: (self.set_count - 1) as u32,
        }
    }
}

/// Splits 32-bit addresses into tag, set index, and offset.
///
/// Shifts are done in 64-bit arithmetic so that the degenerate widths (a
/// zero-bit tag, or a 32-bit offset) never overflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddressDecoder {
    offset_bits: u32,
    index_bits: u32,
    index_mask: u32,
}

impl AddressDecoder {
    /// Returns the tag field of `addr`.
    ///
    /// Example: with 4 bits each of tag, index, and offset,
    /// `tag_of(0b1111_0101_0001)` is `0b1111`.
    pub fn tag_of(&self, addr: u32) -> u32 {
        (u64::from(addr) >> (self.offset_bits + self.index_bits)) as u32
    }

    /// Returns the set index field of `addr`, or 0 for a fully associative
    /// cache.
    ///
    /// Example: with 4 bits each of tag, index, and offset,
    /// `index_of(0b1111_0101_0001)` is `0b0101`.
    pub fn index_of(&self, addr: u32) -> usize {
        if self.index_bits == 0 {
            return 0;
        }
        ((u64::from(addr) >> self.offset_bits) as u32 & self.index_mask) as usize
    }

    /// Returns the byte offset of `addr` within its block.
    pub fn offset_of(&self, addr: u32) -> u32 {
        let mask = (1u64 << self.offset_bits) - 1;
        (u64::from(addr) & mask) as u32
    }

    /// Returns `addr` with the offset bits cleared.
    ///
    /// Example: with a 4-bit offset, `block_address_of(0b1111_0101_0001)` is
    /// `0b1111_0101_0000`.
    pub fn block_address_of(&self, addr: u32) -> u32 {
        ((u64::from(addr) >> self.offset_bits) << self.offset_bits) as u32
    }

    /// Rebuilds a block address from its tag and set index.
    pub fn compose(&self, tag: u32, index: usize) -> u32 {
        let tag_part = u64::from(tag) << (self.offset_bits + self.index_bits);
        let index_part = (index as u64 & u64::from(self.index_mask)) << self.offset_bits;
        (tag_part | index_part) as u32
    }
}
