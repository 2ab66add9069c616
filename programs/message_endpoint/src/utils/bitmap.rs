use anchor_lang::prelude::*;

use crate::errors::EndpointError;

/// Fixed-width set of adapter indices backed by a u128.
///
/// Each bit position corresponds to the index assigned to an adapter at
/// registration time, so membership tests and snapshots are a single word.
/// All index operations are bounds-checked against [`Bitmap::BITS`].
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct Bitmap {
    map: u128,
}

impl Bitmap {
    /// Number of addressable indices
    pub const BITS: u8 = 128;

    /// Serialized size of the bitmap in bytes
    pub const SIZE: usize = 16;

    pub fn new() -> Self {
        Self { map: 0 }
    }

    pub fn from_value(map: u128) -> Self {
        Self { map }
    }

    /// Raw u128 value, for events and return data
    pub fn as_value(&self) -> u128 {
        self.map
    }

    /// Set or clear the bit at `index`
    pub fn set(&mut self, index: u8, value: bool) -> Result<()> {
        require!(index < Self::BITS, EndpointError::BitmapIndexOutOfBounds);
        if value {
            self.map |= 1u128 << index;
        } else {
            self.map &= !(1u128 << index);
        }
        Ok(())
    }

    /// Test the bit at `index`
    pub fn get(&self, index: u8) -> Result<bool> {
        require!(index < Self::BITS, EndpointError::BitmapIndexOutOfBounds);
        Ok(self.map & (1u128 << index) != 0)
    }

    pub fn is_empty(&self) -> bool {
        self.map == 0
    }

    pub fn count_ones(&self) -> u32 {
        self.map.count_ones()
    }

    /// Set intersection
    pub fn and(&self, other: &Bitmap) -> Bitmap {
        Bitmap {
            map: self.map & other.map,
        }
    }

    /// Set union
    pub fn or(&self, other: &Bitmap) -> Bitmap {
        Bitmap {
            map: self.map | other.map,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_clear() {
        let mut bm = Bitmap::new();
        assert!(bm.is_empty());

        bm.set(0, true).unwrap();
        bm.set(127, true).unwrap();
        assert!(bm.get(0).unwrap());
        assert!(bm.get(127).unwrap());
        assert!(!bm.get(64).unwrap());
        assert_eq!(bm.count_ones(), 2);

        bm.set(0, false).unwrap();
        assert!(!bm.get(0).unwrap());
        assert_eq!(bm.count_ones(), 1);
    }

    #[test]
    fn out_of_bounds_index_is_rejected() {
        let mut bm = Bitmap::new();
        assert_eq!(
            bm.set(128, true).unwrap_err(),
            EndpointError::BitmapIndexOutOfBounds.into()
        );
        assert_eq!(
            bm.get(255).unwrap_err(),
            EndpointError::BitmapIndexOutOfBounds.into()
        );
        // A rejected set leaves the map untouched
        assert!(bm.is_empty());
    }

    #[test]
    fn intersection_and_union() {
        let a = Bitmap::from_value(0b1010);
        let b = Bitmap::from_value(0b0110);
        assert_eq!(a.and(&b).as_value(), 0b0010);
        assert_eq!(a.or(&b).as_value(), 0b1110);
        assert!(a.and(&Bitmap::new()).is_empty());
    }

    #[test]
    fn setting_a_set_bit_is_idempotent() {
        let mut bm = Bitmap::new();
        bm.set(5, true).unwrap();
        bm.set(5, true).unwrap();
        assert_eq!(bm.count_ones(), 1);
    }
}
