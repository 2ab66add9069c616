use anchor_lang::prelude::*;

/// Chain-agnostic 32-byte address.
///
/// Addresses from every connected chain are left-padded or hashed into this
/// representation by the sending side; the endpoint treats them as opaque.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct UniversalAddress {
    bytes: [u8; 32],
}

impl UniversalAddress {
    /// Serialized size in bytes
    pub const SIZE: usize = 32;

    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    pub fn to_bytes(self) -> [u8; 32] {
        self.bytes
    }

    pub fn from_pubkey(pubkey: &Pubkey) -> Self {
        Self {
            bytes: pubkey.to_bytes(),
        }
    }

    pub fn to_pubkey(self) -> Pubkey {
        Pubkey::new_from_array(self.bytes)
    }
}

impl From<Pubkey> for UniversalAddress {
    fn from(pubkey: Pubkey) -> Self {
        Self::from_pubkey(&pubkey)
    }
}

impl AsRef<[u8]> for UniversalAddress {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pubkey_round_trip() {
        let pubkey = Pubkey::new_unique();
        let addr = UniversalAddress::from_pubkey(&pubkey);
        assert_eq!(addr.to_pubkey(), pubkey);
        assert_eq!(addr.to_bytes(), pubkey.to_bytes());
    }

    #[test]
    fn as_ref_exposes_raw_bytes() {
        let addr = UniversalAddress::from_bytes([7u8; 32]);
        assert_eq!(addr.as_ref(), &[7u8; 32]);
    }
}
