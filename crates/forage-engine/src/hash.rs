//! FNV-1a hashing of run state for determinism checks.
//!
//! Not cryptographic. Two runs with the same seed and run index must produce
//! the same hash at every tick; any divergence shows up as a mismatch.

/// FNV-1a offset basis for 64-bit.
pub(crate) const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
pub(crate) fn fnv1a_u32(mut hash: u64, v: u32) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

#[inline]
pub(crate) fn fnv1a_u64(mut hash: u64, v: u64) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Hash a pheromone array by bit pattern, so `0.0` and `-0.0` differ and
/// any rounding divergence is caught.
pub fn pheromone_hash(cells: &[f64]) -> u64 {
    cells
        .iter()
        .fold(FNV_OFFSET, |h, v| fnv1a_u64(h, v.to_bits()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_offset_basis() {
        assert_eq!(pheromone_hash(&[]), FNV_OFFSET);
    }

    #[test]
    fn known_byte_vector() {
        // FNV-1a of a single zero byte.
        assert_eq!(fnv1a_byte(FNV_OFFSET, 0), 0xaf63bd4c8601b7df);
    }

    #[test]
    fn order_matters() {
        assert_ne!(pheromone_hash(&[1.0, 2.0]), pheromone_hash(&[2.0, 1.0]));
    }

    #[test]
    fn sign_of_zero_matters() {
        assert_ne!(pheromone_hash(&[0.0]), pheromone_hash(&[-0.0]));
    }
}
