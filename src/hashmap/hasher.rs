/// Turns a key into the raw hash the table reduces to a bucket index.
pub trait KeyHasher {
    fn hash_key(&self, key: &str) -> u64;
}

/// Sums `code_unit * 31` over the UTF-16 code units of the key.
///
/// # Note
///
/// Every character contributes independently of its position,
/// so anagrams ("ab", "ba") always land in the same bucket.
/// Use [`Fnv1a`] when the distribution matters more than
/// matching the reference bucket layout.
#[derive(Debug, Default, Clone, Copy)]
pub struct CharCodeSum;

impl CharCodeSum {
    pub const PRIME: u64 = 31;
}

impl KeyHasher for CharCodeSum {
    fn hash_key(&self, key: &str) -> u64 {
        key.encode_utf16()
            .fold(0u64, |acc, unit| acc.wrapping_add(unit as u64 * Self::PRIME))
    }
}

/// 64 bit Fowler–Noll–Vo (FNV-1a) over the UTF-8 bytes of the key
#[derive(Debug, Default, Clone, Copy)]
pub struct Fnv1a;

impl Fnv1a {
    const OFFSET_BASIS: u64 = 0xCBF29CE484222325;
    const PRIME: u64 = 0x100000001B3;
}

impl KeyHasher for Fnv1a {
    fn hash_key(&self, key: &str) -> u64 {
        key.as_bytes().iter().fold(Self::OFFSET_BASIS, |h, &b| {
            (h ^ b as u64).wrapping_mul(Self::PRIME)
        })
    }
}
