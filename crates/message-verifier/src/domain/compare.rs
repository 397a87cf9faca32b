//! # Constant-Time Digest Comparison
//!
//! Length is checked first and may leak; it is public (2 × hash output size).
//! Equal-length inputs are compared with `subtle`, which XORs every byte pair
//! and folds the results without branching on the first difference.

use subtle::ConstantTimeEq;

/// Compare two digests without short-circuiting on the first mismatch.
pub fn digests_match(expected: &[u8], supplied: &[u8]) -> bool {
    if expected.len() != supplied.len() {
        return false;
    }
    expected.ct_eq(supplied).into()
}
