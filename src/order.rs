use std::cmp::Ordering;

/// A strict-weak-ordering policy over keys.
///
/// The policy is a strategy type carried as a type parameter of
/// [`Dictionary`](crate::Dictionary), so the comparison compiles down to a
/// direct call with no runtime dispatch. It is generic over the compared type
/// so the same policy orders both owned keys and their borrowed forms
/// (`String` and `str`, say) without allocating.
pub trait Compare<Q: ?Sized> {
    fn compare(&self, a: &Q, b: &Q) -> Ordering;
}

/// Ascending order by the key's own `Ord`. The default policy.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Ascending;

impl<Q: ?Sized + Ord> Compare<Q> for Ascending {
    #[inline]
    fn compare(&self, a: &Q, b: &Q) -> Ordering {
        a.cmp(b)
    }
}

/// Descending order by the key's own `Ord`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Descending;

impl<Q: ?Sized + Ord> Compare<Q> for Descending {
    #[inline]
    fn compare(&self, a: &Q, b: &Q) -> Ordering {
        b.cmp(a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascending_matches_ord() {
        assert_eq!(Ascending.compare("alpha", "bravo"), Ordering::Less);
        assert_eq!(Ascending.compare("bravo", "bravo"), Ordering::Equal);
    }

    #[test]
    fn descending_flips_ord() {
        assert_eq!(Descending.compare("alpha", "bravo"), Ordering::Greater);
        assert_eq!(Descending.compare("zebra", "bravo"), Ordering::Less);
        assert_eq!(Descending.compare("echo", "echo"), Ordering::Equal);
    }
}
