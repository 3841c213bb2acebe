//! Stable sorting for comparators that are not guaranteed to be total.

use std::cmp::Ordering;

/// Stable insertion sort driven by `compare`.
///
/// Elements that compare `Equal` keep their relative input order, so callers
/// can pre-order by a secondary key and sort by the primary one. Each element
/// is moved left past every neighbour that compares `Greater`; the outcome is
/// fully determined by the input order and the comparator, even when the
/// comparator is not transitive.
///
/// # Examples
///
/// ```
/// use json_schema_props::sort::insertion_sort_by;
///
/// let mut arr = vec![(2, 'a'), (1, 'b'), (2, 'c')];
/// insertion_sort_by(&mut arr, |a, b| a.0.cmp(&b.0));
/// assert_eq!(arr, vec![(1, 'b'), (2, 'a'), (2, 'c')]);
/// ```
pub fn insertion_sort_by<T, F>(arr: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..arr.len() {
        let mut slot = i;
        while slot > 0 && compare(&arr[slot - 1], &arr[i]) == Ordering::Greater {
            slot -= 1;
        }
        arr[slot..=i].rotate_right(1);
    }
}
