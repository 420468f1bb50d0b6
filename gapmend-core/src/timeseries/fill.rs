/// Propagate the last defined value into the undefined slots that follow it.
///
/// Slots before the first defined value stay `None`; there is nothing to carry
/// into them. Returns the number of slots that were filled.
///
/// ```
/// use gapmend_core::forward_fill;
///
/// let mut v = vec![None, Some(1), None, None, Some(4), None];
/// assert_eq!(forward_fill(&mut v), 3);
/// assert_eq!(v, vec![None, Some(1), Some(1), Some(1), Some(4), Some(4)]);
/// ```
pub fn forward_fill<T: Clone>(values: &mut [Option<T>]) -> usize {
    let mut last: Option<T> = None;
    let mut filled = 0usize;
    for slot in values.iter_mut() {
        match slot {
            Some(v) => last = Some(v.clone()),
            None => {
                if let Some(v) = &last {
                    *slot = Some(v.clone());
                    filled += 1;
                }
            }
        }
    }
    filled
}
