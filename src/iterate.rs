/// Call `callback` with the index and the item for each item, in order.
///
/// ```rust
/// use microlib_utils::for_each;
///
/// let mut seen = Vec::new();
/// for_each(["a", "b"], |index, item| seen.push((index, item)));
/// assert_eq!(seen, vec![(0, "a"), (1, "b")]);
/// ```
pub fn for_each<I, F>(items: I, mut callback: F)
where
    I: IntoIterator,
    F: FnMut(usize, I::Item),
{
    for (index, item) in items.into_iter().enumerate() {
        callback(index, item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_each_empty() {
        let mut called = false;
        for_each(Vec::<u8>::new(), |_, _| called = true);
        assert!(!called);
    }

    #[test]
    fn test_for_each_borrowed_slice() {
        let items = vec![10usize, 20, 30];
        let mut total = 0;
        for_each(&items, |index, item| total += index * item);
        assert_eq!(total, 20 + 60);
    }
}
