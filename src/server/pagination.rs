pub const QUESTIONS_PER_PAGE: usize = 10;

/// The 1-based `page` of `items`. Pages past the end, and pages below 1, are empty.
pub fn paginate<T>(page: i64, items: Vec<T>) -> Vec<T> {
    let Ok(index) = usize::try_from(page - 1) else {
        return Vec::new();
    };
    let start = index.saturating_mul(QUESTIONS_PER_PAGE);
    items
        .into_iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_pages_of_ten() {
        let items: Vec<i32> = (0..19).collect();
        assert_eq!(paginate(1, items.clone()), (0..10).collect::<Vec<_>>());
        assert_eq!(paginate(2, items.clone()), (10..19).collect::<Vec<_>>());
        assert!(paginate(3, items).is_empty());
    }

    #[test]
    fn out_of_range_is_empty() {
        let items: Vec<i32> = (0..5).collect();
        assert!(paginate(0, items.clone()).is_empty());
        assert!(paginate(-3, items.clone()).is_empty());
        assert!(paginate(i64::MAX, items.clone()).is_empty());
        assert!(paginate(i64::MIN, items).is_empty());
    }

    #[test]
    fn empty_input() {
        assert!(paginate(1, Vec::<i32>::new()).is_empty());
    }
}
