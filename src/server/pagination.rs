pub const QUESTIONS_PER_PAGE: usize = 10;

/// Returns the 1-indexed `page` of `items`, empty when the page lies outside the data.
pub fn paginate<T>(items: Vec<T>, page: i64) -> Vec<T> {
    let Ok(page) = usize::try_from(page) else {
        return Vec::new();
    };
    if page == 0 {
        return Vec::new();
    }
    let start = (page - 1).saturating_mul(QUESTIONS_PER_PAGE);
    items
        .into_iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .collect()
}
