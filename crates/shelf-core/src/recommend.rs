//! Rule-based recommendations.
//!
//! Both lists only ever suggest books outside the user's library, ranked by
//! average rating. Sorting is stable so equal ratings keep catalog order.

use crate::config::RecommendationConfig;
use crate::models::Book;

/// Best-rated books the user does not own yet.
pub fn home_recommendations(books: &[Book]) -> Vec<&Book> {
    let candidates = books
        .iter()
        .filter(|b| !b.is_in_library && b.rating() >= RecommendationConfig::MIN_HOME_RATING);
    top_rated(candidates, RecommendationConfig::HOME_LIMIT)
}

/// Books sharing the focal book's primary category.
///
/// A focal book without categories has nothing to relate to.
pub fn related_recommendations<'a>(books: &'a [Book], focal: &Book) -> Vec<&'a Book> {
    let Some(genre) = focal.primary_category() else {
        return Vec::new();
    };
    let candidates = books.iter().filter(|b| {
        b.id != focal.id && !b.is_in_library && b.categories.iter().any(|c| c == genre)
    });
    top_rated(candidates, RecommendationConfig::RELATED_LIMIT)
}

fn top_rated<'a>(candidates: impl Iterator<Item = &'a Book>, limit: usize) -> Vec<&'a Book> {
    let mut ranked: Vec<&Book> = candidates.collect();
    ranked.sort_by(|a, b| b.rating().total_cmp(&a.rating()));
    ranked.truncate(limit);
    ranked
}
