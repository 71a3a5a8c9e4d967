//! Category + free-text filtering over the fixture lists.

use std::str::FromStr;

use crate::models::{Category, CommunityPost, Difficulty, LearnCard};

/// A record that can be narrowed by category and searched by text.
pub trait Filterable {
    type Category: Copy + PartialEq;

    fn category(&self) -> Self::Category;

    /// Fields the search text is matched against.
    fn search_fields(&self) -> Vec<&str>;
}

impl Filterable for CommunityPost {
    type Category = Category;

    fn category(&self) -> Category {
        self.category
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.content.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}

impl Filterable for LearnCard {
    type Category = Difficulty;

    fn category(&self) -> Difficulty {
        self.difficulty
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.title.as_str(),
            self.description.as_str(),
            self.technique.label(),
        ];
        fields.extend(self.title_hi.as_deref());
        fields.extend(self.description_hi.as_deref());
        fields
    }
}

/// `category: None` means "all".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter<C> {
    pub category: Option<C>,
    pub search: String,
}

impl<C> Default for Filter<C> {
    fn default() -> Self {
        Self {
            category: None,
            search: String::new(),
        }
    }
}

impl<C: Copy + PartialEq> Filter<C> {
    pub fn new(category: Option<C>, search: impl Into<String>) -> Self {
        Self {
            category,
            search: search.into(),
        }
    }

    pub fn matches<T>(&self, item: &T) -> bool
    where
        T: Filterable<Category = C>,
    {
        let category_ok = self.category.map_or(true, |c| item.category() == c);
        if !category_ok {
            return false;
        }
        let needle = self.search.trim().to_lowercase();
        needle.is_empty()
            || item
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Matching items in their original order.
    pub fn apply<'a, T>(&self, items: &'a [T]) -> Vec<&'a T>
    where
        T: Filterable<Category = C>,
    {
        items.iter().filter(|item| self.matches(*item)).collect()
    }
}

pub type PostFilter = Filter<Category>;
pub type LearnFilter = Filter<Difficulty>;

/// Parses a select-box value: "all" lifts the restriction, anything else must name a category.
pub fn parse_category_choice<C: FromStr>(value: &str) -> Result<Option<C>, C::Err> {
    if value.trim().eq_ignore_ascii_case("all") {
        Ok(None)
    } else {
        value.parse().map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;
    use crate::fixtures;

    #[test]
    fn test_default_filter_keeps_everything() {
        let posts = fixtures::community_posts();
        assert_eq!(PostFilter::default().apply(&posts).len(), posts.len());
    }

    #[test]
    fn test_tag_match() {
        let posts = fixtures::community_posts();
        let hits = PostFilter::new(None, "irctc").apply(&posts);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "5");
    }

    #[test]
    fn test_category_and_search_are_combined() {
        let posts = fixtures::community_posts();
        let hits = PostFilter::new(Some(Category::Trending), "deepfake").apply(&posts);
        assert_eq!(hits.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(), vec!["3"]);

        let none = PostFilter::new(Some(Category::Crisis), "deepfake").apply(&posts);
        assert!(none.is_empty());
    }

    #[test]
    fn test_hindi_search() {
        let posts = fixtures::community_posts();
        let hits = PostFilter::new(None, "किसान").apply(&posts);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "6");
    }

    #[test]
    fn test_learn_filter_by_difficulty() {
        let cards = fixtures::learn_cards();
        let advanced = LearnFilter::new(Some(Difficulty::Advanced), "").apply(&cards);
        assert_eq!(advanced.len(), 2);
        let deepfake = LearnFilter::new(Some(Difficulty::Advanced), "DEEPFAKE").apply(&cards);
        assert_eq!(deepfake.len(), 1);
    }

    #[test]
    fn test_learn_filter_matches_technique_label() {
        let cards = fixtures::learn_cards();
        let hits = LearnFilter::new(None, "false context").apply(&cards);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].difficulty, Difficulty::Intermediate);
    }

    #[test]
    fn test_parse_category_choice() {
        assert_eq!(parse_category_choice::<Category>("all"), Ok(None));
        assert_eq!(parse_category_choice::<Category>("crisis"), Ok(Some(Category::Crisis)));
        assert_eq!(
            parse_category_choice::<Difficulty>("expert"),
            Err(ModelError::UnknownDifficulty("expert".to_string()))
        );
    }
}
