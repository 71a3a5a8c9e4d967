use crate::error::ModelError;
use crate::fixtures;
use crate::models::LearnCard;

/// Learn cards plus the per-session "completed" marks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearnCatalogue {
    cards: Vec<LearnCard>,
}

impl Default for LearnCatalogue {
    fn default() -> Self {
        Self::new(fixtures::learn_cards())
    }
}

impl LearnCatalogue {
    pub fn new(cards: Vec<LearnCard>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[LearnCard] {
        &self.cards
    }

    /// Flips the completed mark and returns the new value.
    pub fn toggle_completed(&mut self, index: usize) -> Result<bool, ModelError> {
        let card = self
            .cards
            .get_mut(index)
            .ok_or(ModelError::UnknownCard(index))?;
        card.completed = !card.completed;
        Ok(card.completed)
    }

    pub fn completed_count(&self) -> usize {
        self.cards.iter().filter(|c| c.completed).count()
    }

    pub fn progress_percent(&self) -> u8 {
        if self.cards.is_empty() {
            return 0;
        }
        (self.completed_count() * 100 / self.cards.len()) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_progress() {
        let mut catalogue = LearnCatalogue::default();
        assert_eq!(catalogue.progress_percent(), 0);

        assert_eq!(catalogue.toggle_completed(0), Ok(true));
        assert_eq!(catalogue.toggle_completed(3), Ok(true));
        assert_eq!(catalogue.completed_count(), 2);
        assert_eq!(catalogue.progress_percent(), 50);

        assert_eq!(catalogue.toggle_completed(0), Ok(false));
        assert_eq!(catalogue.progress_percent(), 25);
    }

    #[test]
    fn test_unknown_card() {
        let mut catalogue = LearnCatalogue::default();
        assert_eq!(catalogue.toggle_completed(9), Err(ModelError::UnknownCard(9)));
    }

    #[test]
    fn test_empty_catalogue_progress() {
        assert_eq!(LearnCatalogue::new(Vec::new()).progress_percent(), 0);
    }
}
