use super::Turn;

/// Chronological, append-only record of the turns in one session.
///
/// Insertion order is display order. The only way to remove turns is
/// [`ConversationStore::clear`], which drops all of them at once.
#[derive(Debug, Clone, Default)]
pub struct ConversationStore {
    turns: Vec<Turn>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    pub fn all(&self) -> &[Turn] {
        &self.turns
    }

    /// Turns newest first, for the summary view.
    pub fn recent_first(&self) -> Vec<&Turn> {
        self.turns.iter().rev().collect()
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(pairs: &[(&str, &str)]) -> ConversationStore {
        let mut store = ConversationStore::new();
        for pair in pairs {
            store.append(Turn::from(*pair));
        }
        store
    }

    #[test]
    fn test_append_preserves_order() {
        let store = store_with(&[("a", "1"), ("b", "2"), ("c", "3")]);

        let questions: Vec<_> = store.all().iter().map(|t| t.question()).collect();
        assert_eq!(questions, vec!["a", "b", "c"]);
        assert_eq!(store.len(), 3);
        assert_eq!(store.all()[2].answer(), "3");
    }

    #[test]
    fn test_clear_empties_store() {
        let mut store = store_with(&[("a", "1"), ("b", "2")]);

        store.clear();

        assert!(store.all().is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn test_clear_on_empty_store() {
        let mut store = ConversationStore::new();
        store.clear();
        assert!(store.all().is_empty());
    }

    #[test]
    fn test_recent_first_is_reverse_of_all() {
        for n in 0..5 {
            let mut store = ConversationStore::new();
            for i in 0..n {
                store.append(Turn::new(format!("q{i}"), format!("a{i}")));
            }

            let mut expected: Vec<&Turn> = store.all().iter().collect();
            expected.reverse();
            assert_eq!(store.recent_first(), expected);
        }
    }
}
