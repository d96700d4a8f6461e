use std::collections::BTreeSet;

use crate::model::ids::TopicId;

/// Set of topics whose quiz has been finished.
///
/// Grows monotonically: there is no removal operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletedTopics {
    ids: BTreeSet<TopicId>,
}

impl CompletedTopics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the id was not already present.
    pub fn insert(&mut self, id: TopicId) -> bool {
        self.ids.insert(id)
    }

    #[must_use]
    pub fn contains(&self, id: TopicId) -> bool {
        self.ids.contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = TopicId> + '_ {
        self.ids.iter().copied()
    }

    /// Keep only ids accepted by `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(TopicId) -> bool) {
        self.ids.retain(|id| keep(*id));
    }

    /// Completion as a whole percentage of `total`, rounded half up.
    #[must_use]
    pub fn percentage_of(&self, total: usize) -> u8 {
        if total == 0 {
            return 0;
        }
        let done = self.ids.len().min(total);
        let pct = (200 * done + total) / (2 * total);
        u8::try_from(pct).unwrap_or(100)
    }
}

impl FromIterator<TopicId> for CompletedTopics {
    fn from_iter<I: IntoIterator<Item = TopicId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
