use crate::model::ids::TopicId;

/// One catalog entry: a lesson/chapter of the curriculum book.
///
/// Topics are defined at build time and never change, so titles are borrowed
/// from static data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Topic {
    id: TopicId,
    title: &'static str,
    page_number: u32,
}

impl Topic {
    #[must_use]
    pub const fn new(id: u32, title: &'static str, page_number: u32) -> Self {
        Self {
            id: TopicId::new(id),
            title,
            page_number,
        }
    }

    #[must_use]
    pub fn id(&self) -> TopicId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        self.title
    }

    #[must_use]
    pub fn page_number(&self) -> u32 {
        self.page_number
    }
}
