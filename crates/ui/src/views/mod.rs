mod flashcard;
mod grand;
mod home;
mod quiz;
mod topic;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use flashcard::FlashcardItem;
pub use grand::{GrandDeckView, GrandQuizView};
pub use home::HomeView;
pub use quiz::QuizPanel;
pub use topic::TopicView;
