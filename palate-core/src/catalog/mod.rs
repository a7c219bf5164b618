//! Catalog data model: dishes, questions, answers.

mod answer;
mod dish;
mod question;

pub use answer::Answer;
pub use dish::Dish;
pub use question::{Question, QuestionKind};
