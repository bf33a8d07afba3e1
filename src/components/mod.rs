//! UI Components for the Newdle desktop client.

mod answer_table;
mod newdle_title;

pub use answer_table::{AnswerGrid, AnswerList};
pub use newdle_title::NewdleTitle;
