//! Page components for the Newdle desktop client.

mod home;
mod newdle;

pub use home::{Home, NotFound};
pub use newdle::{Answer, AnswerAs, Edit, Summary};
