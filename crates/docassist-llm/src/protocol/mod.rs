//! Wire formats for upstream language-model APIs

pub mod google;
pub mod openai;
