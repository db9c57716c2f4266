//! News article model
//!
//! Provides the input side of the formatter: the article record handed over
//! by the publishing pipeline.
//!
//! This module is organized into:
//! - `types`: Core article data structures (Article, ArticleState, Subject, Category)
//! - `builder`: ArticleBuilder for assembling articles in code

mod builder;
mod types;

pub use self::builder::ArticleBuilder;
pub use self::types::{Article, ArticleState, ArticleType, Category, Subject};
