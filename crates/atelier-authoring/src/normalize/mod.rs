//! Normalization functions for admin authoring input.
//!
//! Small pure functions that reshape loosely-typed form values into the
//! canonical persisted shapes:
//! - **lists**: comma-joined or array string lists, paragraph blocks
//! - **scalars**: slugs, required/optional text, price and flag coercion
//! - **cells**: sparse per-plan cell maps

pub mod cells;
pub mod lists;
pub mod scalars;

pub use cells::normalize_per_plan;
pub use lists::{normalize_paragraphs, normalize_string_list};
pub use scalars::{coerce_flag, coerce_price, normalize_slug, optional_trimmed, required_text};
