//! Theme tokens and their resolution
//!
//! A theme is a tree of named design values. Extensions are declared either
//! as static values or as deferred functions over a [`ThemeLookup`], and are
//! deep-merged over the built-in base theme.

pub mod color;
pub mod extension;
pub mod lookup;
pub mod merge;
pub mod value;

pub use color::{is_color_category, is_valid_color, validate_color_category};
pub use extension::{DeferredFn, ThemeExtension, TokenReference, parse_reference};
pub use lookup::ThemeLookup;
pub use merge::{deep_merge, merge_category, merge_maps};
pub use value::{ThemeMap, ThemeValue};
