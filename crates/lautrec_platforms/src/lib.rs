//! Platform constraint registry and content validation.
//!
//! Every destination platform carries a fixed set of constraints: a
//! character ceiling, hashtag limits, and target image dimensions. This
//! crate loads those constraints once at startup into an immutable
//! [`PlatformRegistry`] and provides the pure [`validate`] function that
//! checks generated copy against a [`PlatformSpec`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod registry;
mod spec;
mod validator;

pub use registry::PlatformRegistry;
pub use spec::{CaptionStyle, PlatformSpec};
pub use validator::{Validation, format_hashtags, published_text, validate};
