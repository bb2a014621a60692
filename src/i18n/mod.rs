//! Translation resolution and page binding.

/// Translation layer errors.
mod error;
pub mod locale;
pub mod resolver;

pub use error::I18nError;
pub use locale::{
    detect_language,
    system_locale,
};
pub use resolver::{
    RebindReport,
    Resolver,
    ResolverOptions,
    ResolverState,
};
