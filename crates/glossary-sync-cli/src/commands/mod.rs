pub mod add_locale;
pub mod locales;
pub mod preview;
pub mod sync;
