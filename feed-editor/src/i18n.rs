// SPDX-License-Identifier: GPL-3.0-only

//! Provides localization support for this crate.

use std::sync::LazyLock;

use feed_contracts::Translate;
use i18n_embed::{
    DefaultLocalizer, LanguageLoader, Localizer,
    fluent::{FluentLanguageLoader, fluent_language_loader},
    unic_langid::LanguageIdentifier,
};
use rust_embed::RustEmbed;

/// Applies the requested language(s) to requested translations from the `fl!()` macro.
pub fn init(requested_languages: &[LanguageIdentifier]) {
    if let Err(why) = localizer().select(requested_languages) {
        tracing::error!(%why, "error while loading fluent localizations");
    }
}

/// Get the `Localizer` to be used for localizing this library.
#[must_use]
pub fn localizer() -> Box<dyn Localizer> {
    Box::from(DefaultLocalizer::new(&*LANGUAGE_LOADER, &Localizations))
}

#[derive(RustEmbed)]
#[folder = "i18n/"]
struct Localizations;

pub static LANGUAGE_LOADER: LazyLock<FluentLanguageLoader> = LazyLock::new(|| {
    let loader: FluentLanguageLoader = fluent_language_loader!();

    loader
        .load_fallback_language(&Localizations)
        .expect("Error while loading fallback language");

    loader
});

/// Request a localized string by ID from the i18n/ directory.
#[macro_export]
macro_rules! fl {
    ($message_id:literal) => {{
        i18n_embed_fl::fl!($crate::i18n::LANGUAGE_LOADER, $message_id)
    }};

    ($message_id:literal, $($args:expr),*) => {{
        i18n_embed_fl::fl!($crate::i18n::LANGUAGE_LOADER, $message_id, $($args), *)
    }};
}

/// Runtime key lookup for collaborators that only know a message key
#[derive(Debug, Clone, Copy, Default)]
pub struct FluentTranslator;

impl Translate for FluentTranslator {
    fn translate(&self, key: &str) -> String {
        LANGUAGE_LOADER.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_strings_resolve_by_key() {
        assert_eq!(
            FluentTranslator.translate("feed-definition-saving"),
            "Saving feed definition"
        );
    }

    #[test]
    fn static_lookup_matches_runtime_lookup() {
        assert_eq!(fl!("field-feed-name"), FluentTranslator.translate("field-feed-name"));
    }
}
