//! Fluent localization loaded from the embedded `i18n/` folder

use std::sync::LazyLock;

use i18n_embed::{
    DefaultLocalizer, LanguageLoader, Localizer,
    fluent::{FluentLanguageLoader, fluent_language_loader},
};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "i18n/"]
struct Localizations;

pub static LANGUAGE_LOADER: LazyLock<FluentLanguageLoader> = LazyLock::new(|| {
    let loader: FluentLanguageLoader = fluent_language_loader!();

    if let Err(err) = loader.load_fallback_language(&Localizations) {
        log::error!("Error while loading fallback language: {}", err);
    }

    loader
});

/// Look up a localized message, optionally with fluent arguments
#[macro_export]
macro_rules! fl {
    ($message_id:literal) => {{
        i18n_embed_fl::fl!($crate::localize::LANGUAGE_LOADER, $message_id)
    }};

    ($message_id:literal, $($args:expr),*) => {{
        i18n_embed_fl::fl!($crate::localize::LANGUAGE_LOADER, $message_id, $($args), *)
    }};
}

fn localizer() -> Box<dyn Localizer> {
    Box::from(DefaultLocalizer::new(&*LANGUAGE_LOADER, &Localizations))
}

/// Select the best available language for the desktop's requested locales
pub fn localize() {
    let localizer = localizer();
    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();

    if let Err(error) = localizer.select(&requested_languages) {
        log::warn!("Error while loading language for rulerpick: {}", error);
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_fallback_strings_load() {
        assert_eq!(crate::fl!("unit-kg"), "kg");
        assert_eq!(crate::fl!("unit-lbs"), "lb");
        let readout = crate::fl!("height-readout", value = 172);
        assert!(readout.contains("172") && readout.ends_with("cm"));
    }
}
