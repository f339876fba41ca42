// SPDX-License-Identifier: MPL-2.0
//! UI language preference.
//!
//! The core does not translate anything; it only decides which of the
//! shipped languages is active, persists the choice, and tells the
//! presentation layer the text direction.

use crate::application::port::PreferenceStore;
use crate::config::{DEFAULT_LANGUAGE, LANGUAGE_PREFERENCE_KEY, RTL_LANGUAGES, SUPPORTED_LANGUAGES};
use crate::error::{Result, ValidationError};
use unic_langid::LanguageIdentifier;

/// Text direction of a UI language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    LeftToRight,
    RightToLeft,
}

/// Maps a BCP 47 tag (`"fr"`, `"de-AT"`, `"ar_EG"`) to a supported language code.
///
/// Matching is on the primary language subtag only.
#[must_use]
pub fn match_supported(tag: &str) -> Option<&'static str> {
    let normalized = tag.trim().replace('_', "-");
    // POSIX locales may carry an encoding suffix ("de_DE.UTF-8").
    let normalized = normalized.split('.').next().unwrap_or_default();
    let langid: LanguageIdentifier = normalized.parse().ok()?;
    let primary = langid.language.as_str();
    SUPPORTED_LANGUAGES
        .iter()
        .copied()
        .find(|code| code.eq_ignore_ascii_case(primary))
}

/// Picks the startup language.
///
/// Order: explicit request, stored preference, OS locale, then the default.
/// Unsupported candidates are skipped.
pub fn resolve_language(
    requested: Option<&str>,
    store: &impl PreferenceStore,
    os_locale: Option<String>,
) -> &'static str {
    requested
        .and_then(match_supported)
        .or_else(|| {
            store
                .get(LANGUAGE_PREFERENCE_KEY)
                .as_deref()
                .and_then(match_supported)
        })
        .or_else(|| os_locale.as_deref().and_then(match_supported))
        .unwrap_or(DEFAULT_LANGUAGE)
}

/// The active UI language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageState {
    code: &'static str,
}

impl LanguageState {
    /// Resolves the startup language, reading the OS locale via `sys-locale`.
    pub fn resolve(requested: Option<&str>, store: &impl PreferenceStore) -> Self {
        Self::resolve_with_os_locale(requested, store, sys_locale::get_locale())
    }

    /// Same as [`resolve`](Self::resolve) with an explicit OS locale.
    pub fn resolve_with_os_locale(
        requested: Option<&str>,
        store: &impl PreferenceStore,
        os_locale: Option<String>,
    ) -> Self {
        let code = resolve_language(requested, store, os_locale);
        tracing::debug!(code, "UI language resolved");
        Self { code }
    }

    #[must_use]
    pub fn code(&self) -> &'static str {
        self.code
    }

    #[must_use]
    pub fn direction(&self) -> TextDirection {
        if RTL_LANGUAGES.contains(&self.code) {
            TextDirection::RightToLeft
        } else {
            TextDirection::LeftToRight
        }
    }

    #[must_use]
    pub fn is_rtl(&self) -> bool {
        self.direction() == TextDirection::RightToLeft
    }

    /// Switches language and persists the choice under `"language"`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnsupportedLanguage`] for languages
    /// without shipped labels, or the store's error if persisting fails.
    /// The active language is unchanged on error.
    pub fn set(&mut self, store: &mut impl PreferenceStore, tag: &str) -> Result<()> {
        let code = match_supported(tag).ok_or_else(|| ValidationError::UnsupportedLanguage {
            code: tag.to_string(),
        })?;
        store.set(LANGUAGE_PREFERENCE_KEY, code)?;
        self.code = code;
        tracing::info!(code, "UI language changed");
        Ok(())
    }
}

impl Default for LanguageState {
    fn default() -> Self {
        Self {
            code: DEFAULT_LANGUAGE,
        }
    }
}
