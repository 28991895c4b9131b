//! Persisted preferences: language, currency and the signed-in user.
//!
//! Rehydrated once at startup. Each setter writes its entry through to
//! storage before returning; the three entries are independent.

use tracing::{info, warn};

use crate::currency::Currency;
use crate::i18n::{Language, Strings};
use crate::model::User;
use crate::storage::{Key, Result, Storage, StorageError};

#[derive(Debug)]
pub struct Preferences {
    storage: Storage,
    language: Language,
    currency: Currency,
    user: Option<User>,
}

impl Preferences {
    /// Loads stored preferences, keeping defaults for anything unreadable.
    ///
    /// A stored value that doesn't parse is logged and ignored rather than
    /// failing startup. Only I/O errors are returned.
    pub fn load(storage: Storage) -> Result<Self> {
        let language = match storage.get(Key::Language)? {
            Some(code) => code.parse().unwrap_or_else(|e| {
                warn!(%e, "ignoring stored language");
                Language::default()
            }),
            None => Language::default(),
        };

        let currency = match storage.get(Key::Currency)? {
            Some(code) => code.parse().unwrap_or_else(|e| {
                warn!(%e, "ignoring stored currency");
                Currency::default()
            }),
            None => Currency::default(),
        };

        let user = match storage.get_json::<User>(Key::User) {
            Ok(user) => user,
            Err(StorageError::Json(e)) => {
                warn!(%e, "ignoring stored user");
                None
            }
            Err(e) => return Err(e),
        };

        info!(%language, %currency, signed_in = user.is_some(), "preferences loaded");
        Ok(Self {
            storage,
            language,
            currency,
            user,
        })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Display strings for the current language.
    pub fn strings(&self) -> &'static Strings {
        self.language.strings()
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn set_language(&mut self, language: Language) -> Result<()> {
        self.storage.set(Key::Language, language.code())?;
        self.language = language;
        info!(%language, "language changed");
        Ok(())
    }

    pub fn set_currency(&mut self, currency: Currency) -> Result<()> {
        self.storage.set(Key::Currency, currency.code())?;
        self.currency = currency;
        info!(%currency, "currency changed");
        Ok(())
    }

    /// Signs a user in, or out with `None`. Signing out removes the stored record.
    pub fn set_user(&mut self, user: Option<User>) -> Result<()> {
        match &user {
            Some(u) => {
                self.storage.set_json(Key::User, u)?;
                info!(user_id = %u.id, "user signed in");
            }
            None => {
                self.storage.remove(Key::User)?;
                info!("user signed out");
            }
        }
        self.user = user;
        Ok(())
    }

    pub fn toggle_language(&mut self) -> Result<()> {
        self.set_language(self.language.toggled())
    }

    pub fn toggle_currency(&mut self) -> Result<()> {
        self.set_currency(self.currency.toggled())
    }
}
