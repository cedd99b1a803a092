use crate::domain::SiteSettings;
use crate::ports::StoreError;

pub trait SettingsStore {
  /// `None` si nunca se guardó nada.
  fn load_settings(&self) -> Result<Option<SiteSettings>, StoreError>;
  fn save_settings(&self, settings: &SiteSettings) -> Result<(), StoreError>;
}

impl<T: SettingsStore + ?Sized> SettingsStore for &T {
  fn load_settings(&self) -> Result<Option<SiteSettings>, StoreError> {
    (**self).load_settings()
  }

  fn save_settings(&self, settings: &SiteSettings) -> Result<(), StoreError> {
    (**self).save_settings(settings)
  }
}
