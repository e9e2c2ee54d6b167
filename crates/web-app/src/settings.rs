use std::sync::Mutex;

use crate::detail::DetailMode;

#[allow(async_fn_in_trait)]
pub trait SettingsRepository {
    async fn read_settings(&self) -> Result<Settings, String>;
    async fn write_settings(&self, settings: Settings) -> Result<(), String>;
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub default_detail_mode: DetailMode,
}

/// Stores the settings as a JSON document, like a key in the browser's local storage.
#[derive(Default)]
pub struct JsonSettings {
    value: Mutex<Option<String>>,
}

impl JsonSettings {
    #[must_use]
    pub fn new(json: &str) -> Self {
        Self {
            value: Mutex::new(Some(json.to_string())),
        }
    }
}

impl SettingsRepository for JsonSettings {
    async fn read_settings(&self) -> Result<Settings, String> {
        let value = self.value.lock().map_err(|err| err.to_string())?;
        match *value {
            Some(ref json) => serde_json::from_str(json).map_err(|err| err.to_string()),
            None => Ok(Settings::default()),
        }
    }

    async fn write_settings(&self, settings: Settings) -> Result<(), String> {
        let json = serde_json::to_string(&settings).map_err(|err| err.to_string())?;
        *self.value.lock().map_err(|err| err.to_string())? = Some(json);
        Ok(())
    }
}
