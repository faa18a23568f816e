//! Viewer preferences
//!
//! Persisted separately from anything gameplay-related, in LocalStorage.

use serde::{Deserialize, Serialize};

/// Preferences shared by all three toys
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Firefly tails
    pub tails: bool,
    /// Draw force vectors and position readouts on the firefly canvas
    pub debug_overlay: bool,
    /// Minimize motion (no tails, slower ambient spawns)
    pub reduced_motion: bool,
    /// Mean seconds between ambient star spawns
    pub spawn_interval_mean: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tails: true,
            debug_overlay: false,
            reduced_motion: false,
            spawn_interval_mean: crate::consts::SPAWN_INTERVAL_MEAN,
        }
    }
}

impl Settings {
    /// Effective tails (respects reduced_motion)
    pub fn effective_tails(&self) -> bool {
        self.tails && !self.reduced_motion
    }

    /// Effective ambient spawn interval
    pub fn effective_spawn_interval(&self) -> f32 {
        if self.reduced_motion {
            self.spawn_interval_mean * 4.0
        } else {
            self.spawn_interval_mean
        }
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "glimmerbox_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduced_motion_overrides_tails() {
        let mut s = Settings::default();
        assert!(s.effective_tails());
        s.reduced_motion = true;
        assert!(!s.effective_tails());
        assert!(s.effective_spawn_interval() > s.spawn_interval_mean);
    }
}
