use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::animation::AnimationTiming;
use crate::labels::Lang;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    pub lang: Lang,
    pub animation: AnimationSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AnimationSettings {
    pub loading_interval_ms: u64,
    pub loading_ticks: u32,
    pub fade_interval_ms: u64,
    pub fade_step: f32,
    pub blink_interval_ms: u64,
    pub blink_ticks: u32,
}

impl Settings {
    /// Built-in defaults, overridden by `path` when given. Nothing is read
    /// from disk otherwise.
    pub fn new(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = defaults()?;
        if let Some(path) = path {
            builder = builder.add_source(File::from(path.to_path_buf()).required(true));
        }
        Self::finish(builder)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Self::finish(defaults()?.add_source(File::from_str(content, FileFormat::Toml)))
    }

    pub fn timing(&self) -> AnimationTiming {
        let a = &self.animation;
        AnimationTiming {
            loading_interval: Duration::from_millis(a.loading_interval_ms),
            loading_ticks: a.loading_ticks,
            fade_interval: Duration::from_millis(a.fade_interval_ms),
            fade_step: a.fade_step,
            blink_interval: Duration::from_millis(a.blink_interval_ms),
            blink_ticks: a.blink_ticks,
        }
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let a = &self.animation;
        if a.loading_interval_ms == 0 || a.fade_interval_ms == 0 || a.blink_interval_ms == 0 {
            return Err(ConfigError::Message("animation intervals must be greater than zero".into()));
        }
        if a.loading_ticks == 0 || a.blink_ticks == 0 {
            return Err(ConfigError::Message("animation tick counts must be greater than zero".into()));
        }
        if !(a.fade_step > 0.0 && a.fade_step <= 1.0) {
            return Err(ConfigError::Message(format!("fade_step must be in (0, 1], got {}", a.fade_step)));
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        let timing = AnimationTiming::default();
        Self {
            lang: Lang::default(),
            animation: AnimationSettings {
                loading_interval_ms: timing.loading_interval.as_millis() as u64,
                loading_ticks: timing.loading_ticks,
                fade_interval_ms: timing.fade_interval.as_millis() as u64,
                fade_step: timing.fade_step,
                blink_interval_ms: timing.blink_interval.as_millis() as u64,
                blink_ticks: timing.blink_ticks,
            },
        }
    }
}

/// Layered under every other source, so a config file may set any subset of keys.
fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(Config::builder().add_source(Config::try_from(&Settings::default())?))
}
