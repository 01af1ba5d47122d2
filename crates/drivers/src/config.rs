use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use wardrobe_domain::DisplaySize;

/// Optional override file, looked up in the working directory.
pub const CONFIG_FILE: &str = "wardrobe.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub title: String,
    pub tops_dir: PathBuf,
    pub bottoms_dir: PathBuf,
    pub sound_effect: PathBuf,
    pub sound_enabled: bool,
    pub window_width: usize,
    pub window_height: usize,
    pub image_width: u32,
    pub image_height: u32,
    /// `#RRGGBB`
    pub background: String,
    pub random_seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Wardrobe App".to_string(),
            tops_dir: PathBuf::from("tops"),
            bottoms_dir: PathBuf::from("bottoms"),
            sound_effect: PathBuf::from("assets/Slynk.mp3"),
            sound_enabled: true,
            window_width: 220,
            window_height: 500,
            image_width: 200,
            image_height: 200,
            background: "#E3C396".to_string(),
            random_seed: None,
        }
    }
}

impl AppConfig {
    /// Reads [`CONFIG_FILE`] when present, otherwise returns the defaults.
    pub fn load() -> Result<Self, String> {
        let path = Path::new(CONFIG_FILE);
        if path.exists() {
            return Self::load_from_path(path);
        }
        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|error| format!("failed to read {}: {error}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .map_err(|error| format!("invalid config {}: {error}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.image_width == 0 || self.image_height == 0 {
            return Err("image size must not be zero".to_string());
        }
        if self.window_width < self.image_width as usize
            || self.window_height < 2 * self.image_height as usize
        {
            return Err(format!(
                "window {}x{} cannot hold two {}x{} images",
                self.window_width, self.window_height, self.image_width, self.image_height
            ));
        }
        self.background_color()?;
        Ok(())
    }

    pub fn image_size(&self) -> DisplaySize {
        DisplaySize::new(self.image_width, self.image_height)
    }

    pub fn background_color(&self) -> Result<u32, String> {
        parse_hex_color(&self.background)
    }
}

fn parse_hex_color(value: &str) -> Result<u32, String> {
    let digits = value
        .strip_prefix('#')
        .ok_or_else(|| format!("color must start with '#': {value}"))?;
    if digits.len() != 6 {
        return Err(format!("color must have six hex digits: {value}"));
    }
    u32::from_str_radix(digits, 16).map_err(|error| format!("invalid color {value}: {error}"))
}
