use anyhow::{Context, Result};
use derivative::Derivative;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub type Color = [u8; 3];

#[derive(Serialize, Deserialize, Default, Debug, Clone)]
#[serde(default)]
pub struct Config {
    pub white_logo: WhiteLogo,
    pub square: Square,
    pub icons: Icons,
    pub favicon: Favicon,
    pub pwa: Pwa,
}

#[derive(Serialize, Deserialize, Debug, Clone, Derivative)]
#[derivative(Default)]
#[serde(default)]
pub struct WhiteLogo {
    #[derivative(Default(value = "\"logo_black@2x.png\".into()"))]
    pub input: PathBuf,

    #[derivative(Default(value = "\"logo_white@2x.png\".into()"))]
    pub output: PathBuf,

    #[derivative(Default(value = "128"))]
    pub threshold: u8,

    #[derivative(Default(value = "[255, 255, 255]"))]
    pub target: Color,
}

#[derive(Serialize, Deserialize, Debug, Clone, Derivative)]
#[derivative(Default)]
#[serde(default)]
pub struct Square {
    #[derivative(Default(value = "\"logo_black@2x.png\".into()"))]
    pub input: PathBuf,

    #[derivative(Default(value = "1024"))]
    pub size: u32,

    #[derivative(Default(value = "0.15"))]
    pub padding: f32,

    #[derivative(Default(value = "\"logo_square_white_bg.png\".into()"))]
    pub light_output: PathBuf,

    #[derivative(Default(value = "[255, 255, 255]"))]
    pub light_background: Color,

    #[derivative(Default(value = "\"logo_square_black_bg.png\".into()"))]
    pub dark_output: PathBuf,

    #[derivative(Default(value = "[0, 0, 0]"))]
    pub dark_background: Color,

    /// Fill color of the logo on the dark canvas
    #[derivative(Default(value = "[255, 255, 255]"))]
    pub dark_foreground: Color,
}

#[derive(Serialize, Deserialize, Debug, Clone, Derivative)]
#[derivative(Default)]
#[serde(default)]
pub struct Icons {
    #[derivative(Default(value = "\"logo_square_white_bg.png\".into()"))]
    pub light_input: PathBuf,

    #[derivative(Default(value = "\"logo_square_black_bg.png\".into()"))]
    pub dark_input: PathBuf,

    #[derivative(Default(value = "\"icons\".into()"))]
    pub output_dir: PathBuf,

    #[derivative(Default(
        value = "vec![16, 32, 48, 72, 96, 128, 144, 152, 167, 180, 192, 256, 384, 512, 1024]"
    ))]
    pub sizes: Vec<u32>,

    #[derivative(Default(value = "vec![16, 32]"))]
    pub favicon_sizes: Vec<u32>,

    #[derivative(Default(value = "vec![120, 180, 152, 167]"))]
    pub apple_sizes: Vec<u32>,

    /// Size of the unsuffixed `apple-touch-icon.png`
    #[derivative(Default(value = "180"))]
    pub apple_default_size: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Derivative)]
#[derivative(Default)]
#[serde(default)]
pub struct Favicon {
    #[derivative(Default(value = "\"logo_square_white_bg.png\".into()"))]
    pub input: PathBuf,

    #[derivative(Default(value = "\"favicon.ico\".into()"))]
    pub output: PathBuf,

    #[derivative(Default(value = "vec![16, 32, 48]"))]
    pub sizes: Vec<u32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Derivative)]
#[derivative(Default)]
#[serde(default)]
pub struct Pwa {
    #[derivative(Default(value = "\".\".into()"))]
    pub output_dir: PathBuf,

    #[derivative(Default(value = "vec![48, 72, 96, 144, 192, 512]"))]
    pub sizes: Vec<u32>,

    #[derivative(Default(value = "\"THE\".to_string()"))]
    pub title: String,

    #[derivative(Default(value = "\"REAL ESTATE\".to_string()"))]
    pub subtitle: String,

    #[derivative(Default(value = "[0x4a, 0x4a, 0x4a]"))]
    pub background: Color,

    #[derivative(Default(value = "[255, 255, 255]"))]
    pub foreground: Color,

    /// Tried in order, the first loadable one wins
    #[derivative(Default(value = "font_paths_default()"))]
    pub font_paths: Vec<PathBuf>,
}

fn font_paths_default() -> Vec<PathBuf> {
    [
        "/System/Library/Fonts/Helvetica.ttc",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect()
}

impl Config {
    /// Defaults when `path` is `None`, otherwise the file merged over the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Config::default());
        };

        let text = fs::read_to_string(path)
            .with_context(|| format!("read config file {} failed", path.display()))?;

        let config = toml::from_str::<Config>(&text)
            .with_context(|| format!("parse config file {} failed", path.display()))?;

        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).with_context(|| "convert config to toml format failed")
    }
}
