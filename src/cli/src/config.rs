use std::{collections::BTreeMap, fs, io, path::Path};

use color_eyre::eyre::{WrapErr, eyre};
use cube_core::{Color, DEFAULT_SCRAMBLE_LENGTH};
use log::debug;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "cube.toml";

/// Settings read from the TOML config file. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Number of moves in a scramble.
    pub scramble_length: usize,
    /// Seed for scrambles; random if unset.
    pub seed: Option<u64>,
    /// Whether to draw stickers as colored blocks rather than letters.
    pub color: bool,
    /// Moves per line when printing the history.
    pub history_group: usize,
    /// Overrides of the sticker colors as `#rrggbb` strings.
    pub palette: BTreeMap<Color, String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            scramble_length: DEFAULT_SCRAMBLE_LENGTH,
            seed: None,
            color: true,
            history_group: 5,
            palette: BTreeMap::new(),
        }
    }
}

/// The RGB value used to draw each color, indexed by `Color::index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette([(u8, u8, u8); 6]);

impl Default for Palette {
    fn default() -> Self {
        Palette(Color::ALL.map(Color::rgb))
    }
}

impl Palette {
    pub fn rgb(&self, color: Color) -> (u8, u8, u8) {
        self.0[color.index()]
    }
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

impl CliConfig {
    /// Reads the config at `path`. When `path` is `None` the default path is
    /// tried and a missing file there means all defaults.
    pub fn load(path: Option<&Path>) -> color_eyre::Result<Self> {
        match path {
            Some(path) => Self::read(path, true),
            None => Self::read(Path::new(DEFAULT_CONFIG_PATH), false),
        }
    }

    fn read(path: &Path, required: bool) -> color_eyre::Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound && !required => {
                debug!("No config at {}, using defaults", path.display());
                return Ok(CliConfig::default());
            }
            Err(e) => {
                return Err(e).wrap_err_with(|| format!("Failed to read {}", path.display()));
            }
        };

        let config = Self::parse(&text)
            .wrap_err_with(|| format!("Failed to parse {}", path.display()))?;
        debug!("Loaded config from {}: {config:?}", path.display());
        Ok(config)
    }

    pub fn parse(text: &str) -> color_eyre::Result<Self> {
        let config = toml::from_str::<CliConfig>(text)?;
        if config.history_group == 0 {
            return Err(eyre!("`history_group` must be at least 1"));
        }
        // Surface bad palette entries at load time rather than on first draw.
        config.palette()?;
        Ok(config)
    }

    pub fn palette(&self) -> color_eyre::Result<Palette> {
        let mut palette = Palette::default();
        for (&color, hex) in &self.palette {
            palette.0[color.index()] = parse_hex(hex).ok_or_else(|| {
                eyre!(
                    "Invalid palette entry for {}: expected `#rrggbb` but got {hex:?}",
                    color.name()
                )
            })?;
        }
        Ok(palette)
    }
}
