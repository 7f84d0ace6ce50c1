use crate::core::models::representation::Channel;
use crate::core::palette::ColorSwatch;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_FIELD_OF_VIEW: f64 = 40.0;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for option '{option}', expected {expected}")]
    InvalidOption {
        option: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// How atoms other than carbon are colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NonCarbonColoring {
    /// Every element gets its majority color; minority atoms keep their own color.
    #[default]
    PerAtom,
    /// Every element gets its majority color and nothing else.
    Uniform,
}

impl FromStr for NonCarbonColoring {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "per-atom" => Ok(NonCarbonColoring::PerAtom),
            "uniform" => Ok(NonCarbonColoring::Uniform),
            _ => Err(ConfigError::InvalidOption {
                option: "non-carbon-coloring",
                value: s.to_string(),
                expected: "per-atom or uniform",
            }),
        }
    }
}

/// Renderer representation used for the sticks channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum StickStyle {
    #[default]
    #[serde(rename = "sym-licorice")]
    SymLicorice,
    #[serde(rename = "licorice")]
    Licorice,
    #[serde(rename = "hyperball")]
    Hyperball,
    #[serde(rename = "ball+stick")]
    BallAndStick,
}

impl StickStyle {
    /// Name of the renderer representation drawing this style.
    pub fn representation(&self) -> &'static str {
        match self {
            StickStyle::SymLicorice | StickStyle::Licorice => "licorice",
            StickStyle::Hyperball => "hyperball",
            StickStyle::BallAndStick => "ball+stick",
        }
    }

    /// Whether multiple bonds are drawn as symmetric parallel sticks.
    pub fn symmetric_bonds(&self) -> bool {
        matches!(self, StickStyle::SymLicorice | StickStyle::BallAndStick)
    }
}

impl fmt::Display for StickStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StickStyle::SymLicorice => "sym-licorice",
            StickStyle::Licorice => "licorice",
            StickStyle::Hyperball => "hyperball",
            StickStyle::BallAndStick => "ball+stick",
        };
        f.write_str(name)
    }
}

impl FromStr for StickStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "sym-licorice" => Ok(StickStyle::SymLicorice),
            "licorice" => Ok(StickStyle::Licorice),
            "hyperball" => Ok(StickStyle::Hyperball),
            "ball+stick" | "ball" => Ok(StickStyle::BallAndStick),
            _ => Err(ConfigError::InvalidOption {
                option: "stick-style",
                value: s.to_string(),
                expected: "sym-licorice, licorice, hyperball or ball+stick",
            }),
        }
    }
}

/// Viewer settings passed through to the scene unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSettings {
    /// Vertical field of view in degrees.
    pub field_of_view: f64,
    /// Fog start as a percentage of the slab depth.
    pub fog_start: Option<f64>,
    /// Per-channel transparency in `0.0..=1.0`. Channels not listed are opaque.
    pub transparency: BTreeMap<Channel, f64>,
}

impl RenderSettings {
    pub fn transparency_of(&self, channel: Channel) -> f64 {
        self.transparency.get(&channel).copied().unwrap_or(0.0)
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            field_of_view: DEFAULT_FIELD_OF_VIEW,
            fog_start: None,
            transparency: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TranspileConfig {
    pub non_carbon_coloring: NonCarbonColoring,
    pub stick_style: StickStyle,
    /// Keep the camera validation script in the scene output.
    pub validation: bool,
    pub palette: ColorSwatch,
    pub render: RenderSettings,
}

impl Default for TranspileConfig {
    fn default() -> Self {
        Self {
            non_carbon_coloring: NonCarbonColoring::default(),
            stick_style: StickStyle::default(),
            validation: false,
            palette: ColorSwatch::builtin(),
            render: RenderSettings::default(),
        }
    }
}

#[derive(Default)]
pub struct TranspileConfigBuilder {
    non_carbon_coloring: Option<NonCarbonColoring>,
    stick_style: Option<StickStyle>,
    validation: Option<bool>,
    palette: Option<ColorSwatch>,
    field_of_view: Option<f64>,
    fog_start: Option<f64>,
    transparency: BTreeMap<Channel, f64>,
}

impl TranspileConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn non_carbon_coloring(mut self, mode: NonCarbonColoring) -> Self {
        self.non_carbon_coloring = Some(mode);
        self
    }
    pub fn stick_style(mut self, style: StickStyle) -> Self {
        self.stick_style = Some(style);
        self
    }
    pub fn validation(mut self, enabled: bool) -> Self {
        self.validation = Some(enabled);
        self
    }
    pub fn palette(mut self, palette: ColorSwatch) -> Self {
        self.palette = Some(palette);
        self
    }
    pub fn field_of_view(mut self, degrees: f64) -> Self {
        self.field_of_view = Some(degrees);
        self
    }
    pub fn fog_start(mut self, percent: f64) -> Self {
        self.fog_start = Some(percent);
        self
    }
    pub fn transparency(mut self, channel: Channel, value: f64) -> Self {
        self.transparency.insert(channel, value);
        self
    }

    pub fn build(self) -> Result<TranspileConfig, ConfigError> {
        let field_of_view = self.field_of_view.unwrap_or(DEFAULT_FIELD_OF_VIEW);
        if !(field_of_view > 0.0 && field_of_view < 180.0) {
            return Err(ConfigError::InvalidOption {
                option: "field-of-view",
                value: field_of_view.to_string(),
                expected: "an angle between 0 and 180 degrees",
            });
        }
        if let Some((_, value)) = self
            .transparency
            .iter()
            .find(|(_, value)| !(0.0..=1.0).contains(*value))
        {
            return Err(ConfigError::InvalidOption {
                option: "transparency",
                value: value.to_string(),
                expected: "a value between 0 and 1",
            });
        }

        Ok(TranspileConfig {
            non_carbon_coloring: self.non_carbon_coloring.unwrap_or_default(),
            stick_style: self.stick_style.unwrap_or_default(),
            validation: self.validation.unwrap_or(false),
            palette: self.palette.unwrap_or_default(),
            render: RenderSettings {
                field_of_view,
                fog_start: self.fog_start,
                transparency: self.transparency,
            },
        })
    }
}
