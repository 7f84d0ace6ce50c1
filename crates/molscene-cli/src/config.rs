use crate::cli::TranspileArgs;
use crate::error::{CliError, Result};
use molscene::core::models::representation::Channel;
use molscene::core::palette::ColorSwatch;
use molscene::engine::config as core_config;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialColoringConfig {
    #[serde(rename = "non-carbon")]
    non_carbon: Option<String>,
    palette: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialSticksConfig {
    style: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialRenderConfig {
    #[serde(rename = "field-of-view")]
    field_of_view: Option<f64>,
    #[serde(rename = "fog-start")]
    fog_start: Option<f64>,
    /// Channel name to transparency.
    transparency: Option<BTreeMap<String, f64>>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialTranspileConfig {
    coloring: Option<PartialColoringConfig>,
    sticks: Option<PartialSticksConfig>,
    validation: Option<bool>,
    render: Option<PartialRenderConfig>,
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value)))
}

fn parse_channel(name: &str) -> Result<Channel> {
    name.parse::<Channel>()
        .map_err(|e| CliError::Config(e.to_string()))
}

impl PartialTranspileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::parsing(path, e))
    }

    /// Applies `--set` values, then CLI flags, on top of the file values and builds the core config.
    ///
    /// Relative palette paths in the file are resolved against `base_dir`.
    pub fn merge_with_cli(
        mut self,
        args: &TranspileArgs,
        base_dir: Option<&Path>,
    ) -> Result<core_config::TranspileConfig> {
        self.apply_set_values(&args.set_values)?;

        let coloring = self.coloring.take().unwrap_or_default();
        let sticks = self.sticks.take().unwrap_or_default();
        let render = self.render.take().unwrap_or_default();

        let mut builder = core_config::TranspileConfigBuilder::new();

        if args.uniform_non_carbon {
            builder = builder.non_carbon_coloring(core_config::NonCarbonColoring::Uniform);
        } else if let Some(mode) = &coloring.non_carbon {
            let mode = mode
                .parse::<core_config::NonCarbonColoring>()
                .map_err(|e| CliError::Config(e.to_string()))?;
            builder = builder.non_carbon_coloring(mode);
        }

        if let Some(style) = args.stick_style.as_ref().or(sticks.style.as_ref()) {
            let style = style
                .parse::<core_config::StickStyle>()
                .map_err(|e| CliError::Config(e.to_string()))?;
            builder = builder.stick_style(style);
        }

        builder = builder.validation(args.validation || self.validation.unwrap_or(false));

        let palette_path = match (&args.palette, &coloring.palette) {
            (Some(path), _) => Some(path.clone()),
            (None, Some(path)) => Some(match base_dir {
                Some(dir) if path.is_relative() => dir.join(path),
                _ => path.clone(),
            }),
            (None, None) => None,
        };
        if let Some(path) = palette_path {
            let mut palette = ColorSwatch::builtin();
            let added = palette
                .extend_from_path(&path)
                .map_err(|e| CliError::parsing(&path, e))?;
            debug!("Loaded {} palette entries from {:?}", added, path);
            builder = builder.palette(palette);
        }

        if let Some(fov) = render.field_of_view {
            builder = builder.field_of_view(fov);
        }
        if let Some(fog) = render.fog_start {
            builder = builder.fog_start(fog);
        }
        for (name, value) in render.transparency.unwrap_or_default() {
            builder = builder.transparency(parse_channel(&name)?, value);
        }

        builder.build().map_err(|e| CliError::Config(e.to_string()))
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };

            match key {
                "coloring.non-carbon" => {
                    self.coloring
                        .get_or_insert_with(Default::default)
                        .non_carbon = Some(value_str.to_string());
                }
                "coloring.palette" => {
                    self.coloring.get_or_insert_with(Default::default).palette =
                        Some(PathBuf::from(value_str));
                }
                "sticks.style" => {
                    self.sticks.get_or_insert_with(Default::default).style =
                        Some(value_str.to_string());
                }
                "validation" => {
                    self.validation = Some(parse_value(key, value_str, "boolean")?);
                }
                "render.field-of-view" => {
                    self.render
                        .get_or_insert_with(Default::default)
                        .field_of_view = Some(parse_value(key, value_str, "float")?);
                }
                "render.fog-start" => {
                    self.render.get_or_insert_with(Default::default).fog_start =
                        Some(parse_value(key, value_str, "float")?);
                }
                _ => match key.strip_prefix("render.transparency.") {
                    Some(channel) => {
                        let channel = parse_channel(channel)?;
                        let value: f64 = parse_value(key, value_str, "float")?;
                        self.render
                            .get_or_insert_with(Default::default)
                            .transparency
                            .get_or_insert_with(Default::default)
                            .insert(channel.name().to_string(), value);
                    }
                    None => {
                        return Err(CliError::Config(format!(
                            "Unsupported configuration key for --set: '{}'",
                            key
                        )));
                    }
                },
            }
        }
        Ok(())
    }
}
