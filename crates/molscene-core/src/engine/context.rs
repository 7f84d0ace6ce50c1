use super::config::TranspileConfig;
use super::progress::ProgressReporter;
use crate::core::palette::ColorSwatch;

/// Shared, read-only state handed to every compilation task.
#[derive(Clone, Copy)]
pub struct CompileContext<'a> {
    pub config: &'a TranspileConfig,
    pub reporter: &'a ProgressReporter<'a>,
}

impl<'a> CompileContext<'a> {
    pub fn new(config: &'a TranspileConfig, reporter: &'a ProgressReporter<'a>) -> Self {
        Self { config, reporter }
    }

    pub fn palette(&self) -> &'a ColorSwatch {
        &self.config.palette
    }
}
