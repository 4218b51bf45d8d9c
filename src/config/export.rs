//! Export configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Largest raster scale factor accepted.
pub const MAX_EXPORT_SCALE: u32 = 4;

/// Largest number of blank requirement rows a new form may start with.
pub const MAX_INITIAL_REQUIREMENT_ROWS: usize = 100;

/// Region export and form seeding settings
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Pixels per layout unit when rasterizing regions
    #[serde(default = "default_scale")]
    pub scale: u32,

    /// Blank rows the requirements table starts with
    #[serde(default = "default_requirement_rows")]
    pub requirement_rows: usize,
}

impl ExportConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=MAX_EXPORT_SCALE).contains(&self.scale) {
            return Err(ValidationError::InvalidExportScale {
                max: MAX_EXPORT_SCALE,
            });
        }
        if self.requirement_rows > MAX_INITIAL_REQUIREMENT_ROWS {
            return Err(ValidationError::TooManyRequirementRows {
                max: MAX_INITIAL_REQUIREMENT_ROWS,
            });
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            scale: default_scale(),
            requirement_rows: default_requirement_rows(),
        }
    }
}

fn default_scale() -> u32 {
    1
}

fn default_requirement_rows() -> usize {
    crate::domain::requirements::DEFAULT_ROW_COUNT
}
