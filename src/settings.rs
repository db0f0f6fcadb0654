//! Workflow settings assembled once at process start.

use crate::{couple, error::SettingsError, vars};
use log::info;
use std::path::PathBuf;

/// Configuration shared by the coupled model scripts, passed by reference.
#[derive(Clone, Debug)]
pub struct Settings {
    /// resolved path of the groundwater model library
    pub libmf6: PathBuf,
    /// surface water control file of the base run
    pub control_file: PathBuf,
    /// projected reference system of the model domain
    pub crs: &'static str,
    /// map tile provider for overview figures
    pub tile_provider: &'static str,
    /// figure export extension
    pub fig_ext: &'static str,
    /// export figures without a background
    pub fig_transparent: bool,
}

impl Settings {
    /// Resolve the environment dependent pieces and fill in the constants.
    pub fn initialise() -> Result<Self, SettingsError> {
        let libmf6 = couple::library_path()?;
        info!("groundwater library at {}", libmf6.display());
        Ok(Settings {
            libmf6,
            control_file: PathBuf::from(vars::DEFAULT_CONTROL),
            crs: vars::MODEL_CRS,
            tile_provider: vars::TILE_PROVIDER,
            fig_ext: vars::FIG_EXT,
            fig_transparent: vars::FIG_TRANSPARENT,
        })
    }
}
