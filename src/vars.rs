/* # environment */

pub const CONDA_PREFIX_VAR: &str = "CONDA_PREFIX"; // prefix of the active environment
pub const LIBMF6_STEM: &str = "libmf6"; // groundwater model native library

/* # cartography */

pub const MODEL_CRS: &str = "EPSG:4456"; // projected system shared by all models
pub const TILE_PROVIDER: &str = "USGS.USTopo"; // background tiles for overview figures

/* # figures */

pub const FIG_EXT: &str = ".png"; // figure export format
pub const FIG_TRANSPARENT: bool = true; // export figures without a background

/* # control files */

// surface water control file for the base tidal run
pub const DEFAULT_CONTROL: &str = "../dflow-fm/coarse/tides/base/FlowFM.mdu";

/* # coupling */

pub const MAX_COUPLE_HOURS: f64 = 24.0; // longest allowed coupling interval
