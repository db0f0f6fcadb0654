use crate::{error::SettingsError, vars};
use log::trace;
use std::{
    fs,
    path::{Path, PathBuf},
};

/* # control files */

/// read a control file as lines
pub fn read_lines(control_path: &Path) -> Result<Vec<String>, SettingsError> {
    trace!("reading control file {}", control_path.display());
    Ok(fs::read_to_string(control_path)?
        .lines()
        .map(str::to_string)
        .collect())
}

fn control_or_default(control_path: Option<&Path>) -> PathBuf {
    control_path.map_or_else(|| PathBuf::from(vars::DEFAULT_CONTROL), Path::to_path_buf)
}

/// value of the last well formed `tag = value # comment` line
pub fn tag_value(lines: &[String], tag: &str) -> Option<String> {
    let mut value = None;
    for line in lines {
        if line.starts_with(tag) {
            if let Some(text) = line.splitn(2, '=').nth(1) {
                let head = match text.find('#') {
                    Some(pos) => &text[..pos],
                    None => text,
                };
                value = Some(head.trim().to_string());
            }
        }
    }
    value
}

fn file_stem(value: &str) -> Option<String> {
    Path::new(value)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
}

fn parse_seconds(value: Option<String>, tag: &str) -> Result<Option<f64>, SettingsError> {
    value
        .map(|text| {
            text.parse::<f64>().map_err(|_| SettingsError::NotNumeric {
                tag: tag.to_string(),
                value: text,
            })
        })
        .transpose()
}

/* # dflow */

/// grid file stem named by the surface water control file
pub fn dflow_grid_name(control_path: Option<&Path>) -> Result<Option<String>, SettingsError> {
    let lines = read_lines(&control_or_default(control_path))?;
    Ok(tag_value(&lines, "NetFile").as_deref().and_then(file_stem))
}

/// user time step set in the surface water control file, in seconds
pub fn dflow_dt_user(control_path: Option<&Path>) -> Result<Option<f64>, SettingsError> {
    let lines = read_lines(&control_or_default(control_path))?;
    parse_seconds(tag_value(&lines, "DtUser"), "DtUser")
}

/* # sfincs */

/// quadtree grid file stem named by the flood model control file
pub fn sfincs_grid_name(control_path: Option<&Path>) -> Result<Option<String>, SettingsError> {
    let lines = read_lines(&control_or_default(control_path))?;
    Ok(tag_value(&lines, "qtrfile").as_deref().and_then(file_stem))
}

/// map output interval set in the flood model control file, in seconds
pub fn sfincs_dt_map(control_path: Option<&Path>) -> Result<Option<f64>, SettingsError> {
    let lines = read_lines(&control_or_default(control_path))?;
    parse_seconds(tag_value(&lines, "dtmapout"), "dtmapout")
}
