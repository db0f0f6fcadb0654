use crate::{error::SettingsError, vars};
use log::trace;
use std::{env, fs, path::PathBuf};

/* # native library */

/// platform pieces of the native library path
pub fn library_parts(os: &str) -> (&'static str, &'static str) {
    match os {
        "windows" => ("Scripts", ".dll"),
        "linux" => ("lib", ".so"),
        "macos" => ("lib", ".dylib"),
        _ => ("lib", ".dll"),
    }
}

fn resolve_library(prefix: Option<String>, os: &str) -> Result<PathBuf, SettingsError> {
    let prefix = prefix.ok_or(SettingsError::MissingEnv(vars::CONDA_PREFIX_VAR))?;
    trace!("resolving groundwater library under {}", prefix);
    let (subdir, extension) = library_parts(os);
    let base = fs::canonicalize(prefix)?;
    Ok(base
        .join(subdir)
        .join(format!("{}{}", vars::LIBMF6_STEM, extension)))
}

/// absolute path to the groundwater model library in the active environment
pub fn library_path() -> Result<PathBuf, SettingsError> {
    resolve_library(env::var(vars::CONDA_PREFIX_VAR).ok(), env::consts::OS)
}

/* # coupling tag */

/// label for a model coupling interval given in hours
pub fn coupling_tag(couple_freq_hours: f64) -> String {
    assert!(
        couple_freq_hours <= vars::MAX_COUPLE_HOURS,
        "coupling frequency must be 24 hours or less"
    );
    if couple_freq_hours == vars::MAX_COUPLE_HOURS {
        format!("{:05.2}D", couple_freq_hours / 24.0)
    } else if couple_freq_hours >= 1.0 {
        format!("{:05.2}H", couple_freq_hours)
    } else {
        format!("{:05.2}M", couple_freq_hours * 60.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parts_per_platform() {
        assert_eq!(library_parts("linux"), ("lib", ".so"));
        assert_eq!(library_parts("macos"), ("lib", ".dylib"));
        assert_eq!(library_parts("windows"), ("Scripts", ".dll"));
        assert_eq!(library_parts("freebsd"), ("lib", ".dll"));
    }

    #[test]
    fn library_under_prefix() {
        let prefix = std::env::temp_dir();
        let resolved =
            resolve_library(Some(prefix.to_string_lossy().into_owned()), "linux").unwrap();
        assert!(resolved.starts_with(fs::canonicalize(prefix).unwrap()));
        assert!(resolved.ends_with("lib/libmf6.so"));
    }

    #[test]
    fn library_without_prefix() {
        assert!(matches!(
            resolve_library(None, "linux"),
            Err(SettingsError::MissingEnv(_))
        ));
    }

    #[test]
    fn tags_by_unit() {
        assert_eq!(coupling_tag(24.0), "01.00D");
        assert_eq!(coupling_tag(6.0), "06.00H");
        assert_eq!(coupling_tag(1.0), "01.00H");
        assert_eq!(coupling_tag(12.5), "12.50H");
        assert_eq!(coupling_tag(0.25), "15.00M");
        assert_eq!(coupling_tag(0.5), "30.00M");
    }

    #[test]
    #[should_panic(expected = "24 hours or less")]
    fn tag_beyond_a_day() {
        coupling_tag(25.0);
    }
}
