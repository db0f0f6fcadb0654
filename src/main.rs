use liss_settings::{control, settings::Settings};
use log::{error, info};

fn main() {
    pretty_env_logger::init_timed();
    info!("initialising liss workflow settings");

    let settings = match Settings::initialise() {
        Ok(settings) => settings,
        Err(reason) => {
            error!("settings initialisation failed: {}", reason);
            std::process::exit(1);
        }
    };
    info!("groundwater library: {}", settings.libmf6.display());
    info!("model domain crs: {}", settings.crs);

    match control::dflow_grid_name(Some(&settings.control_file)) {
        Ok(Some(grid)) => info!("surface water grid: {}", grid),
        Ok(None) => info!("surface water grid not named in control file"),
        Err(reason) => error!("control file unreadable: {}", reason),
    }
    match control::dflow_dt_user(Some(&settings.control_file)) {
        Ok(Some(dt)) => info!("surface water time step: {} seconds", dt),
        Ok(None) => info!("surface water time step not set in control file"),
        Err(reason) => error!("control file unreadable: {}", reason),
    }
}
