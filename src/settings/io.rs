use directories_next::ProjectDirs;
use std::fs;
use std::io::{self, BufReader, BufWriter, ErrorKind};
use std::path::PathBuf;

use bevy::log::{info, warn};

use super::AppSettings;

const QUALIFIER: &str = "com";
const ORGANIZATION: &str = "BenefitsTools";
const APPLICATION: &str = "Ruleboard";
const CONFIG_FILE: &str = "app_settings.json";

fn config_path() -> io::Result<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION) {
        let config_dir = proj_dirs.config_dir();
        fs::create_dir_all(config_dir)?;
        Ok(config_dir.join(CONFIG_FILE))
    } else {
        Err(io::Error::new(
            ErrorKind::NotFound,
            "Could not determine project directories for app settings.",
        ))
    }
}

/// Loads the settings file, falling back to defaults when the file is
/// missing, unreadable, or fails to parse.
pub fn load_settings() -> AppSettings {
    let config_file = match config_path() {
        Ok(path) => path,
        Err(e) => {
            warn!(
                "AppSettings: no settings location available ({}), using defaults.",
                e
            );
            return AppSettings::default();
        }
    };

    match fs::File::open(&config_file) {
        Ok(file) => {
            let reader = BufReader::new(file);
            match serde_json::from_reader(reader) {
                Ok(settings) => {
                    info!("AppSettings: loaded settings from {:?}.", config_file);
                    settings
                }
                Err(e) => {
                    warn!(
                        "AppSettings: failed to parse {:?} ({}), using defaults.",
                        config_file, e
                    );
                    AppSettings::default()
                }
            }
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!(
                "AppSettings: no settings file at {:?}, using defaults.",
                config_file
            );
            AppSettings::default()
        }
        Err(e) => {
            warn!(
                "AppSettings: failed to open {:?} ({}), using defaults.",
                config_file, e
            );
            AppSettings::default()
        }
    }
}

pub fn save_settings(settings: &AppSettings) -> io::Result<()> {
    let config_file = config_path()?;
    let file = fs::File::create(&config_file)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, settings)
        .map_err(|e| io::Error::new(ErrorKind::Other, e))?;
    Ok(())
}
