use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context};
use serde::Deserialize;

use gmk_core::entities::{MapPoint, Viewport, ZoomLevel};

const DEFAULT_DATA_DIR: &str = "geomarks-data";
// Manaus
const DEFAULT_CENTER_LAT: f64 = -3.1;
const DEFAULT_CENTER_LNG: f64 = -60.02;
const DEFAULT_ZOOM: u8 = 12;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Cfg {
    pub data_dir: PathBuf,
    pub map: MapCfg,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MapCfg {
    pub center_lat: f64,
    pub center_lng: f64,
    pub zoom: u8,
}

impl Default for Cfg {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            map: MapCfg::default(),
        }
    }
}

impl Default for MapCfg {
    fn default() -> Self {
        Self {
            center_lat: DEFAULT_CENTER_LAT,
            center_lng: DEFAULT_CENTER_LNG,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl Cfg {
    /// Loads the configuration file if one is given, then applies
    /// environment overrides on top.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut cfg = match path {
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .with_context(|| format!("Cannot read config file {}", path.display()))?;
                toml::from_str(&raw)
                    .with_context(|| format!("Cannot parse config file {}", path.display()))?
            }
            None => Self::default(),
        };
        cfg.apply_env();
        Ok(cfg)
    }

    fn apply_env(&mut self) {
        if let Ok(dir) = env::var("GEOMARKS_DATA_DIR") {
            self.data_dir = dir.into();
        }
    }

    /// Initial map viewport.
    pub fn viewport(&self) -> anyhow::Result<Viewport> {
        let center = MapPoint::try_from_lat_lng_deg(self.map.center_lat, self.map.center_lng)
            .map_err(|_| anyhow!("Invalid map center in configuration"))?;
        Ok(Viewport {
            center,
            zoom: ZoomLevel::new(self.map.zoom),
        })
    }
}
