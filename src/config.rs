//! Runtime configuration, read from the environment.

use std::path::PathBuf;

use crate::model::Room;

/// Everything needed to construct an [`Engine`](crate::engine::Engine).
#[derive(Debug, Clone)]
pub struct Config {
    pub data_file: PathBuf,
    pub rooms: Vec<Room>,
}

impl Config {
    pub fn from_env() -> Self {
        let data_file = std::env::var("HUDDLE_DATA_FILE")
            .unwrap_or_else(|_| "./bookings.json".into())
            .into();
        Self {
            data_file,
            rooms: default_rooms(),
        }
    }
}

/// The fixed room inventory. Ids are stable; bookings reference them.
pub fn default_rooms() -> Vec<Room> {
    vec![
        Room {
            id: 1,
            name: "Labrador".into(),
            has_tv: true,
        },
        Room {
            id: 2,
            name: "Border Collie".into(),
            has_tv: true,
        },
        Room {
            id: 3,
            name: "Rottweiler".into(),
            has_tv: true,
        },
        Room {
            id: 4,
            name: "Shiba".into(),
            has_tv: false,
        },
        Room {
            id: 5,
            name: "Poodle".into(),
            has_tv: false,
        },
    ]
}
