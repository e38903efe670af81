// src/config/consts.rs

// Net config
pub const USER_AGENT: &str = concat!("hero_grid/", env!("CARGO_PKG_VERSION"));
pub const HTTP_TIMEOUT_SECS: u64 = 15;
pub const DOTABUFF_HEROES: &str = "https://www.dotabuff.com/heroes";
pub const STEAM_HEROES_URL: &str =
    "https://api.steampowered.com/IEconDOTA2_570/GetHeroes/v0001/";
pub const STEAM_LANGUAGE: &str = "en_us";
pub const API_KEY_ENV: &str = "STEAM_API_KEY";

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Defaults
pub const DEFAULT_STAT: &str = "gpm";
pub const DEFAULT_DATE: &str = "month";
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "hero_grid.txt";

// GUI
pub const WINDOW_W: f32 = 900.0;
pub const WINDOW_H: f32 = 640.0;
