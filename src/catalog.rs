// src/catalog.rs
//
// The hero catalog: ids plus internal and display names, in the order the
// source returns them. That order is the tie-breaker for ranking.

use serde::Deserialize;

use crate::{
    config::consts::{STEAM_HEROES_URL, STEAM_LANGUAGE},
    core::net::{self, HttpClient},
    error::{CatalogError, FetchError},
};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Entity {
    pub id: u32,
    #[serde(rename = "name")]
    pub internal_name: String,
    #[serde(rename = "localized_name")]
    pub display_name: String,
}

impl Entity {
    pub fn new(id: u32, internal_name: &str, display_name: &str) -> Self {
        Self { id, internal_name: s!(internal_name), display_name: s!(display_name) }
    }
}

pub trait CatalogSource {
    fn heroes(&self) -> Result<Vec<Entity>, CatalogError>;
}

#[derive(Deserialize)]
struct GetHeroes {
    result: HeroesResult,
}

#[derive(Deserialize)]
struct HeroesResult {
    #[serde(default)]
    heroes: Vec<Entity>,
}

/// Decode a `GetHeroes` response body.
pub fn parse_heroes(body: &str) -> Result<Vec<Entity>, CatalogError> {
    let parsed: GetHeroes = serde_json::from_str(body)
        .map_err(|e| CatalogError::Unavailable(format!("unexpected GetHeroes response: {e}")))?;
    Ok(parsed.result.heroes)
}

// Steam answers a bad key with 403; every other failure means no catalog.
fn request_error(e: FetchError) -> CatalogError {
    if net::is_forbidden(&e) {
        CatalogError::InvalidCredential
    } else {
        CatalogError::Unavailable(e.to_string())
    }
}

/// Steam Web API `IEconDOTA2_570/GetHeroes`.
pub struct SteamCatalog {
    http: HttpClient,
    api_key: String,
}

impl SteamCatalog {
    pub fn new(http: HttpClient, api_key: &str) -> Self {
        Self { http, api_key: s!(api_key.trim()) }
    }
}

impl CatalogSource for SteamCatalog {
    fn heroes(&self) -> Result<Vec<Entity>, CatalogError> {
        if self.api_key.is_empty() {
            return Err(CatalogError::InvalidCredential);
        }

        let query = [("language", STEAM_LANGUAGE), ("key", self.api_key.as_str())];
        let resp = self.http.get(STEAM_HEROES_URL, &query).map_err(request_error)?;

        let body = resp
            .text()
            .map_err(|_| CatalogError::Unavailable(s!("unreadable GetHeroes response body")))?;
        let heroes = parse_heroes(&body)?;
        if heroes.is_empty() {
            return Err(CatalogError::Unavailable(s!("GetHeroes returned no heroes")));
        }
        logf!("Catalog: {} heroes", heroes.len());
        Ok(heroes)
    }
}
