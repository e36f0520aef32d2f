/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
//! Environment lookups behind [`Config::new`](crate::application::config::Config::new)
//!
//! The `ONEMAP_*` variables may come from the process or from a `.env` file.
//! A variable that is unset or blank counts as absent. A value that does not
//! parse is logged and treated as absent too, so a typo in `ONEMAP_TIMEOUT`
//! falls back to the default timeout instead of failing startup.

use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::warn;

fn non_blank(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Reads `name` (for example `ONEMAP_TIMEOUT`), or `default` when it is absent
///
/// The raw value is parsed as is, so `ONEMAP_PASSWORD` keeps any surrounding
/// whitespace.
pub fn get_env_or_default<T: FromStr>(name: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    let Some(raw) = non_blank(name) else {
        return default;
    };
    match raw.parse::<T>() {
        Ok(value) => value,
        Err(e) => {
            warn!("Ignoring {}={:?}: {:?}", name, raw, e);
            default
        }
    }
}

/// Reads and trims `name` (for example `ONEMAP_TOKEN_CACHE`), if present and valid
pub fn get_env_or_none<T: FromStr>(name: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    let raw = non_blank(name)?;
    raw.trim()
        .parse::<T>()
        .map_err(|e| warn!("Ignoring {}={:?}: {:?}", name, raw, e))
        .ok()
}
