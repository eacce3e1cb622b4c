use std::env;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub exact_match: bool,
    pub save_images: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            exact_match: true,
            save_images: false,
        }
    }
}

impl RunOptions {
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            exact_match: env_flag("EXACT_MATCH").unwrap_or(defaults.exact_match),
            save_images: env_flag("SAVE_IMAGES").unwrap_or(defaults.save_images),
        }
    }
}

fn env_flag(name: &str) -> Option<bool> {
    let value = env::var(name).ok()?;
    let flag = parse_flag(&value);
    if flag.is_none() {
        log::warn!("Ignoring {name}={value}, expected true or false");
    }
    flag
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
