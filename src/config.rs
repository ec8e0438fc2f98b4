use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub skill: SkillConfig,
    pub plex: PlexConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillConfig {
    /// How users address the skill ("Alexa, ask <invocation name> to ...").
    /// Spoken back to the user in setup instructions.
    pub invocation_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlexConfig {
    /// Name of the TV library section queried for on-deck shows
    pub tv_library: String,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                name: "plex-skill".to_string(),
            },
            skill: SkillConfig {
                invocation_name: "plex".to_string(),
            },
            plex: PlexConfig {
                tv_library: "TV Shows".to_string(),
            },
        }
    }
}
