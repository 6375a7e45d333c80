use anyhow::{bail, Result};
use common::{Config, ConfigLoader};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClientOptions {
    /// Agent index played from the terminal, `None` when the engine plays both sides.
    pub human: Option<usize>,
    pub fen: Option<String>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            human: Some(0),
            fen: None,
        }
    }
}

pub fn parse_side(side: &str) -> Result<Option<usize>> {
    match side.trim().to_lowercase().as_str() {
        "white" | "w" => Ok(Some(chess::WHITE)),
        "black" | "b" => Ok(Some(chess::BLACK)),
        "none" => Ok(None),
        other => bail!("Unknown side '{}', expected white, black or none", other),
    }
}

impl Config for ClientOptions {
    fn load(config: &ConfigLoader) -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            human: config
                .get("human")
                .and_then(|v| v.as_string())
                .map(|v| parse_side(&v))
                .transpose()?
                .unwrap_or(defaults.human),
            fen: config
                .get("fen")
                .and_then(|v| v.as_string())
                .or(defaults.fen),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConfigLoader::from_str("{}", "chess".to_string()).unwrap();
        let options: ClientOptions = config.load().unwrap();

        assert_eq!(options, ClientOptions::default());
    }

    #[test]
    fn test_human_side() {
        let config =
            ConfigLoader::from_str(r#"chess { human = "black" }"#, "chess".to_string()).unwrap();
        let options: ClientOptions = config.load().unwrap();

        assert_eq!(options.human, Some(chess::BLACK));
        assert_eq!(parse_side("none").unwrap(), None);
        assert!(parse_side("red").is_err());
    }
}
