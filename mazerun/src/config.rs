use mazerun_genetic::GeneticParams;
use serde::{Deserialize, Serialize};

/// Contents of a `mazerun` configuration file.
///
/// ```toml
/// [genetic]
/// population_size = 3000
/// mutation_rate = 0.05
/// seed = 7
/// ```
///
/// Missing keys keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub genetic: GeneticParams,
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn partial_genetic_table() {
        let cfg = Config::from_toml("[genetic]\nelitism = 8\nseed = 3\n").unwrap();
        let expected = GeneticParams {
            elitism: 8,
            seed: Some(3),
            ..GeneticParams::default()
        };
        assert_eq!(cfg.genetic, expected);
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(Config::from_toml("[genetic]\nmutation_rate = \"high\"\n").is_err());
    }
}
