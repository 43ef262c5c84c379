//! Player configuration: element addressing and control ids.

use crate::error::ConfigError;

/// Ids and naming conventions the player uses to address the report.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct PlayerConfig {
    /// Id of the element containing every simulated implicant
    /// (default: "finding_primes").
    pub container_id: String,

    /// Id of the simulate/stop trigger (default: "fpi-simulate").
    pub trigger_id: String,

    /// Id given to the previous-step control (default: "fpi-prev").
    pub prev_id: String,

    /// Id given to the next-step control (default: "fpi-next").
    pub next_id: String,

    /// Prefix of the minterm-set view of an implicant (default: "m_").
    pub minterm_prefix: String,

    /// Prefix of the bit-pattern view of an implicant (default: "b_").
    pub bits_prefix: String,

    /// Step role naming the implicant a combination produced
    /// (default: "combined"). Only this role changes visibility.
    pub combined_role: String,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            container_id: "finding_primes".into(),
            trigger_id: "fpi-simulate".into(),
            prev_id: "fpi-prev".into(),
            next_id: "fpi-next".into(),
            minterm_prefix: "m_".into(),
            bits_prefix: "b_".into(),
            combined_role: "combined".into(),
        }
    }
}

impl PlayerConfig {
    pub fn builder() -> PlayerConfigBuilder {
        PlayerConfigBuilder::default()
    }

    /// Minterm and bit-pattern element ids for an identifier.
    pub fn element_ids(&self, id: &str) -> (String, String) {
        (
            format!("{}{id}", self.minterm_prefix),
            format!("{}{id}", self.bits_prefix),
        )
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("container_id", &self.container_id),
            ("trigger_id", &self.trigger_id),
            ("prev_id", &self.prev_id),
            ("next_id", &self.next_id),
            ("minterm_prefix", &self.minterm_prefix),
            ("bits_prefix", &self.bits_prefix),
            ("combined_role", &self.combined_role),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| v.is_empty()) {
            return Err(ConfigError::EmptyField(*name));
        }

        let distinct = [
            ("minterm_prefix", &self.minterm_prefix, "bits_prefix", &self.bits_prefix),
            ("trigger_id", &self.trigger_id, "prev_id", &self.prev_id),
            ("trigger_id", &self.trigger_id, "next_id", &self.next_id),
            ("prev_id", &self.prev_id, "next_id", &self.next_id),
        ];
        for (first, a, second, b) in distinct {
            if a == b {
                return Err(ConfigError::Conflict {
                    first,
                    second,
                    value: a.clone(),
                });
            }
        }

        Ok(())
    }
}

#[derive(Default)]
pub struct PlayerConfigBuilder {
    container_id: Option<String>,
    trigger_id: Option<String>,
    prev_id: Option<String>,
    next_id: Option<String>,
    minterm_prefix: Option<String>,
    bits_prefix: Option<String>,
    combined_role: Option<String>,
}

impl PlayerConfigBuilder {
    pub fn container_id(mut self, id: impl Into<String>) -> Self {
        self.container_id = Some(id.into());
        self
    }

    pub fn trigger_id(mut self, id: impl Into<String>) -> Self {
        self.trigger_id = Some(id.into());
        self
    }

    pub fn prev_id(mut self, id: impl Into<String>) -> Self {
        self.prev_id = Some(id.into());
        self
    }

    pub fn next_id(mut self, id: impl Into<String>) -> Self {
        self.next_id = Some(id.into());
        self
    }

    pub fn minterm_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.minterm_prefix = Some(prefix.into());
        self
    }

    pub fn bits_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.bits_prefix = Some(prefix.into());
        self
    }

    pub fn combined_role(mut self, role: impl Into<String>) -> Self {
        self.combined_role = Some(role.into());
        self
    }

    pub fn build(self) -> Result<PlayerConfig, ConfigError> {
        let defaults = PlayerConfig::default();
        let config = PlayerConfig {
            container_id: self.container_id.unwrap_or(defaults.container_id),
            trigger_id: self.trigger_id.unwrap_or(defaults.trigger_id),
            prev_id: self.prev_id.unwrap_or(defaults.prev_id),
            next_id: self.next_id.unwrap_or(defaults.next_id),
            minterm_prefix: self.minterm_prefix.unwrap_or(defaults.minterm_prefix),
            bits_prefix: self.bits_prefix.unwrap_or(defaults.bits_prefix),
            combined_role: self.combined_role.unwrap_or(defaults.combined_role),
        };
        config.validate()?;
        Ok(config)
    }
}
