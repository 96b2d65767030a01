use super::*;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no filter configured: give a volume name pattern or at least one storage type")]
    NoFilter,

    #[error("storage type filter is empty")]
    EmptyTypeFilter,

    #[error("invalid volume name pattern: {0}")]
    NamePattern(#[from] regex::Error),
}

/// What makes a pod wanted. Fixed for the whole run.
#[derive(Clone, Debug)]
pub struct FilterConfig {
    opt_out_annotation: Option<String>,
    name_pattern: Option<Regex>,
    storage_types: Option<BTreeSet<String>>,
}

impl FilterConfig {
    /// Validates and builds the filter.
    ///
    /// An empty `opt_out_annotation` disables the opt-out check, an empty
    /// `storage_types` disables the type filter. Storage types are trimmed
    /// and blank ones dropped. At least one of `name_pattern` and
    /// `storage_types` has to remain.
    pub fn new<I, S>(
        opt_out_annotation: Option<String>,
        name_pattern: Option<&str>,
        storage_types: I,
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let opt_out_annotation = opt_out_annotation.filter(|key| !key.is_empty());
        let name_pattern = name_pattern.map(Regex::new).transpose()?;
        let storage_types = storage_types
            .into_iter()
            .map(Into::into)
            .map(|storage_type: String| storage_type.trim().to_string())
            .filter(|storage_type| !storage_type.is_empty())
            .collect::<BTreeSet<_>>();
        let storage_types = (!storage_types.is_empty()).then_some(storage_types);

        if name_pattern.is_none() && storage_types.is_none() {
            return Err(ConfigError::NoFilter);
        }

        Ok(Self {
            opt_out_annotation,
            name_pattern,
            storage_types,
        })
    }

    pub fn opt_out_annotation(&self) -> Option<&str> {
        self.opt_out_annotation.as_deref()
    }

    pub fn name_pattern(&self) -> Option<&Regex> {
        self.name_pattern.as_ref()
    }

    pub fn storage_types(&self) -> Option<&BTreeSet<String>> {
        self.storage_types.as_ref()
    }

    /// `true` when no name pattern is set or `volume` matches it.
    pub fn name_matches(&self, volume: &str) -> bool {
        self.name_pattern
            .as_ref()
            .is_none_or(|pattern| pattern.is_match(volume))
    }
}
