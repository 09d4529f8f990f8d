//! Engine configuration.
//!
//! Holds the fixed JSON-LD metadata written into generated documents and the
//! default file names used for exports.

use crate::error::{EngineError, EngineResult};

/// Default JSON-LD `@context` of generated documents.
pub const DEFAULT_CONTEXT: &str = "https://example.org/ftf-context";
/// Default JSON-LD `@type` of generated documents.
pub const DEFAULT_TYPE_TAG: &str = "FTF";
/// Default export file name for generated documents.
pub const DEFAULT_FILE_NAME: &str = "ftf.jsonld";
/// Default export file name for schemas.
pub const DEFAULT_SCHEMA_FILE_NAME: &str = "schema.json";

/// Configuration shared by the generator and the export path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Value of the `@context` key in generated documents.
    pub context: String,

    /// Value of the `@type` key in generated documents.
    pub type_tag: String,

    /// File name offered for a generated document when the caller gives none.
    pub default_file_name: String,

    /// File name offered for an exported schema.
    pub schema_file_name: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            context: DEFAULT_CONTEXT.to_string(),
            type_tag: DEFAULT_TYPE_TAG.to_string(),
            default_file_name: DEFAULT_FILE_NAME.to_string(),
            schema_file_name: DEFAULT_SCHEMA_FILE_NAME.to_string(),
        }
    }
}

impl EngineConfig {
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::new()
    }

    /// The file name to use for an export, falling back to the default
    /// when the requested name is blank.
    pub fn file_name_or_default<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        match requested.map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => &self.default_file_name,
        }
    }
}

/// Builder for [`EngineConfig`].
///
/// # Examples
///
/// ```rust
/// use asset_attributes::EngineConfig;
///
/// # fn main() -> Result<(), asset_attributes::EngineError> {
/// let config = EngineConfig::builder()
///     .context("https://vocab.example.com/agv")
///     .type_tag("AGV")
///     .build()?;
/// assert_eq!(config.type_tag, "AGV");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct EngineConfigBuilder {
    config: EngineConfig,
}

impl EngineConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.config.context = context.into();
        self
    }

    pub fn type_tag(mut self, type_tag: impl Into<String>) -> Self {
        self.config.type_tag = type_tag.into();
        self
    }

    pub fn default_file_name(mut self, name: impl Into<String>) -> Self {
        self.config.default_file_name = name.into();
        self
    }

    pub fn schema_file_name(mut self, name: impl Into<String>) -> Self {
        self.config.schema_file_name = name.into();
        self
    }

    /// Finish the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfiguration`] when the context, the
    /// type tag or a file name is blank.
    pub fn build(self) -> EngineResult<EngineConfig> {
        let config = self.config;
        if config.context.trim().is_empty() {
            return Err(EngineError::invalid_configuration("context cannot be empty"));
        }
        if config.type_tag.trim().is_empty() {
            return Err(EngineError::invalid_configuration("type tag cannot be empty"));
        }
        if config.default_file_name.trim().is_empty() || config.schema_file_name.trim().is_empty() {
            return Err(EngineError::invalid_configuration("file names cannot be empty"));
        }
        Ok(config)
    }
}
