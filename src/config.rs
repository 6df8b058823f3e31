use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::hierarchy::{ExceptionHierarchy, HierarchyBuilder};
use crate::parser;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("cannot read declarations file '{path}': {source}")]
    Declarations {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Describes which exception hierarchy to build
///
/// ```toml
/// standard = true
/// unchecked_roots = ["AppFault"]
/// declarations = ["errors.java"]
///
/// [[exceptions]]
/// name = "AppFault"
/// extends = "Exception"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Start from the standard Java exception tree
    pub standard: bool,
    pub exceptions: Vec<ExceptionEntry>,
    pub unchecked_roots: Vec<String>,
    /// Declaration files; relative paths resolve against `base_dir`
    pub declarations: Vec<PathBuf>,
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExceptionEntry {
    pub name: String,
    #[serde(default)]
    pub extends: Option<String>,
    /// Roots an unchecked subtree
    #[serde(default)]
    pub unchecked: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            standard: true,
            exceptions: Vec::new(),
            unchecked_roots: Vec::new(),
            declarations: Vec::new(),
            base_dir: None,
        }
    }
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load a config file; its directory becomes the base for declaration paths
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&text)?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    fn resolve_path(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Builder with everything the config describes
    pub fn builder(&self) -> Result<HierarchyBuilder> {
        let mut builder = if self.standard {
            HierarchyBuilder::standard()
        } else {
            HierarchyBuilder::new()
        };
        for entry in &self.exceptions {
            builder.declare(entry.name.clone(), entry.extends.as_deref());
            if entry.unchecked {
                builder.unchecked_root(entry.name.clone());
            }
        }
        for root in &self.unchecked_roots {
            builder.unchecked_root(root.clone());
        }
        for file in &self.declarations {
            let path = self.resolve_path(file);
            let source = fs::read_to_string(&path).map_err(|source| ConfigError::Declarations {
                path: path.clone(),
                source,
            })?;
            builder.declare_all(&parser::parse_declarations(&source)?);
        }
        Ok(builder)
    }

    pub fn hierarchy(&self) -> Result<ExceptionHierarchy> {
        Ok(self.builder()?.build()?)
    }
}
