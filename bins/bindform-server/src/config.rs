use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Deserialize;

use bindform::{FieldSpec, FormSchema};

use crate::error::ServerError;
use crate::routes::FormEntry;

#[derive(Parser, Debug)]
#[command(name = "bindform-server", version, about = "Binds query and form values into declared records")]
pub struct Cli {
    /// TOML file declaring the listen port and the forms
    #[arg(long, global = true, default_value = "config.toml", env = "CONFIG_PATH")]
    pub config: PathBuf,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "info")]
    pub log: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Serve the configured forms over HTTP
    Serve {
        /// Overrides `listen_port` from the config file
        #[arg(long, short)]
        port: Option<u16>,
    },
    /// Validate the config file and list its forms
    Check,
}

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,
    #[serde(default)]
    pub forms: Vec<FormConfig>,
}

/// Which request values a form is bound from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Body value, falling back to the query string.
    #[default]
    Combined,
    /// Submitted body only.
    Body,
}

#[derive(Debug, Deserialize)]
pub struct FormConfig {
    pub name: String,
    #[serde(default)]
    pub source: SourceKind,
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

impl FormConfig {
    pub fn schema(&self) -> FormSchema {
        FormSchema::new(self.fields.clone())
    }
}

fn default_listen_port() -> u16 {
    9300
}

impl ServerConfig {
    pub fn from_file(path: &Path) -> Result<Self, ServerError> {
        let config_error = |context: &'static str, e: String| ServerError::Config {
            context,
            detail: format!("{}: {e}", path.display()),
        };
        let content = std::fs::read_to_string(path).map_err(|e| config_error("read", e.to_string()))?;
        Self::parse(&content).map_err(|e| config_error("parse", e.to_string()))
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Form table keyed by name. Names must be unique.
    pub fn resolve_forms(&self) -> Result<HashMap<String, FormEntry>, ServerError> {
        let mut forms = HashMap::with_capacity(self.forms.len());
        for form in &self.forms {
            let entry = FormEntry {
                schema: Arc::new(form.schema()),
                source: form.source,
            };
            if forms.insert(form.name.clone(), entry).is_some() {
                return Err(ServerError::Config {
                    context: "forms",
                    detail: format!("duplicate form name '{}'", form.name),
                });
            }
        }
        Ok(forms)
    }
}
