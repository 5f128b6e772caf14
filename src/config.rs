//! Configuration Module
//!
//! This module defines the configuration structures for the validator.
//! Configuration is loaded from TOML files and parsed using serde, then
//! turned into an immutable `NetworkParams` value.

use crate::params::{Agenda, Network, NetworkParams};
use anyhow::{Context, bail};
use serde::Deserialize;
use std::fs;

/// Main configuration structure
///
/// # Example TOML
/// ```toml
/// [network]
/// name = "testnet3"
///
/// [[network.deployments]]
/// version = 11
///
/// [[network.deployments.agendas]]
/// id = "blake3pow"
/// choices = [{ id = "abstain" }, { id = "no" }, { id = "yes" }]
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub network: NetworkConfig,
}

/// Network selection and overrides
///
/// # Fields
/// - `name`: Built-in network the parameters start from
/// - `ticket_maturity`, `ticket_expiry`: Optional overrides of the preset values
/// - `deployments`: Deployment versions to add, or to replace when the version already exists
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkConfig {
    pub name: Network,
    pub ticket_maturity: Option<u16>,
    pub ticket_expiry: Option<u32>,
    #[serde(default)]
    pub deployments: Vec<DeploymentConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeploymentConfig {
    pub version: u32,
    pub agendas: Vec<Agenda>,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the TOML configuration file
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path).with_context(|| format!("reading config {path}"))?;
        Self::parse(&content).with_context(|| format!("parsing config {path}"))
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Builds the network parameters: preset values with the configured
    /// overrides applied.
    pub fn network_params(&self) -> anyhow::Result<NetworkParams> {
        let mut params = NetworkParams::for_network(self.network.name);

        if let Some(maturity) = self.network.ticket_maturity {
            params.ticket_maturity = maturity;
        }
        if let Some(expiry) = self.network.ticket_expiry {
            params.ticket_expiry = expiry;
        }

        for deployment in &self.network.deployments {
            if deployment.agendas.is_empty() {
                bail!("deployment version {} has no agendas", deployment.version);
            }
            for agenda in &deployment.agendas {
                if agenda.choices.is_empty() {
                    bail!(
                        "agenda {:?} of deployment version {} has no choices",
                        agenda.id,
                        deployment.version
                    );
                }
            }
            params
                .deployments
                .insert(deployment.version, deployment.agendas.clone());
        }

        Ok(params)
    }
}
