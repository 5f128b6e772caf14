//! Network Parameters Module
//!
//! Immutable consensus and address parameters for each Decred network.
//! Validators never read these from global state; callers build a
//! `NetworkParams` (usually through `Config::network_params`) and pass it in.

mod networks;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    #[serde(alias = "testnet")]
    Testnet3,
    Simnet,
    Regnet,
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Network::Mainnet => "mainnet",
            Network::Testnet3 => "testnet3",
            Network::Simnet => "simnet",
            Network::Regnet => "regnet",
        })
    }
}

/// A voter choice on an agenda.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub id: String,
    #[serde(default)]
    pub description: String,
}

/// A consensus rule change proposal and its permitted choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agenda {
    pub id: String,
    #[serde(default)]
    pub description: String,
    pub choices: Vec<Choice>,
}

impl Agenda {
    pub fn choice(&self, id: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkParams {
    pub net: Network,
    /// Blocks a ticket must wait before it becomes live.
    pub ticket_maturity: u16,
    /// Blocks a live ticket may wait to be selected before it expires.
    pub ticket_expiry: u32,
    pub pub_key_hash_addr_id: [u8; 2],
    pub script_hash_addr_id: [u8; 2],
    /// Agendas keyed by the stake vote version that introduced them.
    pub deployments: BTreeMap<u32, Vec<Agenda>>,
}

impl NetworkParams {
    pub fn for_network(net: Network) -> Self {
        match net {
            Network::Mainnet => Self::mainnet(),
            Network::Testnet3 => Self::testnet3(),
            Network::Simnet => Self::simnet(),
            Network::Regnet => Self::regnet(),
        }
    }

    /// Agendas of a deployment version, or an empty slice if unknown.
    pub fn agendas(&self, vote_version: u32) -> &[Agenda] {
        self.deployments
            .get(&vote_version)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// The most recent vote version, i.e. the highest deployment key.
pub fn current_vote_version(params: &NetworkParams) -> u32 {
    params.deployments.keys().next_back().copied().unwrap_or(0)
}
