use super::{Agenda, Choice, Network, NetworkParams};
use std::collections::BTreeMap;

fn choice(id: &str, description: &str) -> Choice {
    Choice {
        id: id.to_string(),
        description: description.to_string(),
    }
}

/// Agenda with the usual abstain/no/yes choices.
fn agenda(id: &str, description: &str) -> Agenda {
    Agenda {
        id: id.to_string(),
        description: description.to_string(),
        choices: vec![
            choice("abstain", "abstain voting for change"),
            choice("no", "keep the existing consensus rules"),
            choice("yes", "change to the new consensus rules"),
        ],
    }
}

/// Baseline deployment table. Mainnet numbers its vote versions one lower
/// than the test networks, so the table is keyed from the version that
/// introduced the treasury agenda. Deployments can be replaced or extended
/// through the config file.
fn deployments(treasury_version: u32) -> BTreeMap<u32, Vec<Agenda>> {
    BTreeMap::from([
        (
            treasury_version,
            vec![agenda(
                "treasury",
                "Enable decentralized Treasury opcodes as defined in DCP0006",
            )],
        ),
        (
            treasury_version + 1,
            vec![
                agenda(
                    "reverttreasurypolicy",
                    "Change maximum treasury expenditure policy as defined in DCP0007",
                ),
                agenda(
                    "explicitverupgrades",
                    "Enable explicit version upgrades as defined in DCP0008",
                ),
                agenda(
                    "autorevocations",
                    "Enable automatic ticket revocations as defined in DCP0009",
                ),
                agenda(
                    "changesubsidysplit",
                    "Change block reward subsidy split to 10/80/10 as defined in DCP0010",
                ),
            ],
        ),
        (
            treasury_version + 2,
            vec![
                agenda(
                    "blake3pow",
                    "Change proof of work hashing algorithm to BLAKE3 as defined in DCP0011",
                ),
                agenda(
                    "changesubsidysplitr2",
                    "Change block reward subsidy split to 1/89/10 as defined in DCP0012",
                ),
            ],
        ),
    ])
}

impl NetworkParams {
    pub fn mainnet() -> Self {
        Self {
            net: Network::Mainnet,
            ticket_maturity: 256,
            ticket_expiry: 40960,
            pub_key_hash_addr_id: [0x07, 0x3f], // Ds
            script_hash_addr_id: [0x07, 0x1a],  // Dc
            deployments: deployments(8),
        }
    }

    pub fn testnet3() -> Self {
        Self {
            net: Network::Testnet3,
            ticket_maturity: 16,
            ticket_expiry: 6144,
            pub_key_hash_addr_id: [0x0f, 0x21], // Ts
            script_hash_addr_id: [0x0e, 0xfc],  // Tc
            deployments: deployments(9),
        }
    }

    pub fn simnet() -> Self {
        Self {
            net: Network::Simnet,
            ticket_maturity: 16,
            ticket_expiry: 384,
            pub_key_hash_addr_id: [0x0e, 0x91], // Ss
            script_hash_addr_id: [0x0e, 0x6c],  // Sc
            deployments: deployments(9),
        }
    }

    pub fn regnet() -> Self {
        Self {
            net: Network::Regnet,
            ticket_maturity: 16,
            ticket_expiry: 384,
            pub_key_hash_addr_id: [0x0e, 0x00], // Rs
            script_hash_addr_id: [0x0d, 0xdb],  // Rc
            deployments: deployments(9),
        }
    }
}
