//! The representations a [`Molecule`](super::Molecule) can cache.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A representation with its own memoized slot on a molecule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    #[serde(rename = "stdinchi")]
    StdInchi,
    #[serde(rename = "stdinchikey")]
    StdInchiKey,
    Inchi,
    Smiles,
    Ficts,
    Ficus,
    Uuuuu,
    Hashisy,
    Sdf,
    Names,
    IupacName,
    Cas,
    ChemspiderId,
    Mw,
    Formula,
    HBondDonorCount,
    HBondAcceptorCount,
    HBondCenterCount,
    #[serde(rename = "rule_of_5_violation_count")]
    RuleOf5ViolationCount,
    RotorCount,
    EffectiveRotorCount,
    RingCount,
    RingsysCount,
}

impl Property {
    /// Every property, in slot order.
    pub const ALL: [Property; 23] = [
        Property::StdInchi,
        Property::StdInchiKey,
        Property::Inchi,
        Property::Smiles,
        Property::Ficts,
        Property::Ficus,
        Property::Uuuuu,
        Property::Hashisy,
        Property::Sdf,
        Property::Names,
        Property::IupacName,
        Property::Cas,
        Property::ChemspiderId,
        Property::Mw,
        Property::Formula,
        Property::HBondDonorCount,
        Property::HBondAcceptorCount,
        Property::HBondCenterCount,
        Property::RuleOf5ViolationCount,
        Property::RotorCount,
        Property::EffectiveRotorCount,
        Property::RingCount,
        Property::RingsysCount,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// The representation name sent to the service.
    pub fn representation(&self) -> &'static str {
        match self {
            Property::StdInchi => "stdinchi",
            Property::StdInchiKey => "stdinchikey",
            Property::Inchi => "inchi",
            Property::Smiles => "smiles",
            Property::Ficts => "ficts",
            Property::Ficus => "ficus",
            Property::Uuuuu => "uuuuu",
            Property::Hashisy => "hashisy",
            Property::Sdf => "sdf",
            Property::Names => "names",
            Property::IupacName => "iupac_name",
            Property::Cas => "cas",
            Property::ChemspiderId => "chemspider_id",
            Property::Mw => "mw",
            Property::Formula => "formula",
            Property::HBondDonorCount => "h_bond_donor_count",
            Property::HBondAcceptorCount => "h_bond_acceptor_count",
            Property::HBondCenterCount => "h_bond_center_count",
            Property::RuleOf5ViolationCount => "rule_of_5_violation_count",
            Property::RotorCount => "rotor_count",
            Property::EffectiveRotorCount => "effective_rotor_count",
            Property::RingCount => "ring_count",
            Property::RingsysCount => "ringsys_count",
        }
    }

    pub(crate) fn slot(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.representation())
    }
}

impl FromStr for Property {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Property::ALL
            .into_iter()
            .find(|p| p.representation() == s)
            .ok_or_else(|| format!("Unknown property: {}", s))
    }
}
