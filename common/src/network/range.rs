//! # Sweep Range Model
//!
//! Turns CIDR notation into the ordered list of hosts a sweep probes.
//!
//! Parsing is non-strict: host bits below the prefix are tolerated and
//! masked away, the same way the classic subnet tools behave.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

use pnet::ipnetwork::{IpNetwork, Ipv4Network};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RangeError {
    #[error("'{0}' is not a valid CIDR range")]
    InvalidCidr(String),
}

/// A contiguous address range given in CIDR notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostRange {
    network: IpNetwork,
}

impl FromStr for HostRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let network: IpNetwork = s
            .parse()
            .map_err(|_| RangeError::InvalidCidr(s.to_string()))?;

        Ok(Self { network })
    }
}

impl fmt::Display for HostRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.network.fmt(f)
    }
}

impl HostRange {
    /// Usable hosts of the range in ascending address order.
    ///
    /// IPv4 prefixes of /30 and wider exclude the network and broadcast
    /// addresses; a /31 keeps both of its addresses and a /32 yields the
    /// single one. IPv6 has no broadcast, so every address iterates.
    pub fn hosts(&self) -> Vec<IpAddr> {
        match self.network {
            IpNetwork::V4(net) => ipv4_hosts(net),
            IpNetwork::V6(net) => net.iter().map(IpAddr::V6).collect(),
        }
    }
}

fn ipv4_hosts(net: Ipv4Network) -> Vec<IpAddr> {
    if net.prefix() >= 31 {
        return net.iter().map(IpAddr::V4).collect();
    }

    // Usable range between the network and broadcast addresses.
    let start: u32 = u32::from(net.network()).saturating_add(1);
    let end: u32 = u32::from(net.broadcast()).saturating_sub(1);

    (start..=end)
        .map(|ip| IpAddr::V4(Ipv4Addr::from(ip)))
        .collect()
}
