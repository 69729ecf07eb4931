//! Host identity shown in the header panel

use std::net::{IpAddr, Ipv4Addr};
use sysinfo::{Networks, System};

/// Shown for any host value that cannot be determined
pub const UNKNOWN: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostInfo {
    pub hostname: String,
    /// First non-loopback IPv4 address
    pub ip: String,
}

impl HostInfo {
    /// Query the host for its name and primary address
    pub fn detect() -> Self {
        let hostname = System::host_name()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| UNKNOWN.to_string());

        let networks = Networks::new_with_refreshed_list();
        let interfaces = networks
            .list()
            .iter()
            .map(|(name, data)| {
                let addrs = data.ip_networks().iter().map(|net| net.addr).collect();
                (name.clone(), addrs)
            })
            .collect();

        let ip = first_ipv4(interfaces)
            .map(|addr| addr.to_string())
            .unwrap_or_else(|| UNKNOWN.to_string());

        Self { hostname, ip }
    }

    pub fn unknown() -> Self {
        Self {
            hostname: UNKNOWN.to_string(),
            ip: UNKNOWN.to_string(),
        }
    }
}

/// Container bridges, veth pairs and other host-local interfaces
const VIRTUAL_PREFIXES: &[&str] = &[
    "docker", "br-", "veth", "virbr", "cni", "flannel", "cali", "podman", "lxc",
];

fn is_virtual(name: &str) -> bool {
    VIRTUAL_PREFIXES.iter().any(|prefix| name.starts_with(prefix))
}

/// First non-loopback IPv4 address.
///
/// Physical interfaces are scanned before virtual ones, each group in name
/// order, so a container bridge is only reported when nothing else has an
/// address.
pub fn first_ipv4(mut interfaces: Vec<(String, Vec<IpAddr>)>) -> Option<Ipv4Addr> {
    interfaces.sort_by(|a, b| (is_virtual(&a.0), &a.0).cmp(&(is_virtual(&b.0), &b.0)));
    interfaces
        .into_iter()
        .flat_map(|(_, addrs)| addrs)
        .find_map(|addr| match addr {
            IpAddr::V4(v4) if !v4.is_loopback() => Some(v4),
            _ => None,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv6Addr;

    #[test]
    fn test_skips_loopback_and_ipv6() {
        let interfaces = vec![
            ("lo".to_string(), vec![IpAddr::V4(Ipv4Addr::LOCALHOST)]),
            (
                "eth0".to_string(),
                vec![
                    IpAddr::V6(Ipv6Addr::new(0xfe80, 0, 0, 0, 0, 0, 0, 1)),
                    IpAddr::V4(Ipv4Addr::new(192, 168, 1, 20)),
                ],
            ),
        ];
        assert_eq!(first_ipv4(interfaces), Some(Ipv4Addr::new(192, 168, 1, 20)));
    }

    #[test]
    fn test_physical_interface_preferred_over_bridges() {
        let interfaces = vec![
            ("eth0".to_string(), vec![IpAddr::V4(Ipv4Addr::new(192, 168, 1, 20))]),
            ("br-3f2a".to_string(), vec![IpAddr::V4(Ipv4Addr::new(172, 18, 0, 1))]),
        ];
        assert_eq!(first_ipv4(interfaces), Some(Ipv4Addr::new(192, 168, 1, 20)));

        let interfaces = vec![
            ("wlan0".to_string(), vec![IpAddr::V4(Ipv4Addr::new(10, 0, 0, 9))]),
            ("docker0".to_string(), vec![IpAddr::V4(Ipv4Addr::new(172, 17, 0, 1))]),
            ("veth12ab".to_string(), vec![IpAddr::V4(Ipv4Addr::new(169, 254, 3, 3))]),
        ];
        assert_eq!(first_ipv4(interfaces), Some(Ipv4Addr::new(10, 0, 0, 9)));
    }

    #[test]
    fn test_physical_interfaces_scanned_in_name_order() {
        let interfaces = vec![
            ("wlan0".to_string(), vec![IpAddr::V4(Ipv4Addr::new(10, 0, 0, 9))]),
            ("enp3s0".to_string(), vec![IpAddr::V4(Ipv4Addr::new(192, 168, 0, 4))]),
        ];
        assert_eq!(first_ipv4(interfaces), Some(Ipv4Addr::new(192, 168, 0, 4)));
    }

    #[test]
    fn test_bridge_used_when_nothing_else_has_ipv4() {
        let interfaces = vec![
            ("lo".to_string(), vec![IpAddr::V4(Ipv4Addr::LOCALHOST)]),
            ("docker0".to_string(), vec![IpAddr::V4(Ipv4Addr::new(172, 17, 0, 1))]),
            (
                "eth0".to_string(),
                vec![IpAddr::V6(Ipv6Addr::new(0xfe80, 0, 0, 0, 0, 0, 0, 1))],
            ),
        ];
        assert_eq!(first_ipv4(interfaces), Some(Ipv4Addr::new(172, 17, 0, 1)));
    }

    #[test]
    fn test_only_loopback_yields_none() {
        let interfaces = vec![("lo".to_string(), vec![IpAddr::V4(Ipv4Addr::LOCALHOST)])];
        assert_eq!(first_ipv4(interfaces), None);
        assert_eq!(first_ipv4(Vec::new()), None);
    }

    #[test]
    fn test_detect_never_returns_empty() {
        let host = HostInfo::detect();
        assert!(!host.hostname.is_empty());
        assert!(!host.ip.is_empty());
    }
}
