use std::net::{IpAddr, Ipv4Addr};

/// RFC 1918 blocks as (network, prefix length).
pub const PRIVATE_RANGES: [(Ipv4Addr, u8); 3] = [
    (Ipv4Addr::new(10, 0, 0, 0), 8),
    (Ipv4Addr::new(172, 16, 0, 0), 12),
    (Ipv4Addr::new(192, 168, 0, 0), 16),
];

/// True when `ip` falls inside one of the RFC 1918 blocks. IPv6 never does.
pub fn is_private(ip: IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => PRIVATE_RANGES
            .iter()
            .any(|(network, prefix)| in_block(v4, *network, *prefix)),
        IpAddr::V6(_) => false,
    }
}

fn in_block(ip: Ipv4Addr, network: Ipv4Addr, prefix: u8) -> bool {
    let mask = u32::MAX << (32 - u32::from(prefix));
    u32::from(ip) & mask == u32::from(network)
}
