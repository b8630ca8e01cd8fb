//! Static first-octet tables used by the fast generation strategies.
//!
//! These tables let the direct-range and flat strategies skip per-address
//! classification. They are computed at compile time and never mutated.

/// Closed interval of first-octet values treated as public
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeRule {
    pub start: u8,
    pub end: u8,
}

impl RangeRule {
    pub const fn new(start: u8, end: u8) -> Self {
        RangeRule { start, end }
    }

    /// Check if a first octet lies inside this interval
    pub fn contains(&self, octet: u8) -> bool {
        (self.start..=self.end).contains(&octet)
    }

    /// Number of first-octet values covered
    pub fn len(&self) -> usize {
        (self.end - self.start) as usize + 1
    }
}

/// First-octet intervals sampled by the direct-range strategy.
/// Gaps sit at 10 (private), 127 (loopback), 169 (link-local),
/// 172 and 192 (private sub-blocks); 224 and up is multicast/reserved.
pub static PUBLIC_RANGES: [RangeRule; 6] = [
    RangeRule::new(1, 9),
    RangeRule::new(11, 126),
    RangeRule::new(128, 168),
    RangeRule::new(170, 171),
    RangeRule::new(173, 191),
    RangeRule::new(193, 223),
];

/// First octets left out of the flat allow-list
pub const FLAT_EXCLUDED: [u8; 4] = [10, 127, 172, 192];

/// Highest first octet below the multicast range
pub const MAX_UNICAST_OCTET: u8 = 223;

const FLAT_ALLOW_LIST_LEN: usize = MAX_UNICAST_OCTET as usize - FLAT_EXCLUDED.len();

/// Every first octet in 1..=223 except [`FLAT_EXCLUDED`], ascending
pub static FLAT_ALLOW_LIST: [u8; FLAT_ALLOW_LIST_LEN] = build_flat_allow_list();

const fn is_flat_excluded(octet: u8) -> bool {
    let mut i = 0;
    while i < FLAT_EXCLUDED.len() {
        if FLAT_EXCLUDED[i] == octet {
            return true;
        }
        i += 1;
    }
    false
}

const fn build_flat_allow_list() -> [u8; FLAT_ALLOW_LIST_LEN] {
    let mut list = [0u8; FLAT_ALLOW_LIST_LEN];
    let mut next = 0;
    let mut octet: u8 = 1;
    while octet <= MAX_UNICAST_OCTET {
        if !is_flat_excluded(octet) {
            list[next] = octet;
            next += 1;
        }
        octet += 1;
    }
    list
}

/// Second-octet interval that must be avoided for a given first octet.
///
/// Only the three first octets that share space with a smaller reserved
/// block have an entry: 172 (172.16.0.0/12), 192 (192.168.0.0/16) and
/// 169 (169.254.0.0/16).
pub fn second_octet_exclusion(first: u8) -> Option<RangeRule> {
    match first {
        172 => Some(RangeRule::new(16, 31)),
        192 => Some(RangeRule::new(168, 168)),
        169 => Some(RangeRule::new(254, 254)),
        _ => None,
    }
}
