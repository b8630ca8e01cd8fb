//! Reserved address classification.
//!
//! This file holds the static table of reserved IPv4 blocks and the
//! predicate used to decide whether a generated address is publicly
//! routable. The table is a hard-coded approximation and is not checked
//! against any live allocation registry.

use std::fmt;
use std::net::Ipv4Addr;

/// Named reserved IPv4 block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReservedBlock {
    /// 10.0.0.0/8 (RFC 1918)
    Private8,
    /// 172.16.0.0/12 (RFC 1918)
    Private12,
    /// 192.168.0.0/16 (RFC 1918)
    Private16,
    /// 127.0.0.0/8
    Loopback,
    /// 169.254.0.0/16 (RFC 3927)
    LinkLocal,
    /// 224.0.0.0/4 (RFC 5771)
    Multicast,
    /// 240.0.0.0/4
    Reserved,
}

/// Every reserved block, in evaluation order
pub static RESERVED_BLOCKS: [ReservedBlock; 7] = [
    ReservedBlock::Private8,
    ReservedBlock::Private12,
    ReservedBlock::Private16,
    ReservedBlock::Loopback,
    ReservedBlock::LinkLocal,
    ReservedBlock::Multicast,
    ReservedBlock::Reserved,
];

impl ReservedBlock {
    /// Check whether the given address falls inside this block
    pub fn contains(self, addr: Ipv4Addr) -> bool {
        let [first, second, _, _] = addr.octets();
        match self {
            ReservedBlock::Private8 => first == 10,
            ReservedBlock::Private12 => first == 172 && (16..=31).contains(&second),
            ReservedBlock::Private16 => first == 192 && second == 168,
            ReservedBlock::Loopback => first == 127,
            ReservedBlock::LinkLocal => first == 169 && second == 254,
            ReservedBlock::Multicast => (224..=239).contains(&first),
            ReservedBlock::Reserved => first >= 240,
        }
    }

    /// CIDR notation of the block
    pub fn cidr(self) -> &'static str {
        match self {
            ReservedBlock::Private8 => "10.0.0.0/8",
            ReservedBlock::Private12 => "172.16.0.0/12",
            ReservedBlock::Private16 => "192.168.0.0/16",
            ReservedBlock::Loopback => "127.0.0.0/8",
            ReservedBlock::LinkLocal => "169.254.0.0/16",
            ReservedBlock::Multicast => "224.0.0.0/4",
            ReservedBlock::Reserved => "240.0.0.0/4",
        }
    }
}

impl fmt::Display for ReservedBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReservedBlock::Private8 | ReservedBlock::Private12 | ReservedBlock::Private16 => "private",
            ReservedBlock::Loopback => "loopback",
            ReservedBlock::LinkLocal => "link-local",
            ReservedBlock::Multicast => "multicast",
            ReservedBlock::Reserved => "reserved",
        };
        write!(f, "{} ({})", name, self.cidr())
    }
}

/// Return the first reserved block containing `addr`, if any
pub fn classify(addr: Ipv4Addr) -> Option<ReservedBlock> {
    RESERVED_BLOCKS.iter().copied().find(|block| block.contains(addr))
}

/// Check if an IPv4 address is reserved (private, loopback, link-local,
/// multicast or reserved for future use)
pub fn is_reserved(addr: Ipv4Addr) -> bool {
    classify(addr).is_some()
}
