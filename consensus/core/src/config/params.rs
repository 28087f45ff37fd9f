use crate::network::NetworkType;

/// Consensus parameters. Contains settings and configurations which are consensus-sensitive.
/// Changing one of these on a network node would exclude and prevent it from reaching consensus
/// with the other unmodified nodes.
#[derive(Clone, Debug)]
pub struct Params {
    pub net: NetworkType,

    /// Spacing, in blocks, between treasury tally boundaries. Every shipped
    /// network uses an interval >= 1; consensus code asserts on this.
    pub treasury_vote_interval: u64,

    /// Number of treasury vote intervals making up one full voting window.
    /// Every shipped network uses a multiplier >= 1; consensus code asserts on this.
    pub treasury_vote_interval_multiplier: u64,
}

impl Params {
    /// Returns the total length, in blocks, of a treasury spend voting window
    #[inline]
    #[must_use]
    pub fn treasury_vote_window_duration(&self) -> u64 {
        self.treasury_vote_interval * self.treasury_vote_interval_multiplier
    }

    /// Returns the smallest treasury spend expiry that still admits one full
    /// voting window before it
    #[inline]
    #[must_use]
    pub fn min_tspend_expiry(&self) -> u64 {
        self.treasury_vote_window_duration() + 2
    }

    pub fn network_name(&self) -> String {
        self.net.to_string()
    }
}

impl From<NetworkType> for Params {
    fn from(value: NetworkType) -> Self {
        match value {
            NetworkType::Mainnet => MAINNET_PARAMS,
            NetworkType::Testnet => TESTNET_PARAMS,
            NetworkType::Devnet => DEVNET_PARAMS,
            NetworkType::Simnet => SIMNET_PARAMS,
        }
    }
}

pub const MAINNET_PARAMS: Params = Params {
    net: NetworkType::Mainnet,

    // A tally boundary lands every 288 blocks (roughly daily at mainnet block
    // times) and a spend stays votable for 12 full tally intervals.
    treasury_vote_interval: 288,
    treasury_vote_interval_multiplier: 12,
};

pub const TESTNET_PARAMS: Params = Params {
    net: NetworkType::Testnet,
    treasury_vote_interval: 144,
    treasury_vote_interval_multiplier: 6,
};

pub const SIMNET_PARAMS: Params = Params {
    net: NetworkType::Simnet,

    // Kept short so simulation runs can cross several whole voting windows.
    treasury_vote_interval: 4,
    treasury_vote_interval_multiplier: 3,
};

pub const DEVNET_PARAMS: Params = Params {
    net: NetworkType::Devnet,
    treasury_vote_interval: 48,
    treasury_vote_interval_multiplier: 4,
};
