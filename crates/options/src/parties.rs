/// Participants of the bond-issuance workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Party {
    CentralBank,
    Regulator,
    CsdAgent,
    AuctionAgent,
    Issuer,
    Bank1,
    Bank2,
    Bank3,
}

impl Party {
    /// Every known party, in allocation order.
    pub const ALL: [Party; 8] = [
        Party::CentralBank,
        Party::Regulator,
        Party::CsdAgent,
        Party::AuctionAgent,
        Party::Issuer,
        Party::Bank1,
        Party::Bank2,
        Party::Bank3,
    ];

    /// Party identifier as allocated on the ledger.
    pub const fn as_str(self) -> &'static str {
        match self {
            Party::CentralBank => "CentralBank",
            Party::Regulator => "Regulator",
            Party::CsdAgent => "CsdAgent",
            Party::AuctionAgent => "AuctionAgent",
            Party::Issuer => "Issuer",
            Party::Bank1 => "Bank1",
            Party::Bank2 => "Bank2",
            Party::Bank3 => "Bank3",
        }
    }
}

/// Identifiers of [`Party::ALL`], used when `-u` is not given.
pub const ALL_PARTIES: &[&str] = &[
    Party::CentralBank.as_str(),
    Party::Regulator.as_str(),
    Party::CsdAgent.as_str(),
    Party::AuctionAgent.as_str(),
    Party::Issuer.as_str(),
    Party::Bank1.as_str(),
    Party::Bank2.as_str(),
    Party::Bank3.as_str(),
];
