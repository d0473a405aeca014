//! Known carriers and their display assets.
//!
//! Filtering never consults this table: carriers are compared as plain
//! strings. It only drives labels, colors and logo paths.

/// A carrier with dedicated display assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownCarrier {
    /// Победа.
    Pobeda,
    /// Red Wings.
    RedWings,
    /// S7 Airlines.
    S7,
}

impl KnownCarrier {
    /// All known carriers in display order.
    pub const ALL: [KnownCarrier; 3] = [
        KnownCarrier::Pobeda,
        KnownCarrier::RedWings,
        KnownCarrier::S7,
    ];

    /// Look up a carrier by the exact name used in the catalog.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Name as it appears in the catalog's `company` field.
    pub fn name(self) -> &'static str {
        match self {
            KnownCarrier::Pobeda => "Победа",
            KnownCarrier::RedWings => "Red Wings",
            KnownCarrier::S7 => "S7",
        }
    }

    /// Label shown in the filter panel.
    pub fn label(self) -> &'static str {
        match self {
            KnownCarrier::Pobeda => "Победа",
            KnownCarrier::RedWings => "Red Wings",
            KnownCarrier::S7 => "S7 Airlines",
        }
    }

    /// Logo asset path.
    pub fn logo_path(self) -> &'static str {
        match self {
            KnownCarrier::Pobeda => "/images/logoPobeda.png",
            KnownCarrier::RedWings => "/images/logoRedWings.png",
            KnownCarrier::S7 => "/images/logoS7.png",
        }
    }
}

/// Logo asset path for a carrier name, `None` for carriers without one.
pub fn logo_path(company: &str) -> Option<&'static str> {
    KnownCarrier::from_name(company).map(KnownCarrier::logo_path)
}
