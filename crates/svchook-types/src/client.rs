use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Name given to the client seeded when no positive-balance client exists.
pub const DEFAULT_CLIENT_NAME: &str = "Monsen";

/// Balance given to the seeded client.
pub const DEFAULT_CLIENT_BALANCE: f64 = 5.0;

/// Identifier of a client row (`CLIENTS.CLIENT_ID`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(pub i64);

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ClientId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

impl From<i64> for ClientId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A client together with its current balance.
///
/// Built from the `CLIENTS JOIN BALANCES` row. When returned by the
/// positive-balance lookup the balance is always greater than zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub balance: f64,
}

impl Client {
    pub fn new(id: impl Into<ClientId>, balance: f64) -> Self {
        Self {
            id: id.into(),
            balance,
        }
    }

    /// Whether this client can be used as the active test subject.
    pub fn has_positive_balance(&self) -> bool {
        self.balance > 0.0
    }
}
