use serde::{Deserialize, Serialize};

use crate::core::types::Place;

/// A parcel waiting at `place` to be carried to `address`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Parcel {
    pub place: Place,
    pub address: Place,
}

impl Parcel {
    pub fn new(place: impl Into<Place>, address: impl Into<Place>) -> Self {
        Self {
            place: place.into(),
            address: address.into(),
        }
    }

    /// A parcel standing at its own address has been delivered
    pub fn is_delivered(&self) -> bool {
        self.place == self.address
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parcel_delivered() {
        assert!(Parcel::new("Farm", "Farm").is_delivered());
        assert!(!Parcel::new("Farm", "Shop").is_delivered());
    }
}
