//! Section model: a directed, distance-labelled edge between two stations

use serde::{Deserialize, Serialize};

use super::{SectionError, Station};

/// Strictly positive distance between two adjacent stations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Distance(u32);

impl Distance {
    /// # Errors
    ///
    /// [`SectionError::NonPositiveDistance`] when `value` is zero.
    pub fn new(value: u32) -> Result<Self, SectionError> {
        if value == 0 {
            return Err(SectionError::NonPositiveDistance);
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// What is left of `self` after carving out `part`
    ///
    /// `None` unless `part` is strictly shorter than `self`.
    pub fn shorten_by(self, part: Distance) -> Option<Distance> {
        self.0.checked_sub(part.0).filter(|rest| *rest > 0).map(Distance)
    }

    /// # Errors
    ///
    /// [`SectionError::DistanceOverflow`] when the sum does not fit in a `u32`.
    pub fn extend_by(self, other: Distance) -> Result<Distance, SectionError> {
        self.0
            .checked_add(other.0)
            .map(Distance)
            .ok_or(SectionError::DistanceOverflow)
    }
}

impl TryFrom<u32> for Distance {
    type Error = SectionError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Distance> for u32 {
    fn from(distance: Distance) -> Self {
        distance.0
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Directed edge `up_station -> down_station`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    up_station: Station,
    down_station: Station,
    distance: Distance,
}

impl Section {
    /// # Errors
    ///
    /// - [`SectionError::SameStation`] when both ends are the same station
    /// - [`SectionError::NonPositiveDistance`] when `distance` is zero
    pub fn new(up_station: Station, down_station: Station, distance: u32) -> Result<Self, SectionError> {
        if up_station == down_station {
            return Err(SectionError::SameStation(up_station.name().to_string()));
        }

        Ok(Self {
            up_station,
            down_station,
            distance: Distance::new(distance)?,
        })
    }

    pub fn up_station(&self) -> &Station {
        &self.up_station
    }

    pub fn down_station(&self) -> &Station {
        &self.down_station
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    /// Move the up end to `station`, keeping the down end
    pub(super) fn reroute_up(&mut self, station: Station, distance: Distance) {
        self.up_station = station;
        self.distance = distance;
    }

    /// Move the down end to `station`, keeping the up end
    pub(super) fn reroute_down(&mut self, station: Station, distance: Distance) {
        self.down_station = station;
        self.distance = distance;
    }

    /// Join `self` (ending at X) with `next` (starting at X)
    pub(super) fn merge(self, next: Section) -> Result<Section, SectionError> {
        let distance = self.distance.extend_by(next.distance)?;
        Ok(Section {
            up_station: self.up_station,
            down_station: next.down_station,
            distance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_rejects_zero() {
        assert_eq!(Distance::new(0), Err(SectionError::NonPositiveDistance));
        assert_eq!(Distance::new(7).map(Distance::get), Ok(7));
    }

    #[test]
    fn test_shorten_by_requires_strictly_shorter_part() {
        let ten = Distance::new(10).unwrap();
        assert_eq!(ten.shorten_by(Distance::new(4).unwrap()), Distance::new(6).ok());
        assert_eq!(ten.shorten_by(Distance::new(10).unwrap()), None);
        assert_eq!(ten.shorten_by(Distance::new(11).unwrap()), None);
    }

    #[test]
    fn test_extend_by_overflow() {
        let max = Distance::new(u32::MAX).unwrap();
        let one = Distance::new(1).unwrap();
        assert_eq!(max.extend_by(one), Err(SectionError::DistanceOverflow));
    }

    #[test]
    fn test_distance_deserialize_rejects_zero() {
        assert!(serde_json::from_str::<Distance>("0").is_err());
        assert_eq!(serde_json::from_str::<Distance>("12").unwrap().get(), 12);
    }

    #[test]
    fn test_section_rejects_same_station() {
        let station = Station::new("Jeongja");
        let result = Section::new(station.clone(), station, 5);
        assert_eq!(result, Err(SectionError::SameStation("Jeongja".to_string())));
    }

    #[test]
    fn test_section_rejects_zero_distance() {
        let result = Section::new(Station::new("A"), Station::new("B"), 0);
        assert_eq!(result, Err(SectionError::NonPositiveDistance));
    }

    #[test]
    fn test_merge_adds_distances() {
        let a = Station::new("A");
        let b = Station::new("B");
        let c = Station::new("C");
        let first = Section::new(a.clone(), b.clone(), 3).unwrap();
        let second = Section::new(b, c.clone(), 4).unwrap();

        let merged = first.merge(second).unwrap();
        assert_eq!(merged.up_station(), &a);
        assert_eq!(merged.down_station(), &c);
        assert_eq!(merged.distance().get(), 7);
    }
}
