//! Ordered chain of sections forming one line's path
//!
//! Sections live in an arena keyed by their up-station, with a second index
//! from down-station to up-station, so either end of any section is found
//! in O(1). The chain is always a single simple path:
//!
//! - each station starts at most one section and ends at most one section
//! - walking from the only station that never ends a section reaches every
//!   section and stops at the only station that never starts one
//! - at least one section is present
//!
//! ```text
//!   A ──10──▶ B            insert A ─4─▶ C            A ─4─▶ C ─6─▶ B
//! ```

use std::collections::HashMap;

use super::{Distance, Section, SectionError, Station, StationId};

/// Where an accepted section goes
enum Placement {
    /// Split the section starting at the new section's up-station
    SplitFromUp { remaining: Distance },
    /// Split the section ending at the new section's down-station
    SplitFromDown { existing_up: StationId, remaining: Distance },
    /// New first section
    Prepend,
    /// New last section
    Append,
}

#[derive(Debug, Clone)]
pub struct SectionChain {
    by_up: HashMap<StationId, Section>,
    by_down: HashMap<StationId, StationId>,
}

impl SectionChain {
    /// Start a chain from the line's first section
    pub fn new(initial: Section) -> Self {
        let mut chain = Self {
            by_up: HashMap::new(),
            by_down: HashMap::new(),
        };
        chain.link(initial);
        chain
    }

    pub fn len(&self) -> usize {
        self.by_up.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_up.is_empty()
    }

    pub fn contains(&self, station: StationId) -> bool {
        self.by_up.contains_key(&station) || self.by_down.contains_key(&station)
    }

    /// The terminal station that never ends a section
    pub fn first_station(&self) -> Option<&Station> {
        self.first_station_id()
            .and_then(|id| self.by_up.get(&id))
            .map(Section::up_station)
    }

    /// The terminal station that never starts a section
    pub fn last_station(&self) -> Option<&Station> {
        self.last_section().map(Section::down_station)
    }

    /// Insert a section, splitting or extending the chain
    ///
    /// # Errors
    ///
    /// - [`SectionError::Duplicate`] when both stations are already on the chain
    /// - [`SectionError::Disconnected`] when neither station is, or the section
    ///   fits nowhere
    /// - [`SectionError::InvalidDistance`] when a split would leave a
    ///   non-positive remainder
    pub fn insert(&mut self, section: Section) -> Result<(), SectionError> {
        match self.place(&section)? {
            Placement::SplitFromUp { remaining } => {
                let up = section.up_station().id();
                if let Some(mut existing) = self.unlink(up) {
                    existing.reroute_up(section.down_station().clone(), remaining);
                    self.link(existing);
                }
            },
            Placement::SplitFromDown {
                existing_up,
                remaining,
            } => {
                if let Some(mut existing) = self.unlink(existing_up) {
                    existing.reroute_down(section.up_station().clone(), remaining);
                    self.link(existing);
                }
            },
            Placement::Prepend | Placement::Append => {},
        }

        self.link(section);
        Ok(())
    }

    /// Remove a station from the chain
    ///
    /// A terminal station takes its one section with it. An interior station
    /// merges its two sections into one spanning both, distances added.
    ///
    /// # Errors
    ///
    /// - [`SectionError::MinimumChain`] when only one section is left
    /// - [`SectionError::NotFound`] when the station is not on the chain
    pub fn delete(&mut self, station: StationId) -> Result<(), SectionError> {
        if self.by_up.len() <= 1 {
            return Err(SectionError::MinimumChain);
        }

        let incoming = self.by_down.get(&station).copied();
        let outgoing = self.by_up.contains_key(&station);

        match (incoming, outgoing) {
            (None, false) => Err(SectionError::NotFound(station)),
            (None, true) => {
                self.unlink(station);
                Ok(())
            },
            (Some(previous), false) => {
                self.unlink(previous);
                Ok(())
            },
            (Some(previous), true) => {
                // Check the merged distance before detaching anything.
                let (Some(before), Some(after)) =
                    (self.by_up.get(&previous), self.by_up.get(&station))
                else {
                    return Err(SectionError::NotFound(station));
                };
                before.distance().extend_by(after.distance())?;

                if let (Some(before), Some(after)) = (self.unlink(previous), self.unlink(station)) {
                    self.link(before.merge(after)?);
                }
                Ok(())
            },
        }
    }

    /// Sections in path order, from the first station to the last
    pub fn iter(&self) -> OrderedSections<'_> {
        OrderedSections {
            chain: self,
            cursor: self.first_station_id(),
            remaining: self.by_up.len(),
        }
    }

    /// Stations in path order
    ///
    /// # Errors
    ///
    /// [`SectionError::EmptyChain`] when the chain has no sections.
    pub fn ordered_stations(&self) -> Result<Vec<Station>, SectionError> {
        let first = self.first_station().ok_or(SectionError::EmptyChain)?;

        let mut stations = Vec::with_capacity(self.by_up.len() + 1);
        stations.push(first.clone());
        stations.extend(self.iter().map(|section| section.down_station().clone()));
        Ok(stations)
    }

    /// Sections in path order
    ///
    /// # Errors
    ///
    /// [`SectionError::EmptyChain`] when the chain has no sections.
    pub fn ordered_sections(&self) -> Result<Vec<&Section>, SectionError> {
        if self.is_empty() {
            return Err(SectionError::EmptyChain);
        }
        Ok(self.iter().collect())
    }

    pub fn total_distance(&self) -> u64 {
        self.by_up
            .values()
            .map(|section| u64::from(section.distance().get()))
            .sum()
    }

    fn place(&self, section: &Section) -> Result<Placement, SectionError> {
        let up = section.up_station().id();
        let down = section.down_station().id();

        match (self.contains(up), self.contains(down)) {
            (true, true) => return Err(self.duplicate(section)),
            (false, false) => return Err(self.disconnected(section)),
            _ => {},
        }

        if let Some(existing) = self.by_up.get(&up) {
            let remaining = existing
                .distance()
                .shorten_by(section.distance())
                .ok_or_else(|| invalid_distance(section, existing))?;
            return Ok(Placement::SplitFromUp { remaining });
        }

        if let Some(&existing_up) = self.by_down.get(&down) {
            let existing = self
                .by_up
                .get(&existing_up)
                .ok_or_else(|| self.disconnected(section))?;
            let remaining = existing
                .distance()
                .shorten_by(section.distance())
                .ok_or_else(|| invalid_distance(section, existing))?;
            return Ok(Placement::SplitFromDown {
                existing_up,
                remaining,
            });
        }

        if self.first_station_id() == Some(down) {
            return Ok(Placement::Prepend);
        }
        if self.last_section().map(|last| last.down_station().id()) == Some(up) {
            return Ok(Placement::Append);
        }

        Err(self.disconnected(section))
    }

    fn first_station_id(&self) -> Option<StationId> {
        self.by_up
            .keys()
            .find(|id| !self.by_down.contains_key(id))
            .copied()
    }

    fn last_section(&self) -> Option<&Section> {
        self.by_down
            .iter()
            .find(|(down, _)| !self.by_up.contains_key(down))
            .and_then(|(_, up)| self.by_up.get(up))
    }

    fn link(&mut self, section: Section) {
        let up = section.up_station().id();
        self.by_down.insert(section.down_station().id(), up);
        self.by_up.insert(up, section);
    }

    fn unlink(&mut self, up: StationId) -> Option<Section> {
        let section = self.by_up.remove(&up)?;
        self.by_down.remove(&section.down_station().id());
        Some(section)
    }

    fn duplicate(&self, section: &Section) -> SectionError {
        SectionError::Duplicate {
            up: section.up_station().name().to_string(),
            down: section.down_station().name().to_string(),
        }
    }

    fn disconnected(&self, section: &Section) -> SectionError {
        SectionError::Disconnected {
            up: section.up_station().name().to_string(),
            down: section.down_station().name().to_string(),
        }
    }
}

fn invalid_distance(section: &Section, existing: &Section) -> SectionError {
    SectionError::InvalidDistance {
        requested: section.distance().get(),
        available: existing.distance().get(),
    }
}

/// Iterator over a chain's sections in path order
///
/// Bounded by the number of sections, so it always terminates.
pub struct OrderedSections<'a> {
    chain: &'a SectionChain,
    cursor: Option<StationId>,
    remaining: usize,
}

impl<'a> Iterator for OrderedSections<'a> {
    type Item = &'a Section;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let section = self.chain.by_up.get(&self.cursor?)?;
        self.cursor = Some(section.down_station().id());
        self.remaining -= 1;
        Some(section)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}
