//! Line aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Section, SectionChain, SectionError, Station, StationId};

/// Unique line identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(Uuid);

impl LineId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LineId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for LineId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for LineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A subway line: name, color and the chain of sections it runs over
///
/// Name and color are checked by the commands that create or update a line;
/// the line itself only guards its chain.
#[derive(Debug, Clone)]
pub struct Line {
    id: LineId,
    name: String,
    color: String,
    sections: SectionChain,
    created_at: DateTime<Utc>,
    modified_at: DateTime<Utc>,
}

impl Line {
    pub fn new(name: impl Into<String>, color: impl Into<String>, initial: Section) -> Self {
        let now = Utc::now();
        Self {
            id: LineId::new(),
            name: name.into(),
            color: color.into(),
            sections: SectionChain::new(initial),
            created_at: now,
            modified_at: now,
        }
    }

    pub fn id(&self) -> LineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn sections(&self) -> &SectionChain {
        &self.sections
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn modified_at(&self) -> DateTime<Utc> {
        self.modified_at
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.touch();
    }

    pub fn recolor(&mut self, color: impl Into<String>) {
        self.color = color.into();
        self.touch();
    }

    /// # Errors
    ///
    /// Propagates the chain's rejection; the line is unchanged on error.
    pub fn add_section(&mut self, section: Section) -> Result<(), SectionError> {
        self.sections.insert(section)?;
        self.touch();
        Ok(())
    }

    /// # Errors
    ///
    /// Propagates the chain's rejection; the line is unchanged on error.
    pub fn remove_station(&mut self, station: StationId) -> Result<(), SectionError> {
        self.sections.delete(station)?;
        self.touch();
        Ok(())
    }

    /// # Errors
    ///
    /// [`SectionError::EmptyChain`] if the line somehow has no sections.
    pub fn stations(&self) -> Result<Vec<Station>, SectionError> {
        self.sections.ordered_stations()
    }

    pub fn contains_station(&self, station: StationId) -> bool {
        self.sections.contains(station)
    }

    pub fn total_distance(&self) -> u64 {
        self.sections.total_distance()
    }

    fn touch(&mut self) {
        self.modified_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_with(pangyo: &Station, jeongja: &Station) -> Line {
        let initial = Section::new(pangyo.clone(), jeongja.clone(), 10).unwrap();
        Line::new("Shinbundang", "bg-red-600", initial)
    }

    #[test]
    fn test_new_line_lists_initial_stations() {
        let pangyo = Station::new("Pangyo");
        let jeongja = Station::new("Jeongja");
        let line = line_with(&pangyo, &jeongja);

        assert_eq!(line.name(), "Shinbundang");
        assert_eq!(line.color(), "bg-red-600");
        assert_eq!(line.stations().unwrap(), vec![pangyo, jeongja]);
        assert_eq!(line.total_distance(), 10);
        assert_eq!(line.created_at(), line.modified_at());
    }

    #[test]
    fn test_failed_mutation_keeps_timestamp() {
        let pangyo = Station::new("Pangyo");
        let jeongja = Station::new("Jeongja");
        let mut line = line_with(&pangyo, &jeongja);
        let before = line.modified_at();

        assert_eq!(line.remove_station(pangyo.id()), Err(SectionError::MinimumChain));
        assert_eq!(line.modified_at(), before);
    }

    #[test]
    fn test_add_and_remove_station() {
        let pangyo = Station::new("Pangyo");
        let jeongja = Station::new("Jeongja");
        let migeum = Station::new("Migeum");
        let mut line = line_with(&pangyo, &jeongja);

        line.add_section(Section::new(jeongja.clone(), migeum.clone(), 5).unwrap())
            .unwrap();
        assert!(line.contains_station(migeum.id()));
        assert_eq!(line.total_distance(), 15);

        line.remove_station(jeongja.id()).unwrap();
        assert_eq!(line.stations().unwrap(), vec![pangyo, migeum]);
        assert_eq!(line.total_distance(), 15);
    }

    #[test]
    fn test_rename_and_recolor() {
        let mut line = line_with(&Station::new("A"), &Station::new("B"));
        line.rename("Sinbundang");
        line.recolor("bg-orange-600");
        assert_eq!(line.name(), "Sinbundang");
        assert_eq!(line.color(), "bg-orange-600");
        assert!(line.modified_at() >= line.created_at());
    }
}
