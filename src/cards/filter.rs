//! Roster projection: filter the available pool by alignment and order it
//! by a statistic.
//!
//! Projections never mutate the pool; they return borrowed views.

use serde::{Deserialize, Serialize};

use super::character::{Alignment, Character};
use super::stats::PowerStat;

/// View settings for browsing the available pool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterFilter {
    /// Keep only characters with this alignment.
    pub alignment: Option<Alignment>,

    /// Order by this statistic, highest first. Equal values keep pool order.
    pub sort_by: Option<PowerStat>,
}

impl RosterFilter {
    /// A filter that keeps everything in pool order.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    #[must_use]
    pub fn sorted_by(mut self, stat: PowerStat) -> Self {
        self.sort_by = Some(stat);
        self
    }

    /// Apply the filter to a pool.
    ///
    /// ```
    /// use hero_duel::cards::{Alignment, Character, CharacterId, PowerStat, PowerStats, RosterFilter};
    ///
    /// let pool = vec![
    ///     Character::new(CharacterId::new(1), "Slow", PowerStats::from_array([0, 0, 10, 0, 0, 0])).with_alignment(Alignment::Good),
    ///     Character::new(CharacterId::new(2), "Fast", PowerStats::from_array([0, 0, 90, 0, 0, 0])).with_alignment(Alignment::Good),
    ///     Character::new(CharacterId::new(3), "Villain", PowerStats::from_array([0, 0, 99, 0, 0, 0])).with_alignment(Alignment::Bad),
    /// ];
    ///
    /// let filter = RosterFilter::new().with_alignment(Alignment::Good).sorted_by(PowerStat::Speed);
    /// let names: Vec<_> = filter.apply(&pool).iter().map(|c| c.name.as_str()).collect();
    /// assert_eq!(names, vec!["Fast", "Slow"]);
    /// ```
    #[must_use]
    pub fn apply<'a>(&self, pool: &'a [Character]) -> Vec<&'a Character> {
        let mut view: Vec<&Character> = pool
            .iter()
            .filter(|c| self.alignment.map_or(true, |a| c.alignment() == a))
            .collect();

        if let Some(stat) = self.sort_by {
            view.sort_by(|a, b| b.powerstats.get(stat).cmp(&a.powerstats.get(stat)));
        }

        view
    }
}
