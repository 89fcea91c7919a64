//! The six power statistics every character carries.
//!
//! Battles walk the statistics in the fixed order of [`PowerStat::ALL`]:
//! intelligence, strength, speed, durability, power, combat. That order
//! decides ties when picking the deciding statistic.

use serde::{Deserialize, Serialize};

/// One named power statistic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerStat {
    Intelligence,
    Strength,
    Speed,
    Durability,
    Power,
    Combat,
}

impl PowerStat {
    /// All statistics in battle enumeration order.
    pub const ALL: [PowerStat; 6] = [
        PowerStat::Intelligence,
        PowerStat::Strength,
        PowerStat::Speed,
        PowerStat::Durability,
        PowerStat::Power,
        PowerStat::Combat,
    ];

    /// Lowercase name, as used by the character feed.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PowerStat::Intelligence => "intelligence",
            PowerStat::Strength => "strength",
            PowerStat::Speed => "speed",
            PowerStat::Durability => "durability",
            PowerStat::Power => "power",
            PowerStat::Combat => "combat",
        }
    }
}

impl std::fmt::Display for PowerStat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A full set of six statistic values.
///
/// Field names match the `powerstats` object of the superhero feed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PowerStats {
    pub intelligence: u32,
    pub strength: u32,
    pub speed: u32,
    pub durability: u32,
    pub power: u32,
    pub combat: u32,
}

impl PowerStats {
    /// Build from values listed in [`PowerStat::ALL`] order.
    ///
    /// ```
    /// use hero_duel::cards::{PowerStat, PowerStats};
    ///
    /// let stats = PowerStats::from_array([38, 100, 17, 80, 17, 64]);
    /// assert_eq!(stats.get(PowerStat::Strength), 100);
    /// assert_eq!(stats.total(), 316);
    /// ```
    #[must_use]
    pub const fn from_array(values: [u32; 6]) -> Self {
        Self {
            intelligence: values[0],
            strength: values[1],
            speed: values[2],
            durability: values[3],
            power: values[4],
            combat: values[5],
        }
    }

    /// Same value on every statistic.
    #[must_use]
    pub const fn uniform(value: u32) -> Self {
        Self::from_array([value; 6])
    }

    /// Values in [`PowerStat::ALL`] order.
    #[must_use]
    pub const fn to_array(&self) -> [u32; 6] {
        [
            self.intelligence,
            self.strength,
            self.speed,
            self.durability,
            self.power,
            self.combat,
        ]
    }

    /// Value of one statistic.
    #[must_use]
    pub const fn get(&self, stat: PowerStat) -> u32 {
        match stat {
            PowerStat::Intelligence => self.intelligence,
            PowerStat::Strength => self.strength,
            PowerStat::Speed => self.speed,
            PowerStat::Durability => self.durability,
            PowerStat::Power => self.power,
            PowerStat::Combat => self.combat,
        }
    }

    /// Iterate (stat, value) pairs in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (PowerStat, u32)> + '_ {
        PowerStat::ALL.into_iter().map(move |stat| (stat, self.get(stat)))
    }

    /// Sum of all six statistics.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.to_array().iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumeration_order() {
        let names: Vec<_> = PowerStat::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            vec!["intelligence", "strength", "speed", "durability", "power", "combat"]
        );
    }

    #[test]
    fn test_get_matches_array() {
        let stats = PowerStats::from_array([1, 2, 3, 4, 5, 6]);
        for (i, stat) in PowerStat::ALL.iter().enumerate() {
            assert_eq!(stats.get(*stat), i as u32 + 1);
        }
        assert_eq!(stats.to_array(), [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_total() {
        assert_eq!(PowerStats::uniform(50).total(), 300);
        assert_eq!(PowerStats::default().total(), 0);
    }

    #[test]
    fn test_iter_pairs() {
        let stats = PowerStats::from_array([10, 0, 0, 0, 0, 90]);
        let pairs: Vec<_> = stats.iter().collect();
        assert_eq!(pairs.len(), 6);
        assert_eq!(pairs[0], (PowerStat::Intelligence, 10));
        assert_eq!(pairs[5], (PowerStat::Combat, 90));
    }

    #[test]
    fn test_stats_feed_shape() {
        let json = r#"{"intelligence":38,"strength":100,"speed":17,"durability":80,"power":24,"combat":64}"#;
        let stats: PowerStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.durability, 80);
        assert_eq!(stats.total(), 323);
    }

    #[test]
    fn test_stat_serde_name() {
        assert_eq!(serde_json::to_string(&PowerStat::Durability).unwrap(), "\"durability\"");
    }
}
