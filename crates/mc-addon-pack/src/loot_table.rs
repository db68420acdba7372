//! Loot tables (`loot_tables/**/*.json`): building, parsing and preview rolls.

use mc_addon_core::{Result, Value};
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Map;

/// A loot table with one or more pools.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LootTable {
    #[serde(default)]
    pub pools: Vec<LootPool>,
}

/// A pool of loot entries rolled a number of times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LootPool {
    pub rolls: LootNumber,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Value>,
    pub entries: Vec<LootEntry>,
}

/// Fixed number or uniform `{min, max}` range, used by `rolls` and counts.
///
/// Vanilla tables use negative lower bounds (a chance of nothing) and
/// fractional values; integers are tried first so they are written back
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LootNumber {
    Fixed(i32),
    Range { min: i32, max: i32 },
    FixedFloat(f64),
    FloatRange { min: f64, max: f64 },
}

impl LootNumber {
    pub fn range(min: i32, max: i32) -> Self {
        if min == max {
            LootNumber::Fixed(min)
        } else {
            LootNumber::Range {
                min: min.min(max),
                max: min.max(max),
            }
        }
    }

    /// Rolled value, rounded down and clamped at zero.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        let n = match *self {
            LootNumber::Fixed(n) => f64::from(n),
            LootNumber::Range { min, max } if min <= max => f64::from(rng.gen_range(min..=max)),
            LootNumber::Range { min, .. } => f64::from(min),
            LootNumber::FixedFloat(n) => n,
            LootNumber::FloatRange { min, max } if min < max => rng.gen_range(min..=max),
            LootNumber::FloatRange { min, .. } => min,
        };
        // `as` saturates: negative and NaN become 0.
        n.floor() as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LootEntryKind {
    Item,
    LootTable,
    Empty,
}

fn default_weight() -> u32 {
    1
}

fn is_default_weight(w: &u32) -> bool {
    *w == 1
}

/// A single entry in a loot pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LootEntry {
    #[serde(rename = "type")]
    pub kind: LootEntryKind,
    /// Item identifier, or table path for `loot_table` entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default = "default_weight", skip_serializing_if = "is_default_weight")]
    pub weight: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub functions: Vec<LootFunction>,
}

/// A function that modifies the loot result. Arguments other than `count`
/// are kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LootFunction {
    pub function: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<LootNumber>,
    #[serde(flatten)]
    pub args: Map<String, Value>,
}

impl LootFunction {
    pub fn new(function: &str) -> Self {
        Self {
            function: function.to_string(),
            count: None,
            args: Map::new(),
        }
    }

    pub fn set_count(min: i32, max: i32) -> Self {
        Self {
            count: Some(LootNumber::range(min, max)),
            ..Self::new("set_count")
        }
    }

    pub fn set_data(data: u32) -> Self {
        Self::new("set_data").arg("data", data)
    }

    pub fn enchant_randomly() -> Self {
        Self::new("enchant_randomly")
    }

    pub fn furnace_smelt() -> Self {
        Self::new("furnace_smelt")
    }

    /// Extra drops per looting level.
    pub fn looting_enchant(min: u32, max: u32) -> Self {
        Self::new("looting_enchant").arg("count", serde_json::json!({ "min": min, "max": max }))
    }

    pub fn arg(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.args.insert(key.to_string(), value.into());
        self
    }
}

/// A single item drop result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LootDrop {
    pub item_name: String,
    pub count: u32,
}

impl LootTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: LootPool) -> Self {
        self.pools.push(pool);
        self
    }

    /// Parse from a JSON string.
    pub fn parse_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Roll all pools and collect drops.
    pub fn roll(&self) -> Vec<LootDrop> {
        self.roll_with(&mut rand::thread_rng())
    }

    pub fn roll_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<LootDrop> {
        let mut drops = Vec::new();
        for pool in &self.pools {
            let n = pool.rolls.roll(rng);
            for _ in 0..n {
                if let Some(drop) = pool.pick(rng).and_then(|e| e.to_drop(rng)) {
                    drops.push(drop);
                }
            }
        }
        drops
    }
}

impl LootPool {
    pub fn new(rolls: LootNumber) -> Self {
        Self {
            rolls,
            conditions: Vec::new(),
            entries: Vec::new(),
        }
    }

    pub fn entry(mut self, entry: LootEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Raw condition object, e.g. `{"condition": "killed_by_player"}`.
    pub fn condition(mut self, condition: Value) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Select one entry using weighted random selection.
    fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&LootEntry> {
        let total_weight: u64 = self.entries.iter().map(|e| u64::from(e.weight)).sum();
        if total_weight == 0 {
            return None;
        }

        let mut roll = rng.gen_range(0..total_weight);
        for entry in &self.entries {
            let weight = u64::from(entry.weight);
            if roll < weight {
                return Some(entry);
            }
            roll -= weight;
        }
        None
    }
}

impl LootEntry {
    pub fn item(name: &str) -> Self {
        Self {
            kind: LootEntryKind::Item,
            name: Some(name.to_string()),
            weight: 1,
            functions: Vec::new(),
        }
    }

    pub fn empty() -> Self {
        Self {
            kind: LootEntryKind::Empty,
            name: None,
            weight: 1,
            functions: Vec::new(),
        }
    }

    /// Roll another table; `path` is relative to the pack root.
    pub fn table(path: &str) -> Self {
        Self {
            kind: LootEntryKind::LootTable,
            name: Some(path.to_string()),
            weight: 1,
            functions: Vec::new(),
        }
    }

    pub fn weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    pub fn function(mut self, function: LootFunction) -> Self {
        self.functions.push(function);
        self
    }

    /// Nested tables are not followed.
    fn to_drop<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<LootDrop> {
        match self.kind {
            LootEntryKind::Item => {
                let name = self.name.as_ref()?;
                let count = self
                    .functions
                    .iter()
                    .filter(|f| f.function == "set_count")
                    .filter_map(|f| f.count)
                    .last()
                    .map(|c| c.roll(rng))
                    .unwrap_or(1);
                if count == 0 {
                    return None;
                }
                Some(LootDrop {
                    item_name: name.clone(),
                    count,
                })
            }
            LootEntryKind::LootTable | LootEntryKind::Empty => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    #[test]
    fn parse_loot_table() {
        let json = r#"{
            "pools": [
                {
                    "rolls": 1,
                    "entries": [
                        {
                            "type": "item",
                            "name": "minecraft:diamond",
                            "weight": 1,
                            "functions": [
                                { "function": "set_count", "count": { "min": 1, "max": 3 } },
                                { "function": "enchant_with_levels", "levels": 30 }
                            ]
                        },
                        {
                            "type": "empty",
                            "weight": 3
                        }
                    ]
                }
            ]
        }"#;
        let table = LootTable::parse_json(json).unwrap();
        assert_eq!(table.pools.len(), 1);
        assert_eq!(table.pools[0].entries.len(), 2);
        let f = &table.pools[0].entries[0].functions;
        assert_eq!(f[0].count, Some(LootNumber::Range { min: 1, max: 3 }));
        assert_eq!(f[1].args.get("levels"), Some(&json!(30)));
        assert_eq!(table.pools[0].entries[1].kind, LootEntryKind::Empty);
    }

    #[test]
    fn builder_output() {
        let table = LootTable::new().pool(
            LootPool::new(LootNumber::Fixed(1))
                .entry(LootEntry::item("custom:ruby").weight(3).function(LootFunction::set_count(1, 2)))
                .entry(LootEntry::empty()),
        );
        assert_eq!(
            table.to_json().unwrap(),
            json!({ "pools": [{
                "rolls": 1,
                "entries": [
                    {
                        "type": "item",
                        "name": "custom:ruby",
                        "weight": 3,
                        "functions": [{ "function": "set_count", "count": { "min": 1, "max": 2 } }]
                    },
                    { "type": "empty" }
                ]
            }]})
        );
    }

    #[test]
    fn roll_fixed() {
        let table = LootTable::new().pool(
            LootPool::new(LootNumber::Fixed(1))
                .entry(LootEntry::item("minecraft:stick").function(LootFunction::set_count(5, 5))),
        );
        let drops = table.roll();
        assert_eq!(drops, vec![LootDrop { item_name: "minecraft:stick".into(), count: 5 }]);
    }

    #[test]
    fn roll_ranges_stay_in_bounds() {
        let table = LootTable::new().pool(
            LootPool::new(LootNumber::range(2, 4))
                .entry(LootEntry::item("custom:ruby").function(LootFunction::set_count(1, 3)))
                .entry(LootEntry::empty().weight(0)),
        );
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let drops = table.roll_with(&mut rng);
            assert!((2..=4).contains(&drops.len()));
            assert!(drops.iter().all(|d| (1..=3).contains(&d.count)));
        }
    }

    #[test]
    fn parse_negative_and_fractional_numbers() {
        let table = LootTable::parse_json(
            r#"{ "pools": [{
                "rolls": { "min": 0.5, "max": 2.5 },
                "entries": [{
                    "type": "item",
                    "name": "minecraft:rotten_flesh",
                    "functions": [{ "function": "set_count", "count": { "min": -1, "max": 2 } }]
                }]
            }]}"#,
        )
        .unwrap();
        let pool = &table.pools[0];
        assert_eq!(pool.rolls, LootNumber::FloatRange { min: 0.5, max: 2.5 });
        assert_eq!(pool.entries[0].functions[0].count, Some(LootNumber::Range { min: -1, max: 2 }));
        // Integers stay integers when written back.
        assert_eq!(
            table.to_json().unwrap()["pools"][0]["entries"][0]["functions"][0]["count"],
            json!({ "min": -1, "max": 2 })
        );

        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            for drop in table.roll_with(&mut rng) {
                assert!((1..=2).contains(&drop.count));
            }
        }
    }

    #[test]
    fn roll_clamps_at_zero() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(LootNumber::Fixed(-3).roll(&mut rng), 0);
        assert_eq!(LootNumber::FixedFloat(2.9).roll(&mut rng), 2);
        assert_eq!(LootNumber::FloatRange { min: -1.0, max: -0.5 }.roll(&mut rng), 0);
    }

    #[test]
    fn huge_weights_do_not_overflow() {
        let table = LootTable::new().pool(
            LootPool::new(LootNumber::Fixed(1))
                .entry(LootEntry::item("custom:a").weight(u32::MAX))
                .entry(LootEntry::item("custom:b").weight(u32::MAX)),
        );
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..20 {
            assert_eq!(table.roll_with(&mut rng).len(), 1);
        }
    }

    #[test]
    fn roll_empty_pool() {
        let table = LootTable::parse_json(r#"{ "pools": [] }"#).unwrap();
        assert!(table.roll().is_empty());

        let zero = LootTable::new().pool(LootPool::new(LootNumber::Fixed(3)));
        assert!(zero.roll().is_empty());
    }
}
