//! Filter predicates (`{"test": .., "value": ..}`) and their groups.
//!
//! Filters gate damage sensors, events, environment sensors and AI target
//! selection. A single test serializes as an object; groups serialize as
//! `{"all_of": [..]}`, `{"any_of": [..]}` or `{"none_of": [..]}`.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::debug;

/// Which actor a test is evaluated against. `Self` is the default and is
/// not written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Subject {
    #[default]
    Myself,
    Other,
    Parent,
    Player,
    Target,
    Damager,
    Baby,
    Block,
}

impl Subject {
    pub fn as_str(self) -> &'static str {
        match self {
            Subject::Myself => "self",
            Subject::Other => "other",
            Subject::Parent => "parent",
            Subject::Player => "player",
            Subject::Target => "target",
            Subject::Damager => "damager",
            Subject::Baby => "baby",
            Subject::Block => "block",
        }
    }
}

/// Comparison used by a test. `Equals` is the default and is not written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Operator {
    #[default]
    Equals,
    NotEquals,
    Less,
    LessOrEquals,
    Greater,
    GreaterOrEquals,
}

impl Operator {
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Equals => "equals",
            Operator::NotEquals => "not",
            Operator::Less => "<",
            Operator::LessOrEquals => "<=",
            Operator::Greater => ">",
            Operator::GreaterOrEquals => ">=",
        }
    }
}

/// A single filter test.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterTest {
    pub test: String,
    pub subject: Subject,
    pub operator: Operator,
    pub domain: Option<String>,
    pub value: Option<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Test(FilterTest),
    AllOf(Vec<Filter>),
    AnyOf(Vec<Filter>),
    NoneOf(Vec<Filter>),
}

impl Filter {
    /// A test with a value, evaluated on `self` with `equals`.
    pub fn test(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Filter::Test(FilterTest {
            test: name.into(),
            subject: Subject::default(),
            operator: Operator::default(),
            domain: None,
            value: Some(value.into()),
        })
    }

    /// A test whose value is left to the game's default.
    pub fn bare(name: impl Into<String>) -> Self {
        Filter::Test(FilterTest {
            test: name.into(),
            subject: Subject::default(),
            operator: Operator::default(),
            domain: None,
            value: None,
        })
    }

    pub fn subject(self, subject: Subject) -> Self {
        self.map_test(|t| t.subject = subject)
    }

    pub fn operator(self, operator: Operator) -> Self {
        self.map_test(|t| t.operator = operator)
    }

    pub fn domain(self, domain: impl Into<String>) -> Self {
        let domain = domain.into();
        self.map_test(|t| t.domain = Some(domain))
    }

    fn map_test(mut self, f: impl FnOnce(&mut FilterTest)) -> Self {
        match &mut self {
            Filter::Test(t) => f(t),
            _ => debug!("subject/operator/domain ignored on a filter group"),
        }
        self
    }

    // ---- groups ----

    pub fn all_of(filters: impl IntoIterator<Item = Filter>) -> Self {
        Self::group(filters, Filter::AllOf)
    }

    pub fn any_of(filters: impl IntoIterator<Item = Filter>) -> Self {
        Self::group(filters, Filter::AnyOf)
    }

    pub fn none_of(filters: impl IntoIterator<Item = Filter>) -> Self {
        Filter::NoneOf(filters.into_iter().collect())
    }

    /// A group holding a single filter is the same as the filter itself.
    fn group(filters: impl IntoIterator<Item = Filter>, make: fn(Vec<Filter>) -> Filter) -> Self {
        let mut filters: Vec<Filter> = filters.into_iter().collect();
        if filters.len() == 1 {
            if let Some(only) = filters.pop() {
                return only;
            }
        }
        make(filters)
    }

    // ---- common tests ----

    pub fn has_tag(tag: &str) -> Self {
        Self::test("has_tag", tag)
    }

    pub fn is_family(family: &str) -> Self {
        Self::test("is_family", family)
    }

    pub fn has_component(identifier: &str) -> Self {
        Self::test("has_component", identifier)
    }

    pub fn is_daytime(value: bool) -> Self {
        Self::test("is_daytime", value)
    }

    pub fn is_underwater(value: bool) -> Self {
        Self::test("is_underwater", value)
    }

    pub fn in_water(value: bool) -> Self {
        Self::test("in_water", value)
    }

    pub fn in_water_or_rain(value: bool) -> Self {
        Self::test("in_water_or_rain", value)
    }

    pub fn in_lava(value: bool) -> Self {
        Self::test("in_lava", value)
    }

    pub fn on_ground(value: bool) -> Self {
        Self::test("on_ground", value)
    }

    pub fn is_moving(value: bool) -> Self {
        Self::test("is_moving", value)
    }

    pub fn is_sneaking(value: bool) -> Self {
        Self::test("is_sneaking", value)
    }

    pub fn is_riding(value: bool) -> Self {
        Self::test("is_riding", value)
    }

    pub fn is_baby(value: bool) -> Self {
        Self::test("is_baby", value)
    }

    pub fn is_sitting(value: bool) -> Self {
        Self::test("is_sitting", value)
    }

    pub fn is_owner(value: bool) -> Self {
        Self::test("is_owner", value)
    }

    pub fn has_target(value: bool) -> Self {
        Self::test("has_target", value)
    }

    pub fn is_target(value: bool) -> Self {
        Self::test("is_target", value)
    }

    pub fn is_variant(variant: i32) -> Self {
        Self::test("is_variant", variant)
    }

    pub fn is_mark_variant(variant: i32) -> Self {
        Self::test("is_mark_variant", variant)
    }

    pub fn is_skin_id(skin: i32) -> Self {
        Self::test("is_skin_id", skin)
    }

    pub fn is_biome(biome: &str) -> Self {
        Self::test("is_biome", biome)
    }

    pub fn has_biome_tag(tag: &str) -> Self {
        Self::test("has_biome_tag", tag)
    }

    /// Distance in blocks; pair with [`Filter::operator`] for `<`/`>` checks.
    pub fn distance_to_nearest_player(distance: f64) -> Self {
        Self::test("distance_to_nearest_player", distance)
    }

    pub fn actor_health(health: i32) -> Self {
        Self::test("actor_health", health)
    }

    /// Passes with a 1 in `max` chance.
    pub fn random_chance(max: i32) -> Self {
        Self::test("random_chance", max)
    }

    /// `domain` is one of `any`, `armor`, `feet`, `hand`, `head`, `leg`,
    /// `torso`, `inventory`.
    pub fn has_equipment(domain: &str, item: &str) -> Self {
        Self::test("has_equipment", item).domain(domain)
    }

    pub fn is_block(block: &str) -> Self {
        Self::test("is_block", block)
    }

    /// Time of day in `0.0..=1.0`.
    pub fn clock_time(time: f64) -> Self {
        Self::test("clock_time", time)
    }

    pub fn moon_phase(phase: i32) -> Self {
        Self::test("moon_phase", phase)
    }

    pub fn has_mob_effect(effect: &str) -> Self {
        Self::test("has_mob_effect", effect)
    }

    pub fn int_property(property: &str, value: i64) -> Self {
        Self::test("int_property", value).domain(property)
    }

    pub fn float_property(property: &str, value: f64) -> Self {
        Self::test("float_property", value).domain(property)
    }

    pub fn bool_property(property: &str, value: bool) -> Self {
        Self::test("bool_property", value).domain(property)
    }

    pub fn enum_property(property: &str, value: &str) -> Self {
        Self::test("enum_property", value).domain(property)
    }

    /// The Bedrock JSON shape of this filter.
    pub fn to_value(&self) -> Value {
        match self {
            Filter::Test(t) => {
                let mut map = Map::new();
                map.insert("test".into(), Value::String(t.test.clone()));
                if t.subject != Subject::default() {
                    map.insert("subject".into(), t.subject.as_str().into());
                }
                if t.operator != Operator::default() {
                    map.insert("operator".into(), t.operator.as_str().into());
                }
                if let Some(domain) = &t.domain {
                    map.insert("domain".into(), Value::String(domain.clone()));
                }
                if let Some(value) = &t.value {
                    map.insert("value".into(), value.clone());
                }
                Value::Object(map)
            }
            Filter::AllOf(fs) => group_value("all_of", fs),
            Filter::AnyOf(fs) => group_value("any_of", fs),
            Filter::NoneOf(fs) => group_value("none_of", fs),
        }
    }
}

fn group_value(key: &str, filters: &[Filter]) -> Value {
    let mut map = Map::new();
    map.insert(
        key.into(),
        Value::Array(filters.iter().map(Filter::to_value).collect()),
    );
    Value::Object(map)
}

impl Serialize for Filter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl From<Filter> for Value {
    fn from(f: Filter) -> Self {
        f.to_value()
    }
}

impl From<&Filter> for Value {
    fn from(f: &Filter) -> Self {
        f.to_value()
    }
}
