//! Data models for Captain of Industry items and recipes

use std::fmt;
use std::str::FromStr;

use crate::error::CalcError;

/// General item category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameItemType {
    #[default]
    Unknown,
    Solid,
    Liquid,
    Gas,
    /// Virtual resources (electricity, computing, workers, ...)
    Special,
}

impl GameItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameItemType::Unknown => "unknown",
            GameItemType::Solid => "solid",
            GameItemType::Liquid => "liquid",
            GameItemType::Gas => "gas",
            GameItemType::Special => "special",
        }
    }
}

impl fmt::Display for GameItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameItemType {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "unknown" => Ok(GameItemType::Unknown),
            "solid" => Ok(GameItemType::Solid),
            "liquid" => Ok(GameItemType::Liquid),
            "gas" => Ok(GameItemType::Gas),
            "special" => Ok(GameItemType::Special),
            _ => Err(CalcError::UnknownItemType(s.to_string())),
        }
    }
}

/// Extended item category, drives unit and scaling rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameItemExType {
    Unknown,
    Electricity,
    MechPower,
    Computing,
    Upoints,
    Maintenance,
    Pollution,
    Worker,
}

impl GameItemExType {
    pub const ALL: [GameItemExType; 8] = [
        GameItemExType::Unknown,
        GameItemExType::Electricity,
        GameItemExType::MechPower,
        GameItemExType::Computing,
        GameItemExType::Upoints,
        GameItemExType::Maintenance,
        GameItemExType::Pollution,
        GameItemExType::Worker,
    ];

    /// Display unit for rates of this category
    pub fn unit(&self) -> &'static str {
        match self {
            GameItemExType::Unknown => "单位",
            GameItemExType::Electricity => "瓦",
            GameItemExType::MechPower => "牛",
            GameItemExType::Computing => "次",
            GameItemExType::Upoints => "单位",
            GameItemExType::Maintenance => "单位",
            GameItemExType::Pollution => "计数",
            GameItemExType::Worker => "人",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameItemExType::Unknown => "unknown",
            GameItemExType::Electricity => "electricity",
            GameItemExType::MechPower => "mech-power",
            GameItemExType::Computing => "computing",
            GameItemExType::Upoints => "upoints",
            GameItemExType::Maintenance => "maintenance",
            GameItemExType::Pollution => "pollution",
            GameItemExType::Worker => "worker",
        }
    }
}

impl fmt::Display for GameItemExType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameItemExType {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "unknown" => Ok(GameItemExType::Unknown),
            "electricity" => Ok(GameItemExType::Electricity),
            "mechpower" => Ok(GameItemExType::MechPower),
            "computing" => Ok(GameItemExType::Computing),
            "upoints" => Ok(GameItemExType::Upoints),
            "maintenance" => Ok(GameItemExType::Maintenance),
            "pollution" => Ok(GameItemExType::Pollution),
            "worker" => Ok(GameItemExType::Worker),
            _ => Err(CalcError::UnknownExType(s.to_string())),
        }
    }
}

// "Mech-Power", "mech_power" and "MechPower" all name the same thing
fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Extended metadata attached to an item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameItemExData {
    pub ex_type: Option<GameItemExType>,
}

#[derive(Debug, Clone)]
pub struct GameItem {
    pub name: String,
    pub item_type: GameItemType,
    pub ex_data: GameItemExData,
}

impl GameItem {
    pub fn new(name: impl Into<String>, item_type: GameItemType, ex_type: Option<GameItemExType>) -> Self {
        Self {
            name: name.into(),
            item_type,
            ex_data: GameItemExData { ex_type },
        }
    }
}

#[derive(Debug, Clone)]
pub struct Recipe {
    pub name: String,
    pub time: f64, // seconds per cycle, must be > 0
}

/// One input or output edge of a recipe
#[derive(Debug, Clone, Copy)]
pub struct RecipeIo<'a> {
    pub product: &'a GameItem,
    pub recipe: &'a Recipe,
    pub count: f64,
    pub is_input: bool,
}

/// A rate ready for display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormattedRate {
    pub count: f64,
    pub unit: &'static str,
}

impl fmt::Display for FormattedRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.count, self.unit)
    }
}
