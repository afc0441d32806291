//! Parsing of recipe io descriptions given on the command line
//!
//! Format: `NAME=COUNT[:ITEM_TYPE[:EX_TYPE]]`, e.g. `Iron Ore=30`,
//! `Electricity=500:special:electricity`.

use std::str::FromStr;

use regex::Regex;

use crate::error::CalcError;
use crate::models::{GameItem, GameItemExType, GameItemType};

const IO_SPEC_PATTERN: &str =
    r"^\s*(?P<name>[^=]+?)\s*=\s*(?P<count>[^:\s]+)\s*(?::\s*(?P<kind>[\w-]+)\s*)?(?::\s*(?P<ex>[\w-]+)\s*)?$";

/// One parsed io: the product and its raw per-recipe count
#[derive(Debug, Clone)]
pub struct IoSpec {
    pub item: GameItem,
    pub count: f64,
}

impl FromStr for IoSpec {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let io_spec_re = Regex::new(IO_SPEC_PATTERN)?;
        let caps = io_spec_re
            .captures(s)
            .ok_or_else(|| CalcError::InvalidIoSpec(s.to_string()))?;

        let raw_count = &caps["count"];
        let count = raw_count.parse::<f64>().map_err(|_| CalcError::InvalidCount {
            spec: s.to_string(),
            value: raw_count.to_string(),
        })?;

        let item_type = match caps.name("kind") {
            Some(m) => m.as_str().parse::<GameItemType>()?,
            None => GameItemType::Solid,
        };
        let ex_type = caps
            .name("ex")
            .map(|m| m.as_str().parse::<GameItemExType>())
            .transpose()?;

        Ok(IoSpec {
            item: GameItem::new(&caps["name"], item_type, ex_type),
            count,
        })
    }
}
