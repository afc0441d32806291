//! Production rate logic

use tracing::{debug, trace};

use crate::models::{FormattedRate, GameItem, GameItemExType, GameItemType, Recipe, RecipeIo};

/// Recipe counts are listed per minute
const SECONDS_PER_MINUTE: f64 = 60.0;

/// Per-game rate rules
pub trait Calculator {
    /// Turn the raw count of a recipe io into a per-second rate
    fn count_per_second(&self, item: &GameItem, io: &RecipeIo<'_>) -> f64;

    /// Pick a display unit for a per-second rate and scale it to match
    fn format_count_per_second(&self, item: &GameItem, count: f64) -> FormattedRate;
}

/// Captain of Industry rules
#[derive(Debug, Clone, Copy, Default)]
pub struct CoiCalculator;

impl Calculator for CoiCalculator {
    fn count_per_second(&self, _item: &GameItem, io: &RecipeIo<'_>) -> f64 {
        let ex_type = io.product.ex_data.ex_type;

        // Maintenance depots output on a timer, their inputs are still listed per minute.
        // Pollution accumulates over time. Electricity and the other virtual
        // items are fixed rates already.
        let is_maintenance_depot = ex_type == Some(GameItemExType::Maintenance) && !io.is_input;
        let is_pollution = ex_type == Some(GameItemExType::Pollution);

        if io.product.item_type == GameItemType::Special && !is_maintenance_depot && !is_pollution {
            trace!(product = %io.product.name, count = io.count, "fixed rate");
            return io.count;
        }

        io.count * SECONDS_PER_MINUTE / io.recipe.time
    }

    fn format_count_per_second(&self, item: &GameItem, count: f64) -> FormattedRate {
        let ex_type = item.ex_data.ex_type;
        let mut unit = ex_type.map_or(GameItemExType::Unknown.unit(), |e| e.unit());
        let mut count = count;

        match ex_type {
            Some(GameItemExType::Electricity) | Some(GameItemExType::MechPower) => {
                count *= 1000.0;
            }
            Some(GameItemExType::Computing) => {
                // TFLOPS by default; small values are plain operation counts
                if count < 1000.0 {
                    unit = "次";
                } else {
                    count *= 1e12;
                }
            }
            _ => {}
        }

        FormattedRate { count, unit }
    }
}

/// Per-second rate of an io using the Captain of Industry rules
pub fn count_per_second(item: &GameItem, io: &RecipeIo<'_>) -> f64 {
    CoiCalculator.count_per_second(item, io)
}

/// Display form of a per-second rate using the Captain of Industry rules
pub fn format_count_per_second(item: &GameItem, count: f64) -> FormattedRate {
    CoiCalculator.format_count_per_second(item, count)
}

/// One formatted line of a recipe summary
#[derive(Debug, Clone, PartialEq)]
pub struct IoRate {
    pub product: String,
    pub per_second: f64,
    pub formatted: FormattedRate,
}

/// Rates for every input and output of a single recipe
#[derive(Debug)]
pub struct RecipeSummary {
    pub recipe_name: String,
    pub time: f64,
    pub inputs: Vec<IoRate>,
    pub outputs: Vec<IoRate>,
}

/// Run both rate helpers over each io of `recipe`
pub fn summarize_recipe<C: Calculator + ?Sized>(
    calc: &C,
    recipe: &Recipe,
    ios: &[RecipeIo<'_>],
) -> RecipeSummary {
    let mut inputs = Vec::new();
    let mut outputs = Vec::new();

    for io in ios {
        let per_second = calc.count_per_second(io.product, io);
        let line = IoRate {
            product: io.product.name.clone(),
            per_second,
            formatted: calc.format_count_per_second(io.product, per_second),
        };
        if io.is_input {
            inputs.push(line);
        } else {
            outputs.push(line);
        }
    }

    debug!(
        recipe = %recipe.name,
        inputs = inputs.len(),
        outputs = outputs.len(),
        "summarized recipe"
    );

    RecipeSummary {
        recipe_name: recipe.name.clone(),
        time: recipe.time,
        inputs,
        outputs,
    }
}

impl std::fmt::Display for RecipeSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Recipe Summary ===")?;
        writeln!(f, "Recipe: {} ({}s per cycle)", self.recipe_name, self.time)?;
        writeln!(f)?;

        writeln!(f, "Inputs:")?;
        if self.inputs.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for line in &self.inputs {
            writeln!(f, "  {} @ {}/s", line.product, line.formatted)?;
        }
        writeln!(f)?;

        writeln!(f, "Outputs:")?;
        if self.outputs.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for line in &self.outputs {
            writeln!(f, "  {} @ {}/s", line.product, line.formatted)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(time: f64) -> Recipe {
        Recipe {
            name: "test".to_string(),
            time,
        }
    }

    fn io<'a>(product: &'a GameItem, recipe: &'a Recipe, count: f64, is_input: bool) -> RecipeIo<'a> {
        RecipeIo {
            product,
            recipe,
            count,
            is_input,
        }
    }

    #[test]
    fn physical_goods_scale_by_cycle_time() {
        let iron = GameItem::new("Iron", GameItemType::Solid, None);
        let r = recipe(2.0);
        assert_eq!(count_per_second(&iron, &io(&iron, &r, 30.0, false)), 900.0);
    }

    #[test]
    fn special_items_pass_through() {
        let power = GameItem::new("Electricity", GameItemType::Special, Some(GameItemExType::Electricity));
        let r = recipe(7.0);
        for count in [500.0, 0.0, -12.5] {
            assert_eq!(count_per_second(&power, &io(&power, &r, count, true)), count);
        }
    }

    #[test]
    fn special_without_ex_type_passes_through() {
        let thing = GameItem::new("Thing", GameItemType::Special, None);
        let r = recipe(3.0);
        assert_eq!(count_per_second(&thing, &io(&thing, &r, 4.0, false)), 4.0);
    }

    #[test]
    fn maintenance_output_is_time_scaled() {
        let maint = GameItem::new("Maintenance I", GameItemType::Special, Some(GameItemExType::Maintenance));
        let r = recipe(5.0);
        assert_eq!(count_per_second(&maint, &io(&maint, &r, 10.0, false)), 120.0);
    }

    #[test]
    fn maintenance_input_is_fixed() {
        let maint = GameItem::new("Maintenance I", GameItemType::Special, Some(GameItemExType::Maintenance));
        let r = recipe(5.0);
        assert_eq!(count_per_second(&maint, &io(&maint, &r, 10.0, true)), 10.0);
    }

    #[test]
    fn pollution_is_time_scaled_both_ways() {
        let smog = GameItem::new("Air Pollution", GameItemType::Special, Some(GameItemExType::Pollution));
        let r = recipe(20.0);
        assert_eq!(count_per_second(&smog, &io(&smog, &r, 4.0, false)), 12.0);
        assert_eq!(count_per_second(&smog, &io(&smog, &r, 4.0, true)), 12.0);
    }

    #[test]
    fn zero_time_is_not_validated() {
        let iron = GameItem::new("Iron", GameItemType::Solid, None);
        let r = recipe(0.0);
        assert!(count_per_second(&iron, &io(&iron, &r, 1.0, false)).is_infinite());
        assert!(count_per_second(&iron, &io(&iron, &r, 0.0, false)).is_nan());
    }

    #[test]
    fn electricity_and_mech_power_scale_by_1000() {
        let power = GameItem::new("Electricity", GameItemType::Special, Some(GameItemExType::Electricity));
        let mech = GameItem::new("Mechanical Power", GameItemType::Special, Some(GameItemExType::MechPower));

        assert_eq!(
            format_count_per_second(&power, 2.0),
            FormattedRate { count: 2000.0, unit: "瓦" }
        );
        assert_eq!(
            format_count_per_second(&mech, 1.5),
            FormattedRate { count: 1500.0, unit: "牛" }
        );
    }

    #[test]
    fn computing_threshold() {
        let compute = GameItem::new("Computing", GameItemType::Special, Some(GameItemExType::Computing));

        assert_eq!(
            format_count_per_second(&compute, 500.0),
            FormattedRate { count: 500.0, unit: "次" }
        );
        assert_eq!(
            format_count_per_second(&compute, 5000.0),
            FormattedRate { count: 5000.0 * 1e12, unit: "次" }
        );
        // the threshold itself is already scaled
        assert_eq!(format_count_per_second(&compute, 1000.0).count, 1e15);
    }

    #[test]
    fn other_categories_pass_through() {
        let workers = GameItem::new("Workers", GameItemType::Special, Some(GameItemExType::Worker));
        let smog = GameItem::new("Air Pollution", GameItemType::Special, Some(GameItemExType::Pollution));

        assert_eq!(
            format_count_per_second(&workers, 3.0),
            FormattedRate { count: 3.0, unit: "人" }
        );
        assert_eq!(
            format_count_per_second(&smog, 0.25),
            FormattedRate { count: 0.25, unit: "计数" }
        );
    }

    #[test]
    fn missing_ex_type_uses_generic_unit() {
        let iron = GameItem::new("Iron", GameItemType::Solid, None);
        assert_eq!(
            format_count_per_second(&iron, 42.0),
            FormattedRate { count: 42.0, unit: "单位" }
        );
    }

    #[test]
    fn formatting_is_idempotent() {
        let power = GameItem::new("Electricity", GameItemType::Special, Some(GameItemExType::Electricity));
        let first = format_count_per_second(&power, 7.0);
        let second = format_count_per_second(&power, 7.0);
        assert_eq!(first, second);
    }

    #[test]
    fn summary_splits_inputs_and_outputs() {
        let ore = GameItem::new("Iron Ore", GameItemType::Solid, None);
        let power = GameItem::new("Electricity", GameItemType::Special, Some(GameItemExType::Electricity));
        let iron = GameItem::new("Iron", GameItemType::Solid, None);
        let r = Recipe {
            name: "Smelting".to_string(),
            time: 2.0,
        };

        let ios = [
            io(&ore, &r, 30.0, true),
            io(&power, &r, 0.5, true),
            io(&iron, &r, 15.0, false),
        ];
        let summary = summarize_recipe(&CoiCalculator, &r, &ios);

        assert_eq!(summary.inputs.len(), 2);
        assert_eq!(summary.outputs.len(), 1);
        assert_eq!(summary.inputs[0].per_second, 900.0);
        assert_eq!(summary.inputs[1].formatted, FormattedRate { count: 500.0, unit: "瓦" });
        assert_eq!(summary.outputs[0].per_second, 450.0);

        let text = summary.to_string();
        assert!(text.contains("Recipe: Smelting (2s per cycle)"));
        assert!(text.contains("  Iron Ore @ 900 单位/s"));
        assert!(text.contains("  Electricity @ 500 瓦/s"));
        assert!(text.contains("  Iron @ 450 单位/s"));
    }

    #[test]
    fn empty_summary_prints_placeholders() {
        let r = recipe(1.0);
        let text = summarize_recipe(&CoiCalculator, &r, &[]).to_string();
        assert_eq!(text.matches("(none)").count(), 2);
    }
}
