//! COI Rate Calculator
//!
//! Per-second production rates for Captain of Industry recipes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, warn};

use coi_calculator::logger::init_logger;
use coi_calculator::{
    Calculator, CoiCalculator, GameItem, GameItemExType, GameItemType, IoSpec, Recipe, RecipeIo,
    summarize_recipe,
};

#[derive(Parser)]
#[command(name = "coi-calculator")]
#[command(about = "Production rate helpers for Captain of Industry")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a raw recipe count into a per-second rate
    Rate {
        /// Raw count listed on the recipe
        #[arg(short, long, allow_hyphen_values = true)]
        count: f64,

        /// Recipe cycle time in seconds
        #[arg(short, long)]
        time: f64,

        /// Item category (unknown, solid, liquid, gas, special)
        #[arg(long, default_value = "solid")]
        item_type: GameItemType,

        /// Extended item type (electricity, mech-power, computing, ...)
        #[arg(long)]
        ex_type: Option<GameItemExType>,

        /// Treat the io as a recipe input
        #[arg(long)]
        input: bool,
    },

    /// Format a per-second rate for display
    Format {
        /// Per-second rate
        #[arg(short, long, allow_hyphen_values = true)]
        count: f64,

        /// Extended item type
        #[arg(long)]
        ex_type: Option<GameItemExType>,
    },

    /// Show per-second rates for every io of one recipe
    Recipe {
        /// Recipe name
        #[arg(short, long, default_value = "recipe")]
        name: String,

        /// Recipe cycle time in seconds
        #[arg(short, long)]
        time: f64,

        /// Input as NAME=COUNT[:ITEM_TYPE[:EX_TYPE]], repeatable
        #[arg(short, long = "input")]
        inputs: Vec<IoSpec>,

        /// Output as NAME=COUNT[:ITEM_TYPE[:EX_TYPE]], repeatable
        #[arg(short, long = "output")]
        outputs: Vec<IoSpec>,
    },

    /// List display units for each extended item type
    Units,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let calc = CoiCalculator;

    match cli.command {
        Commands::Rate {
            count,
            time,
            item_type,
            ex_type,
            input,
        } => {
            let item = GameItem::new("item", item_type, ex_type);
            let recipe = Recipe {
                name: "recipe".to_string(),
                time,
            };
            if time <= 0.0 {
                warn!(time, "recipe time is not positive, rate will not be finite");
            }
            let io = RecipeIo {
                product: &item,
                recipe: &recipe,
                count,
                is_input: input,
            };

            let per_second = calc.count_per_second(&item, &io);
            let formatted = calc.format_count_per_second(&item, per_second);
            debug!(count, time, per_second, "computed rate");

            println!("Rate:      {} /s", per_second);
            println!("Formatted: {}/s", formatted);
        }

        Commands::Format { count, ex_type } => {
            let item = GameItem::new("item", GameItemType::Special, ex_type);
            println!("{}", calc.format_count_per_second(&item, count));
        }

        Commands::Recipe {
            name,
            time,
            inputs,
            outputs,
        } => {
            let recipe = Recipe { name, time };
            let ios: Vec<RecipeIo> = inputs
                .iter()
                .map(|spec| (spec, true))
                .chain(outputs.iter().map(|spec| (spec, false)))
                .map(|(spec, is_input)| RecipeIo {
                    product: &spec.item,
                    recipe: &recipe,
                    count: spec.count,
                    is_input,
                })
                .collect();

            if ios.is_empty() {
                println!("No inputs or outputs given. Use --input/--output NAME=COUNT.");
            } else {
                println!("{}", summarize_recipe(&calc, &recipe, &ios));
            }
        }

        Commands::Units => {
            println!("{:<14} {}", "Type", "Unit");
            println!("{}", "-".repeat(20));
            for ex_type in GameItemExType::ALL {
                println!("{:<14} {}", ex_type.as_str(), ex_type.unit());
            }
        }
    }

    Ok(())
}
