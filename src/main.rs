use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use gainflow::catalog::Catalog;
use gainflow::cli::{Cli, Command};
use gainflow::config::{load_config, EngineConfig};
use gainflow::engine::{Eligibility, MembershipTier};
use gainflow::error::{GainflowError, Result};
use gainflow::interface::{
    display_eligibility, display_flavors, display_ingredients, display_notice, display_nutrition,
    display_order_summary, run_configurator,
};
use gainflow::models::{Category, Flavor, Ingredient, MacroSplit, NutritionTotals, PriceBreakdown};
use gainflow::session::{Notice, Session};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => EngineConfig::default(),
    };
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Configure => cmd_configure(config),
        Command::Catalog { category, json } => cmd_catalog(&config, category.as_deref(), json),
        Command::Quote {
            flavor,
            add,
            remove,
            quantity,
            promo,
            subscribe,
            tier,
            nut_allergy,
            allergens,
            json,
        } => cmd_quote(
            config,
            QuoteRequest {
                flavor,
                add,
                remove,
                quantity,
                promo,
                subscribe,
                tier,
                nut_allergy,
                allergens,
            },
            json,
        ),
        Command::Bars {
            goal,
            current,
            flavor,
        } => cmd_bars(config, &flavor, &goal, &current),
    }
}

/// Interactive configurator.
fn cmd_configure(config: EngineConfig) -> Result<()> {
    let mut session = Session::new(Catalog::builtin(), config)?;
    run_configurator(&mut session)
}

#[derive(Serialize)]
struct CatalogDump<'a> {
    flavors: &'a [Flavor],
    ingredients: Vec<&'a Ingredient>,
}

/// List the catalog.
fn cmd_catalog(config: &EngineConfig, category: Option<&str>, json: bool) -> Result<()> {
    let catalog = Catalog::builtin();
    let category = match category {
        Some(raw) => Some(Category::parse(raw).ok_or_else(|| {
            GainflowError::InvalidInput(format!("Unknown category '{}'", raw))
        })?),
        None => None,
    };

    if json {
        let dump = CatalogDump {
            flavors: catalog.flavors(),
            ingredients: catalog
                .ingredients()
                .iter()
                .filter(|i| category.is_none_or(|c| i.category == c))
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&dump)?);
        return Ok(());
    }

    if category.is_none() {
        display_flavors(catalog);
    }
    display_ingredients(catalog, config, category);
    Ok(())
}

struct QuoteRequest {
    flavor: String,
    add: Vec<String>,
    remove: Vec<String>,
    quantity: i64,
    promo: Option<String>,
    subscribe: Option<String>,
    tier: Option<String>,
    nut_allergy: bool,
    allergens: Vec<String>,
}

#[derive(Serialize)]
struct Quote<'a> {
    flavor: &'a str,
    ingredients: Vec<&'a str>,
    per_bar: NutritionTotals,
    macros: MacroSplit,
    batch: NutritionTotals,
    price: PriceBreakdown,
    eligibility: Eligibility,
    unmet: Vec<String>,
    notices: Vec<Notice>,
}

/// One-shot quote: build a session from flags and print the result.
fn cmd_quote(config: EngineConfig, req: QuoteRequest, json: bool) -> Result<()> {
    let mut session = Session::new(Catalog::builtin(), config)?;
    let mut notices = Vec::new();

    session.set_flavor(&req.flavor)?;
    session.set_nut_allergy(req.nut_allergy || !req.allergens.is_empty());
    for id in &req.allergens {
        notices.push(session.toggle_allergenic_ingredient(id)?);
    }
    for id in &req.remove {
        session.set_ingredient_selected(id, false)?;
    }
    for id in &req.add {
        match session.set_ingredient_selected(id, true) {
            Ok(_) => {}
            Err(e @ GainflowError::AllergyConflict(_)) => notices.push(Notice::from_error(&e)),
            Err(e) => return Err(e),
        }
    }
    session.set_quantity(req.quantity);

    if let Some(raw) = &req.tier {
        let tier = MembershipTier::parse(raw)
            .ok_or_else(|| GainflowError::InvalidInput(format!("Unknown tier '{}'", raw)))?;
        notices.push(session.select_membership_tier(tier));
    }
    if let Some(email) = &req.subscribe {
        notices.push(session.subscribe_newsletter(email)?);
    }
    if let Some(code) = &req.promo {
        notices.push(
            session
                .apply_promo_code(code)
                .unwrap_or_else(|e| Notice::from_error(&e)),
        );
    }

    if json {
        let quote = Quote {
            flavor: &session.active_flavor().name,
            ingredients: session
                .selected_ingredients()
                .iter()
                .map(|i| i.id.as_str())
                .collect(),
            per_bar: session.nutrition_per_bar(),
            macros: session.macro_split(),
            batch: session.nutrition_for_quantity(),
            price: session.price_breakdown(),
            eligibility: session.eligibility(),
            unmet: session
                .unmet_requirements()
                .iter()
                .map(|r| r.to_string())
                .collect(),
            notices,
        };
        println!("{}", serde_json::to_string_pretty(&quote)?);
        return Ok(());
    }

    for notice in &notices {
        display_notice(notice);
    }
    display_nutrition(&session);
    display_order_summary(&session);
    display_eligibility(&session);
    Ok(())
}

/// Calorie calculator for a flavor's default recipe.
fn cmd_bars(config: EngineConfig, flavor: &str, goal: &str, current: &str) -> Result<()> {
    let mut session = Session::new(Catalog::builtin(), config)?;
    session.set_flavor(flavor)?;

    match session.bars_needed(goal, current) {
        Some(bars) => println!(
            "You need {} bar{} per day ({:.0} cal per bar)",
            bars,
            if bars == 1 { "" } else { "s" },
            session.nutrition_per_bar().calories
        ),
        None => println!("Enter a numeric goal and current intake to calculate."),
    }
    Ok(())
}
