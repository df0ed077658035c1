use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::engine::MembershipTier;
use crate::error::{GainflowError, Result};
use crate::interface::render::{
    display_eligibility, display_membership_tiers, display_notice, display_nutrition,
    display_order_summary, display_receipt, ingredient_line,
};
use crate::models::Category;
use crate::session::{ContactForm, Notice, NutritionistRequest, Session, Step};

const MENU: &[&str] = &[
    "Choose flavor",
    "Customize ingredients",
    "Allergies",
    "Quantity",
    "Promo code",
    "Membership",
    "Subscribe to newsletter",
    "Contact nutritionist",
    "Contact us",
    "Calorie calculator",
    "Review order & checkout",
    "Quit",
];

/// Show a command's outcome: the success notice, or the rejection as an error notice.
fn report(outcome: Result<Notice>) {
    match outcome {
        Ok(notice) => display_notice(&notice),
        Err(e) => display_notice(&Notice::from_error(&e)),
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

fn prompt_text(prompt: &str) -> Result<String> {
    Ok(Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?)
}

/// Pick a flavor. The selection is replaced by its default recipe.
pub fn prompt_flavor(session: &mut Session) -> Result<()> {
    let flavors = session.catalog().flavors();
    let items: Vec<String> = flavors
        .iter()
        .map(|f| format!("{:<16} {:.0} cal", f.name, f.totals.calories))
        .collect();
    let current = flavors
        .iter()
        .position(|f| f.name == session.active_flavor().name)
        .unwrap_or(0);

    let choice = Select::new()
        .with_prompt("Choose your flavor")
        .items(&items)
        .default(current)
        .interact()?;

    session.set_flavor(&flavors[choice].name)?;
    display_nutrition(session);
    Ok(())
}

/// Multi-select per category; differences become toggles.
pub fn prompt_ingredients(session: &mut Session) -> Result<()> {
    let catalog = session.catalog();

    for category in Category::ALL {
        let ingredients = catalog.list_by_category(category);
        let items: Vec<String> = ingredients
            .iter()
            .map(|i| {
                let line = ingredient_line(i, session.config());
                if session.is_allergenic(&i.id) {
                    format!("{}  [allergy]", line)
                } else {
                    line
                }
            })
            .collect();
        let defaults: Vec<bool> = ingredients
            .iter()
            .map(|i| session.is_selected(&i.id))
            .collect();

        let chosen = MultiSelect::new()
            .with_prompt(category.label())
            .items(&items)
            .defaults(&defaults)
            .interact()?;

        for (idx, ingredient) in ingredients.iter().enumerate() {
            let want = chosen.contains(&idx);
            if want != session.is_selected(&ingredient.id) {
                if let Err(e) = session.toggle_ingredient(&ingredient.id) {
                    display_notice(&Notice::from_error(&e));
                }
            }
        }
    }

    display_nutrition(session);
    display_eligibility(session);
    Ok(())
}

pub fn prompt_allergies(session: &mut Session) -> Result<()> {
    let has_allergy = prompt_yes_no("Do you have a nut allergy?", session.has_nut_allergy())?;
    session.set_nut_allergy(has_allergy);
    if !has_allergy {
        return Ok(());
    }

    let catalog = session.catalog();
    let ingredients = catalog.ingredients();
    let items: Vec<&str> = ingredients.iter().map(|i| i.name.as_str()).collect();
    let defaults: Vec<bool> = ingredients
        .iter()
        .map(|i| session.is_allergenic(&i.id))
        .collect();

    let chosen = MultiSelect::new()
        .with_prompt("Which ingredients should we keep out?")
        .items(&items)
        .defaults(&defaults)
        .interact()?;

    for (idx, ingredient) in ingredients.iter().enumerate() {
        if chosen.contains(&idx) != session.is_allergenic(&ingredient.id) {
            report(session.toggle_allergenic_ingredient(&ingredient.id));
        }
    }
    Ok(())
}

pub fn prompt_quantity(session: &mut Session) -> Result<()> {
    let input: String = Input::new()
        .with_prompt("How many bars?")
        .default(session.quantity().to_string())
        .interact_text()?;

    match parse_quantity(&input) {
        Ok(n) => {
            session.set_quantity(n);
            display_order_summary(session);
        }
        Err(e) => display_notice(&Notice::from_error(&e)),
    }
    Ok(())
}

/// Parse a typed bar count. Range coercion is left to the session.
pub fn parse_quantity(input: &str) -> Result<i64> {
    input
        .trim()
        .parse()
        .map_err(|_| GainflowError::InvalidInput(format!("'{}' is not a number", input.trim())))
}

pub fn prompt_promo(session: &mut Session) -> Result<()> {
    if let Some(promo) = session.applied_promo() {
        let remove = prompt_yes_no(&format!("{} is applied. Remove it?", promo.code), false)?;
        if remove {
            display_notice(&session.remove_promo_code());
        }
        return Ok(());
    }

    let code = prompt_text("Promo code")?;
    session.set_promo_input(&code);
    report(session.apply_promo_code(&code));
    Ok(())
}

pub fn prompt_membership(session: &mut Session) -> Result<()> {
    display_membership_tiers(session.membership(), session.config());

    let items: Vec<String> = MembershipTier::ALL.iter().map(|t| t.to_string()).collect();
    let current = MembershipTier::ALL
        .iter()
        .position(|t| *t == session.membership())
        .unwrap_or(0);

    let choice = Select::new()
        .with_prompt("Choose a membership")
        .items(&items)
        .default(current)
        .interact()?;

    let tier = MembershipTier::ALL[choice];
    if tier != session.membership() {
        display_notice(&session.select_membership_tier(tier));
    }
    Ok(())
}

pub fn prompt_subscribe(session: &mut Session) -> Result<()> {
    let email = prompt_text("Enter your email")?;
    report(session.subscribe_newsletter(&email));
    Ok(())
}

pub fn prompt_nutritionist(session: &mut Session) -> Result<()> {
    let request = NutritionistRequest {
        name: prompt_text("Name")?,
        email: prompt_text("Email")?,
        goal: prompt_text("What is your goal?")?,
    };
    report(session.submit_nutritionist_request(&request));
    Ok(())
}

pub fn prompt_contact(session: &mut Session) -> Result<()> {
    let form = ContactForm {
        name: prompt_text("Name")?,
        email: prompt_text("Email")?,
        message: prompt_text("Message")?,
    };
    report(session.submit_contact_form(&form));
    Ok(())
}

/// Calorie calculator. Non-numeric input simply yields no answer.
pub fn prompt_calorie_calculator(session: &Session) -> Result<()> {
    let goal = prompt_text("Daily calorie goal")?;
    let current = prompt_text("Current daily intake")?;

    match session.bars_needed(&goal, &current) {
        Some(bars) => println!(
            "You need {} bar{} per day ({:.0} cal per bar)",
            bars,
            if bars == 1 { "" } else { "s" },
            session.nutrition_per_bar().calories
        ),
        None => println!("Enter both numbers to calculate."),
    }
    Ok(())
}

/// Enter the order step and optionally check out.
///
/// `offer_shown` is the once-per-session latch for the discount offer.
pub fn prompt_checkout(session: &mut Session, offer_shown: &mut bool) -> Result<bool> {
    if let Err(e) = session.go_to(Step::Order) {
        display_notice(&Notice::from_error(&e));
        display_eligibility(session);
        return Ok(false);
    }

    if !*offer_shown && session.applied_promo().is_none() {
        *offer_shown = true;
        display_notice(&Notice::info(
            "First order?",
            "Subscribe to our newsletter and use FIRST10 for 10% off",
        ));
    }

    display_nutrition(session);
    display_order_summary(session);

    if !prompt_yes_no("Proceed to checkout?", true)? {
        return Ok(false);
    }

    match session.checkout() {
        Ok(receipt) => {
            display_receipt(&receipt, session.config());
            Ok(true)
        }
        Err(e) => {
            display_notice(&Notice::from_error(&e));
            Ok(false)
        }
    }
}

/// Main interactive loop. Returns when the user quits or checks out.
pub fn run_configurator(session: &mut Session) -> Result<()> {
    let mut offer_shown = false;

    println!("Build your perfect mass gainer bar.");
    display_nutrition(session);

    loop {
        let choice = Select::new()
            .with_prompt(format!(
                "[{}] {} bars",
                session.active_flavor().name,
                session.quantity()
            ))
            .items(MENU)
            .default(0)
            .interact()?;

        match choice {
            0 => {
                prompt_flavor(session)?;
                session.go_to(Step::Ingredients)?;
            }
            1 => prompt_ingredients(session)?,
            2 => prompt_allergies(session)?,
            3 => prompt_quantity(session)?,
            4 => prompt_promo(session)?,
            5 => prompt_membership(session)?,
            6 => prompt_subscribe(session)?,
            7 => prompt_nutritionist(session)?,
            8 => prompt_contact(session)?,
            9 => prompt_calorie_calculator(session)?,
            10 => {
                if prompt_checkout(session, &mut offer_shown)? {
                    return Ok(());
                }
            }
            _ => return Ok(()),
        }
    }
}
