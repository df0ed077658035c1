use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// GainFlow: configure, price and order custom mass gainer bars.
#[derive(Parser, Debug)]
#[command(name = "gainflow")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to an engine config JSON file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Build a bar interactively and check out.
    #[default]
    Configure,

    /// List flavors and ingredients.
    Catalog {
        /// Only list one ingredient category (protein, carbs, healthy-fats, extras).
        #[arg(long)]
        category: Option<String>,

        /// Print the catalog as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Price a bar without the interactive flow.
    Quote {
        /// Flavor preset to start from.
        #[arg(short, long, default_value = "Chocolate")]
        flavor: String,

        /// Ingredient id to add to the recipe (repeatable).
        #[arg(long = "add")]
        add: Vec<String>,

        /// Ingredient id to remove from the recipe (repeatable).
        #[arg(long = "remove")]
        remove: Vec<String>,

        /// Number of bars.
        #[arg(short, long, default_value_t = 6, allow_negative_numbers = true)]
        quantity: i64,

        /// Promo code to apply.
        #[arg(long)]
        promo: Option<String>,

        /// Subscribe this email to the newsletter before applying the promo.
        #[arg(long)]
        subscribe: Option<String>,

        /// Membership tier (none, free, premium, elite).
        #[arg(long)]
        tier: Option<String>,

        /// Declare a nut allergy.
        #[arg(long)]
        nut_allergy: bool,

        /// Ingredient id to keep out of the bar (repeatable).
        #[arg(long = "allergen")]
        allergens: Vec<String>,

        /// Print the quote as JSON.
        #[arg(long)]
        json: bool,
    },

    /// How many bars per day reach a calorie goal.
    Bars {
        /// Daily calorie goal.
        #[arg(long)]
        goal: String,

        /// Calories already eaten today.
        #[arg(long)]
        current: String,

        /// Flavor whose default recipe sets the calories per bar.
        #[arg(short, long, default_value = "Chocolate")]
        flavor: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_subscribe_takes_email() {
        let cli = Cli::try_parse_from([
            "gainflow",
            "quote",
            "--subscribe",
            "sam@example.com",
            "--promo",
            "FIRST10",
            "--remove",
            "almonds",
        ])
        .unwrap();

        match cli.command {
            Some(Command::Quote {
                subscribe,
                promo,
                remove,
                quantity,
                ..
            }) => {
                assert_eq!(subscribe.as_deref(), Some("sam@example.com"));
                assert_eq!(promo.as_deref(), Some("FIRST10"));
                assert_eq!(remove, vec!["almonds".to_string()]);
                assert_eq!(quantity, 6);
            }
            other => panic!("expected quote, got {other:?}"),
        }
    }

    #[test]
    fn test_subscribe_requires_value() {
        assert!(Cli::try_parse_from(["gainflow", "quote", "--subscribe"]).is_err());
    }

    #[test]
    fn test_no_subcommand_defaults_to_configure() {
        let cli = Cli::try_parse_from(["gainflow"]).unwrap();
        assert!(matches!(cli.command.unwrap_or_default(), Command::Configure));
    }
}
