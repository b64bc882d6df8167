use log::debug;

use crate::error::InputError;
use crate::nutrients::NutrientRange;
use crate::pantry::{Pantry, PantryNotice};
use crate::render;
use crate::service::{QueryOutcome, RecipeQueryService};
use crate::vocabulary::IngredientVocabulary;

pub const HELP: &str = "\
Commands:
  add <name> [amount]     add an ingredient (amount defaults to 1)
  inc <name>              increase the amount by one
  dec <name>              decrease the amount by one
  rm <name>               delete an ingredient
  list                    show the ingredient list
  clear                   empty the ingredient list
  find [limit]            recipes using your ingredients
  nutrients <cal_min> <cal_max> <prot_min> <prot_max> <carb_min> <carb_max> <fat_min> <fat_max> [limit]
                          recipes inside a nutrient range
  detail <id>             full information for one recipe
  help                    show this message
  quit                    leave";

/// One line of user input, parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { name: String, amount: u32 },
    Increment(String),
    Decrement(String),
    Remove(String),
    List,
    Clear,
    FindByIngredients { limit: Option<u32> },
    FindByNutrients { range: NutrientRange, limit: Option<u32> },
    Detail(u64),
    Help,
    Quit,
}

fn number<T: std::str::FromStr>(raw: &str, what: &str) -> Result<T, InputError> {
    raw.parse()
        .map_err(|_| InputError::BadCommand(format!("'{}' is not a valid {}", raw, what)))
}

fn rest_as_name(words: &[&str]) -> Result<String, InputError> {
    if words.is_empty() {
        return Err(InputError::EmptyName);
    }
    Ok(words.join(" "))
}

impl Command {
    pub fn parse(line: &str) -> Result<Command, InputError> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((head, args)) = words.split_first() else {
            return Err(InputError::BadCommand("Type 'help' for commands".to_string()));
        };

        match head.to_lowercase().as_str() {
            "add" => {
                // A trailing number is the amount, everything before it the name
                let (name_words, amount) = match args.split_last() {
                    Some((last, init)) if !init.is_empty() && last.parse::<i64>().is_ok() => {
                        let amount: i64 = number(last, "amount")?;
                        if amount < 1 {
                            return Err(InputError::ZeroAmount);
                        }
                        let amount = u32::try_from(amount).map_err(|_| {
                            InputError::BadCommand(format!("'{}' is too large", last))
                        })?;
                        (init, amount)
                    }
                    _ => (args, 1),
                };
                Ok(Command::Add {
                    name: rest_as_name(name_words)?,
                    amount,
                })
            }
            "inc" | "+" => Ok(Command::Increment(rest_as_name(args)?)),
            "dec" | "-" => Ok(Command::Decrement(rest_as_name(args)?)),
            "rm" | "delete" => Ok(Command::Remove(rest_as_name(args)?)),
            "list" | "ls" => Ok(Command::List),
            "clear" => Ok(Command::Clear),
            "find" => Ok(Command::FindByIngredients {
                limit: args.first().map(|raw| number(raw, "limit")).transpose()?,
            }),
            "nutrients" => {
                if args.len() != 8 && args.len() != 9 {
                    return Err(InputError::BadCommand(
                        "nutrients needs 8 bounds and an optional limit".to_string(),
                    ));
                }
                let bounds = args[..8]
                    .iter()
                    .map(|raw| number::<u32>(raw, "bound"))
                    .collect::<Result<Vec<_>, _>>()?;
                let range = NutrientRange::new(
                    (bounds[0], bounds[1]),
                    (bounds[2], bounds[3]),
                    (bounds[4], bounds[5]),
                    (bounds[6], bounds[7]),
                )?;
                Ok(Command::FindByNutrients {
                    range,
                    limit: args.get(8).map(|raw| number(raw, "limit")).transpose()?,
                })
            }
            "detail" => match args.first() {
                Some(raw) => Ok(Command::Detail(number(raw, "recipe id")?)),
                None => Err(InputError::BadCommand("detail needs a recipe id".to_string())),
            },
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(InputError::BadCommand(format!(
                "Unknown command '{}', type 'help' for commands",
                other
            ))),
        }
    }
}

/// Everything one user owns for the lifetime of a session
pub struct Session {
    pantry: Pantry,
    vocabulary: IngredientVocabulary,
    service: RecipeQueryService,
    recipe_limit: u32,
}

impl Session {
    pub fn new(
        service: RecipeQueryService,
        vocabulary: IngredientVocabulary,
        recipe_limit: u32,
    ) -> Self {
        Session {
            pantry: Pantry::new(),
            vocabulary,
            service,
            recipe_limit,
        }
    }

    pub fn pantry(&self) -> &Pantry {
        &self.pantry
    }

    /// Parse and run one line. `None` means the user asked to quit.
    pub async fn handle_line(&mut self, line: &str) -> Option<String> {
        match Command::parse(line) {
            Ok(Command::Quit) => None,
            Ok(command) => Some(self.execute(command).await),
            Err(e) => Some(e.to_string()),
        }
    }

    pub async fn execute(&mut self, command: Command) -> String {
        debug!("Executing {:?}", command);
        match command {
            Command::Add { name, amount } => match self.vocabulary.check(&name) {
                Ok(name) => self.notice(|pantry| pantry.add(&name, amount)),
                Err(e) => e.to_string(),
            },
            Command::Increment(name) => self.notice(|pantry| pantry.increment(&name)),
            Command::Decrement(name) => self.notice(|pantry| pantry.decrement(&name)),
            Command::Remove(name) => self.notice(|pantry| pantry.remove(&name)),
            Command::List => render::render_pantry(self.pantry.list()),
            Command::Clear => {
                self.pantry.clear();
                "Ingredient list cleared.".to_string()
            }
            Command::FindByIngredients { limit } => {
                if self.pantry.is_empty() {
                    return "Add at least one ingredient first.".to_string();
                }
                // Amounts are not part of the search
                let names = self.pantry.names();
                let outcome = self
                    .service
                    .by_ingredients(&names, limit.unwrap_or(self.recipe_limit))
                    .await;
                self.render_outcome(&outcome, false).await
            }
            Command::FindByNutrients { range, limit } => {
                let outcome = self
                    .service
                    .by_nutrients(&range, limit.unwrap_or(self.recipe_limit))
                    .await;
                self.render_outcome(&outcome, true).await
            }
            Command::Detail(id) => match self.service.detail(id).await {
                Some(detail) => render::render_detail(&detail),
                None => format!("Could not load recipe {}.", id),
            },
            Command::Help => HELP.to_string(),
            Command::Quit => String::new(),
        }
    }

    fn notice(&mut self, op: impl FnOnce(&mut Pantry) -> PantryNotice) -> String {
        let notice = op(&mut self.pantry);
        render::render_notice(&notice)
    }

    async fn render_outcome(&self, outcome: &QueryOutcome, with_details: bool) -> String {
        if let Some(status) = render::render_outcome_status(outcome) {
            return status;
        }

        let mut blocks = Vec::new();
        for recipe in outcome.matches() {
            let detail = if with_details {
                self.service.detail(recipe.summary.id).await
            } else {
                None
            };
            blocks.push(render::render_match(recipe, detail.as_ref()));
        }
        blocks.join("\n")
    }
}
