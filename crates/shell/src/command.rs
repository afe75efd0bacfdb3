//! Parsing of shell input lines.

use core::str::FromStr;

use thiserror::Error;

use flora_catalog::{PriceFilter, UnknownPriceFilter};
use flora_core::{DomainError, ProductId};
use flora_storefront::{Action, Section, UnknownSection};

/// One line of shell input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Anything that changes session state.
    Act(Action),
    /// Re-render the current section.
    Show,
    /// Open the cart panel.
    Cart,
    Checkout,
    History,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandParseError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}' (type 'help')")]
    Unknown(String),

    #[error("'{command}' expects {expected}")]
    Usage {
        command: &'static str,
        expected: &'static str,
    },

    #[error(transparent)]
    Section(#[from] UnknownSection),

    #[error(transparent)]
    PriceFilter(#[from] UnknownPriceFilter),

    #[error("{0}")]
    ProductId(DomainError),

    #[error("invalid quantity '{0}'")]
    Quantity(String),
}

pub const HELP: &str = "\
команды:
  home | catalog | delivery | payment | about | contacts   открыть раздел
  go <section>                                            то же самое
  filter <all|under3000|3000to5000|over5000>              фильтр по цене
  add <id>                                                добавить букет в корзину
  remove <id>                                             убрать позицию
  qty <id> <n>                                            задать количество (0 убирает)
  inc <id> | dec <id>                                     +1 / -1
  cart                                                    показать корзину
  checkout                                                оформить заказ
  history                                                 история изменений корзины
  show                                                    показать текущий раздел
  help | quit";

fn product_id(command: &'static str, arg: Option<&str>) -> Result<ProductId, CommandParseError> {
    let raw = arg.ok_or(CommandParseError::Usage {
        command,
        expected: "a product id",
    })?;
    raw.parse().map_err(CommandParseError::ProductId)
}

fn no_more(
    command: &'static str,
    rest: &mut core::str::SplitWhitespace<'_>,
    expected: &'static str,
) -> Result<(), CommandParseError> {
    match rest.next() {
        Some(_) => Err(CommandParseError::Usage { command, expected }),
        None => Ok(()),
    }
}

impl FromStr for Command {
    type Err = CommandParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let head = words.next().ok_or(CommandParseError::Empty)?;
        let head = head.to_ascii_lowercase();

        if let Ok(section) = head.parse::<Section>() {
            no_more("section", &mut words, "no arguments")?;
            return Ok(Command::Act(Action::Navigate(section)));
        }

        let command = match head.as_str() {
            "go" => {
                let name = words.next().ok_or(CommandParseError::Usage {
                    command: "go",
                    expected: "a section name",
                })?;
                no_more("go", &mut words, "exactly one section name")?;
                Command::Act(Action::Navigate(name.parse()?))
            }
            "filter" => {
                let key = words.next().ok_or(CommandParseError::Usage {
                    command: "filter",
                    expected: "one of all, under3000, 3000to5000, over5000",
                })?;
                no_more("filter", &mut words, "exactly one filter")?;
                Command::Act(Action::SetPriceFilter(key.parse::<PriceFilter>()?))
            }
            "add" => {
                let id = product_id("add", words.next())?;
                no_more("add", &mut words, "exactly one product id")?;
                Command::Act(Action::AddToCart(id))
            }
            "remove" | "rm" => {
                let id = product_id("remove", words.next())?;
                no_more("remove", &mut words, "exactly one product id")?;
                Command::Act(Action::RemoveFromCart(id))
            }
            "inc" => {
                let id = product_id("inc", words.next())?;
                no_more("inc", &mut words, "exactly one product id")?;
                Command::Act(Action::Increment(id))
            }
            "dec" => {
                let id = product_id("dec", words.next())?;
                no_more("dec", &mut words, "exactly one product id")?;
                Command::Act(Action::Decrement(id))
            }
            "qty" => {
                let product_id = product_id("qty", words.next())?;
                let raw = words.next().ok_or(CommandParseError::Usage {
                    command: "qty",
                    expected: "a product id and a quantity",
                })?;
                let quantity = raw
                    .parse::<i64>()
                    .map_err(|_| CommandParseError::Quantity(raw.to_string()))?;
                no_more("qty", &mut words, "a product id and a quantity")?;
                Command::Act(Action::UpdateQuantity {
                    product_id,
                    quantity,
                })
            }
            "show" => Command::Show,
            "cart" => Command::Cart,
            "checkout" => Command::Checkout,
            "history" => Command::History,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(CommandParseError::Unknown(head.clone())),
        };

        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Command, CommandParseError> {
        line.parse()
    }

    fn id(value: u32) -> ProductId {
        ProductId::new(value)
    }

    #[test]
    fn section_names_navigate() {
        assert_eq!(parse("catalog").unwrap(), Command::Act(Action::Navigate(Section::Catalog)));
        assert_eq!(parse("  ABOUT ").unwrap(), Command::Act(Action::Navigate(Section::About)));
        assert_eq!(parse("go contacts").unwrap(), Command::Act(Action::Navigate(Section::Contacts)));
    }

    #[test]
    fn cart_commands() {
        assert_eq!(parse("add 1").unwrap(), Command::Act(Action::AddToCart(id(1))));
        assert_eq!(parse("rm 2").unwrap(), Command::Act(Action::RemoveFromCart(id(2))));
        assert_eq!(parse("inc 3").unwrap(), Command::Act(Action::Increment(id(3))));
        assert_eq!(parse("dec 3").unwrap(), Command::Act(Action::Decrement(id(3))));
        assert_eq!(
            parse("qty 4 -2").unwrap(),
            Command::Act(Action::UpdateQuantity {
                product_id: id(4),
                quantity: -2
            })
        );
    }

    #[test]
    fn filter_keys() {
        assert_eq!(
            parse("filter 3000to5000").unwrap(),
            Command::Act(Action::SetPriceFilter(PriceFilter::From3000To5000))
        );
        assert!(matches!(parse("filter cheap"), Err(CommandParseError::PriceFilter(_))));
    }

    #[test]
    fn plain_commands() {
        assert_eq!(parse("cart").unwrap(), Command::Cart);
        assert_eq!(parse("show").unwrap(), Command::Show);
        assert_eq!(parse("checkout").unwrap(), Command::Checkout);
        assert_eq!(parse("history").unwrap(), Command::History);
        assert_eq!(parse("?").unwrap(), Command::Help);
        assert_eq!(parse("exit").unwrap(), Command::Quit);
    }

    #[test]
    fn usage_errors() {
        assert_eq!(parse("").unwrap_err(), CommandParseError::Empty);
        assert_eq!(
            parse("add").unwrap_err(),
            CommandParseError::Usage {
                command: "add",
                expected: "a product id"
            }
        );
        assert!(matches!(parse("add 1 2"), Err(CommandParseError::Usage { command: "add", .. })));
        assert!(matches!(parse("qty 1"), Err(CommandParseError::Usage { command: "qty", .. })));
        assert_eq!(parse("qty 1 many").unwrap_err(), CommandParseError::Quantity("many".to_string()));
        assert!(matches!(parse("add x"), Err(CommandParseError::ProductId(DomainError::InvalidId(_)))));
        assert!(matches!(parse("go nowhere"), Err(CommandParseError::Section(_))));
        assert_eq!(parse("buy 1").unwrap_err(), CommandParseError::Unknown("buy".to_string()));
    }
}
