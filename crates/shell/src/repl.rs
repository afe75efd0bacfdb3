use std::io::{BufRead, Write};

use anyhow::Context;

use flora_storefront::content::{CHECKOUT_LABEL, EMPTY_CART};
use flora_storefront::{Action, Storefront};

use crate::command::{Command, HELP};
use crate::render;

/// Drive a session from line-oriented input until EOF or `quit`.
///
/// Parse and domain errors are printed and the loop continues; only I/O failures
/// end it early.
pub fn run<R: BufRead, W: Write>(
    shop: &mut Storefront,
    input: R,
    mut output: W,
) -> anyhow::Result<()> {
    render::header(&mut output, shop)?;
    render::page(&mut output, &shop.page())?;
    output.flush()?;

    for (line_no, line) in input.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read input line {}", line_no + 1))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(output, "ошибка: {err}")?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => writeln!(output, "{HELP}")?,
            Command::Show => {
                render::header(&mut output, shop)?;
                render::page(&mut output, &shop.page())?;
            }
            Command::Cart => render::cart(&mut output, &shop.cart_view())?,
            Command::History => render::history(&mut output, shop.history())?,
            Command::Checkout => {
                if shop.cart().is_empty() {
                    writeln!(output, "{EMPTY_CART}")?;
                } else {
                    writeln!(
                        output,
                        "{CHECKOUT_LABEL}: онлайн-оформление недоступно, итого {}",
                        shop.total_price()
                    )?;
                }
            }
            Command::Act(action) => match shop.dispatch(action) {
                Ok(_) => {
                    render::header(&mut output, shop)?;
                    if touches_cart(&action) {
                        render::cart(&mut output, &shop.cart_view())?;
                    } else {
                        render::page(&mut output, &shop.page())?;
                    }
                }
                Err(err) => writeln!(output, "ошибка: {err}")?,
            },
        }
        output.flush()?;
    }

    Ok(())
}

fn touches_cart(action: &Action) -> bool {
    !matches!(action, Action::Navigate(_) | Action::SetPriceFilter(_))
}
