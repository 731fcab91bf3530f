//! Interactive storefront session.
//!
//! Each stdin line is parsed into an [`Intent`], dispatched, and the active
//! section is printed again. Alerts are printed as `! <message>` before the
//! section.

#[cfg(test)]
#[path = "shop_test.rs"]
mod shop_test;

use std::fmt::Write as _;

use storefront::controller::{Intent, Storefront};
use storefront::net::api::StorefrontApi;
use storefront::render;
use storefront::state::{Field, Section};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::CliError;

const HELP: &str = "\
commands:
  select <template-id>    choose a template
  next                    continue to the details form
  set <field> <value>     fields: student_id name institute phone email room
  submit                  check the details and go to the preview
  preview                 print the card preview without leaving this step
  add                     add the previewed card to the cart
  remove <item-id>        remove a cart item
  cart                    show the cart
  checkout                review the order
  confirm                 place the order
  back | home | reload | help | quit";

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Line {
    Dispatch(Intent),
    /// Print the card preview without changing sections.
    Preview,
    Help,
    Quit,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub(crate) enum ParseError {
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("unknown field `{0}`")]
    UnknownField(String),
}

/// `Ok(None)` for a blank line.
pub(crate) fn parse_line(line: &str) -> Result<Option<Line>, ParseError> {
    let line = line.trim();
    let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    let parsed = match command {
        "" => return Ok(None),
        "select" => {
            if rest.is_empty() {
                return Err(ParseError::Usage("select <template-id>"));
            }
            Line::Dispatch(Intent::SelectTemplate(rest.to_owned()))
        }
        "next" => Line::Dispatch(Intent::Next),
        "set" => {
            let (key, value) = rest
                .split_once(char::is_whitespace)
                .ok_or(ParseError::Usage("set <field> <value>"))?;
            let field = Field::from_key(key).ok_or_else(|| ParseError::UnknownField(key.to_owned()))?;
            Line::Dispatch(Intent::SetField(field, value.trim().to_owned()))
        }
        "submit" => Line::Dispatch(Intent::SubmitDetails),
        "preview" => Line::Preview,
        "add" => Line::Dispatch(Intent::AddToCart),
        "remove" => {
            let item_id = rest.parse().map_err(|_| ParseError::Usage("remove <item-id>"))?;
            Line::Dispatch(Intent::RemoveItem(item_id))
        }
        "cart" => Line::Dispatch(Intent::ViewCart),
        "checkout" => Line::Dispatch(Intent::GoToCheckout),
        "confirm" => Line::Dispatch(Intent::ConfirmCheckout),
        "back" => Line::Dispatch(Intent::Back),
        "home" => Line::Dispatch(Intent::Home),
        "reload" => Line::Dispatch(Intent::Load),
        "help" | "?" => Line::Help,
        "quit" | "exit" => Line::Quit,
        other => return Err(ParseError::Unknown(other.to_owned())),
    };
    Ok(Some(parsed))
}

/// Text view of the active section.
pub(crate) fn render_section<A: StorefrontApi>(store: &Storefront<A>) -> String {
    let state = store.state();
    let mut out = format!("== {} ==\n", store.active().as_str());

    match store.active() {
        Section::Select => {
            let cards = store.template_cards();
            if cards.is_empty() {
                out.push_str("no templates available\n");
            }
            for card in cards {
                let _ = writeln!(out, "{card}");
            }
        }
        Section::Details => {
            for field in Field::ALL {
                let _ = writeln!(out, "{:<10} {}", field.key(), state.details.get(field));
            }
        }
        Section::Preview => out.push_str(&render_preview(store)),
        Section::Cart => {
            let lines = render::cart_lines(state.cart(), &state.templates);
            if lines.is_empty() {
                out.push_str("cart is empty\n");
            }
            for line in lines {
                let _ = writeln!(out, "{line}");
            }
        }
        Section::Checkout => {
            let _ = write!(out, "{}", store.checkout_summary());
        }
        Section::Confirmation => match state.last_order_id {
            Some(id) => {
                let _ = writeln!(out, "Order #{id} placed. A confirmation email is on its way.");
            }
            None => out.push_str("Order placed. A confirmation email is on its way.\n"),
        },
    }
    out
}

pub(crate) fn render_preview<A: StorefrontApi>(store: &Storefront<A>) -> String {
    match store.preview() {
        Some(card) => format!("{card}\n"),
        None => "select a template first\n".to_owned(),
    }
}

pub(crate) async fn run<A: StorefrontApi>(mut store: Storefront<A>) -> Result<(), CliError> {
    store.dispatch(Intent::Load).await;
    println!("{}", render_section(&store));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_line(&line) {
            Ok(None) => continue,
            Ok(Some(Line::Quit)) => break,
            Ok(Some(Line::Help)) => println!("{HELP}"),
            Ok(Some(Line::Preview)) => {
                store.dispatch(Intent::Preview).await;
                print!("{}", render_preview(&store));
            }
            Ok(Some(Line::Dispatch(intent))) => {
                store.dispatch(intent).await;
                for alert in store.take_alerts() {
                    println!("! {alert}");
                }
                println!("{}", render_section(&store));
            }
            Err(e) => println!("! {e}"),
        }
    }
    Ok(())
}
