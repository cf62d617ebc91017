//! Place an order for the cart.

use anyhow::{bail, Result};
use snapshop_app::{NoNavigation, Storefront, StorefrontAction};
use snapshop_store::KeyValueStore;

use super::CheckoutArgs;
use crate::context::Context;
use crate::surface::{print_order, Show, Terminal};

/// Run the checkout command.
pub fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.storefront()?;
    apply(args, &mut shop, ctx)
}

/// Open the checkout modal and submit the given fields.
pub fn apply<S: KeyValueStore>(args: CheckoutArgs, shop: &mut Storefront<S>, ctx: &Context) -> Result<()> {
    let mut screen = Terminal::new(&ctx.output, Show::Checkout);

    let opened = shop.run(StorefrontAction::OpenCheckout, &mut screen, &mut NoNavigation)?;
    if opened.notice.as_ref().is_some_and(|n| n.is_error()) {
        bail!("Nothing to check out");
    }

    let outcome = shop.run(
        StorefrontAction::SubmitCheckout(args.into_fields()),
        &mut screen,
        &mut NoNavigation,
    )?;

    match outcome.order() {
        Some(order) if ctx.output.is_json() => ctx.output.json(order),
        Some(order) => print_order(&ctx.output, order),
        None => {
            if ctx.output.is_json() {
                ctx.output.json(&outcome.errors);
            }
            bail!("Order not placed: {} invalid field(s)", outcome.errors.len());
        }
    }

    Ok(())
}
