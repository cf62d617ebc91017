//! Cart commands.

use anyhow::Result;
use snapshop_app::{NoNavigation, Storefront, StorefrontAction};
use snapshop_store::KeyValueStore;

use super::{CartArgs, CartCommand};
use crate::context::Context;
use crate::surface::{Show, Terminal};

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.storefront()?;
    apply(args, &mut shop, ctx)
}

/// Apply one cart change, then show the cart.
pub fn apply<S: KeyValueStore>(args: CartArgs, shop: &mut Storefront<S>, ctx: &Context) -> Result<()> {
    let action = match args.command.unwrap_or(CartCommand::Show) {
        CartCommand::Show => StorefrontAction::OpenCart,
        CartCommand::Add { id } => {
            if shop.state().catalog.get(id).is_none() {
                ctx.output.warn(&format!("No product with ID {}", id));
            }
            StorefrontAction::AddToCart(id)
        }
        CartCommand::Remove { id } => StorefrontAction::RemoveFromCart(id),
        CartCommand::Inc { id } => StorefrontAction::ChangeQuantity(id, 1),
        CartCommand::Dec { id } => StorefrontAction::ChangeQuantity(id, -1),
    };

    shop.run(
        action,
        &mut Terminal::new(&ctx.output, Show::Cart),
        &mut NoNavigation,
    )?;

    if ctx.output.is_json() {
        ctx.output.json(&shop.storefront_view()?.cart);
    }

    Ok(())
}
