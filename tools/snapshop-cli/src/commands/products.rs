//! Browse the catalog.

use anyhow::Result;
use snapshop_app::{NoNavigation, Storefront, StorefrontAction};
use snapshop_store::KeyValueStore;

use super::ProductsArgs;
use crate::context::Context;
use crate::surface::{Show, Terminal};

/// Run the products command.
pub fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.storefront()?;
    apply(args, &mut shop, ctx)
}

/// Apply the filter and list what is visible.
pub fn apply<S: KeyValueStore>(args: ProductsArgs, shop: &mut Storefront<S>, ctx: &Context) -> Result<()> {
    shop.dispatch(StorefrontAction::Filter(args.category))?;
    shop.run(
        StorefrontAction::Search(args.search),
        &mut Terminal::new(&ctx.output, Show::Products),
        &mut NoNavigation,
    )?;

    if ctx.output.is_json() {
        let products = shop.storefront_view()?.products;
        ctx.output.json(&products);
    }

    Ok(())
}
