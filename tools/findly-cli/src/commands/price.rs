//! Best-coupon pricing for a single listing.

use anyhow::{Context as _, Result};
use findly_commerce::prelude::*;

use super::{read_input, PriceArgs};
use crate::context::Context;

/// Run the price command.
pub async fn run(args: PriceArgs, ctx: &Context) -> Result<()> {
    let currency = match &args.currency {
        Some(code) => Currency::from_code(code)?,
        None => ctx.config.api.currency,
    };

    let coupons = load_coupons(&args, ctx).await?;
    let price = parse_price(&args.price, currency);

    for (i, raw) in coupons.iter().enumerate() {
        if let Err(e) = raw.validate() {
            ctx.output.debug(&format!("coupon #{} skipped: {}", i + 1, e));
        }
    }

    if !price.is_positive() {
        ctx.output
            .warn(&format!("Could not read a price from '{}'; no coupon applied", args.price));
    }

    let result = select_best_coupon(price, &coupons);

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "original_price": result.original_price,
            "chosen_coupon": result.chosen_coupon,
            "final_price": result.final_price,
            "savings": result.savings(),
            "label": result.coupon_label(),
        }));
        return Ok(());
    }

    ctx.output.header("Pricing");
    ctx.output.kv("original", &result.original_price.display());

    match &result.chosen_coupon {
        Some(coupon) => {
            ctx.output.kv(
                "coupon",
                &format!("{} ({})", coupon.code, coupon.label(currency)),
            );
            ctx.output.kv("final", &result.final_price.display());
            ctx.output.kv(
                "savings",
                &format!(
                    "{} ({:.1}%)",
                    result.savings().display(),
                    result.discount_percentage()
                ),
            );
        }
        None => {
            ctx.output.kv("coupon", "none");
            ctx.output.kv("final", &result.final_price.display());
        }
    }

    Ok(())
}

async fn load_coupons(args: &PriceArgs, ctx: &Context) -> Result<Vec<RawCoupon>> {
    let json = match (&args.coupons, &args.coupons_file) {
        (Some(inline), _) => inline.clone(),
        (None, Some(path)) => read_input(path, ctx).await?,
        (None, None) => return Ok(Vec::new()),
    };

    RawCoupon::parse_list(&json).context("Coupons must be a JSON array")
}
