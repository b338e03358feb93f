//! Product cards from a saved search response.

use anyhow::Result;
use findly_search::{parse_search_response, CardBuilder, SearchOutcome};

use super::{read_input, CardsArgs};
use crate::context::Context;

/// Run the cards command.
pub async fn run(args: CardsArgs, ctx: &Context) -> Result<()> {
    let body = read_input(&args.response, ctx).await?;
    let outcome = parse_search_response(&body)?;

    let products = match &outcome {
        SearchOutcome::EnergyEmpty => {
            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({ "error": "energy_empty" }));
            } else {
                ctx.output
                    .warn("Search energy is used up. Try again later or upgrade your plan.");
            }
            return Ok(());
        }
        SearchOutcome::NoResults => {
            if ctx.output.is_json() {
                ctx.output.json(&Vec::<()>::new());
            } else {
                ctx.output.info("No results found.");
            }
            return Ok(());
        }
        SearchOutcome::Results(products) => products,
    };

    let mut settings = ctx.config.user.clone();
    if let Some(budget) = args.budget {
        settings.budget = budget;
    }

    let builder =
        CardBuilder::new(&settings, &ctx.config.badges).with_currency(ctx.config.api.currency);

    let shown = args.limit.unwrap_or(products.len()).min(products.len());
    let cards = builder.build_all(&products[..shown]);
    ctx.output
        .debug(&format!("built {} of {} cards", cards.len(), products.len()));

    if ctx.output.is_json() {
        ctx.output.json(&cards);
        return Ok(());
    }

    ctx.output.header(&format!("{} results", products.len()));
    for (i, card) in cards.iter().enumerate() {
        ctx.output.card(i + 1, card);
    }

    let discounted = cards.iter().filter(|c| c.shows_discount()).count();
    let over_budget = cards.iter().filter(|c| c.over_budget).count();
    println!();
    ctx.output
        .success(&format!("{} with a coupon applied", discounted));
    if over_budget > 0 {
        ctx.output
            .warn(&format!("{} over your budget of {}", over_budget, settings.budget));
    }

    Ok(())
}
