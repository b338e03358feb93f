//! Search URL construction.

use anyhow::Result;
use findly_search::{Language, SearchRequest};

use super::UrlArgs;
use crate::context::Context;

/// Run the url command.
pub async fn run(args: UrlArgs, ctx: &Context) -> Result<()> {
    let mut settings = ctx.config.user.clone();
    if let Some(code) = &args.lang {
        settings.language = Language::from_code(code);
        if !code.trim().eq_ignore_ascii_case(settings.language.code()) {
            ctx.output
                .warn(&format!("Unknown language '{}', using {}", code, settings.language));
        }
    }

    let base_url = args
        .base_url
        .as_deref()
        .unwrap_or(&ctx.config.api.base_url);

    let request = SearchRequest::new(&args.query.join(" "), &settings)?;
    let url = request.to_url(base_url);

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "query": request.query,
            "lang": request.language,
            "uid": request.user_id,
            "url": url,
        }));
    } else {
        println!("{}", url);
    }

    Ok(())
}
