//! Rate a password.

use anyhow::Result;
use snapshop_auth::{strength_score, PasswordStrength};

use super::StrengthArgs;
use crate::context::Context;

/// Run the strength command.
pub fn run(args: StrengthArgs, ctx: &Context) -> Result<()> {
    let strength = PasswordStrength::rate(&args.password);
    let score = strength_score(&args.password);

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "score": score,
            "strength": strength,
        }));
        return Ok(());
    }

    match strength {
        Some(strength) => {
            ctx.output.kv("Strength", strength.label());
            ctx.output.kv("Score", &format!("{}/6", score));
        }
        None => ctx.output.info("Empty password"),
    }

    Ok(())
}
