//! Free-text ingredient resolution: parse one recipe's lines remotely and
//! make sure every referenced food item exists in the catalog.

use crate::gateway::CatalogGateway;
use crate::types::ParsedIngredient;
use crate::MealieError;
use tracing::warn;

/// Parses a recipe's ingredient lines and back-fills missing food ids.
///
/// Empty input returns empty without touching the network. Otherwise the
/// parser is called once with the whole recipe's lines; order is preserved
/// end to end. A food whose create call fails keeps an absent id and is still
/// included in the output (Mealie may accept it as a free-text food). Only a
/// failure of the parser call itself propagates.
pub async fn resolve_ingredients<G: CatalogGateway + ?Sized>(
    gateway: &G,
    lines: &[String],
) -> Result<Vec<ParsedIngredient>, MealieError> {
    if lines.is_empty() {
        return Ok(Vec::new());
    }

    let mut parsed = gateway.parse_ingredients(lines).await?;

    for item in &mut parsed {
        let food = &mut item.ingredient.food;
        if food.id.as_deref().map_or(true, str::is_empty) {
            match gateway.create_food(food).await {
                Ok(id) => food.id = Some(id),
                Err(err) => {
                    warn!("failed to create food item {:?}: {err}", food.name);
                }
            }
        }
    }

    Ok(parsed)
}
