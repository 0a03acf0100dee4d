pub const SYSTEM_PROMPT: &str =
    "You are a precise nutritional database that returns only JSON data for foods.";

pub fn food_attributes_prompt(food_name: &str) -> String {
    format!(
        r#"You are a nutritional expert. I need detailed information about {food_name}.
Please provide the following attributes for this food in JSON format.

IMPORTANT: First determine if this is actually a food item that humans typically eat.
If it's not a food item (like "keyboard", "book", "car", etc.), set "is_non_edible" to true.

If the user has a non-standard name, provide the standard name in the food_name field.

1. is_non_edible (boolean, true if this is not a food item that humans eat)
2. food_name (the standard name for this food, fixing any spelling mistakes)
3. food_category (e.g., Fruits, Vegetables, Grains, Proteins, Dairy, Nuts & Seeds, Beverages)
4. food_subcategory (more specific category, e.g., Berries, Leafy Greens, Whole Grains)
5. processing_level (Natural, Minimally Processed, Processed, Ultra-Processed)
6. caffeine_content_mg (numeric value, 0 if none)
7. flavor_profile (Sweet, Sour, Bitter, Spicy, Neutral, etc.)
8. common_allergens (None, Dairy, Nuts, Gluten, Eggs, Soy, etc. - the most relevant or None)
9. glycemic_index (numeric value between 0-100)
10. inflammatory_index (numeric value between 1-10, where 1 is anti-inflammatory and 10 is highly inflammatory)
11. calories_kcal (numeric value per 100g)

Return only the JSON object with these attributes, nothing else."#
    )
}

/// Returns the body of the first fenced block in a model reply, preferring a
/// ```json fence, or the whole reply when it has none.
pub fn extract_json_block(content: &str) -> &str {
    let fenced = content
        .split_once("```json")
        .or_else(|| content.split_once("```"))
        .map(|(_, rest)| rest.split("```").next().unwrap_or(rest));

    fenced.unwrap_or(content).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_names_the_food() {
        let prompt = food_attributes_prompt("banana");

        assert!(prompt.contains("detailed information about banana."));
        assert!(prompt.contains("is_non_edible"));
    }

    #[test]
    fn test_extract_json_fence() {
        let reply = "Here you go:\n```json\n{\"food_name\": \"Kiwi\"}\n```\nEnjoy!";
        assert_eq!(extract_json_block(reply), "{\"food_name\": \"Kiwi\"}");
    }

    #[test]
    fn test_extract_plain_fence() {
        let reply = "```\n{\"glycemic_index\": 50}\n```";
        assert_eq!(extract_json_block(reply), "{\"glycemic_index\": 50}");
    }

    #[test]
    fn test_extract_unfenced_reply() {
        assert_eq!(extract_json_block("  {\"a\": 1} \n"), "{\"a\": 1}");
    }
}
