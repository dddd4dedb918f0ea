use super::models::CreateMenuItemRequest;
use crate::common::{ValidationResult, Validator};

impl Validator<CreateMenuItemRequest> for CreateMenuItemRequest {
    fn validate(&self, data: &CreateMenuItemRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.name.trim().is_empty() {
            result.add_error("name", "Item name is required");
        }

        if data.name.len() > 255 {
            result.add_error("name", "Item name must not exceed 255 characters");
        }

        if data.category.trim().is_empty() {
            result.add_error("category", "Category is required");
        }

        if !data.price.is_finite() || data.price < 0.0 {
            result.add_error("price", "Price must be a non-negative number");
        }

        result
    }
}
