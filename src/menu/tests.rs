//! Tests for menu module
//!
//! These tests verify menu item validation rules.

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::common::Validator;

    fn valid_request() -> models::CreateMenuItemRequest {
        models::CreateMenuItemRequest {
            name: "Escalope de Veau".to_string(),
            category: "offered".to_string(),
            price: 12.5,
            recipe: Some("Veal, breadcrumbs, lemon".to_string()),
            image: None,
        }
    }

    #[test]
    fn test_create_menu_item_validation_success() {
        let request = valid_request();
        let result = request.validate(&request);
        assert!(result.is_valid, "Valid menu item should pass validation");
    }

    #[test]
    fn test_create_menu_item_validation_empty_name() {
        let mut request = valid_request();
        request.name = "   ".to_string();

        let result = request.validate(&request);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "name"));
    }

    #[test]
    fn test_create_menu_item_validation_empty_category() {
        let mut request = valid_request();
        request.category = String::new();

        let result = request.validate(&request);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "category"));
    }

    #[test]
    fn test_create_menu_item_validation_negative_price() {
        let mut request = valid_request();
        request.price = -1.0;

        let result = request.validate(&request);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "price"));
    }

    #[test]
    fn test_create_menu_item_validation_non_finite_price() {
        let mut request = valid_request();
        request.price = f64::NAN;

        let result = request.validate(&request);
        assert!(!result.is_valid);
    }
}
