// src/common/id_generator.rs
//! Crockford Base32 ID Generator
//!
//! Generates human-readable, prefixed IDs using Crockford Base32 encoding.
//! Format: PREFIX_XXXXXX (e.g., U_K7NP3X for users)
//!
//! Benefits:
//! - No ambiguous characters (excludes I, L, O, U)
//! - Case-insensitive
//! - ~1 billion combinations per entity type (32^6)
//! - Easy to read, type, and communicate verbally

use rand::Rng;

/// Crockford Base32 alphabet (excludes I, L, O, U to avoid confusion)
const CROCKFORD_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Entity type prefixes for ID generation
#[derive(Debug, Clone, Copy)]
pub enum EntityPrefix {
    /// User account (U_)
    User,
    /// Menu item (M_)
    MenuItem,
    /// Customer review (R_)
    Review,
    /// Cart line (C_)
    CartItem,
    /// Payment record (P_)
    Payment,
}

impl EntityPrefix {
    /// Get the string prefix for this entity type
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityPrefix::User => "U",
            EntityPrefix::MenuItem => "M",
            EntityPrefix::Review => "R",
            EntityPrefix::CartItem => "C",
            EntityPrefix::Payment => "P",
        }
    }
}

/// Generate a random Crockford Base32 string of specified length
fn generate_crockford_string(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..32);
            CROCKFORD_ALPHABET[idx] as char
        })
        .collect()
}

/// Generate a prefixed ID using Crockford Base32 encoding
///
/// # Arguments
/// * `prefix` - The entity type prefix
///
/// # Returns
/// A string in format "PREFIX_XXXXXX" (e.g., "U_K7NP3X")
pub fn generate_id(prefix: EntityPrefix) -> String {
    format!("{}_{}", prefix.as_str(), generate_crockford_string(6))
}

// ============================================================================
// Convenience functions for each entity type
// ============================================================================

/// Generate a User ID (U_XXXXXX)
pub fn generate_user_id() -> String {
    generate_id(EntityPrefix::User)
}

/// Generate a Menu item ID (M_XXXXXX)
pub fn generate_menu_item_id() -> String {
    generate_id(EntityPrefix::MenuItem)
}

/// Generate a Review ID (R_XXXXXX)
pub fn generate_review_id() -> String {
    generate_id(EntityPrefix::Review)
}

/// Generate a Cart line ID (C_XXXXXX)
pub fn generate_cart_item_id() -> String {
    generate_id(EntityPrefix::CartItem)
}

/// Generate a Payment ID (P_XXXXXX)
pub fn generate_payment_id() -> String {
    generate_id(EntityPrefix::Payment)
}
