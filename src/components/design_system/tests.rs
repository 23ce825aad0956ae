//! Design System Component Tests
//!
//! Unit tests for design system enums, variants, and styling logic.

use super::button::{ButtonSize, ButtonVariant};

// ========================================================================
// ButtonVariant Tests
// ========================================================================

const VARIANTS: [ButtonVariant; 5] = [
    ButtonVariant::Primary,
    ButtonVariant::Secondary,
    ButtonVariant::Danger,
    ButtonVariant::Ghost,
    ButtonVariant::Outline,
];

#[test]
fn test_button_variant_default() {
    assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
}

#[test]
fn test_button_variant_equality() {
    assert_eq!(ButtonVariant::Danger, ButtonVariant::Danger);
    assert_ne!(ButtonVariant::Primary, ButtonVariant::Secondary);
    assert_ne!(ButtonVariant::Ghost, ButtonVariant::Outline);
}

#[test]
fn test_button_variant_classes_non_empty() {
    for variant in VARIANTS {
        assert!(!variant.class().is_empty(), "Variant {:?} should have class", variant);
    }
}

#[test]
fn test_button_variant_classes_unique() {
    for (i, a) in VARIANTS.iter().enumerate() {
        for b in &VARIANTS[i + 1..] {
            assert_ne!(a.class(), b.class(), "{:?} and {:?} share a class", a, b);
        }
    }
}

#[test]
fn test_danger_variant_uses_error_colour() {
    assert!(ButtonVariant::Danger.class().contains("status-error"));
}

// ========================================================================
// ButtonSize Tests
// ========================================================================

#[test]
fn test_button_size_default() {
    assert_eq!(ButtonSize::default(), ButtonSize::Md);
}

#[test]
fn test_button_size_classes_scale() {
    assert!(ButtonSize::Sm.class().contains("text-xs"));
    assert!(ButtonSize::Md.class().contains("text-sm"));
    assert!(ButtonSize::Lg.class().contains("text-base"));
}
