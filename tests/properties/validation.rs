//! Property tests for garment input validation.

use proptest::prelude::*;

use garment_impact::{Category, GarmentInput, ImpactCalculator, Material};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: validation never panics on arbitrary input.
    #[test]
    fn property_validate_never_panics(
        category in "(?s).{0,32}",
        material in "(?s).{0,32}",
        quantity in any::<i64>(),
    ) {
        let _ = GarmentInput::new(category, material, quantity).validate();
    }

    /// PROPERTY: a quantity below one is always rejected, naming the field.
    #[test]
    fn property_non_positive_quantity_rejected(
        c in proptest::sample::select(Category::ALL.to_vec()),
        m in proptest::sample::select(Material::ALL.to_vec()),
        quantity in i64::MIN..=0,
    ) {
        let input = GarmentInput::new(c.as_str(), m.as_str(), quantity);
        let err = ImpactCalculator::with_defaults()
            .compute_impact_from_input(&input)
            .unwrap_err();
        prop_assert_eq!(err.field(), Some("quantity"));
    }

    /// PROPERTY: canonical names with any positive quantity validate.
    #[test]
    fn property_canonical_input_validates(
        c in proptest::sample::select(Category::ALL.to_vec()),
        m in proptest::sample::select(Material::ALL.to_vec()),
        quantity in 1i64..=i64::from(u32::MAX),
    ) {
        let d = GarmentInput::new(c.as_str().to_uppercase(), m.as_str(), quantity)
            .validate()
            .unwrap();
        prop_assert_eq!(d.category(), c);
        prop_assert_eq!(d.material(), m);
        prop_assert_eq!(i64::from(d.quantity()), quantity);
    }

    /// PROPERTY: names outside the closed sets are rejected as category errors.
    #[test]
    fn property_unknown_category_rejected(name in "[a-z]{1,12}") {
        prop_assume!(name.parse::<Category>().is_err());
        let err = GarmentInput::new(name, "cotton", 1).validate().unwrap_err();
        prop_assert_eq!(err.field(), Some("category"));
    }
}
