use layout::{layout_hash, FieldDef, FieldEncoding, FieldSource, RecordLayout};
use proptest::prelude::*;

fn encoding_strategy() -> impl Strategy<Value = FieldEncoding> {
    prop_oneof![
        Just(FieldEncoding::Int16Le),
        Just(FieldEncoding::Float32Le),
    ]
}

fn source_strategy() -> impl Strategy<Value = FieldSource> {
    prop_oneof![
        Just(FieldSource::DirectCurrent),
        Just(FieldSource::QuadratureCurrent),
        Just(FieldSource::TorqueEstimate),
        any::<f64>().prop_map(FieldSource::Constant),
    ]
}

/// Builds a layout whose field names are unique by construction.
fn layout_strategy() -> impl Strategy<Value = RecordLayout> {
    (
        prop::collection::vec((encoding_strategy(), source_strategy()), 1..12),
        proptest::option::of(0i32..2000),
    )
        .prop_map(|(fields, id_max)| {
            let fields = fields
                .into_iter()
                .enumerate()
                .map(|(i, (encoding, source))| FieldDef::new(format!("f{i}"), encoding, source))
                .collect();
            RecordLayout::new(fields, id_max).unwrap()
        })
}

proptest! {
    #[test]
    fn prop_record_size_sums_widths(layout in layout_strategy()) {
        let expected: usize = layout.fields.iter().map(|f| f.encoding.width()).sum();
        prop_assert_eq!(layout.record_size(), expected);
        prop_assert!(layout.validate().is_ok());
    }

    #[test]
    fn prop_hash_is_deterministic(layout in layout_strategy()) {
        prop_assert_eq!(layout_hash(&layout), layout_hash(&layout.clone()));
    }

    #[test]
    fn prop_hash_changes_when_a_field_is_added(layout in layout_strategy()) {
        let before = layout_hash(&layout);
        let mut grown = layout;
        grown.fields.push(FieldDef::constant(
            "appended",
            FieldEncoding::Float32Le,
            1.0,
        ));
        prop_assert_ne!(before, layout_hash(&grown));
    }

    #[test]
    fn prop_duplicate_names_always_rejected(
        count in 2usize..8,
        encoding in encoding_strategy(),
    ) {
        let fields = (0..count)
            .map(|_| FieldDef::new("dup", encoding, FieldSource::DirectCurrent))
            .collect();
        let err = RecordLayout::new(fields, None).unwrap_err();
        let is_duplicate = matches!(err, layout::LayoutError::DuplicateFieldName { .. });
        prop_assert!(is_duplicate);
    }
}
