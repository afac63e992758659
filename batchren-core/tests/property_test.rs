use batchren_core::{resolve_collision, split_extension, Resolution, TakenNames};
use proptest::prelude::*;

fn file_name() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _.-]{1,12}"
}

proptest! {
    #[test]
    fn split_extension_round_trips(name in "\\PC{0,24}") {
        let (stem, ext) = split_extension(&name);
        prop_assert_eq!(format!("{stem}{ext}"), name.clone());
        if !ext.is_empty() {
            prop_assert!(ext.starts_with('.'));
            prop_assert!(!ext[1..].contains('.'));
            prop_assert!(stem.chars().any(|c| c != '.'));
        }
    }

    #[test]
    fn resolved_name_is_never_taken(
        candidate in file_name(),
        original in file_name(),
        existing in proptest::collection::vec(file_name(), 0..16),
        counters in proptest::collection::vec(1u64..6, 0..5),
    ) {
        let (stem, ext) = split_extension(&candidate);
        let mut names = existing;
        names.push(original.clone());
        names.push(candidate.clone());
        names.extend(counters.iter().map(|n| format!("{stem}_{n}{ext}")));
        let taken = TakenNames::new(names);

        match resolve_collision(stem, ext, &original, &taken) {
            Resolution::Unchanged => {
                let numbered_original = original
                    .strip_prefix(&format!("{stem}_"))
                    .and_then(|rest| rest.strip_suffix(ext))
                    .is_some_and(|n| n.parse::<u64>().is_ok());
                prop_assert!(candidate == original || numbered_original);
            },
            Resolution::Available(name) => {
                prop_assert!(!taken.contains(&name));
                let counter = name
                    .strip_prefix(&format!("{stem}_"))
                    .and_then(|rest| rest.strip_suffix(ext))
                    .expect("disambiguated name keeps stem and extension");
                prop_assert!(counter.parse::<u64>().unwrap() >= 1);
            },
        }
    }
}
