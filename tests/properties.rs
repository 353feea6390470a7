use fuzzy_comparer::{
    build_matrix, damerau_levenshtein_distance, damerau_levenshtein_similarity, folded_distance,
    levenshtein_distance,
};
use proptest::prelude::*;

// Small alphabet so transpositions and repeats show up often
fn word() -> impl Strategy<Value = String> {
    "[abcAB门票]{0,12}"
}

proptest! {
    #[test]
    fn identical_strings_score_one(s in "\\PC{0,24}") {
        prop_assert_eq!(damerau_levenshtein_similarity(&s, &s), 1.0);
    }

    #[test]
    fn case_variants_score_one(s in "[a-zA-Z ]{0,24}") {
        prop_assert_eq!(damerau_levenshtein_similarity(&s, &s.to_uppercase()), 1.0);
        prop_assert_eq!(damerau_levenshtein_similarity(&s.to_lowercase(), &s), 1.0);
    }

    #[test]
    fn distance_is_symmetric(a in word(), b in word()) {
        prop_assert_eq!(
            damerau_levenshtein_distance(&a, &b),
            damerau_levenshtein_distance(&b, &a)
        );
    }

    #[test]
    fn distance_bounded_by_longer_length(a in word(), b in word()) {
        let longest = a.chars().count().max(b.chars().count());
        prop_assert!(damerau_levenshtein_distance(&a, &b) <= longest);

        let score = damerau_levenshtein_similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&score), "score {} out of range", score);
    }

    #[test]
    fn never_worse_than_levenshtein(a in word(), b in word()) {
        prop_assert!(damerau_levenshtein_distance(&a, &b) <= levenshtein_distance(&a, &b));
    }

    #[test]
    fn folded_zero_iff_equal_ignoring_case(a in word(), b in word()) {
        prop_assert_eq!(
            folded_distance(&a, &b) == 0,
            a.to_lowercase() == b.to_lowercase()
        );
    }

    #[test]
    fn matrix_agrees_with_rolling_rows(a in word(), b in word()) {
        let matrix = build_matrix(&a, &b);
        prop_assert_eq!(matrix.distance(), damerau_levenshtein_distance(&a, &b));
        prop_assert_eq!(matrix.rows(), a.chars().count() + 1);
        prop_assert_eq!(matrix.cols(), b.chars().count() + 1);
    }
}
