#![allow(missing_docs)]

use test_case::test_case;

use pairwise::{AlignError, Aligner, FillStrategy, PenaltyModel};

/// Strips the gap marker from an aligned sequence.
fn strip_gaps(aligned: &str, gap: char) -> String {
    aligned.chars().filter(|&c| c != gap).collect()
}

/// Checks the structural invariants of an alignment of `x` and `y`.
fn assert_well_formed(x: &str, y: &str, aligned_x: &str, aligned_y: &str) {
    assert_eq!(aligned_x.len(), aligned_y.len());
    assert_eq!(strip_gaps(aligned_x, '-'), x);
    assert_eq!(strip_gaps(aligned_y, '-'), y);
    assert!(aligned_x
        .chars()
        .zip(aligned_y.chars())
        .all(|(a, b)| a != '-' || b != '-'));
}

#[test]
fn classic_example() {
    // m + n = 13 and the longest common subsequence is GTAB, so the minimum
    // total penalty is 13 - 2 * 4 = 5.
    let model = PenaltyModel::uniform(b"ABGTXY", 0_u32, 2);
    let aligner = Aligner::new(&model, 1);

    let (penalty, [ax, ay]) = aligner.align_str(&"AGGTAB", &"GXTXAYB").unwrap();
    assert_eq!(penalty, 5);
    assert_well_formed("AGGTAB", "GXTXAYB", &ax, &ay);
}

#[test_case(0; "zero gap penalty")]
#[test_case(1; "unit gap penalty")]
#[test_case(7; "large gap penalty")]
fn single_symbol_identity(gap_penalty: u32) {
    let model = PenaltyModel::uniform(b"A", 0_u32, 2);
    let aligner = Aligner::new(&model, gap_penalty);

    let (penalty, [ax, ay]) = aligner.align_str(&"A", &"A").unwrap();
    assert_eq!(penalty, 0);
    assert_eq!(ax, "A");
    assert_eq!(ay, "A");
}

#[test]
fn single_symbol_boundary() {
    let model = PenaltyModel::uniform(b"AG", 0_u32, 2);
    let aligner = Aligner::new(&model, 1);

    // Matching the A costs nothing and the two leftover symbols each cost a
    // gap penalty.
    let (penalty, [ax, ay]) = aligner.align_str(&"A", &"AGG").unwrap();
    assert_eq!(penalty, 2);
    assert_eq!(ax, "A--");
    assert_eq!(ay, "AGG");
}

#[test_case("", "AB"; "empty x")]
#[test_case("AB", ""; "empty y")]
#[test_case("", ""; "both empty")]
fn empty_input(x: &str, y: &str) {
    let model = PenaltyModel::uniform(b"AB", 0_u32, 2);
    let aligner = Aligner::new(&model, 1);

    assert_eq!(aligner.align_str(&x, &y), Err(AlignError::EmptySequence));
}

#[test]
fn negative_gap_penalty() {
    let model = PenaltyModel::uniform(b"AB", 0_i32, 2);
    let aligner = Aligner::new(&model, -1);

    assert_eq!(aligner.align_str(&"AB", &"AB"), Err(AlignError::NegativeGapPenalty));
}

#[test]
fn gap_opposite_unmatched_symbol() {
    let model = PenaltyModel::uniform(b"ACT", 0_u32, 3);
    let aligner = Aligner::new(&model, 2);

    // Dropping the A for one gap penalty beats any substitution.
    let (penalty, [ax, ay]) = aligner.align_str(&"CAT", &"CT").unwrap();
    assert_eq!(penalty, 2);
    assert_eq!(ax, "CAT");
    assert_eq!(ay, "C-T");
}

#[test]
fn deterministic() {
    let model = PenaltyModel::uniform(b"ACGT", 0_u32, 2);
    let aligner = Aligner::new(&model, 1);

    let first = aligner.align_str(&"GATTACA", &"GCATGC").unwrap();
    for _ in 0..5 {
        assert_eq!(aligner.align_str(&"GATTACA", &"GCATGC").unwrap(), first);
    }
}

#[test]
fn strategies_agree_on_random_sequences() {
    let model = PenaltyModel::uniform(b"ACGT", 0_u32, 2);
    let bottom_up = Aligner::new(&model, 1);
    let top_down = Aligner::new(&model, 1).with_strategy(FillStrategy::TopDown);

    let sequences = seqgen::random_strings(16, 1, 100, "ACGT", 42);
    for (x, y) in sequences.iter().zip(sequences.iter().rev()) {
        let (penalty_b, [bx, by]) = bottom_up.align_str(x, y).unwrap();
        let (penalty_t, [tx, ty]) = top_down.align_str(x, y).unwrap();

        assert_eq!(penalty_b, penalty_t);
        assert_eq!(bx, tx);
        assert_eq!(by, ty);
        assert_well_formed(x, y, &bx, &by);
    }
}

#[test]
fn mutation_penalty_bound() {
    use rand::SeedableRng;
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);

    let model = PenaltyModel::uniform(b"ACGT", 0_u32, 2);
    let aligner = Aligner::new(&model, 1);

    // A substitution costs 2 and an insertion or deletion costs one gap, so
    // n edits can never cost more than 2 * n.
    for n in 1..8 {
        let x = seqgen::random_string(50, "ACGT", &mut rng);
        let y = seqgen::mutate_n(&x, "ACGT", n, &mut rng);

        let (penalty, [ax, ay]) = aligner.align_str(&x.as_str(), &y.as_str()).unwrap();
        assert!(penalty <= 2 * n as u32);
        assert_well_formed(&x, &y, &ax, &ay);
    }
}

#[test]
fn model_serde_round_trip() {
    let model = PenaltyModel::uniform(b"ACGT", 0_u32, 2).with_default(4);
    let bytes = bincode::serialize(&model).unwrap();
    let decoded: PenaltyModel<u32> = bincode::deserialize(&bytes).unwrap();

    let aligner = Aligner::new(&decoded, 1);
    let (penalty, _) = aligner.align_str(&"GAT", &"GT").unwrap();
    assert_eq!(penalty, 1);

    // The default covers symbols outside the alphabet after the round trip.
    let (penalty, _) = aligner.align_str(&"Z", &"Q").unwrap();
    assert_eq!(penalty, 2);
}
