//! Property tests for the search components.
//!
//! Boards are generated as arbitrary row vectors (any row per column, not
//! just permutations), so the properties hold over the full genotype space
//! the search actually explores.

use evoqueens::board::{conflicts_between, max_score, Board};
use evoqueens::mating::crossover;
use evoqueens::mutation::mutate_board;
use evoqueens::random::create_rng;
use evoqueens::ranking::rank;
use evoqueens::schedule::{elitism_divisor, mutation_rate};
use proptest::prelude::*;

/// Arbitrary board rows for a size drawn from `2..=max_n`.
fn board_rows(max_n: usize) -> impl Strategy<Value = Vec<usize>> {
    (2usize..=max_n).prop_flat_map(|n| prop::collection::vec(0..n, n))
}

/// Two same-size row vectors plus a valid crossover cut.
fn parents_and_cut() -> impl Strategy<Value = (Vec<usize>, Vec<usize>, usize)> {
    (2usize..=32).prop_flat_map(|n| {
        (
            prop::collection::vec(0..n, n),
            prop::collection::vec(0..n, n),
            1..n,
        )
    })
}

proptest! {
    #[test]
    fn conflict_predicate_is_symmetric(
        col_a in 0usize..100,
        row_a in 0usize..100,
        col_b in 0usize..100,
        row_b in 0usize..100,
    ) {
        prop_assert_eq!(
            conflicts_between(col_a, row_a, col_b, row_b),
            conflicts_between(col_b, row_b, col_a, row_a)
        );
    }

    #[test]
    fn conflict_count_is_bounded(rows in board_rows(32)) {
        let board = Board::new(rows);
        let n = board.size();
        let pairs = n * (n - 1) / 2;
        prop_assert!(board.count_conflicts() <= pairs);
    }

    #[test]
    fn evaluation_complements_conflicts(rows in board_rows(32)) {
        let board = Board::new(rows);
        let expected = max_score(board.size()) - board.count_conflicts() as f64;
        prop_assert_eq!(board.evaluate(), expected);
        prop_assert!(board.evaluate() >= 0.0);
        prop_assert!(board.evaluate() <= max_score(board.size()));
    }

    #[test]
    fn crossover_preserves_length((rows1, rows2, cut) in parents_and_cut()) {
        let n = rows1.len();
        let (child1, child2) = crossover(&Board::new(rows1), &Board::new(rows2), cut);
        prop_assert_eq!(child1.size(), n);
        prop_assert_eq!(child2.size(), n);
    }

    #[test]
    fn crossover_children_take_parent_genes((rows1, rows2, cut) in parents_and_cut()) {
        let parent1 = Board::new(rows1.clone());
        let parent2 = Board::new(rows2.clone());
        let (child1, child2) = crossover(&parent1, &parent2, cut);
        prop_assert_eq!(&child1.rows()[..cut], &rows1[..cut]);
        prop_assert_eq!(&child1.rows()[cut..], &rows2[cut..]);
        prop_assert_eq!(&child2.rows()[..cut], &rows2[..cut]);
        prop_assert_eq!(&child2.rows()[cut..], &rows1[cut..]);
    }

    #[test]
    fn full_rate_mutation_changes_every_gene(rows in board_rows(32), seed in any::<u64>()) {
        let original = Board::new(rows);
        let mut mutated = original.clone();
        let mut rng = create_rng(seed);
        mutate_board(&mut mutated, 1.0, &mut rng);
        for column in 0..original.size() {
            prop_assert_ne!(mutated.row(column), original.row(column));
        }
    }

    #[test]
    fn zero_rate_mutation_is_identity(rows in board_rows(32), seed in any::<u64>()) {
        let original = Board::new(rows);
        let mut mutated = original.clone();
        let mut rng = create_rng(seed);
        mutate_board(&mut mutated, 0.0, &mut rng);
        prop_assert_eq!(mutated.rows(), original.rows());
    }

    #[test]
    fn mutation_keeps_rows_in_range(rows in board_rows(32), seed in any::<u64>()) {
        let mut board = Board::new(rows);
        let n = board.size();
        let mut rng = create_rng(seed);
        mutate_board(&mut board, 1.0, &mut rng);
        prop_assert!(board.rows().iter().all(|&row| row < n));
    }

    #[test]
    fn ranked_top_dominates(
        populations in (2usize..=16).prop_flat_map(|n| {
            prop::collection::vec(prop::collection::vec(0..n, n), 1..=30)
        })
    ) {
        let mut population: Vec<Board> = populations.into_iter().map(Board::new).collect();
        rank(&mut population, false);
        let top = population[0].score();
        prop_assert!(population.iter().all(|b| b.score() <= top));
    }

    #[test]
    fn off_schedule_generations_use_base(generation in 1usize..100_000) {
        prop_assume!(generation % 100 != 0);
        prop_assert_eq!(elitism_divisor(generation, 2), 2);
        prop_assert_eq!(mutation_rate(generation, 0.01), 0.01);
    }

    #[test]
    fn elitism_divisor_is_a_known_level(generation in 1usize..100_000) {
        let divisor = elitism_divisor(generation, 2);
        prop_assert!([2, 4, 10].contains(&divisor));
    }

    #[test]
    fn mutation_rate_is_a_known_level(generation in 1usize..100_000) {
        let rate = mutation_rate(generation, 0.01);
        prop_assert!([0.01, 0.02, 0.05, 0.1].contains(&rate));
    }
}

#[test]
fn known_solutions_score_the_optimum() {
    // One of the 2 solutions for N=4, one of the 10 for N=5,
    // and one of the 92 for N=8.
    let solutions: [&[usize]; 3] = [
        &[1, 3, 0, 2],
        &[0, 2, 4, 1, 3],
        &[0, 4, 7, 5, 2, 6, 1, 3],
    ];
    for rows in solutions {
        let board = Board::new(rows.to_vec());
        assert_eq!(board.count_conflicts(), 0, "rows {rows:?}");
        assert_eq!(board.evaluate(), max_score(board.size()));
    }
}

#[test]
fn schedule_precedence_pins() {
    // 300 also satisfies % 100; the % 300 branch must win
    assert_eq!(elitism_divisor(300, 2), 10);
    // 1000 also satisfies % 200; the refined branch yields 0.1
    assert_eq!(mutation_rate(1000, 0.01), 0.1);
}
