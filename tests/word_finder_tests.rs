//! Word finder tests - enumeration rules and determinism

use letterfall::core::{best, word_of, Dictionary, StripStore, WeightedLetters, WordFinder};
use letterfall::types::Axis;

fn grid(rows: &[&str]) -> letterfall::core::Grid {
    StripStore::from_rows(rows.len(), rows)
        .unwrap()
        .snapshot_grid()
}

#[test]
fn test_candidates_are_contiguous_runs() {
    let mut letters = WeightedLetters::new(2024);
    let dict = Dictionary::sample(3, 5);
    let finder = WordFinder::new(3, 5);

    for _ in 0..20 {
        let store = StripStore::new(5, 10, &mut letters).unwrap();
        let g = store.snapshot_grid();
        for candidate in finder.find_all(&g, &dict) {
            assert!((3..=5).contains(&candidate.len()));
            assert_eq!(candidate.word, word_of(&candidate.cells));
            for pair in candidate.cells.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                match candidate.axis {
                    Axis::Horizontal => assert_eq!((a.row, a.col + 1), (b.row, b.col)),
                    Axis::Vertical => assert_eq!((a.row + 1, a.col), (b.row, b.col)),
                }
            }
            for cell in &candidate.cells {
                assert_eq!(g.get(cell.row, cell.col), Some(cell.letter));
            }
        }
    }
}

#[test]
fn test_same_grid_same_candidates() {
    let mut letters = WeightedLetters::new(5);
    let store = StripStore::new(5, 10, &mut letters).unwrap();
    let g = store.snapshot_grid();
    let dict = Dictionary::sample(3, 5);
    let finder = WordFinder::new(3, 5);
    let first = finder.find_all(&g, &dict);
    for _ in 0..5 {
        assert_eq!(finder.find_all(&g, &dict), first);
    }
}

#[test]
fn test_scan_order_rows_then_columns() {
    let g = grid(&["QQDOG", "QQQQQ", "CQQQQ", "AQQQQ", "TQQQQ"]);
    let dict = Dictionary::from_words(["cat", "dog"], 3, 5);
    let found = WordFinder::new(3, 5).find_all(&g, &dict);
    let words: Vec<&str> = found.iter().map(|c| c.word.as_str()).collect();
    assert_eq!(words, vec!["dog", "cat"]);
    assert_eq!(found[1].axis, Axis::Vertical);
}

#[test]
fn test_oracle_bounds_apply() {
    // The finder looks at length 5, but a 3-4 letter oracle never accepts it.
    let g = grid(&["STARE", "QQQQQ", "QQQQQ", "QQQQQ", "QQQQQ"]);
    let dict = Dictionary::from_words(["stare", "tar"], 3, 4);
    let found = WordFinder::new(3, 5).find_all(&g, &dict);
    assert_eq!(found.len(), 1);
    assert_eq!(best(&found).map(|c| c.word.as_str()), Some("tar"));
}

#[test]
fn test_lowercase_regardless_of_dictionary_case() {
    let g = grid(&["EMUQQ", "QQQQQ", "QQQQQ", "QQQQQ", "QQQQQ"]);
    let dict = Dictionary::from_words(["EMU"], 3, 5);
    let found = WordFinder::new(3, 5).find_all(&g, &dict);
    assert_eq!(found[0].word, "emu");
}
