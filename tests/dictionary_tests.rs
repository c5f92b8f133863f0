//! Dictionary tests - file formats, bounds, background loading

use std::path::PathBuf;

use tempfile::TempDir;

use letterfall::core::{
    index_by_length_and_initial, Dictionary, DictionaryError, DictionaryLoader, WordOracle,
};

/// Writes `contents` to `name` inside `dir`; the file goes away with the dir.
fn temp_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_text_list() {
    let dir = TempDir::new().unwrap();
    let path = temp_file(&dir, "words.txt", "Cat\n  dog \nemu\nat\nchimney\n\nx-ray\n");
    let dict = Dictionary::load(&path, 3, 5).unwrap();
    assert_eq!(dict.sorted_words(), vec!["cat", "dog", "emu"]);
}

#[test]
fn test_load_json_array() {
    let dir = TempDir::new().unwrap();
    let path = temp_file(&dir, "words.json", r#"["stare","ARE","toolong"]"#);
    let dict = Dictionary::load(&path, 3, 5).unwrap();
    assert!(dict.is_valid_word("STARE"));
    assert!(dict.is_valid_word("are"));
    assert!(!dict.is_valid_word("toolong"));
}

#[test]
fn test_load_failures() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist.txt");
    assert!(matches!(
        Dictionary::load(&missing, 3, 5),
        Err(DictionaryError::Io { .. })
    ));

    let bad = temp_file(&dir, "bad.json", "{not json");
    assert!(matches!(
        Dictionary::load(&bad, 3, 5),
        Err(DictionaryError::Parse(_))
    ));

    assert!(matches!(
        Dictionary::parse_txt("a\nbe\n", 3, 5),
        Err(DictionaryError::Empty { .. })
    ));
}

#[test]
fn test_membership_ignores_case_and_enforces_bounds() {
    let dict = Dictionary::from_words(["Cat", "greet"], 3, 4);
    assert!(dict.is_valid_word("cat"));
    assert!(dict.is_valid_word("CaT"));
    assert!(!dict.is_valid_word("greet"));
    assert!(!dict.is_valid_word("ca"));
    assert_eq!((dict.min_len(), dict.max_len()), (3, 4));
}

#[test]
fn test_loader_delivers_once() {
    let dir = TempDir::new().unwrap();
    let path = temp_file(&dir, "bg.txt", "cat\ndog\n");
    let mut loader = DictionaryLoader::spawn(&path, 3, 5);
    assert_eq!(loader.path(), path.as_path());

    let result = loop {
        if let Some(result) = loader.try_take() {
            break result;
        }
        std::thread::sleep(std::time::Duration::from_millis(2));
    };
    assert_eq!(result.unwrap().len(), 2);
    assert!(loader.try_take().is_none());
}

#[test]
fn test_loader_reports_failure() {
    let loader = DictionaryLoader::spawn("/nonexistent/letterfall/words.txt", 3, 5);
    assert!(matches!(loader.wait(), Err(DictionaryError::Io { .. })));
}

#[test]
fn test_index_groups_by_length_then_initial() {
    let dict = Dictionary::from_words(["cat", "cot", "cake", "dog", "stare"], 3, 5);
    let index = index_by_length_and_initial(dict.sorted_words());
    assert_eq!(index.keys().copied().collect::<Vec<_>>(), vec![3, 4, 5]);
    assert_eq!(index[&3][&'c'], vec!["cat", "cot"]);
    assert_eq!(index[&3][&'d'], vec!["dog"]);
    assert_eq!(index[&4][&'c'], vec!["cake"]);

    let json = serde_json::to_value(&index).unwrap();
    assert_eq!(json["5"]["s"][0], "stare");
}
