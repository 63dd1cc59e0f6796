//! Cross-reference lookup — exact match into a fixed relationship table.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Canonical `"Book Chapter:Verse"` → related references.
static CROSS_REFS: Lazy<HashMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    let mut m: HashMap<&'static str, &'static [&'static str]> = HashMap::new();
    m.insert(
        "John 3:16",
        &["Romans 5:8", "1 John 4:9-10", "Ephesians 2:4-5"],
    );
    m.insert(
        "Romans 8:28",
        &["Genesis 50:20", "Jeremiah 29:11", "Philippians 1:6"],
    );
    m.insert(
        "Philippians 4:13",
        &["2 Corinthians 12:9-10", "Isaiah 40:29-31", "Psalm 28:7"],
    );
    m.insert(
        "Jeremiah 29:11",
        &["Proverbs 3:5-6", "Romans 8:28", "Psalm 33:11"],
    );
    m.insert(
        "1 Corinthians 13:4",
        &["1 Peter 4:8", "Colossians 3:14", "Romans 12:9-10"],
    );
    m
});

/// Look up cross-references by canonical reference string.
///
/// Exact match only — an absent key yields an empty slice, never a failure.
pub fn cross_references(reference: &str) -> &'static [&'static str] {
    CROSS_REFS.get(reference).copied().unwrap_or(&[])
}

/// Look up cross-references by reference components.
pub fn cross_references_for(book: &str, chapter: u32, verse: u32) -> &'static [&'static str] {
    cross_references(&format!("{} {}:{}", book, chapter, verse))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listed_reference() {
        let refs = cross_references("John 3:16");
        assert_eq!(refs, &["Romans 5:8", "1 John 4:9-10", "Ephesians 2:4-5"]);
    }

    #[test]
    fn test_unlisted_reference_is_empty() {
        assert!(cross_references("Psalm 23:1").is_empty());
    }

    #[test]
    fn test_lookup_is_exact_match() {
        // No fuzzy or case-insensitive matching
        assert!(cross_references("john 3:16").is_empty());
        assert!(cross_references("John 3:16-17").is_empty());
    }

    #[test]
    fn test_lookup_by_components() {
        let refs = cross_references_for("Romans", 8, 28);
        assert_eq!(refs.len(), 3);
        assert!(cross_references_for("Psalm", 23, 1).is_empty());
    }

    #[test]
    fn test_table_values_all_parse() {
        for (key, refs) in [
            "John 3:16",
            "Romans 8:28",
            "Philippians 4:13",
            "Jeremiah 29:11",
            "1 Corinthians 13:4",
        ]
        .iter()
        .map(|k| (*k, cross_references(k)))
        {
            berea_verse::VerseReference::parse(key).unwrap();
            for r in refs {
                berea_verse::VerseReference::parse(r).unwrap();
            }
        }
    }
}
