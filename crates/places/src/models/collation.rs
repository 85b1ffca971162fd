//! Orderings for place names shown in a selection list.
//!
//! Sorting by raw code points puts every accented initial after `Z`
//! (`Ábrahámhegy` would land at the bottom of the list). The catalog does not
//! decide which ordering is right; callers hand one in.

use std::cmp::Ordering;

/// String comparator used by [`LocationCatalog::all_names`](crate::LocationCatalog::all_names).
pub trait NameCollation {
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

impl<F> NameCollation for F
where
    F: Fn(&str, &str) -> Ordering,
{
    fn compare(&self, a: &str, b: &str) -> Ordering {
        self(a, b)
    }
}

/// Plain code point order.
#[derive(Clone, Copy, Debug, Default)]
pub struct CodePoint;

impl NameCollation for CodePoint {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        a.cmp(b)
    }
}

/// Case-insensitive order that treats accented Latin letters as their base
/// letter first, then breaks ties by accent, then by code point.
///
/// `a < á < b`, `o < ó < ö < ő < p`.
///
/// This is an approximation, not Hungarian collation: `ö`, `ő`, `ü` and `ű`
/// sort among `o` and `u` instead of after them, so `Öreg` comes before
/// `Ozora`. Pass a different [`NameCollation`] where the distinction matters.
#[derive(Clone, Copy, Debug, Default)]
pub struct AccentFolding;

impl NameCollation for AccentFolding {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        let primary = a.chars().map(|c| fold(c).0).cmp(b.chars().map(|c| fold(c).0));
        let secondary = || a.chars().map(|c| fold(c).1).cmp(b.chars().map(|c| fold(c).1));

        primary.then_with(secondary).then_with(|| a.cmp(b))
    }
}

/// Base letter and accent rank of a character.
fn fold(c: char) -> (char, u8) {
    let lower = c.to_lowercase().next().unwrap_or(c);
    match lower {
        'à' => ('a', 1),
        'á' => ('a', 2),
        'â' => ('a', 3),
        'ã' => ('a', 4),
        'ä' => ('a', 5),
        'å' => ('a', 6),
        'ç' => ('c', 1),
        'è' => ('e', 1),
        'é' => ('e', 2),
        'ê' => ('e', 3),
        'ë' => ('e', 4),
        'ì' => ('i', 1),
        'í' => ('i', 2),
        'î' => ('i', 3),
        'ï' => ('i', 4),
        'ñ' => ('n', 1),
        'ò' => ('o', 1),
        'ó' => ('o', 2),
        'ô' => ('o', 3),
        'õ' => ('o', 4),
        'ö' => ('o', 5),
        'ő' => ('o', 6),
        'ø' => ('o', 7),
        'ù' => ('u', 1),
        'ú' => ('u', 2),
        'û' => ('u', 3),
        'ü' => ('u', 4),
        'ű' => ('u', 5),
        'ý' => ('y', 1),
        'ÿ' => ('y', 2),
        other => (other, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(collation: &dyn NameCollation, names: &[&'static str]) -> Vec<&'static str> {
        let mut names = names.to_vec();
        names.sort_by(|a, b| collation.compare(a, b));
        names
    }

    #[test]
    fn test_accented_initial_sorts_with_base_letter() {
        let names = ["Zamárdi", "Ábrahámhegy", "Badacsonytomaj", "Aszófő"];

        assert_eq!(
            sorted(&AccentFolding, &names),
            vec!["Ábrahámhegy", "Aszófő", "Badacsonytomaj", "Zamárdi"]
        );
        assert_eq!(
            sorted(&CodePoint, &names),
            vec!["Aszófő", "Badacsonytomaj", "Zamárdi", "Ábrahámhegy"]
        );
    }

    #[test]
    fn test_accent_breaks_ties_only() {
        assert_eq!(AccentFolding.compare("ora", "óra"), Ordering::Less);
        assert_eq!(AccentFolding.compare("óra", "orb"), Ordering::Less);
        assert_eq!(AccentFolding.compare("öt", "őt"), Ordering::Less);
        assert_eq!(AccentFolding.compare("Tihany", "Tihany"), Ordering::Equal);
    }

    #[test]
    fn test_case_insensitive_primary() {
        assert_eq!(AccentFolding.compare("balatonfüred", "Balatonkenese"), Ordering::Less);
        assert_eq!(CodePoint.compare("balatonfüred", "Balatonkenese"), Ordering::Greater);
    }

    #[test]
    fn test_umlauts_fold_into_base_letter() {
        assert_eq!(AccentFolding.compare("Öreg", "Ozora"), Ordering::Less);
        assert_eq!(AccentFolding.compare("Ürge", "Uzsa"), Ordering::Less);
        assert_eq!(AccentFolding.compare("Ozora", "Pécsely"), Ordering::Less);
    }

    #[test]
    fn test_closure_collation() {
        let by_len = |a: &str, b: &str| a.len().cmp(&b.len());
        assert_eq!(sorted(&by_len, &["Keszthely", "Tihany"]), vec!["Tihany", "Keszthely"]);
    }
}
