// This file is part of tafel-locaties.
//
// tafel-locaties is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// tafel-locaties is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

#[must_use]
fn fold_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ä' => 'a',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ï' | 'î' | 'ì' | 'í' => 'i',
        'ô' | 'ö' | 'ò' | 'ó' => 'o',
        'ü' | 'û' | 'ù' | 'ú' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        _ => c,
    }
}

/// Turns a place name into the lowercase, hyphenated identifier used for
/// page file names and the `slug` field of the location index.
///
/// Accented letters are folded to their base letter, every run of other
/// characters becomes a single `-`, and leading or trailing hyphens are
/// dropped.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for c in name.to_lowercase().chars().map(fold_accent) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Capitalizes the first letter of every word and lowercases the rest.
///
/// A word starts at any letter that does not directly follow another letter,
/// so `BEVEREN-KRUIBEKE-ZWIJNDRECHT` becomes `Beveren-Kruibeke-Zwijndrecht`.
#[must_use]
pub fn title_case(text: &str) -> String {
    let mut title = String::with_capacity(text.len());
    let mut previous_is_letter = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                title.extend(c.to_lowercase());
            } else {
                title.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            title.push(c);
            previous_is_letter = false;
        }
    }

    title
}

#[cfg(test)]
mod tests {
    use super::{slugify, title_case};

    #[test]
    fn slugify_keeps_simple_names() {
        assert_eq!(slugify("Gent"), "gent");
        assert_eq!(slugify("Sint-Kruis-Winkel"), "sint-kruis-winkel");
    }

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("De Klinge"), "de-klinge");
        assert_eq!(slugify("  Sint -- Lievens   Houtem "), "sint-lievens-houtem");
        assert_eq!(slugify("Knokke-Heist (kust)"), "knokke-heist-kust");
    }

    #[test]
    fn slugify_folds_accents() {
        assert_eq!(slugify("Hélécine"), "helecine");
        assert_eq!(slugify("Ruiselède"), "ruiselede");
        assert_eq!(slugify("Façade Ñandú"), "facade-nandu");
        assert_eq!(slugify("ÉÈÊË"), "eeee");
    }

    #[test]
    fn slugify_drops_unknown_letters() {
        assert_eq!(slugify("Ærø 2"), "r-2");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn title_case_words() {
        assert_eq!(
            title_case("BEVEREN-KRUIBEKE-ZWIJNDRECHT"),
            "Beveren-Kruibeke-Zwijndrecht"
        );
        assert_eq!(title_case("sint-niklaas"), "Sint-Niklaas");
        assert_eq!(title_case("GENT"), "Gent");
        assert_eq!(title_case("merelbeke melle"), "Merelbeke Melle");
    }
}
