//! Slug generation for translation keys.
//!
//! Relative-date phrases are turned into slugs (`"3 days ago"` becomes
//! `"3-days-ago"`) which then index the `date.*` messages.

const ACCENTED: &str = "àáäâãåăæąçćčđďèéěėëêęğǵḧìíïîįłḿǹńňñòóöôœøṕŕřßşśšșťțùúüûǘůűūųẃẍÿýźžż·/_,:;";
const PLAIN: &str = "aaaaaaaaacccddeeeeeeegghiiiiilmnnnnooooooprrsssssttuuuuuuuuuwxyyzzz------";

/// Replacement for a lowercase character, if it is in the table.
fn transliterate(c: char) -> Option<char> {
    ACCENTED
        .chars()
        .position(|a| a == c)
        .and_then(|i| PLAIN.chars().nth(i))
}

/// Append `c`, first emitting a separator owed by earlier input.
fn push(slug: &mut String, c: char, pending_hyphen: &mut bool) {
    if *pending_hyphen && !slug.is_empty() {
        slug.push('-');
    }
    *pending_hyphen = false;
    slug.push(c);
}

/// Convert any string to a slug.
///
/// Output holds only `a-z`, `0-9` and single hyphens, never at either end.
/// Accented Latin letters are folded to ASCII, `&` becomes `and`, and
/// anything else outside that alphabet is dropped.
///
/// ```
/// use pia_revisions::slugify;
///
/// assert_eq!(slugify("3 days ago"), "3-days-ago");
/// assert_eq!(slugify("Crème & Brûlée"), "creme-and-brulee");
/// ```
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_hyphen = false;

    for c in input.chars().flat_map(char::to_lowercase) {
        match c {
            'a'..='z' | '0'..='9' => push(&mut slug, c, &mut pending_hyphen),
            '-' => pending_hyphen = true,
            '&' => {
                pending_hyphen = true;
                for letter in "and".chars() {
                    push(&mut slug, letter, &mut pending_hyphen);
                }
                pending_hyphen = true;
            }
            c if c.is_whitespace() => pending_hyphen = true,
            c => match transliterate(c) {
                Some('-') => pending_hyphen = true,
                Some(folded) => push(&mut slug, folded, &mut pending_hyphen),
                None => {}
            },
        }
    }

    slug
}
