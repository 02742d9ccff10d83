//! Built-in alphabets.
//!
//! Each built-in has a stable name so configuration files can refer to it
//! (for example in `default_alphabets`).

use super::Alphabet;

/// ASCII digits.
pub const DIGITS: &str = "0123456789";
/// ASCII lowercase letters.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
/// ASCII uppercase letters.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// All 32 ASCII punctuation characters.
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
/// Digits and lowercase letters without `i`, `l`, `o` and `u`.
pub const BASE32: &str = "0123456789abcdefghjkmnpqrstvwxyz";
/// Punctuation that survives most password forms.
pub const SAFE_SYMBOLS: &str = "_-#@$?.!/";

/// Names of every built-in, in registration order.
pub const NAMES: &[&str] = &[
    "digits",
    "lower",
    "letters",
    "base32",
    "base36",
    "alnum62",
    "alnum64",
    "alnum68",
    "symbols71",
    "printable94",
    "classed71",
];

/// Default rotation when no size is requested.
///
/// The classed set appears three times so it is picked most often.
pub const DEFAULT_ROTATION: &[&str] = &[
    "alnum62",
    "classed71",
    "classed71",
    "classed71",
    "printable94",
];

/// Returns the built-in alphabet called `name`.
pub fn builtin(name: &str) -> Option<Alphabet> {
    let letters = [LOWERCASE, UPPERCASE].concat();
    let alnum = [letters.as_str(), DIGITS].concat();

    let alphabet = match name {
        "digits" => Alphabet::flat(DIGITS),
        "lower" => Alphabet::flat(LOWERCASE),
        "letters" => Alphabet::flat(&letters),
        "base32" => Alphabet::flat(BASE32),
        "base36" => Alphabet::flat(&[DIGITS, LOWERCASE].concat()),
        "alnum62" => Alphabet::flat(&alnum),
        "alnum64" => Alphabet::flat(&[alnum.as_str(), "_-"].concat()),
        "alnum68" => Alphabet::flat(&[alnum.as_str(), "_-.!?/"].concat()),
        "symbols71" => Alphabet::flat(&[alnum.as_str(), "_-#@$?.!/"].concat()),
        "printable94" => Alphabet::flat(&[alnum.as_str(), PUNCTUATION].concat()),
        "classed71" => Alphabet::classed(&[DIGITS, LOWERCASE, UPPERCASE, SAFE_SYMBOLS]),
        _ => return None,
    };
    Some(alphabet)
}

/// Returns every built-in with its name.
pub fn all() -> Vec<(&'static str, Alphabet)> {
    NAMES
        .iter()
        .filter_map(|&name| builtin(name).map(|alphabet| (name, alphabet)))
        .collect()
}
