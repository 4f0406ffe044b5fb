//! Seeded, deduplicated property names.

use std::collections::HashSet;

use crate::error::BoardError;
use crate::rng::Rng;

/// Upper bound on seeds tried before giving up on finding enough unique names.
pub const MAX_NAME_SEEDS: u64 = 100_000;

/// Country names short enough to fit on a cell (fewer than 12 characters).
pub const COUNTRIES: &[&str] = &[
    "Afghanistan",
    "Albania",
    "Algeria",
    "Andorra",
    "Angola",
    "Anguilla",
    "Antarctica",
    "Argentina",
    "Armenia",
    "Aruba",
    "Australia",
    "Austria",
    "Azerbaijan",
    "Bahamas",
    "Bahrain",
    "Bangladesh",
    "Barbados",
    "Belarus",
    "Belgium",
    "Belize",
    "Benin",
    "Bermuda",
    "Bhutan",
    "Bolivia",
    "Botswana",
    "Brazil",
    "Bulgaria",
    "Burundi",
    "Cambodia",
    "Cameroon",
    "Canada",
    "Cape Verde",
    "Chad",
    "Chile",
    "China",
    "Colombia",
    "Comoros",
    "Congo",
    "Costa Rica",
    "Croatia",
    "Cuba",
    "Cyprus",
    "Denmark",
    "Djibouti",
    "Dominica",
    "Ecuador",
    "Egypt",
    "El Salvador",
    "Eritrea",
    "Estonia",
    "Ethiopia",
    "Fiji",
    "Finland",
    "France",
    "Gabon",
    "Gambia",
    "Georgia",
    "Germany",
    "Ghana",
    "Gibraltar",
    "Greece",
    "Greenland",
    "Grenada",
    "Guadeloupe",
    "Guam",
    "Guatemala",
    "Guernsey",
    "Guinea",
    "Guyana",
    "Haiti",
    "Honduras",
    "Hong Kong",
    "Hungary",
    "Iceland",
    "India",
    "Indonesia",
    "Iran",
    "Iraq",
    "Ireland",
    "Isle of Man",
    "Israel",
    "Italy",
    "Jamaica",
    "Japan",
    "Jersey",
    "Jordan",
    "Kazakhstan",
    "Kenya",
    "Kiribati",
    "Kuwait",
    "Kyrgyzstan",
    "Latvia",
    "Lebanon",
    "Lesotho",
    "Liberia",
    "Libya",
    "Lithuania",
    "Luxembourg",
    "Macao",
    "Madagascar",
    "Malawi",
    "Malaysia",
    "Maldives",
    "Mali",
    "Malta",
    "Martinique",
    "Mauritania",
    "Mauritius",
    "Mayotte",
    "Mexico",
    "Moldova",
    "Monaco",
    "Mongolia",
    "Montenegro",
    "Montserrat",
    "Morocco",
    "Mozambique",
    "Myanmar",
    "Namibia",
    "Nauru",
    "Nepal",
    "Netherlands",
    "Nicaragua",
    "Niger",
    "Nigeria",
    "Niue",
    "Norway",
    "Oman",
    "Pakistan",
    "Palau",
    "Panama",
    "Paraguay",
    "Peru",
    "Philippines",
    "Pitcairn",
    "Poland",
    "Portugal",
    "Puerto Rico",
    "Qatar",
    "Reunion",
    "Romania",
    "Russia",
    "Rwanda",
    "Samoa",
    "San Marino",
    "Senegal",
    "Serbia",
    "Seychelles",
    "Singapore",
    "Slovakia",
    "Slovenia",
    "Somalia",
    "South Korea",
    "South Sudan",
    "Spain",
    "Sri Lanka",
    "Sudan",
    "Suriname",
    "Sweden",
    "Switzerland",
    "Syria",
    "Taiwan",
    "Tajikistan",
    "Tanzania",
    "Thailand",
    "Timor-Leste",
    "Togo",
    "Tokelau",
    "Tonga",
    "Tunisia",
    "Turkey",
    "Tuvalu",
    "Uganda",
    "Ukraine",
    "Uruguay",
    "Uzbekistan",
    "Vanuatu",
    "Venezuela",
    "Viet Nam",
    "Yemen",
    "Zambia",
    "Zimbabwe",
];

/// Draw the name for one seed.
///
/// Each seed yields exactly one name, independent of every other seed.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn name_for_seed(seed: u64) -> &'static str {
    let mut rng = Rng::from_counter(seed);
    let index = rng.next_below(COUNTRIES.len() as u32) as usize;
    COUNTRIES[index]
}

/// Collect `count` unique names, trying seeds 1, 2, 3, ... in order.
///
/// A seed whose name was already collected is skipped and the counter moves
/// on, so the result depends only on `count`.
///
/// # Errors
///
/// Returns an error if `count` exceeds the dictionary or `MAX_NAME_SEEDS`
/// seeds are tried without collecting enough names.
pub fn unique_names(count: usize) -> Result<Vec<&'static str>, BoardError> {
    if count > COUNTRIES.len() {
        return Err(BoardError {
            reason: format!(
                "Asked for {count} unique names but the dictionary only has {}",
                COUNTRIES.len()
            ),
        });
    }

    let mut seen = HashSet::with_capacity(count);
    let mut names = Vec::with_capacity(count);
    let mut seed = 1;

    while names.len() < count {
        if seed > MAX_NAME_SEEDS {
            return Err(BoardError {
                reason: format!(
                    "Only found {} unique names after {MAX_NAME_SEEDS} seeds",
                    names.len()
                ),
            });
        }
        let name = name_for_seed(seed);
        if seen.insert(name) {
            names.push(name);
        }
        seed += 1;
    }

    log::trace!("collected {count} unique names using {} seeds", seed - 1);
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_names_are_short() {
        for name in COUNTRIES {
            assert!(name.len() < 12, "{name} is too long");
        }
    }

    #[test]
    fn test_dictionary_has_no_duplicates() {
        let unique: HashSet<&str> = COUNTRIES.iter().copied().collect();
        assert_eq!(unique.len(), COUNTRIES.len());
    }

    #[test]
    fn test_unique_names_deterministic() {
        let first = unique_names(40).unwrap();
        let second = unique_names(40).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unique_names_are_unique() {
        let names = unique_names(40).unwrap();
        assert_eq!(names.len(), 40);
        let unique: HashSet<&str> = names.iter().copied().collect();
        assert_eq!(unique.len(), 40);
    }

    #[test]
    fn test_shorter_run_is_prefix() {
        let short = unique_names(10).unwrap();
        let long = unique_names(40).unwrap();
        assert_eq!(short[..], long[..10]);
    }

    #[test]
    fn test_too_many_names() {
        let err = unique_names(COUNTRIES.len() + 1).unwrap_err();
        assert!(err.reason.contains("dictionary"));
    }
}
