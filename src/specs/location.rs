// src/specs/location.rs
//
// Some rooms come with the building's street address attached,
// e.g. "Р-237 (ул. Софьи Ковалевской, 5)". Pull that out for a map link.

use once_cell::sync::Lazy;
use regex::Regex;

static ADDRESS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(ул(\.|ица)?)? [а-яА-ЯёЁ]{4,}[а-яА-Я ёЁ]{5,}[,.]?\s*(д(ом|\.)\s*)?[0-9]+[а-яА-ЯёЁ]?")
        .expect("address regex")
});

/// First street-address-looking span in `location`, if any.
pub fn looks_like_address(location: &str) -> Option<&str> {
    ADDRESS.find(location).map(|m| m.as_str().trim())
}
