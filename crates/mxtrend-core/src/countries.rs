//! Display names for the country codes carried by the snapshots.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountryName {
    pub code: &'static str,
    pub name: &'static str,
}

pub static COUNTRY_GUIDE: [CountryName; 7] = [
    CountryName { code: "MEX", name: "México" },
    CountryName { code: "USA", name: "Estados Unidos" },
    CountryName { code: "BRA", name: "Brasil" },
    CountryName { code: "CHL", name: "Chile" },
    CountryName { code: "SLV", name: "El Salvador" },
    CountryName { code: "ESP", name: "España" },
    CountryName { code: "DEU", name: "Alemania" },
];

pub fn country_name(code: &str) -> Option<&'static str> {
    COUNTRY_GUIDE
        .iter()
        .find(|c| c.code.eq_ignore_ascii_case(code.trim()))
        .map(|c| c.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_code() {
        assert_eq!(country_name("mex"), Some("México"));
        assert_eq!(country_name("DEU"), Some("Alemania"));
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(country_name("ARG"), None);
    }
}
