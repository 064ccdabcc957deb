use crate::orbit::OrbitClass;

// The launch feed mixes English and German mission descriptions, so both
// spellings are matched.
const GEO_TOKENS: &[&str] = &["geostationary", "geostationär", "geostationaer"];
const SUN_TOKENS: &[&str] = &["sun", "sonnen"];
const SYNC_TOKENS: &[&str] = &["synchronous", "synchron"];
const MEO_TOKENS: &[&str] = &["medium earth", "meo"];

/// Maps a free-text mission description to an orbit class.
///
/// Case-insensitive substring matching, checked in priority order so the
/// more specific terms win: GEO, then SSO (which needs both a sun token and
/// a synchronous token, or the plain "SSO" abbreviation), then MEO. An
/// absent, empty, or unrecognized hint defaults to LEO. Pure function, never
/// fails.
pub fn classify(hint: Option<&str>) -> OrbitClass {
    let text = match hint {
        Some(t) if !t.trim().is_empty() => t.to_lowercase(),
        _ => return OrbitClass::Leo,
    };

    if contains_any(&text, GEO_TOKENS) {
        OrbitClass::Geo
    } else if (contains_any(&text, SUN_TOKENS) && contains_any(&text, SYNC_TOKENS))
        || text.contains("sso")
    {
        OrbitClass::Sso
    } else if contains_any(&text, MEO_TOKENS) {
        OrbitClass::Meo
    } else {
        OrbitClass::Leo
    }
}

fn contains_any(text: &str, tokens: &[&str]) -> bool {
    tokens.iter().any(|t| text.contains(t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some("Starlink Group 6-77"), OrbitClass::Leo)]
    #[case(Some("geostationary communications satellite"), OrbitClass::Geo)]
    #[case(Some("Geostationärer TV-Satellit"), OrbitClass::Geo)]
    #[case(Some("Sun-Synchronous Earth observation"), OrbitClass::Sso)]
    #[case(Some("Sonnensynchroner Orbit"), OrbitClass::Sso)]
    #[case(Some("SSO rideshare"), OrbitClass::Sso)]
    #[case(Some("medium earth orbit navigation"), OrbitClass::Meo)]
    #[case(Some("MEO constellation deployment"), OrbitClass::Meo)]
    #[case(Some(""), OrbitClass::Leo)]
    #[case(Some("   "), OrbitClass::Leo)]
    #[case(None, OrbitClass::Leo)]
    fn classifies_mission_hints(#[case] hint: Option<&str>, #[case] expected: OrbitClass) {
        assert_eq!(classify(hint), expected);
    }

    #[test]
    fn classification_is_deterministic() {
        let hint = Some("sun-synchronous imaging mission");
        assert_eq!(classify(hint), classify(hint));
    }

    #[test]
    fn sun_token_alone_is_not_sso() {
        assert_eq!(classify(Some("sun observation probe")), OrbitClass::Leo);
    }

    #[test]
    fn geo_wins_over_later_rules() {
        assert_eq!(
            classify(Some("geostationary sun-synchronous hybrid")),
            OrbitClass::Geo
        );
    }
}
