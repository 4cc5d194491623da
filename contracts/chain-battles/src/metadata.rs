// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! On-chain token metadata: an SVG card wrapped in a base64 JSON data URI.

use alloc::{format, string::String};

use alloy_primitives::U256;
use base64::{engine::general_purpose::STANDARD, Engine};

const SVG_PREFIX: &str = "data:image/svg+xml;base64,";
const JSON_PREFIX: &str = "data:application/json;base64,";

/// Renders the warrior card for a token at the given level.
pub fn generate_character(level: U256) -> String {
    let svg = format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" preserveAspectRatio="xMinYMin meet" viewBox="0 0 350 350">"#,
            "<style>.base {{ fill: white; font-family: serif; font-size: 14px; }}</style>",
            r#"<rect width="100%" height="100%" fill="black" />"#,
            r#"<text x="50%" y="40%" class="base" dominant-baseline="middle" text-anchor="middle">Warrior</text>"#,
            r#"<text x="50%" y="50%" class="base" dominant-baseline="middle" text-anchor="middle">Levels: {}</text>"#,
            "</svg>",
        ),
        level
    );
    format!("{SVG_PREFIX}{}", STANDARD.encode(svg))
}

/// Builds the `tokenURI` payload for a token.
pub fn token_uri(token_id: U256, level: U256) -> String {
    let json = format!(
        r#"{{"name": "Chain Battles #{token_id}","description": "Battles on chain","image": "{}"}}"#,
        generate_character(level)
    );
    format!("{JSON_PREFIX}{}", STANDARD.encode(json))
}

#[cfg(test)]
mod test {
    use super::*;

    fn decode(uri: &str, prefix: &str) -> String {
        let payload = uri.strip_prefix(prefix).expect("missing data uri prefix");
        String::from_utf8(STANDARD.decode(payload).unwrap()).unwrap()
    }

    #[test]
    fn character_shows_level() {
        let svg = decode(&generate_character(U256::from(7)), SVG_PREFIX);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(">Warrior</text>"));
        assert!(svg.contains(">Levels: 7</text>"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn token_uri_embeds_character() {
        let json = decode(&token_uri(U256::from(3), U256::ZERO), JSON_PREFIX);
        assert!(json.contains(r#""name": "Chain Battles #3""#));

        let image_start = json.find(SVG_PREFIX).unwrap();
        let image_end = json[image_start..].find('"').unwrap() + image_start;
        let svg = decode(&json[image_start..image_end], SVG_PREFIX);
        assert!(svg.contains("Levels: 0"));
    }
}
