#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use sdkload_core::CssEffect;

#[derive(Debug, serde::Deserialize)]
struct Opts {
    #[serde(default)]
    css: CssEffect,
}

fn parse(json: &str) -> CssEffect {
    serde_json::from_str::<Opts>(json).unwrap().css
}

#[test]
fn current_spellings() {
    assert_eq!(parse(r#"{}"#), CssEffect::None);
    assert_eq!(parse(r#"{"css": false}"#), CssEffect::None);
    assert_eq!(parse(r#"{"css": null}"#), CssEffect::None);
    assert_eq!(parse(r#"{"css": "link"}"#), CssEffect::Link);
    assert_eq!(parse(r#"{"css": "auto"}"#), CssEffect::Auto);
}

#[test]
fn legacy_spellings() {
    assert_eq!(parse(r#"{"css": true}"#), CssEffect::Link);
    assert_eq!(parse(r#"{"css": "legacy"}"#), CssEffect::Link);
    assert_eq!(parse(r#"{"css": "modern"}"#), CssEffect::Auto);
}

#[test]
fn unknown_mode_is_rejected() {
    let err = serde_json::from_str::<Opts>(r#"{"css": "inline"}"#).unwrap_err();
    assert!(err.to_string().contains("unknown cssEffect"), "{err}");
    assert!("inline".parse::<CssEffect>().is_err());
}
