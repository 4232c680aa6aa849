#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use sdkload_core::CssEffect;
use sdkload_runtime::config;
use sdkload_runtime::SdkConfigs;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
sdk_configs: "/sdk-config.json"
options:
  timeot: 500 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.kind().as_str(), "CONFIG");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
sdk_configs: "/sdk-config.json"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.base_dir, ".");
    assert_eq!(cfg.options.timeout, 10_000);
    assert!(!cfg.options.chunks_preload);
    assert_eq!(cfg.options.css_effect, CssEffect::None);
    assert!(cfg.document.head);
    assert!(matches!(cfg.sdk_configs, SdkConfigs::Specifier(ref s) if s == "/sdk-config.json"));
}

#[test]
fn inline_map_keeps_order_and_legacy_options() {
    let ok = r#"
version: 1
base_dir: "public"
sdk_configs:
  header: { entry: "/header.js", css: ["/header.css"] }
  cart: { entry: "/cart.js", chunks: ["/cart-vendor.js"], version: "4.0.1" }
options:
  timeout: 2500
  chunksDep: true
  cssEffect: legacy
document:
  adopted_stylesheets: true
  broken_links: ["/missing.css"]
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.options.timeout, 2500);
    assert!(cfg.options.chunks_preload);
    assert_eq!(cfg.options.css_effect, CssEffect::Link);
    assert!(cfg.document.adopted_stylesheets);

    let SdkConfigs::Map(map) = cfg.sdk_configs else {
        panic!("expected inline map");
    };
    assert_eq!(map.names().collect::<Vec<_>>(), ["header", "cart"]);
    assert_eq!(map.get("cart").unwrap().version.as_deref(), Some("4.0.1"));
}

#[test]
fn inline_map_shape_errors_are_rejected() {
    let bad = r#"
version: 1
sdk_configs:
  header: { entry: "/header.js", chunks: "/vendor.js" }
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.kind().as_str(), "CONFIG");
    assert!(err.to_string().contains("chunks not array"), "{err}");
}

#[test]
fn timeout_and_version_ranges() {
    let zero = r#"
version: 1
sdk_configs: "/c.json"
options: { timeout: 0 }
"#;
    assert_eq!(config::load_from_str(zero).unwrap_err().kind().as_str(), "CONFIG");

    let v2 = r#"
version: 2
sdk_configs: "/c.json"
"#;
    let err = config::load_from_str(v2).unwrap_err();
    assert!(err.to_string().contains("unsupported config version"), "{err}");
}
