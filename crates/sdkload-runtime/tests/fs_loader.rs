#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;
use std::sync::Arc;

use sdkload_core::CssEffect;
use sdkload_runtime::dom::{DocumentRoot, MemoryDocument};
use sdkload_runtime::host::{Export, FsModuleLoader, Host, ModuleLoader};
use sdkload_runtime::{LoadOptions, LoadParams, SdkLoader};

fn fixture() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("nav")).unwrap();
    fs::write(
        root.join("sdk-config.json"),
        r#"{
  "nav": { "entry": "/nav/index.js", "chunks": ["/nav/vendor.js"], "css": ["/nav/nav.css"], "version": "1.0.0" },
  "footer": { "entry": "/footer.js" }
}"#,
    )
    .unwrap();
    fs::write(root.join("nav/index.js"), "export default {}").unwrap();
    fs::write(root.join("nav/vendor.js"), "export const v = 1").unwrap();
    fs::write(root.join("nav/nav.css"), "nav { display: flex; }").unwrap();
    fs::write(root.join("footer.js"), "export default {}").unwrap();
    dir
}

#[tokio::test]
async fn exports_follow_the_file_kind() {
    let dir = fixture();
    let modules = FsModuleLoader::new(dir.path());

    let cfg = modules.resolve("/sdk-config.json").await.unwrap();
    assert!(matches!(cfg.default_export(), Some(Export::Json(_))));

    let css = modules.resolve("nav/nav.css").await.unwrap();
    match css.default_export() {
        Some(Export::StyleSheet(sheet)) => assert_eq!(sheet.text(), "nav { display: flex; }"),
        other => panic!("expected stylesheet, got {other:?}"),
    }

    let js = modules.resolve("/footer.js").await.unwrap();
    assert!(js.default_export().is_none());
    assert_eq!(&js.source()[..], b"export default {}");

    // cached per specifier
    let again = modules.resolve("/footer.js").await.unwrap();
    assert!(Arc::ptr_eq(&js, &again));
}

#[tokio::test]
async fn paths_outside_base_dir_are_rejected() {
    let dir = fixture();
    let modules = FsModuleLoader::new(dir.path().join("nav"));

    let err = modules.resolve("../footer.js").await.unwrap_err();
    assert_eq!(err.kind().as_str(), "LOAD");
    let err = modules.resolve("/missing.js").await.unwrap_err();
    assert_eq!(err.kind().as_str(), "LOAD");
}

#[tokio::test]
async fn full_load_from_disk() {
    let dir = fixture();
    let doc = Arc::new(MemoryDocument::new().with_adoption(true));
    let loader = SdkLoader::new(Host::new(Arc::new(FsModuleLoader::new(dir.path())), doc.clone()));

    let options = LoadOptions::default()
        .with_css_effect(CssEffect::Auto)
        .with_chunks_preload(true);
    let results = loader
        .load(LoadParams::new("/sdk-config.json").with_options(options))
        .await
        .unwrap();

    assert_eq!(results.names().collect::<Vec<_>>(), ["nav", "footer"]);
    let nav = results.get("nav").unwrap();
    assert_eq!(nav.entry.specifier(), "/nav/index.js");
    assert_eq!(nav.version.as_deref(), Some("1.0.0"));
    assert_eq!(nav.css.as_ref().unwrap().len(), 1);
    assert_eq!(doc.adopted_stylesheets().len(), 1);
    assert!(results.get("footer").unwrap().css.is_none());
}
