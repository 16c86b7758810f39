use map_props::utils::validation::Validate;
use map_props::{get_urls, ImageRef, LinkEndpoints, MapRecord, TomlConfig, UrlBuilder};

fn map(id: &str, image_id: &str, uri: &str) -> MapRecord {
    MapRecord {
        id: id.to_string(),
        updated_at: None,
        image: ImageRef {
            id: image_id.to_string(),
            uri: uri.to_string(),
        },
    }
}

#[test]
fn test_default_deep_links() {
    let urls = get_urls(&map("m1", "i1", "https://example.org/iiif/i1"));

    assert_eq!(
        urls.editor,
        "https://editor.allmaps.org/#/mask?url=https://example.org/iiif/i1&image=i1&map=m1"
    );

    let (base, data) = urls
        .viewer
        .split_once("#data=data%3Atext%2Fx-url%2C")
        .expect("viewer link carries a data url");
    assert_eq!(base, "https://viewer.allmaps.org/");
    assert_eq!(data, "https%3A%2F%2Fannotations.allmaps.org%2Fimages%2Fi1");
}

#[test]
fn test_build_urls_is_deterministic() {
    let record = map(
        "https://annotations.allmaps.org/maps/a9458d2f895dcdfb",
        "4af0fa9c8207b36c",
        "https://iiif.digitalcommonwealth.org/iiif/2/commonwealth:4m90dv86j",
    );

    let builder = UrlBuilder::<LinkEndpoints>::default();
    let first = builder.build_urls(&record);
    let second = builder.build_urls(&record);
    assert_eq!(first, second);
    assert_eq!(first, get_urls(&record));
}

#[test]
fn test_encoding_asymmetry() {
    let record = map("m 1", "i/1", "https://example.org/iiif/with space");
    let urls = get_urls(&record);

    // viewer escapes the whole annotation URL, editor passes everything through
    assert!(urls.viewer.ends_with("%2Fimages%2Fi%2F1"));
    assert!(urls
        .editor
        .ends_with("url=https://example.org/iiif/with space&image=i/1&map=m 1"));
}

#[test]
fn test_links_from_toml_config() {
    let config = TomlConfig::from_toml_str(
        r#"
[links]
annotations = "https://annotations.example.test"
viewer = "https://viewer.example.test/"
editor = "https://editor.example.test/"
"#,
    )
    .unwrap();
    config.validate().unwrap();

    let urls = UrlBuilder::new(config).build_urls(&map("m1", "i1", "https://example.org/iiif/i1"));
    assert_eq!(
        urls.viewer,
        "https://viewer.example.test/#data=data%3Atext%2Fx-url%2Chttps%3A%2F%2Fannotations.example.test%2Fimages%2Fi1"
    );
    assert_eq!(
        urls.editor,
        "https://editor.example.test/#/mask?url=https://example.org/iiif/i1&image=i1&map=m1"
    );
}
