use crate::config::links::LinkEndpoints;
use crate::domain::model::{MapRecord, UrlBundle};
use crate::domain::ports::LinkConfig;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Same escape set as JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// `data:text/x-url,` already escaped.
const DATA_URL_PREFIX: &str = "data%3Atext%2Fx-url%2C";

pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// Builds viewer and editor deep links for a map.
pub struct UrlBuilder<L: LinkConfig = LinkEndpoints> {
    links: L,
}

impl<L: LinkConfig> UrlBuilder<L> {
    pub fn new(links: L) -> Self {
        Self { links }
    }

    pub fn annotation_url(&self, image_id: &str) -> String {
        format!(
            "{}/images/{}",
            self.links.annotations_base().trim_end_matches('/'),
            image_id
        )
    }

    pub fn build_urls(&self, map: &MapRecord) -> UrlBundle {
        let annotation_url = self.annotation_url(&map.image.id);

        let viewer = format!(
            "{}#data={}{}",
            self.links.viewer_base(),
            DATA_URL_PREFIX,
            encode_uri_component(&annotation_url)
        );

        // The editor receives the image URI verbatim.
        let editor = format!(
            "{}#/mask?url={}&image={}&map={}",
            self.links.editor_base(),
            map.image.uri,
            map.image.id,
            map.id
        );

        tracing::trace!(map_id = %map.id, %viewer, %editor, "built deep links");
        UrlBundle { viewer, editor }
    }
}

impl Default for UrlBuilder {
    fn default() -> Self {
        Self::new(LinkEndpoints::default())
    }
}

/// Deep links against the public allmaps endpoints.
pub fn get_urls(map: &MapRecord) -> UrlBundle {
    UrlBuilder::<LinkEndpoints>::default().build_urls(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ImageRef;

    fn map() -> MapRecord {
        MapRecord {
            id: "m1".to_string(),
            updated_at: None,
            image: ImageRef {
                id: "i1".to_string(),
                uri: "https://example.org/iiif/i1".to_string(),
            },
        }
    }

    #[test]
    fn test_encode_uri_component() {
        assert_eq!(
            encode_uri_component("https://annotations.allmaps.org/images/i1"),
            "https%3A%2F%2Fannotations.allmaps.org%2Fimages%2Fi1"
        );
        assert_eq!(encode_uri_component("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(encode_uri_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_uri_component("é"), "%C3%A9");
    }

    #[test]
    fn test_build_urls() {
        let urls = get_urls(&map());

        assert_eq!(
            urls.editor,
            "https://editor.allmaps.org/#/mask?url=https://example.org/iiif/i1&image=i1&map=m1"
        );
        assert_eq!(
            urls.viewer,
            "https://viewer.allmaps.org/#data=data%3Atext%2Fx-url%2Chttps%3A%2F%2Fannotations.allmaps.org%2Fimages%2Fi1"
        );
    }

    #[test]
    fn test_editor_url_is_not_encoded() {
        let mut map = map();
        map.image.uri = "https://example.org/iiif/a b?x=1&y=2".to_string();

        let urls = get_urls(&map);
        assert!(urls
            .editor
            .contains("url=https://example.org/iiif/a b?x=1&y=2&image=i1"));
    }

    #[test]
    fn test_custom_endpoints() {
        let links = LinkEndpoints {
            annotations: "http://localhost:8080/".to_string(),
            viewer: "http://localhost:5173/".to_string(),
            editor: "http://localhost:5174/".to_string(),
        };
        let builder = UrlBuilder::new(links);

        assert_eq!(builder.annotation_url("i1"), "http://localhost:8080/images/i1");
        let urls = builder.build_urls(&map());
        assert!(urls.viewer.starts_with("http://localhost:5173/#data="));
        assert!(urls.editor.starts_with("http://localhost:5174/#/mask?"));
    }
}
