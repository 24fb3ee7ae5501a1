use crate::{config::UrlBase, error::GalleryError};
use serde::Deserialize;
use tracing::info;

pub const STRUCTURE_FILE: &str = "folder_structure.json";

/// Wire shape of `folder_structure.json`.
///
/// A node carrying a `children` array is a folder, even when the array is
/// empty; everything else is a file. Dimensions are only ever present on
/// files.
#[derive(Debug, Clone, Deserialize)]
pub struct RawNode {
    pub name: String,
    pub children: Option<Vec<RawNode>>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// One-shot fetch of the folder structure from the configured host.
pub async fn fetch_structure(base: &UrlBase) -> Result<RawNode, GalleryError> {
    let url = base.join(&[STRUCTURE_FILE]);

    info!("Fetching {url}");

    let response = reqwest::get(&url).await?.error_for_status()?;
    let raw = response.json::<RawNode>().await?;

    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folder_and_file_shapes() {
        let raw: RawNode = serde_json::from_str(
            r#"{"name":"root","children":[{"name":"a.png","width":640,"height":480},{"name":"empty","children":[]}]}"#,
        )
        .unwrap();

        let children = raw.children.unwrap();
        assert!(children[0].children.is_none());
        assert_eq!(Some(640), children[0].width);
        assert!(children[1].children.as_ref().unwrap().is_empty());
    }

    #[test]
    fn missing_name_is_rejected() {
        let result = serde_json::from_str::<RawNode>(r#"{"children":[]}"#);
        assert!(result.is_err());
    }
}
