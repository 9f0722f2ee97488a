use rust_embed::RustEmbed;
use std::borrow::Cow;

#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct Asset;

pub const SITUATION_CATALOGUE: &str = "situations.txt";

pub fn get_asset_bytes(name: &str) -> Option<Cow<'static, [u8]>> {
    Asset::get(name).map(|f| f.data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_is_embedded() {
        let bytes = get_asset_bytes(SITUATION_CATALOGUE).unwrap();
        assert!(!bytes.is_empty());
        assert!(get_asset_bytes("missing.txt").is_none());
    }
}
