pub mod assistant_catalog_embedded;
pub mod template_assets;
