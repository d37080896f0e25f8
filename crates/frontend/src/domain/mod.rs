pub mod a001_catalog_item;
