pub mod geojson_region_repository;
