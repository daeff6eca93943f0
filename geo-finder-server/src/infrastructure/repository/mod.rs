pub mod ipgeo_repository;
