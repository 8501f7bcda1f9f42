pub mod idf_cache;

pub use idf_cache::IdfCache;
