mod scanner;

pub use scanner::WalkdirCatalogSource;
