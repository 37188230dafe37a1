//! Configuration source strategies
//!
//! One strategy per location scheme:
//! - `ClasspathStrategy`: embedded resources registered in-process
//! - `FileStrategy`: local filesystem
//! - `HttpStrategy`: http/https endpoints

mod classpath;
mod file;
mod http;
mod traits;

pub use classpath::{register_resource, unregister_resource, ClasspathStrategy};
pub use file::FileStrategy;
pub use http::HttpStrategy;
pub use traits::SourceStrategy;

use crate::types::{Location, Scheme};

/// Select the loading strategy for a location's scheme
///
/// The scheme set is closed and `Location` construction already rejected
/// anything outside it, so selection cannot fail.
pub fn select_strategy(location: &Location) -> Box<dyn SourceStrategy> {
    match location.scheme() {
        Scheme::Classpath => Box::new(ClasspathStrategy::new(location)),
        Scheme::File => Box::new(FileStrategy::new(location)),
        Scheme::Http | Scheme::Https => Box::new(HttpStrategy::new(location)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_by_scheme() {
        let cases = [
            ("classpath:/cfg", "classpath"),
            ("file:/etc/myapp", "file"),
            ("http://cfg.internal/app", "http"),
            ("https://cfg.internal/app", "http"),
        ];
        for (uri, expected) in cases {
            let location = Location::parse(uri).unwrap();
            assert_eq!(select_strategy(&location).name(), expected);
        }
    }
}
