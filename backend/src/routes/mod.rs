pub mod landing;
pub mod predict;
pub mod trends;

#[cfg(test)]
mod tests {
    #[test]
    fn test_module_structure() {
        // Route paths are unique across modules
        let paths = [
            super::landing::GET_INDEX,
            super::landing::GET_CATEGORIES,
            super::predict::POST_PREDICT,
            super::trends::GET_SAMPLE_DATA,
            super::trends::GET_TRENDS_PAGE,
        ];
        for (i, a) in paths.iter().enumerate() {
            assert!(a.starts_with('/'));
            assert!(paths[i + 1..].iter().all(|b| a != b));
        }
    }
}
