//! Tests for query-pair serialization of list/search options.

use media_library::{FileType, ItemTypeFilter, ListFileOptions, SortOrder};

fn keys(pairs: &[(&'static str, String)]) -> Vec<&'static str> {
    pairs.iter().map(|(k, _)| *k).collect()
}

mod full_round_trip {
    use super::*;

    #[test]
    fn every_set_field_appears_exactly_once() {
        let options = ListFileOptions {
            path: Some("/sales-banner/".to_string()),
            file_type: Some(FileType::Image),
            tags: Some(vec!["summer".to_string(), "sale".to_string()]),
            include_folder: Some(true),
            name: Some("banner.jpg".to_string()),
            limit: Some(25),
            skip: Some(50),
            sort: Some(SortOrder::DescCreated),
            item_type: Some(ItemTypeFilter::All),
            search_query: Some("size > \"1mb\"".to_string()),
        };

        let pairs = options.to_query_pairs().unwrap();
        let mut keys = keys(&pairs);

        assert_eq!(pairs.len(), 10);
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 10, "duplicate query key emitted");
    }

    #[test]
    fn wire_names_and_spellings() {
        let options = ListFileOptions {
            path: Some("/sales-banner/".to_string()),
            file_type: Some(FileType::NonImage),
            tags: Some(vec!["summer".to_string(), "sale".to_string()]),
            include_folder: Some(true),
            name: Some("banner.jpg".to_string()),
            limit: Some(25),
            skip: Some(50),
            sort: Some(SortOrder::DescCreated),
            item_type: Some(ItemTypeFilter::All),
            search_query: Some("size > \"1mb\"".to_string()),
        };

        let pairs = options.to_query_pairs().unwrap();

        assert_eq!(
            pairs,
            vec![
                ("path", "/sales-banner/".to_string()),
                ("fileType", "non-image".to_string()),
                ("tags", "summer,sale".to_string()),
                ("includeFolder", "true".to_string()),
                ("name", "banner.jpg".to_string()),
                ("limit", "25".to_string()),
                ("skip", "50".to_string()),
                ("sort", "DESC_CREATED".to_string()),
                ("type", "all".to_string()),
                ("searchQuery", "size > \"1mb\"".to_string()),
            ]
        );
    }

    #[test]
    fn serialization_is_deterministic() {
        let options = ListFileOptions {
            path: Some("/products/".to_string()),
            sort: Some(SortOrder::AscName),
            limit: Some(100),
            ..Default::default()
        };

        assert_eq!(
            options.to_query_pairs().unwrap(),
            options.to_query_pairs().unwrap()
        );
    }
}

mod unset_fields {
    use super::*;

    #[test]
    fn default_options_emit_nothing() {
        assert!(ListFileOptions::default().to_query_pairs().unwrap().is_empty());
    }

    #[test]
    fn path_and_limit_emit_no_other_filter_keys() {
        let options = ListFileOptions {
            path: Some("/sales-banner/".to_string()),
            limit: Some(10),
            ..Default::default()
        };

        let pairs = options.to_query_pairs().unwrap();
        assert_eq!(keys(&pairs), vec!["path", "limit"]);
        assert_eq!(pairs[0].1, "/sales-banner/");
        assert_eq!(pairs[1].1, "10");
    }

    #[test]
    fn include_folder_false_is_still_transmitted() {
        // Explicitly-set false differs from unset: the server default is in
        // play only when the key is absent.
        let options = ListFileOptions {
            include_folder: Some(false),
            ..Default::default()
        };

        let pairs = options.to_query_pairs().unwrap();
        assert_eq!(pairs, vec![("includeFolder", "false".to_string())]);
    }
}

mod limit_validation {
    use super::*;

    #[test]
    fn boundary_values_accepted() {
        for limit in [1, 1000] {
            let options = ListFileOptions {
                limit: Some(limit),
                ..Default::default()
            };
            assert!(options.to_query_pairs().is_ok(), "limit {} rejected", limit);
        }
    }

    #[test]
    fn out_of_range_rejected_not_clamped() {
        for limit in [0, 1001, u32::MAX] {
            let options = ListFileOptions {
                limit: Some(limit),
                ..Default::default()
            };
            assert!(options.to_query_pairs().is_err(), "limit {} accepted", limit);
        }
    }
}

mod tags {
    use super::*;

    #[test]
    fn single_tag_has_no_separator() {
        let options = ListFileOptions {
            tags: Some(vec!["summer".to_string()]),
            ..Default::default()
        };

        let pairs = options.to_query_pairs().unwrap();
        assert_eq!(pairs, vec![("tags", "summer".to_string())]);
    }

    #[test]
    fn empty_tag_list_rejected() {
        let options = ListFileOptions {
            tags: Some(Vec::new()),
            ..Default::default()
        };

        assert!(options.to_query_pairs().is_err());
    }
}

mod search_query {
    use super::*;

    #[test]
    fn opaque_query_string_passed_through() {
        let query = "createdAt > \"7d\" AND size > \"1mb\"";
        let options = ListFileOptions {
            search_query: Some(query.to_string()),
            ..Default::default()
        };

        let pairs = options.to_query_pairs().unwrap();
        assert_eq!(pairs, vec![("searchQuery", query.to_string())]);
    }

    #[test]
    fn does_not_suppress_tags_type_or_name() {
        let options = ListFileOptions {
            tags: Some(vec!["summer".to_string()]),
            name: Some("banner.jpg".to_string()),
            item_type: Some(ItemTypeFilter::File),
            search_query: Some("size > \"1mb\"".to_string()),
            ..Default::default()
        };

        let keys = keys(&options.to_query_pairs().unwrap());
        assert!(keys.contains(&"tags"));
        assert!(keys.contains(&"name"));
        assert!(keys.contains(&"type"));
        assert!(keys.contains(&"searchQuery"));
    }
}

mod sort_tokens {
    use super::*;

    #[test]
    fn all_tokens_match_wire_spellings() {
        let cases = [
            (SortOrder::AscName, "ASC_NAME"),
            (SortOrder::DescName, "DESC_NAME"),
            (SortOrder::AscCreated, "ASC_CREATED"),
            (SortOrder::DescCreated, "DESC_CREATED"),
            (SortOrder::AscUpdated, "ASC_UPDATED"),
            (SortOrder::DescUpdated, "DESC_UPDATED"),
            (SortOrder::AscHeight, "ASC_HEIGHT"),
            (SortOrder::DescHeight, "DESC_HEIGHT"),
            (SortOrder::AscWidth, "ASC_WIDTH"),
            (SortOrder::DescWidth, "DESC_WIDTH"),
            (SortOrder::AscSize, "ASC_SIZE"),
            (SortOrder::DescSize, "DESC_SIZE"),
        ];

        for (sort, expected) in cases {
            let options = ListFileOptions {
                sort: Some(sort),
                ..Default::default()
            };

            let pairs = options.to_query_pairs().unwrap();
            assert_eq!(pairs, vec![("sort", expected.to_string())]);
        }
    }
}
