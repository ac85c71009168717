// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

#[cfg(test)]
mod tests {
    use elementor_bridge::config::settings::Settings;
    use elementor_bridge::utils::url_utils::{
        compute_origin_candidates, media_urls, strip_known_origin, UrlMapper,
    };

    fn settings(frontend: Option<&str>, use_wp_domain: bool) -> Settings {
        let mut builder = Settings::builder()
            .unwrap()
            .set_override("site.home_url", "https://cms.example.com")
            .unwrap()
            .set_override("site.use_wp_domain_for_urls", use_wp_domain)
            .unwrap();
        if let Some(frontend) = frontend {
            builder = builder.set_override("site.frontend_uri", frontend).unwrap();
        }
        builder.build().unwrap().try_deserialize().unwrap()
    }

    #[test]
    fn test_mapper_from_settings() {
        let mapper = UrlMapper::from_settings(&settings(Some("https://www.example.com"), false).site);
        assert!(mapper.domain_replacement_enabled());
        assert_eq!(
            mapper.to_public_url("https://cms.example.com/news/"),
            "https://www.example.com/news/"
        );

        let forced = UrlMapper::from_settings(&settings(Some("https://www.example.com"), true).site);
        assert!(!forced.domain_replacement_enabled());

        let bare = UrlMapper::from_settings(&settings(None, false).site);
        assert!(!bare.domain_replacement_enabled());
        assert_eq!(bare.frontend_base(), None);
    }

    #[test]
    fn test_media_origin_round_trip_through_candidates() {
        let candidates = compute_origin_candidates("https://cms.example.com");
        let media = media_urls(&candidates, "/wp-content/uploads");
        assert_eq!(
            media,
            vec![
                "https://cms.example.com/wp-content/uploads",
                "http://cms.example.com/wp-content/uploads",
                "//cms.example.com/wp-content/uploads",
            ]
        );

        for url in &media {
            assert_eq!(
                strip_known_origin(&candidates, &format!("{url}/2024/05/a.jpg")),
                "/wp-content/uploads/2024/05/a.jpg"
            );
        }
        assert_eq!(strip_known_origin(&candidates, "https://cdn.example.net/a.jpg"), "");
    }
}
