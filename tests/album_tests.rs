/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
mod helpers;

#[cfg(test)]
mod test {
    use crate::helpers;
    use lychee::{AlbumVisibility, LycheeError, ServerConfig};
    use serde_json::json;
    use wiremock::matchers::{body_json, body_string, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn expect_form(server: &MockServer, endpoint: &str, form: &str, reply: &str) {
        Mock::given(method("POST"))
            .and(path(format!("/api/{endpoint}")))
            .and(body_string(form))
            .respond_with(ResponseTemplate::new(200).set_body_string(reply))
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn add_album_serializes_title_and_parent() {
        let server = helpers::mock_gallery().await;
        expect_form(&server, "Album::add", "title=Trip&parent_id=0", "true").await;

        let mut client = helpers::connect(&server, ServerConfig::legacy()).await;
        assert!(client.add_album("Trip", Some("0")).await.unwrap());
    }

    #[tokio::test]
    async fn add_album_without_parent_uses_zero() {
        let server = helpers::mock_gallery().await;
        expect_form(&server, "Album::add", "title=Trip&parent_id=0", "true").await;

        let mut client = helpers::connect(&server, ServerConfig::legacy()).await;
        assert!(client.add_album("Trip", None).await.unwrap());
    }

    #[tokio::test]
    async fn add_album_as_json_on_current_servers() {
        let server = helpers::mock_gallery().await;
        Mock::given(method("POST"))
            .and(path("/api/Album::add"))
            .and(body_json(json!({"title": "Trip", "parent_id": "0"})))
            .respond_with(ResponseTemplate::new(201).set_body_string("\"12\""))
            .expect(1)
            .mount(&server)
            .await;

        let mut client = helpers::connect(&server, ServerConfig::current()).await;
        assert!(client.add_album("Trip", Some("")).await.unwrap());
    }

    #[tokio::test]
    async fn merge_puts_destination_first() {
        let server = helpers::mock_gallery().await;
        expect_form(&server, "Album::merge", "albumIDs=1%2C2%2C3", "true").await;

        let mut client = helpers::connect(&server, ServerConfig::legacy()).await;
        assert!(client.merge_albums("1", &["2", "3"]).await.unwrap());
    }

    #[tokio::test]
    async fn move_puts_destination_first() {
        let server = helpers::mock_gallery().await;
        expect_form(&server, "Album::move", "albumIDs=9%2C4", "true").await;

        let mut client = helpers::connect(&server, ServerConfig::legacy()).await;
        assert!(client.move_albums("9", &["4"]).await.unwrap());
    }

    #[tokio::test]
    async fn delete_joins_album_ids() {
        let server = helpers::mock_gallery().await;
        expect_form(&server, "Album::delete", "albumIDs=5%2C6", "true").await;

        let mut client = helpers::connect(&server, ServerConfig::legacy()).await;
        let ids = vec!["5".to_string(), "6".to_string()];
        assert!(client.delete_albums(&ids).await.unwrap());
    }

    #[tokio::test]
    async fn boolean_result_is_false_without_true_substring() {
        let server = helpers::mock_gallery().await;
        expect_form(&server, "Album::setLicense", "albumID=5&license=bogus", "\"nope\"").await;

        let mut client = helpers::connect(&server, ServerConfig::legacy()).await;
        assert!(!client.set_album_license("5", "bogus").await.unwrap());
    }

    #[tokio::test]
    async fn public_album_check_defaults_password() {
        let server = helpers::mock_gallery().await;
        expect_form(&server, "Album::getPublic", "albumID=8&password=rand", "true").await;
        expect_form(&server, "Album::getPublic", "albumID=8&password=hunter2", "true").await;

        let mut client = helpers::connect(&server, ServerConfig::legacy()).await;
        assert!(client.get_public_album("8", None).await.unwrap());
        assert!(client.get_public_album("8", Some("hunter2")).await.unwrap());
    }

    #[tokio::test]
    async fn wrong_public_password_is_forbidden_on_current_servers() {
        let server = helpers::mock_gallery().await;
        Mock::given(method("POST"))
            .and(path("/api/Album::getPublic"))
            .respond_with(
                ResponseTemplate::new(403).set_body_string("\"Warning: Wrong password!\""),
            )
            .mount(&server)
            .await;

        let mut client = helpers::connect(&server, ServerConfig::current()).await;
        let err = client.get_public_album("8", Some("bad")).await.unwrap_err();
        assert!(matches!(err, LycheeError::Forbidden(_)));
    }

    #[tokio::test]
    async fn set_public_sends_all_flags() {
        let server = helpers::mock_gallery().await;
        expect_form(
            &server,
            "Album::setPublic",
            concat!(
                "albumID=3&public=1&visible=1&nsfw=0&downloadable=1",
                "&share_button_visible=0&full_photo=0&password="
            ),
            "true",
        )
        .await;

        let mut client = helpers::connect(&server, ServerConfig::legacy()).await;
        let visibility = AlbumVisibility {
            public: true,
            visible: true,
            downloadable: true,
            ..Default::default()
        };
        assert!(client.set_album_public("3", &visibility).await.unwrap());
    }

    #[tokio::test]
    async fn titles_and_descriptions() {
        let server = helpers::mock_gallery().await;
        expect_form(&server, "Album::setTitle", "albumIDs=1%2C2&title=Summer+2024", "true").await;
        expect_form(&server, "Album::setDescription", "albumID=1&description=Beach", "true").await;

        let mut client = helpers::connect(&server, ServerConfig::legacy()).await;
        assert!(client.set_albums_title(&["1", "2"], "Summer 2024").await.unwrap());
        assert!(client.set_album_description("1", "Beach").await.unwrap());
    }

    #[tokio::test]
    async fn read_operations_return_body_verbatim() {
        let server = helpers::mock_gallery().await;
        let tree = json!({"albums": [{"id": "1", "albums": []}], "shared_albums": []});
        Mock::given(method("POST"))
            .and(path("/api/Albums::tree"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&tree))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/Album::getPositionData"))
            .and(body_string("albumID=1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"photos": []})))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/Albums::getPositionData"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"photos": [1]})))
            .mount(&server)
            .await;

        let mut client = helpers::connect(&server, ServerConfig::legacy()).await;
        assert_eq!(client.get_albums_tree().await.unwrap(), tree);
        assert_eq!(client.get_album_position_data("1").await.unwrap(), json!({"photos": []}));
        assert_eq!(client.get_albums_position_data().await.unwrap(), json!({"photos": [1]}));
    }

    #[tokio::test]
    async fn read_operation_with_non_json_body_fails() {
        let server = helpers::mock_gallery().await;
        Mock::given(method("POST"))
            .and(path("/api/Albums::get"))
            .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let mut client = helpers::connect(&server, ServerConfig::legacy()).await;
        let err = client.get_albums().await.unwrap_err();
        assert!(matches!(err, LycheeError::Deserialization(_)));
    }

    #[tokio::test]
    async fn archive_is_fetched_with_query_params() {
        let server = helpers::mock_gallery().await;
        let zip = vec![0x50u8, 0x4b, 0x03, 0x04, 0x00];
        Mock::given(method("GET"))
            .and(path("/api/Album::getArchive"))
            .and(query_param("albumIDs", "1,2"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(zip.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let mut client = helpers::connect(&server, ServerConfig::legacy()).await;
        let archive = client.get_albums_archive(&["1", "2"]).await.unwrap();
        assert_eq!(archive.as_ref(), zip.as_slice());
    }
}
