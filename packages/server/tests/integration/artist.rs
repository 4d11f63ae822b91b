use crate::common::{FUTURE, PAST, TestApp, routes};
use serde_json::json;

mod artist_listing {
    use super::*;

    #[tokio::test]
    async fn lists_ids_and_names_in_creation_order() {
        let app = TestApp::spawn().await;
        let first = app.create_artist("Guns N Petals").await;
        let second = app.create_artist("Matt Quevedo").await;

        let res = app.get(routes::ARTISTS).await;

        assert_eq!(res.status, 200);
        assert_eq!(
            res.body,
            json!([
                {"id": first, "name": "Guns N Petals"},
                {"id": second, "name": "Matt Quevedo"},
            ])
        );
    }
}

mod artist_creation {
    use super::*;

    #[tokio::test]
    async fn form_submission_sets_seeking_venue() {
        let app = TestApp::spawn().await;

        let res = app
            .post_form(
                routes::ARTISTS,
                &[
                    ("name", "The Wild Sax Band"),
                    ("city", "San Francisco"),
                    ("state", "CA"),
                    ("phone", "432-325-5432"),
                    ("genres", "Jazz"),
                    ("genres", "Classical"),
                    ("seeking_venue", "y"),
                ],
            )
            .await;

        assert_eq!(res.status, 201, "{}", res.text);
        assert_eq!(res.body["seeking_venue"], true);
        assert_eq!(res.body["genres"], json!(["Jazz", "Classical"]));
    }

    #[tokio::test]
    async fn missing_state_is_rejected() {
        let app = TestApp::spawn().await;
        let res = app
            .post(routes::ARTISTS, &json!({"name": "Solo", "city": "SF"}))
            .await;
        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }
}

mod artist_detail {
    use super::*;

    #[tokio::test]
    async fn counts_both_partitions() {
        let app = TestApp::spawn().await;
        let artist = app.create_artist("Matt Quevedo").await;
        let venue = app.create_venue("The Dueling Pianos Bar", "New York", "NY").await;
        app.create_show(artist, venue, FUTURE).await;
        app.create_show(artist, venue, FUTURE).await;
        app.create_show(artist, venue, PAST).await;

        let res = app.get(&routes::artist(artist)).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["upcoming_shows_count"], 2);
        assert_eq!(res.body["past_shows_count"], 1);
        let upcoming = &res.body["upcoming_shows"][0];
        assert_eq!(upcoming["venue_id"], venue);
        assert_eq!(upcoming["venue_name"], "The Dueling Pianos Bar");
        assert_eq!(upcoming["start_time"], "2099-05-21 21:30:00");
    }

    #[tokio::test]
    async fn unknown_artist_is_not_found() {
        let app = TestApp::spawn().await;
        let res = app.get(&routes::artist(12)).await;
        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn edit_unknown_artist_is_not_found() {
        let app = TestApp::spawn().await;
        assert_eq!(app.get(&routes::artist_edit(12)).await.status, 404);
    }
}

mod artist_search {
    use super::*;

    #[tokio::test]
    async fn search_reports_upcoming_show_counts() {
        let app = TestApp::spawn().await;
        let band = app.create_artist("The Wild Sax Band").await;
        app.create_artist("Guns N Petals").await;
        let venue = app.create_venue("The Fillmore", "SF", "CA").await;
        app.create_show(band, venue, FUTURE).await;

        let res = app
            .post(routes::ARTIST_SEARCH, &json!({"search_term": "band"}))
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["count"], 1);
        assert_eq!(res.body["data"][0]["id"], band);
        assert_eq!(res.body["data"][0]["num_upcoming_shows"], 1);
    }

    #[tokio::test]
    async fn missing_term_matches_all() {
        let app = TestApp::spawn().await;
        app.create_artist("A").await;
        app.create_artist("B").await;

        let res = app.post(routes::ARTIST_SEARCH, &json!({})).await;

        assert_eq!(res.body["count"], 2);
    }
}

mod artist_update {
    use super::*;

    #[tokio::test]
    async fn put_replaces_and_edit_reflects_it() {
        let app = TestApp::spawn().await;
        let id = app.create_artist("Guns N Petals").await;

        let res = app
            .put(
                &routes::artist(id),
                &json!({
                    "name": "Guns N Roses",
                    "city": "Los Angeles",
                    "state": "CA",
                    "genres": ["Rock"],
                    "seeking_venue": true,
                    "seeking_description": "Arena tour",
                }),
            )
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["image_link"], json!(null));

        let stored = app.get(&routes::artist_edit(id)).await;
        assert_eq!(stored.body["name"], "Guns N Roses");
        assert_eq!(stored.body["seeking_venue"], true);
        assert_eq!(stored.body["seeking_description"], "Arena tour");
    }

    #[tokio::test]
    async fn put_unknown_artist_is_not_found() {
        let app = TestApp::spawn().await;
        let res = app
            .put(
                &routes::artist(4),
                &json!({"name": "X", "city": "Y", "state": "Z"}),
            )
            .await;
        assert_eq!(res.status, 404);
    }
}
