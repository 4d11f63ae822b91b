use crate::common::{FUTURE, PAST, TestApp, routes};
use serde_json::json;

fn venue_body(name: &str) -> serde_json::Value {
    json!({
        "name": name,
        "city": "New York",
        "state": "NY",
        "address": "335 Delancey Street",
        "phone": "914-003-1132",
        "genres": ["Classical", "R&B", "Hip-Hop"],
        "website": "https://www.theduelingpianos.com",
        "facebook_link": "https://www.facebook.com/theduelingpianos",
        "seeking_talent": false,
        "image_link": "https://img.example/pianos",
    })
}

mod venue_listing {
    use super::*;

    #[tokio::test]
    async fn venues_in_same_city_are_grouped() {
        let app = TestApp::spawn().await;
        let fillmore = app.create_venue("The Fillmore", "SF", "CA").await;
        let roxy = app.create_venue("The Roxy", "SF", "CA").await;

        let res = app.get(routes::VENUES).await;

        assert_eq!(res.status, 200);
        let groups = res.body.as_array().unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0]["city"], "SF");
        assert_eq!(groups[0]["state"], "CA");
        let venues = groups[0]["venues"].as_array().unwrap();
        assert_eq!(venues[0]["id"], fillmore);
        assert_eq!(venues[1]["id"], roxy);
        assert_eq!(venues[0]["num_upcoming_shows"], 0);
    }

    #[tokio::test]
    async fn groups_keep_first_seen_order() {
        let app = TestApp::spawn().await;
        app.create_venue("A", "New York", "NY").await;
        app.create_venue("B", "San Francisco", "CA").await;
        app.create_venue("C", "New York", "NY").await;

        let res = app.get(routes::VENUES).await;

        let groups = res.body.as_array().unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0]["city"], "New York");
        assert_eq!(groups[0]["venues"].as_array().unwrap().len(), 2);
        assert_eq!(groups[1]["city"], "San Francisco");
    }

    #[tokio::test]
    async fn upcoming_counts_ignore_past_shows() {
        let app = TestApp::spawn().await;
        let venue = app.create_venue("The Fillmore", "SF", "CA").await;
        let artist = app.create_artist("Guns N Petals").await;
        app.create_show(artist, venue, FUTURE).await;
        app.create_show(artist, venue, PAST).await;

        let res = app.get(routes::VENUES).await;

        assert_eq!(res.body[0]["venues"][0]["num_upcoming_shows"], 1);
    }

    #[tokio::test]
    async fn empty_store_lists_no_groups() {
        let app = TestApp::spawn().await;
        let res = app.get(routes::VENUES).await;
        assert_eq!(res.status, 200);
        assert_eq!(res.body, json!([]));
    }
}

mod venue_creation {
    use super::*;

    #[tokio::test]
    async fn json_submission_is_stored() {
        let app = TestApp::spawn().await;

        let res = app.post(routes::VENUES, &venue_body("The Dueling Pianos Bar")).await;

        assert_eq!(res.status, 201);
        assert_eq!(res.body["name"], "The Dueling Pianos Bar");
        assert_eq!(res.body["genres"], json!(["Classical", "R&B", "Hip-Hop"]));
        assert_eq!(res.body["seeking_talent"], false);
        assert_eq!(res.body["seeking_description"], json!(null));
    }

    #[tokio::test]
    async fn form_submission_collects_repeated_genres_and_checkbox() {
        let app = TestApp::spawn().await;

        let res = app
            .post_form(
                routes::VENUES,
                &[
                    ("name", "Park Square Live Music & Coffee"),
                    ("city", "San Francisco"),
                    ("state", "CA"),
                    ("phone", ""),
                    ("genres", "Rock n Roll"),
                    ("genres", "Jazz"),
                    ("seeking_talent", "y"),
                    ("seeking_description", "Looking for local acts"),
                ],
            )
            .await;

        assert_eq!(res.status, 201, "{}", res.text);
        assert_eq!(res.body["genres"], json!(["Rock n Roll", "Jazz"]));
        assert_eq!(res.body["seeking_talent"], true);
        assert_eq!(res.body["phone"], json!(null));
    }

    #[tokio::test]
    async fn checkbox_value_other_than_y_is_false() {
        let app = TestApp::spawn().await;

        let res = app
            .post_form(
                routes::VENUES,
                &[
                    ("name", "The Roxy"),
                    ("city", "SF"),
                    ("state", "CA"),
                    ("seeking_talent", "on"),
                ],
            )
            .await;

        assert_eq!(res.status, 201);
        assert_eq!(res.body["seeking_talent"], false);
    }

    #[tokio::test]
    async fn blank_name_is_rejected() {
        let app = TestApp::spawn().await;
        let mut body = venue_body("x");
        body["name"] = json!("   ");

        let res = app.post(routes::VENUES, &body).await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn long_name_and_city_are_accepted() {
        let app = TestApp::spawn().await;
        let name = "N".repeat(200);
        let mut body = venue_body(&name);
        body["city"] = json!("C".repeat(150));

        let res = app.post(routes::VENUES, &body).await;

        assert_eq!(res.status, 201, "{}", res.text);
        assert_eq!(res.body["name"], name.as_str());
    }

    #[tokio::test]
    async fn malformed_json_is_a_validation_error() {
        let app = TestApp::spawn().await;
        let res = app.post(routes::VENUES, &json!({"name": 42})).await;
        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }
}

mod venue_detail {
    use super::*;

    #[tokio::test]
    async fn detail_partitions_shows() {
        let app = TestApp::spawn().await;
        let venue = app.create_venue("The Musical Hop", "San Francisco", "CA").await;
        let artist = app.create_artist("Guns N Petals").await;
        app.create_show(artist, venue, PAST).await;
        app.create_show(artist, venue, FUTURE).await;
        app.create_show(artist, venue, FUTURE).await;

        let res = app.get(&routes::venue(venue)).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["name"], "The Musical Hop");
        assert_eq!(res.body["address"], "1015 Folsom Street");
        assert_eq!(res.body["past_shows_count"], 1);
        assert_eq!(res.body["upcoming_shows_count"], 2);
        let past = &res.body["past_shows"][0];
        assert_eq!(past["artist_id"], artist);
        assert_eq!(past["artist_name"], "Guns N Petals");
        assert_eq!(past["artist_image_link"], "https://img.example/Guns N Petals");
        assert_eq!(past["start_time"], "2019-05-21 21:30:00");
    }

    #[tokio::test]
    async fn unknown_venue_is_not_found() {
        let app = TestApp::spawn().await;
        let res = app.get(&routes::venue(999)).await;
        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn edit_returns_stored_record() {
        let app = TestApp::spawn().await;
        let created = app.post(routes::VENUES, &venue_body("The Dueling Pianos Bar")).await;

        let res = app.get(&routes::venue_edit(created.id())).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body, created.body);
    }
}

mod venue_search {
    use super::*;

    #[tokio::test]
    async fn search_is_case_insensitive() {
        let app = TestApp::spawn().await;
        app.create_venue("The Musical Hop", "San Francisco", "CA").await;
        app.create_venue("The Dueling Pianos Bar", "New York", "NY").await;
        app.create_venue("Park Square Live Music & Coffee", "San Francisco", "CA").await;

        let res = app.post(routes::VENUE_SEARCH, &json!({"search_term": "MUSIC"})).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["count"], 2);
        assert_eq!(res.body["data"][0]["name"], "The Musical Hop");
        assert_eq!(res.body["data"][1]["name"], "Park Square Live Music & Coffee");
    }

    #[tokio::test]
    async fn empty_term_matches_all() {
        let app = TestApp::spawn().await;
        app.create_venue("A", "SF", "CA").await;
        app.create_venue("B", "SF", "CA").await;

        let res = app.post_form(routes::VENUE_SEARCH, &[("search_term", "")]).await;

        assert_eq!(res.body["count"], 2);
    }
}

mod venue_update {
    use super::*;

    #[tokio::test]
    async fn put_replaces_every_field() {
        let app = TestApp::spawn().await;
        let created = app.post(routes::VENUES, &venue_body("The Dueling Pianos Bar")).await;
        let id = created.id();

        let res = app
            .put(
                &routes::venue(id),
                &json!({
                    "name": "Dueling Pianos",
                    "city": "Brooklyn",
                    "state": "NY",
                    "seeking_talent": "y",
                }),
            )
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["id"], id);
        assert_eq!(res.body["name"], "Dueling Pianos");
        assert_eq!(res.body["phone"], json!(null));
        assert_eq!(res.body["genres"], json!([]));
        assert_eq!(res.body["seeking_talent"], true);

        let stored = app.get(&routes::venue_edit(id)).await;
        assert_eq!(stored.body, res.body);
    }

    #[tokio::test]
    async fn put_unknown_venue_is_not_found() {
        let app = TestApp::spawn().await;
        let res = app.put(&routes::venue(7), &venue_body("Ghost")).await;
        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");
    }
}

mod venue_deletion {
    use super::*;

    #[tokio::test]
    async fn delete_removes_venue_and_its_shows() {
        let app = TestApp::spawn().await;
        let doomed = app.create_venue("Doomed", "SF", "CA").await;
        let kept = app.create_venue("Kept", "SF", "CA").await;
        let artist = app.create_artist("Band").await;
        app.create_show(artist, doomed, FUTURE).await;
        app.create_show(artist, kept, FUTURE).await;

        let res = app.delete(&routes::venue(doomed)).await;
        assert_eq!(res.status, 204);

        assert_eq!(app.get(&routes::venue(doomed)).await.status, 404);
        let shows = app.get(routes::SHOWS).await;
        let shows = shows.body.as_array().unwrap();
        assert_eq!(shows.len(), 1);
        assert_eq!(shows[0]["venue_id"], kept);

        let artist_view = app.get(&routes::artist(artist)).await;
        assert_eq!(artist_view.body["upcoming_shows_count"], 1);
    }

    #[tokio::test]
    async fn delete_unknown_venue_is_not_found() {
        let app = TestApp::spawn().await;
        let res = app.delete(&routes::venue(3)).await;
        assert_eq!(res.status, 404);
    }
}
