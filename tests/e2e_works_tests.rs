//! End-to-end tests for the works endpoints

mod common;

use common::*;
use reqwest::StatusCode;
use serde_json::Value;
use std::collections::HashSet;

fn catalog_ids(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .expect("data is not an array")
        .iter()
        .map(|w| w["catalogId"].as_str().unwrap().to_owned())
        .collect()
}

#[tokio::test]
async fn test_list_works_returns_whole_catalogue_on_one_page() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.get_works(&[]).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["total"], WORK_COUNT);
    assert_eq!(body["count"], WORK_COUNT);
    assert_eq!(body["page"], 1);
    assert_eq!(body["pageSize"], 50);
    assert_eq!(body["totalPages"], 1);
    assert_eq!(
        catalog_ids(&body),
        vec![
            "BWV 1", "BWV 1080", "BWV 140", "BWV 232", "BWV 988", "K. 525", "K. 551", "K. 626"
        ]
    );
}

#[tokio::test]
async fn test_filter_by_category_and_genre_alias() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let by_category: Value = client
        .get_works(&[("category", "keyboard")])
        .await
        .json()
        .await
        .unwrap();
    let by_genre: Value = client
        .get_works(&[("genre", "KEYBOARD")])
        .await
        .json()
        .await
        .unwrap();

    assert_eq!(catalog_ids(&by_category), vec!["BWV 1080", GOLDBERG_ID]);
    assert_eq!(catalog_ids(&by_genre), catalog_ids(&by_category));
}

#[tokio::test]
async fn test_filters_combine_as_conjunction() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let body: Value = client
        .get_works(&[("composer", MOZART_ID), ("key", "d minor")])
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(catalog_ids(&body), vec![REQUIEM_ID]);

    let body: Value = client
        .get_works(&[("composer", BACH_ID), ("instrumentation", "HARPSICHORD")])
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(catalog_ids(&body), vec![GOLDBERG_ID]);
}

#[tokio::test]
async fn test_year_range_excludes_undated_works() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let body: Value = client
        .get_works(&[("yearFrom", "1740"), ("yearTo", "1750")])
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(catalog_ids(&body), vec![MASS_ID, GOLDBERG_ID]);
}

#[tokio::test]
async fn test_sort_by_year_puts_undated_first() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let body: Value = client
        .get_works(&[("composer", BACH_ID), ("sort", "year")])
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(
        catalog_ids(&body),
        vec![ART_OF_FUGUE_ID, "BWV 1", "BWV 140", GOLDBERG_ID, MASS_ID]
    );
}

#[tokio::test]
async fn test_pagination_walks_every_work_once() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let mut seen = Vec::new();
    for page in ["1", "2", "3"] {
        let body: Value = client
            .get_works(&[("page", page), ("limit", "3")])
            .await
            .json()
            .await
            .unwrap();
        assert_eq!(body["totalPages"], 3);
        assert_eq!(body["pageSize"], 3);
        seen.extend(catalog_ids(&body));
    }
    assert_eq!(seen.len(), WORK_COUNT);
    let unique: HashSet<&String> = seen.iter().collect();
    assert_eq!(unique.len(), WORK_COUNT);

    let beyond: Value = client
        .get_works(&[("page", "9"), ("limit", "3")])
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(beyond["count"], 0);
    assert_eq!(beyond["total"], WORK_COUNT);
}

#[tokio::test]
async fn test_page_below_one_is_first_page() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let body: Value = client
        .get_works(&[("page", "0"), ("pageSize", "2")])
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(body["page"], 1);
    assert_eq!(catalog_ids(&body), vec!["BWV 1", "BWV 1080"]);
}

#[tokio::test]
async fn test_invalid_page_sizes_are_rejected() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    for limit in ["0", "-4", "501"] {
        let response = client.get_works(&[("limit", limit)]).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "limit={}", limit);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "invalid_query");
    }

    let response = client.get_works(&[("limit", "500")]).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_or_malformed_parameters_are_rejected() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.get_works(&[("colour", "blue")]).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = client.get_works(&[("year", "seventeen")]).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = client.get_works(&[("sort", "popularity")]).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_work_by_catalog_id() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.get_work(GOLDBERG_ID).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["title"], GOLDBERG_TITLE);
    assert_eq!(body["data"]["composerId"], BACH_ID);

    let response = client.get_work("BWV 9999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], "not_found");
}

#[tokio::test]
async fn test_works_by_genre_and_year_routes() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let body: Value = client
        .get_works_by_genre("cantatas")
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(catalog_ids(&body), vec!["BWV 1", "BWV 140"]);

    let body: Value = client.get_works_by_year("1741").await.json().await.unwrap();
    assert_eq!(catalog_ids(&body), vec![GOLDBERG_ID]);

    let response = client.get_works_by_year("later").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
