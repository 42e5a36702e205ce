//! Plot endpoint behavior against the sample registry.

mod helpers;

use axum::http::StatusCode;
use helpers::TestHarness;

#[tokio::test]
async fn every_sample_plot_resolves() {
    let harness = TestHarness::with_sample_data();
    let expected = [
        ("101", "sold", 1200),
        ("105", "available", 1500),
        ("115", "hold", 900),
        ("200", "available", 1800),
    ];

    for (number, status_str, size) in expected {
        let (status, body) = harness.get(&format!("/api/v1/plots/{number}")).await;
        assert_eq!(status, StatusCode::OK, "plot {number}");
        assert_eq!(body["number"], number);
        assert_eq!(body["status"], status_str);
        assert_eq!(body["size_sqft"], size);
        assert!(body["price"].as_str().unwrap().starts_with('₹'));
    }
}

#[tokio::test]
async fn unknown_plot_is_404_with_named_key() {
    let harness = TestHarness::with_sample_data();
    let (status, body) = harness.get("/api/v1/plots/777").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("777"));
    assert_eq!(body["status"], 404);
}
