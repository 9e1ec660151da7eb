mod server;

use actix_web::{HttpResponse, web};
use seolens::fetcher::{FetchConfig, Fetcher};
use seolens::link_checker::LinkChecker;
use seolens::models::{Link, LinkKind};
use server::serve;
use std::time::Duration;

fn test_fetcher() -> Fetcher {
    Fetcher::new(FetchConfig {
        page_timeout: Duration::from_secs(5),
        text_timeout: Duration::from_secs(5),
        head_timeout: Duration::from_secs(5),
        ..FetchConfig::default()
    })
    .expect("Fetcher should build")
}

// Every route answers any method so HEAD probes reach them
fn link_targets(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/ok",
        web::route().to(|| async { HttpResponse::Ok().body("OK") }),
    )
    .route(
        "/error",
        web::route().to(|| async { HttpResponse::InternalServerError().body("Error") }),
    )
    .route(
        "/moved",
        web::route().to(|| async {
            HttpResponse::MovedPermanently()
                .append_header(("Location", "/ok"))
                .finish()
        }),
    );
}

fn internal(href: String) -> Link {
    Link {
        href,
        kind: LinkKind::Internal,
    }
}

#[tokio::test]
async fn test_statuses_follow_redirects_and_keep_input_order() {
    let base_url = serve(link_targets).await;
    let links = vec![
        internal(format!("{}/ok", base_url)),
        internal(format!("{}/error", base_url)),
        internal(format!("{}/moved", base_url)),
        internal(format!("{}/missing", base_url)),
    ];

    let checker = LinkChecker::new(test_fetcher(), 50);
    let summary = checker.check_statuses(&links).await;

    assert_eq!(summary.checked, 4);
    // The redirect resolves to its 200 target, leaving 500 and 404 broken
    assert_eq!(summary.broken_count, 2);

    let statuses: Vec<u16> = summary.sample.iter().map(|entry| entry.status).collect();
    assert_eq!(statuses, vec![200, 500, 200, 404]);
    assert!(
        summary
            .sample
            .iter()
            .all(|entry| entry.kind == LinkKind::Internal)
    );
}

#[tokio::test]
async fn test_unreachable_links_report_status_zero() {
    let links = vec![
        internal("http://127.0.0.1:1/nowhere".to_string()),
        internal("http://127.0.0.2:1/also-nowhere".to_string()),
    ];

    let checker = LinkChecker::new(test_fetcher(), 50);
    let summary = checker.check_statuses(&links).await;

    assert_eq!(summary.checked, 2);
    assert_eq!(summary.broken_count, 2);
    assert!(summary.sample.iter().all(|entry| entry.status == 0));
}

#[tokio::test]
async fn test_limit_caps_the_number_of_probes() {
    let base_url = serve(link_targets).await;
    let links: Vec<Link> = (0..5)
        .map(|_| internal(format!("{}/ok", base_url)))
        .collect();

    let checker = LinkChecker::new(test_fetcher(), 2);
    let summary = checker.check_statuses(&links).await;

    assert_eq!(summary.checked, 2);
    assert_eq!(summary.sample.len(), 2);
    assert_eq!(summary.broken_count, 0);
}

#[tokio::test]
async fn test_no_links_yield_an_empty_summary() {
    let checker = LinkChecker::new(test_fetcher(), 50);
    let summary = checker.check_statuses(&[]).await;

    assert_eq!(summary.checked, 0);
    assert_eq!(summary.broken_count, 0);
    assert!(summary.sample.is_empty());
}

#[tokio::test]
async fn test_reported_sample_is_capped_at_twenty() {
    let base_url = serve(link_targets).await;
    let links: Vec<Link> = (0..25)
        .map(|_| internal(format!("{}/ok", base_url)))
        .collect();

    let checker = LinkChecker::new(test_fetcher(), 50);
    let summary = checker.check_statuses(&links).await;

    assert_eq!(summary.checked, 25);
    assert_eq!(summary.sample.len(), 20);
    assert_eq!(summary.broken_count, 0);
}
