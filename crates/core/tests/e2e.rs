//! End-to-end test: scrape -> download -> report against canned markup.

use std::sync::Arc;

use tempfile::TempDir;

use faunabook_core::report::render_html;
use faunabook_core::testing::MockFetcher;
use faunabook_core::{AdjectiveScraper, Fetcher, ImageDownloader, ImagesConfig, ScraperConfig};

const LIST_PAGE: &str = r#"
    <html><body>
        <table class="wikitable"></table>
        <table class="wikitable">
            <tr><th>Animal</th><th>Collateral adjective</th></tr>
            <tr>
                <td><a href="/wiki/Cat">Cat</a></td>
                <td>Feline</td>
            </tr>
            <tr>
                <td>Aardvark</td>
                <td>Orycteropodian</td>
            </tr>
        </table>
    </body></html>
"#;

const CAT_PAGE: &str = r#"
    <html><body>
        <table class="infobox biota">
            <tr><td><img src="//upload.wikimedia.org/cat.jpg"></td></tr>
        </table>
    </body></html>
"#;

#[tokio::test]
async fn test_scrape_download_report() {
    let dir = TempDir::new().unwrap();
    let fetcher = Arc::new(MockFetcher::new());
    fetcher
        .set_page("https://en.wikipedia.org/wiki/List_of_animal_names", LIST_PAGE)
        .await;
    fetcher
        .set_page("https://en.wikipedia.org/wiki/Cat", CAT_PAGE)
        .await;
    fetcher
        .set_image("https://upload.wikimedia.org/cat.jpg", b"catbytes".as_slice())
        .await;

    let scraper =
        AdjectiveScraper::with_fetcher(ScraperConfig::default(), Arc::clone(&fetcher) as Arc<dyn Fetcher>);
    let mut mapping = scraper.scrape().await.unwrap();

    assert_eq!(mapping.len(), 2);
    assert_eq!(mapping["feline"][0].name, "Cat");
    assert!(mapping["orycteropodian"][0].page_url.is_none());

    let config = ImagesConfig {
        dir: dir.path().to_path_buf(),
        concurrency: 5,
        timeout_secs: 10,
    };
    let downloader = ImageDownloader::with_fetcher(config, Arc::clone(&fetcher) as Arc<dyn Fetcher>);
    let summary = downloader.download_images(&mut mapping).await.unwrap();

    assert_eq!(summary.total, 2);
    assert_eq!(summary.downloaded, 1);
    assert_eq!(summary.skipped, 1);

    let cat_image = dir.path().join("cat.jpg");
    assert_eq!(
        mapping["feline"][0].local_image.as_ref().unwrap(),
        &cat_image
    );
    assert_eq!(std::fs::read(&cat_image).unwrap(), b"catbytes");

    let html = render_html(&mapping);
    assert!(html.contains("feline"));
    assert!(html.contains("cat.jpg"));
    // The unlinked aardvark still appears, just without image or link.
    assert!(html.contains("Aardvark"));
}
