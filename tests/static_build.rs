// tests/static_build.rs
//! End-to-end static build against an in-memory repository.

mod common;

use common::{load_fixture, InMemoryRepository};
use spacetraveling::{
    execute_pipeline, BuildSettings, DocumentType, PageRenderer, PostUid, PrebuildPolicy,
    RawDocument, SearchPage, StaticSite,
};
use std::path::PathBuf;
use std::sync::Arc;

fn out_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "spacetraveling-build-{}-{}",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn repository() -> Arc<InMemoryRepository> {
    let page1: SearchPage = load_fixture("search_page1.json");
    let page2: SearchPage = load_fixture("search_page2.json");
    let post: RawDocument = load_fixture("post_criando_um_app.json");
    let next = page1.next_page.clone().unwrap();

    Arc::new(
        InMemoryRepository::new(page1)
            .with_continuation(&next, page2)
            .with_document(post),
    )
}

fn site(repo: Arc<InMemoryRepository>, settings: BuildSettings) -> StaticSite {
    StaticSite::new(
        repo,
        DocumentType::new("publication").unwrap(),
        1,
        settings,
        PageRenderer::embedded().unwrap(),
    )
}

#[tokio::test]
async fn test_build_writes_index_and_found_posts() {
    let dir = out_dir("default");
    let repo = repository();
    let settings = BuildSettings {
        out_dir: dir.clone(),
        preload_pages: 0,
        prebuild: PrebuildPolicy::default(),
    };

    let (content, report) = execute_pipeline(&site(repo.clone(), settings)).await.unwrap();

    assert!(report.is_success());
    assert_eq!(content.listing.len(), 1);
    assert_eq!(content.posts.len(), 1);
    assert_eq!(
        content.missing,
        vec![PostUid::parse("como-utilizar-hooks").unwrap()]
    );

    let index = std::fs::read_to_string(dir.join("index.html")).unwrap();
    assert!(index.contains("href=\"/post/como-utilizar-hooks\""));
    assert!(index.contains("Carregar mais posts"));

    let post =
        std::fs::read_to_string(dir.join("post/criando-um-app-cra-do-zero/index.html")).unwrap();
    assert!(post.contains("<h1>Criando um app CRA do zero</h1>"));
    assert!(post.contains("<h2>Conclusão</h2>"));
    assert!(post.contains("<pre>yarn build<br />yarn serve</pre>"));
    assert!(!dir.join("post/como-utilizar-hooks").exists());

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn test_preloaded_pages_remove_load_more_control() {
    let dir = out_dir("preload");
    let repo = repository();
    let settings = BuildSettings {
        out_dir: dir.clone(),
        preload_pages: 5,
        prebuild: PrebuildPolicy::Listed(vec![]),
    };

    let (content, _) = execute_pipeline(&site(repo.clone(), settings)).await.unwrap();

    assert_eq!(content.listing.len(), 2);
    assert!(!content.listing.has_more());
    assert_eq!(repo.continuation_fetches(), 1);

    let index = std::fs::read_to_string(dir.join("index.html")).unwrap();
    assert!(index.contains("href=\"/post/criando-um-app-cra-do-zero\""));
    assert!(!index.contains("Carregar mais posts"));

    let _ = std::fs::remove_dir_all(&dir);
}
